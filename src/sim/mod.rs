//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame step only
//! - Injected RNG only
//! - Queues are append-at-back, retire-from-front
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod effects;
pub mod state;
pub mod tick;

pub use collision::{bird_bounds_collision, bird_pipe_collision, detect_crash};
pub use state::{Bird, Cloud, CrashCause, GameEvent, GamePhase, Particle, Pipe, World};
pub use tick::tick;
