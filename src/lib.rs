//! Flappy Canvas - A side-scrolling arcade game on a 2D canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, collisions, particles)
//! - `renderer`: Immediate-mode 2D drawing (surface abstraction + scene)
//! - `game`: Lifecycle controller tying the world to the HUD and the loop
//! - `input`: Keyboard/pointer signal mapping
//! - `hud`: Score/overlay sinks
//! - `platform`: Frame pump for native runs
//! - `settings`: Presentation preferences

pub mod game;
pub mod hud;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, LoopControl};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default canvas dimensions
    pub const CANVAS_WIDTH: f32 = 400.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Ground strip (top edge is the collision line)
    pub const GROUND_Y: f32 = 580.0;
    pub const GROUND_HEIGHT: f32 = 40.0;
    pub const GROUND_TILE: f32 = 40.0;
    pub const GROUND_STRIPE_WIDTH: f32 = 20.0;
    /// Ground scroll per frame (offset wraps at -GROUND_TILE)
    pub const GROUND_SCROLL: f32 = 2.0;

    /// Bird defaults
    pub const BIRD_X: f32 = 80.0;
    pub const BIRD_START_Y: f32 = 300.0;
    pub const BIRD_RADIUS: f32 = 18.0;
    /// Downward acceleration (units/frame²)
    pub const GRAVITY: f32 = 0.5;
    /// Velocity assigned on flap (overrides, never adds)
    pub const FLAP_VELOCITY: f32 = -8.0;
    /// Render tilt per unit of vertical velocity (radians)
    pub const BIRD_TILT: f32 = 0.04;

    /// Pipe defaults
    pub const PIPE_SPAWN_INTERVAL: u64 = 90;
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const PIPE_GAP: f32 = 150.0;
    pub const PIPE_TOP_MIN: f32 = 50.0;
    pub const PIPE_TOP_MAX: f32 = 300.0;
    pub const PIPE_SPEED: f32 = 3.0;

    /// Cloud defaults
    pub const CLOUD_SPAWN_INTERVAL: u64 = 120;
    pub const CLOUD_SPEED: f32 = 1.2;
    pub const CLOUD_Y_MIN: f32 = 20.0;
    pub const CLOUD_Y_MAX: f32 = 220.0;
    pub const CLOUD_SIZE_MIN: f32 = 20.0;
    pub const CLOUD_SIZE_MAX: f32 = 40.0;
    /// Clouds are retired once their x drops below this
    pub const CLOUD_EXIT_X: f32 = -50.0;

    /// Explosion particles
    pub const BURST_SIZE: usize = 10;
    pub const PARTICLE_START_SIZE: f32 = 10.0;
    pub const PARTICLE_GROWTH: f32 = 2.0;
    pub const PARTICLE_FADE: f32 = 0.04;
    pub const PARTICLE_LIFE_MAX: f32 = 55.0;
}
