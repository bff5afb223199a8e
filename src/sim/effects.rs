//! Crash explosion particles
//!
//! Particles are visual-only. They are spawned by the simulation but aged by
//! the renderer, once per drawn frame.

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;

use super::state::Particle;
use crate::consts::*;

/// Alpha at or below which a particle is considered gone. Absorbs f32 drift
/// from repeated subtraction of the fade step.
const ALPHA_EPSILON: f32 = 1e-4;

/// Spawn a full burst at `pos`
pub fn burst<R: Rng>(particles: &mut VecDeque<Particle>, pos: Vec2, rng: &mut R) {
    for _ in 0..BURST_SIZE {
        particles.push_back(Particle {
            pos,
            size: PARTICLE_START_SIZE,
            alpha: 1.0,
            life: rng.random_range(0.0..PARTICLE_LIFE_MAX),
        });
    }
}

/// Grow and fade every particle, dropping the ones that became invisible
pub fn step(particles: &mut VecDeque<Particle>) {
    for particle in particles.iter_mut() {
        particle.size += PARTICLE_GROWTH;
        particle.alpha -= PARTICLE_FADE;
    }
    particles.retain(|p| p.alpha > ALPHA_EPSILON);
}

/// Fill colour channels for a particle: orange shifting toward yellow with `life`
pub fn particle_rgb(particle: &Particle) -> (u8, u8, u8) {
    let green = (200.0 + particle.life).round().clamp(0.0, 255.0) as u8;
    (255, green, 0)
}
