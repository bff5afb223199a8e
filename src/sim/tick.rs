//! Fixed timestep simulation tick
//!
//! Advances the world by exactly one frame. No delta-time scaling: every
//! constant is expressed per frame.

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;

use super::collision::detect_crash;
use super::effects;
use super::state::{Cloud, GameEvent, Pipe, World};
use crate::consts::*;

/// Advance the world by one frame.
///
/// Does nothing unless the world is running. Returns the events the
/// lifecycle controller needs to forward to the HUD.
pub fn tick<R: Rng>(world: &mut World, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !world.is_running() {
        return events;
    }

    world.frame += 1;
    world.bird.frame += 1;

    // Physics
    world.bird.vy += GRAVITY;
    world.bird.pos.y += world.bird.vy;

    scroll_ground(world);

    // Pipes
    if world.frame % PIPE_SPAWN_INTERVAL == 0 {
        let top = rng.random_range(PIPE_TOP_MIN..PIPE_TOP_MAX);
        log::debug!("frame {}: pipe spawned (top {:.1})", world.frame, top);
        world.pipes.push_back(Pipe::new(world.width, top));
    }
    for pipe in world.pipes.iter_mut() {
        pipe.x -= PIPE_SPEED;
    }
    if retire_front(&mut world.pipes, |p| p.right() < 0.0) {
        world.score += 1;
        log::debug!("frame {}: pipe passed, score {}", world.frame, world.score);
        events.push(GameEvent::PipePassed { score: world.score });
    }

    // Clouds
    if world.frame % CLOUD_SPAWN_INTERVAL == 0 {
        let y = rng.random_range(CLOUD_Y_MIN..CLOUD_Y_MAX);
        let size = rng.random_range(CLOUD_SIZE_MIN..CLOUD_SIZE_MAX);
        world.clouds.push_back(Cloud {
            pos: Vec2::new(world.width, y),
            size,
        });
    }
    for cloud in world.clouds.iter_mut() {
        cloud.pos.x -= CLOUD_SPEED;
    }
    retire_front(&mut world.clouds, |c| c.pos.x < CLOUD_EXIT_X);

    // Collisions
    if let Some(cause) = detect_crash(world) {
        log::debug!("frame {}: crashed ({:?})", world.frame, cause);
        effects::burst(&mut world.particles, world.bird.pos, rng);
        world.game_over = true;
        events.push(GameEvent::Crashed { cause });
    }

    events
}

/// Slide the ground tiles left, wrapping after one full tile
fn scroll_ground(world: &mut World) {
    world.ground_offset -= GROUND_SCROLL;
    if world.ground_offset <= -GROUND_TILE {
        world.ground_offset = 0.0;
    }
}

/// Pop the oldest entry if it is done. At most one entry leaves per frame.
fn retire_front<T>(queue: &mut VecDeque<T>, done: impl Fn(&T) -> bool) -> bool {
    match queue.front() {
        Some(front) if done(front) => {
            queue.pop_front();
            true
        }
        _ => false,
    }
}
