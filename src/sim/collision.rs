//! Collision detection between the bird and the level
//!
//! The bird is a circle but is tested by its axis-aligned extent: a pipe is
//! hit when the horizontal extents overlap and the vertical extent pokes out
//! of the gap. No response is computed; any hit ends the run.

use super::state::{Bird, CrashCause, Pipe, World};
use crate::consts::GROUND_Y;

/// Check the bird against one pipe pair
pub fn bird_pipe_collision(bird: &Bird, pipe: &Pipe) -> bool {
    let overlaps_x =
        bird.pos.x + bird.radius > pipe.x && bird.pos.x - bird.radius < pipe.right();
    let outside_gap = bird.top() < pipe.top || bird.bottom() > pipe.bottom_top();
    overlaps_x && outside_gap
}

/// Check the bird against the ground line and the top of the screen
pub fn bird_bounds_collision(bird: &Bird) -> Option<CrashCause> {
    if bird.bottom() > GROUND_Y {
        Some(CrashCause::Ground)
    } else if bird.top() < 0.0 {
        Some(CrashCause::Ceiling)
    } else {
        None
    }
}

/// First thing the bird is touching, if any.
///
/// Pipes are checked oldest first, then the bounds. Several simultaneous hits
/// still yield a single cause.
pub fn detect_crash(world: &World) -> Option<CrashCause> {
    if world
        .pipes
        .iter()
        .any(|pipe| bird_pipe_collision(&world.bird, pipe))
    {
        return Some(CrashCause::Pipe);
    }
    bird_bounds_collision(&world.bird)
}
