//! Demo/idle controller
//!
//! Decides when to flap so headless runs and attract screens have something
//! to show. Not used during normal play.

use super::state::World;
use crate::consts::BIRD_START_Y;

/// How far below the gap center the bird is allowed to sink before flapping
const SINK_MARGIN: f32 = 25.0;

/// Line the bird tries to stay above
pub fn target_y(world: &World) -> f32 {
    world
        .next_pipe()
        .map(|pipe| pipe.gap_center() + SINK_MARGIN)
        .unwrap_or(BIRD_START_Y)
}

/// Flap when falling past the target line
pub fn wants_flap(world: &World) -> bool {
    world.is_running() && world.bird.vy > 0.0 && world.bird.pos.y > target_y(world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Pipe;

    fn running_world() -> World {
        let mut world = World::default();
        world.started = true;
        world
    }

    #[test]
    fn test_target_follows_next_gap() {
        let mut world = running_world();
        assert_eq!(target_y(&world), BIRD_START_Y);

        world.pipes.push_back(Pipe::new(200.0, 100.0));
        assert_eq!(target_y(&world), 175.0 + SINK_MARGIN);
    }

    #[test]
    fn test_flaps_only_when_falling_below_target() {
        let mut world = running_world();
        world.bird.pos.y = 320.0;
        world.bird.vy = 2.0;
        assert!(wants_flap(&world));

        world.bird.vy = -3.0;
        assert!(!wants_flap(&world));

        world.bird.vy = 2.0;
        world.bird.pos.y = 280.0;
        assert!(!wants_flap(&world));
    }

    #[test]
    fn test_never_flaps_when_not_running() {
        let mut world = World::default();
        world.bird.pos.y = 500.0;
        world.bird.vy = 5.0;
        assert!(!wants_flap(&world));

        world.started = true;
        world.game_over = true;
        assert!(!wants_flap(&world));
    }
}
