//! Lifecycle controller and frame driver
//!
//! `Game` owns the world, the RNG and the HUD. Input handlers and the frame
//! callback all go through the same instance, so a flap always lands on the
//! world the next tick reads.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::FLAP_VELOCITY;
use crate::hud::Hud;
use crate::input::InputSignal;
use crate::renderer::{Surface, render};
use crate::settings::Settings;
use crate::sim::state::{GameEvent, GamePhase, World};
use crate::sim::tick;

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Schedule another frame
    Continue,
    /// Stop the frame chain (idle or game over)
    Stop,
}

/// The game: world state plus the outputs it drives
pub struct Game<H: Hud> {
    world: World,
    rng: Pcg32,
    hud: H,
    settings: Settings,
    seed: u64,
    /// Overlay already shown for the current run
    overlay_shown: bool,
}

impl<H: Hud> Game<H> {
    /// Create an idle game on a default-sized canvas
    pub fn new(seed: u64, hud: H, settings: Settings) -> Self {
        Self::with_world(World::default(), seed, hud, settings)
    }

    /// Create an idle game on a canvas of the given size
    pub fn with_size(width: f32, height: f32, seed: u64, hud: H, settings: Settings) -> Self {
        Self::with_world(World::new(width, height), seed, hud, settings)
    }

    fn with_world(world: World, seed: u64, hud: H, settings: Settings) -> Self {
        log::info!(
            "Game created ({}x{}, seed {})",
            world.width,
            world.height,
            seed
        );
        Self {
            world,
            rng: Pcg32::seed_from_u64(seed),
            hud,
            settings,
            seed,
            overlay_shown: false,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct world access for hosts and tests that stage scenarios
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> GamePhase {
        self.world.phase()
    }

    /// Back to the start-of-run state. Leaves `started` alone.
    pub fn reset(&mut self) {
        self.world.reset();
        self.overlay_shown = false;
        self.hud.set_score(0);
        self.hud.hide_game_over();
        log::debug!("World reset");
    }

    /// Begin a new run. The caller starts the frame chain afterwards.
    pub fn start(&mut self) {
        self.reset();
        self.world.started = true;
        self.hud.hide_start();
        log::info!("Run started");
    }

    /// End the current run and show the final score. Repeated calls in the
    /// same run do nothing further.
    pub fn end_game(&mut self) {
        self.world.game_over = true;
        if self.overlay_shown {
            return;
        }
        self.overlay_shown = true;
        self.hud.show_game_over(self.world.score);
        log::info!(
            "Run ended at frame {} with score {}",
            self.world.frame,
            self.world.score
        );
    }

    /// Set the bird's velocity to the flap impulse while a run is live
    pub fn flap(&mut self) {
        if self.world.is_running() {
            self.world.bird.vy = FLAP_VELOCITY;
        }
    }

    /// Route a host input signal; unknown keys are ignored
    pub fn handle_input(&mut self, signal: &InputSignal) {
        if signal.is_flap() {
            self.flap();
        } else {
            log::trace!("Ignoring input {:?}", signal);
        }
    }

    /// Run one simulation step and forward its events to the HUD
    pub fn step(&mut self) -> Vec<GameEvent> {
        let events = tick(&mut self.world, &mut self.rng);
        for event in &events {
            match *event {
                GameEvent::PipePassed { score } => self.hud.set_score(score),
                GameEvent::Crashed { cause } => {
                    log::info!("Crashed into {:?}", cause);
                    self.end_game();
                }
            }
        }
        events
    }

    /// Draw the current world (also used for the static pre-start frame)
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        render(&mut self.world, surface, &self.settings);
    }

    /// One display refresh: step, draw, and report whether to keep going
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> LoopControl {
        if !self.world.started {
            return LoopControl::Stop;
        }
        if self.world.is_running() {
            self.step();
        }
        self.render(surface);
        if self.world.game_over {
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::hud::{HudUpdate, RecordingHud};
    use crate::renderer::CommandBuffer;
    use crate::sim::state::Pipe;

    fn new_game() -> Game<RecordingHud> {
        Game::new(1234, RecordingHud::default(), Settings::default())
    }

    fn render_commands(game: &mut Game<RecordingHud>) -> Vec<crate::renderer::DrawCommand> {
        let mut buf = CommandBuffer::new();
        game.render(&mut buf);
        buf.take()
    }

    #[test]
    fn test_idle_frame_stops_without_ticking() {
        let mut game = new_game();
        let mut buf = CommandBuffer::new();
        assert_eq!(game.frame(&mut buf), LoopControl::Stop);
        assert!(buf.is_empty());
        assert_eq!(game.world().frame, 0);
        assert_eq!(game.phase(), GamePhase::Idle);
    }

    #[test]
    fn test_idle_render_draws_static_frame() {
        let mut game = new_game();
        let mut buf = CommandBuffer::new();
        game.render(&mut buf);
        assert!(buf.shape_count() > 0);
        assert_eq!(game.world().frame, 0);
    }

    #[test]
    fn test_start_transitions_to_running() {
        let mut game = new_game();
        game.start();
        assert_eq!(game.phase(), GamePhase::Running);
        assert_eq!(game.hud().score(), Some(0));
        assert!(!game.hud().overlay_visible());
        assert_eq!(game.hud().count(HudUpdate::StartHidden), 1);

        let mut buf = CommandBuffer::new();
        assert_eq!(game.frame(&mut buf), LoopControl::Continue);
        assert_eq!(game.world().frame, 1);
        assert!(buf.shape_count() > 0);
    }

    #[test]
    fn test_first_frame_after_start_steps() {
        let mut game = new_game();
        game.start();
        let mut buf = CommandBuffer::new();
        game.frame(&mut buf);
        assert_eq!(game.world().frame, 1);
        assert_eq!(game.world().bird.vy, GRAVITY);
        assert_eq!(game.world().bird.pos.y, BIRD_START_Y + GRAVITY);
    }

    #[test]
    fn test_each_reset_publishes_zero_score() {
        let mut game = new_game();
        game.reset();
        game.reset();
        game.start();
        assert_eq!(game.hud().count(HudUpdate::Score(0)), 3);
        assert_eq!(game.hud().count(HudUpdate::GameOverHidden), 3);
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let mut game = new_game();
        game.start();
        game.world_mut().bird.vy = 6.0;
        game.flap();
        assert_eq!(game.world().bird.vy, FLAP_VELOCITY);

        // Several signals in one tick: last write wins, no accumulation
        game.handle_input(&InputSignal::key("Space"));
        game.handle_input(&InputSignal::PointerDown);
        assert_eq!(game.world().bird.vy, FLAP_VELOCITY);
    }

    #[test]
    fn test_flap_ignored_when_idle_or_over() {
        let mut game = new_game();
        game.flap();
        assert_eq!(game.world().bird.vy, 0.0);

        game.start();
        game.world_mut().bird.vy = 3.5;
        game.end_game();
        game.flap();
        game.handle_input(&InputSignal::PointerDown);
        assert_eq!(game.world().bird.vy, 3.5);
    }

    #[test]
    fn test_unknown_key_ignored() {
        let mut game = new_game();
        game.start();
        game.world_mut().bird.vy = 2.0;
        game.handle_input(&InputSignal::key("KeyQ"));
        assert_eq!(game.world().bird.vy, 2.0);
    }

    #[test]
    fn test_crash_ends_once_and_stops_loop() {
        let mut game = new_game();
        game.start();
        {
            let world = game.world_mut();
            world.pipes.push_back(Pipe::new(63.0, 60.0));
            world.pipes.push_back(Pipe::new(70.0, 80.0));
        }
        let mut buf = CommandBuffer::new();
        assert_eq!(game.frame(&mut buf), LoopControl::Stop);
        assert_eq!(game.phase(), GamePhase::Ended);
        assert_eq!(game.hud().count(HudUpdate::GameOverShown(0)), 1);
        assert!(game.hud().overlay_visible());

        // Drawn once already: particles aged by one step
        assert_eq!(game.world().particles.len(), BURST_SIZE);
        assert_eq!(game.world().particles[0].size, PARTICLE_START_SIZE + PARTICLE_GROWTH);

        game.end_game();
        assert_eq!(game.hud().count(HudUpdate::GameOverShown(0)), 1);
    }

    #[test]
    fn test_score_reaches_hud() {
        let mut game = new_game();
        game.start();
        game.world_mut().pipes.push_back(Pipe::new(-62.0, 100.0));
        game.world_mut().bird.vy = -GRAVITY;
        let events = game.step();
        assert_eq!(events, vec![GameEvent::PipePassed { score: 1 }]);
        assert_eq!(game.hud().score(), Some(1));
    }

    #[test]
    fn test_reset_reproduces_initial_frame() {
        let mut game = new_game();
        let initial = render_commands(&mut game);

        game.start();
        let mut buf = CommandBuffer::new();
        while game.frame(&mut buf) == LoopControl::Continue {
            buf.clear();
        }
        assert_eq!(game.phase(), GamePhase::Ended);

        game.reset();
        let first = render_commands(&mut game);
        game.reset();
        let second = render_commands(&mut game);

        assert_eq!(first, initial);
        assert_eq!(second, initial);
        assert_eq!(game.world().score, 0);
        assert!(!game.hud().overlay_visible());
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut game = new_game();
        game.start();
        game.world_mut().bird.pos.y = 570.0;
        let mut buf = CommandBuffer::new();
        assert_eq!(game.frame(&mut buf), LoopControl::Stop);
        assert_eq!(game.phase(), GamePhase::Ended);

        game.start();
        assert_eq!(game.phase(), GamePhase::Running);
        assert!(game.world().particles.is_empty());
        assert!(!game.hud().overlay_visible());
        assert_eq!(game.frame(&mut buf), LoopControl::Continue);
    }
}
