//! Platform abstraction layer
//!
//! The browser drives `Game::frame` from `requestAnimationFrame` (see
//! `main.rs`). Everywhere else a plain loop stands in for the display.

use crate::game::{Game, LoopControl};
use crate::hud::Hud;
use crate::renderer::Surface;
use crate::sim::autopilot;

/// Summary of a headless run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Frames that advanced the simulation
    pub frames: u32,
    pub score: u32,
    /// Whether the run ended in a crash (as opposed to hitting the budget)
    pub crashed: bool,
}

/// Start a run and pump frames until game over or `max_frames`.
///
/// With `autopilot` the demo controller flaps for the player.
pub fn run_headless<H: Hud, S: Surface + ?Sized>(
    game: &mut Game<H>,
    surface: &mut S,
    max_frames: u32,
    autopilot: bool,
) -> RunReport {
    game.start();

    let mut frames = 0;
    while frames < max_frames {
        if autopilot && autopilot::wants_flap(game.world()) {
            game.flap();
        }
        frames += 1;
        if game.frame(surface) == LoopControl::Stop {
            break;
        }
    }

    let report = RunReport {
        frames,
        score: game.world().score,
        crashed: game.world().game_over,
    };
    log::info!(
        "Headless run: {} frames, score {}, crashed: {}",
        report.frames,
        report.score,
        report.crashed
    );
    report
}
