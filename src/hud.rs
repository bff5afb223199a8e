//! HUD sinks: score readout, game-over overlay and start control
//!
//! The game only writes to these; it never reads anything back.

/// Output side of the page around the canvas
pub trait Hud {
    /// Show the current score
    fn set_score(&mut self, score: u32);
    /// Reveal the game-over overlay with the final score
    fn show_game_over(&mut self, final_score: u32);
    fn hide_game_over(&mut self);
    /// Hide the start button once a run begins
    fn hide_start(&mut self);
}

/// HUD that reports through the logger (native/headless)
#[derive(Debug, Default)]
pub struct LogHud;

impl Hud for LogHud {
    fn set_score(&mut self, score: u32) {
        log::info!("Score: {}", score);
    }

    fn show_game_over(&mut self, final_score: u32) {
        log::info!("Game over! Final score: {}", final_score);
    }

    fn hide_game_over(&mut self) {}

    fn hide_start(&mut self) {}
}

/// One recorded HUD update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudUpdate {
    Score(u32),
    GameOverShown(u32),
    GameOverHidden,
    StartHidden,
}

/// HUD that remembers every update
#[derive(Debug, Default, Clone)]
pub struct RecordingHud {
    pub updates: Vec<HudUpdate>,
}

impl RecordingHud {
    /// Last score written, if any
    pub fn score(&self) -> Option<u32> {
        self.updates.iter().rev().find_map(|u| match u {
            HudUpdate::Score(s) => Some(*s),
            _ => None,
        })
    }

    /// Whether the overlay is currently visible
    pub fn overlay_visible(&self) -> bool {
        self.updates
            .iter()
            .rev()
            .find_map(|u| match u {
                HudUpdate::GameOverShown(_) => Some(true),
                HudUpdate::GameOverHidden => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub fn count(&self, update: HudUpdate) -> usize {
        self.updates.iter().filter(|u| **u == update).count()
    }
}

impl Hud for RecordingHud {
    fn set_score(&mut self, score: u32) {
        self.updates.push(HudUpdate::Score(score));
    }

    fn show_game_over(&mut self, final_score: u32) {
        self.updates.push(HudUpdate::GameOverShown(final_score));
    }

    fn hide_game_over(&mut self) {
        self.updates.push(HudUpdate::GameOverHidden);
    }

    fn hide_start(&mut self) {
        self.updates.push(HudUpdate::StartHidden);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_hud_state() {
        let mut hud = RecordingHud::default();
        assert_eq!(hud.score(), None);
        assert!(!hud.overlay_visible());

        hud.set_score(0);
        hud.set_score(3);
        hud.show_game_over(3);
        assert_eq!(hud.score(), Some(3));
        assert!(hud.overlay_visible());

        hud.hide_game_over();
        assert!(!hud.overlay_visible());
        assert_eq!(hud.count(HudUpdate::Score(3)), 1);
    }
}
