//! World state and core simulation types
//!
//! Everything the loop reads or mutates lives in one `World`.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Lifecycle phase, derived from the `started`/`game_over` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start
    Idle,
    /// Active gameplay
    Running,
    /// Run ended, waiting for restart
    Ended,
}

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    Pipe,
    Ground,
    Ceiling,
}

/// Things that happened during a tick that the outside world cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Oldest pipe left the screen; carries the new score
    PipePassed { score: u32 },
    /// Bird hit something; the world is now in game-over
    Crashed { cause: CrashCause },
}

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    /// Center position (x never changes)
    pub pos: Vec2,
    pub radius: f32,
    /// Vertical velocity (positive = down)
    pub vy: f32,
    /// Animation counter driving the wing flap
    pub frame: u64,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BIRD_X, BIRD_START_Y),
            radius: BIRD_RADIUS,
            vy: 0.0,
            frame: 0,
        }
    }
}

impl Bird {
    /// Top of the bird's vertical extent
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    /// Bottom of the bird's vertical extent
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// A pipe pair sharing one x position and one gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Bottom edge of the top pillar
    pub top: f32,
    /// Height of the passable gap
    pub gap: f32,
}

impl Pipe {
    pub fn new(x: f32, top: f32) -> Self {
        Self {
            x,
            width: PIPE_WIDTH,
            top,
            gap: PIPE_GAP,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge of the bottom pillar
    #[inline]
    pub fn bottom_top(&self) -> f32 {
        self.top + self.gap
    }

    /// Vertical center of the gap
    #[inline]
    pub fn gap_center(&self) -> f32 {
        self.top + self.gap / 2.0
    }
}

/// Background cloud (no gameplay effect)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub pos: Vec2,
    /// Vertical radius; horizontal radius is twice this
    pub size: f32,
}

/// A fragment of the crash explosion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub size: f32,
    pub alpha: f32,
    /// Random tint offset in [0, 55)
    pub life: f32,
}

/// Complete world state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Canvas width (pipes and clouds spawn here)
    pub width: f32,
    /// Canvas height (bottom pillars extend to here)
    pub height: f32,
    /// Simulation frame counter
    pub frame: u64,
    /// Pipes passed this run
    pub score: u32,
    pub started: bool,
    pub game_over: bool,
    /// Ground scroll phase in (-GROUND_TILE, 0]
    pub ground_offset: f32,
    pub bird: Bird,
    /// Oldest first
    pub pipes: VecDeque<Pipe>,
    /// Oldest first
    pub clouds: VecDeque<Cloud>,
    /// Visual only
    pub particles: VecDeque<Particle>,
}

impl Default for World {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

impl World {
    /// Create an idle world for a canvas of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            frame: 0,
            score: 0,
            started: false,
            game_over: false,
            ground_offset: 0.0,
            bird: Bird::default(),
            pipes: VecDeque::new(),
            clouds: VecDeque::new(),
            particles: VecDeque::new(),
        }
    }

    /// Put the world back to its start-of-run state.
    ///
    /// `started` is left alone; that flag belongs to the lifecycle controller.
    pub fn reset(&mut self) {
        self.bird = Bird::default();
        self.ground_offset = 0.0;
        self.pipes.clear();
        self.clouds.clear();
        self.particles.clear();
        self.score = 0;
        self.frame = 0;
        self.game_over = false;
    }

    /// Whether the simulation step should run
    #[inline]
    pub fn is_running(&self) -> bool {
        self.started && !self.game_over
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::Ended
        } else if self.started {
            GamePhase::Running
        } else {
            GamePhase::Idle
        }
    }

    /// First pipe whose right edge is still ahead of the bird's left edge
    pub fn next_pipe(&self) -> Option<&Pipe> {
        let bird_left = self.bird.pos.x - self.bird.radius;
        self.pipes.iter().find(|p| p.right() > bird_left)
    }
}
