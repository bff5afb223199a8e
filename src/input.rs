//! Input signal mapping
//!
//! Two sources drive the bird: the space bar and any pointer press. Both
//! mean "flap"; everything else is ignored.

/// `KeyboardEvent.code` that flaps
pub const FLAP_KEY: &str = "Space";

/// Discrete signal delivered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSignal {
    /// Key press, identified by its physical key code
    Key(String),
    /// Mouse button or touch press anywhere on the page
    PointerDown,
}

impl InputSignal {
    pub fn key(code: impl Into<String>) -> Self {
        InputSignal::Key(code.into())
    }

    /// Whether this signal should make the bird flap
    pub fn is_flap(&self) -> bool {
        match self {
            InputSignal::Key(code) => code == FLAP_KEY,
            InputSignal::PointerDown => true,
        }
    }
}
