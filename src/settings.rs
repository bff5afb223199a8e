//! Game settings and preferences
//!
//! Presentation-only: gameplay constants are fixed. Loaded from LocalStorage
//! on the web and from the JSON file named by `FLAPPY_SETTINGS` natively.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Visual Effects ===
    /// Crash explosion particles
    pub particles: bool,
    /// Drop shadows under the bird and the credit text
    pub shadows: bool,
    /// Credit line at the bottom of the canvas
    pub show_credit: bool,

    // === Accessibility ===
    /// No bird tilt or wing flapping
    pub reduced_motion: bool,

    // === Runtime ===
    /// Fixed RNG seed (random per run when unset)
    pub seed: Option<u64>,
    /// Frame budget for headless runs
    pub headless_frames: u32,
    /// Let the demo controller play headless runs
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            particles: true,
            shadows: true,
            show_credit: true,

            reduced_motion: false,

            seed: None,
            headless_frames: 3600,
            autopilot: true,
        }
    }
}

impl Settings {
    /// Env var naming a JSON settings file (native only)
    pub const ENV_VAR: &'static str = "FLAPPY_SETTINGS";

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "flappy_canvas_settings";

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from the file named by `FLAPPY_SETTINGS` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path);
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read settings file {}: {}", path, e);
                Self::default()
            }
        }
    }
}
