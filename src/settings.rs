//! Game settings
//!
//! Persisted in LocalStorage on the web, read from a JSON file natively.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Field;

/// Problems with a settings source or its values
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    /// The field must be finite and positive
    #[error("Invalid field size : {width}x{height}")]
    InvalidField { width: f32, height: f32 },

    /// The field cannot hold both paddles and the ball
    #[error("Field {width}x{height} is too small for the paddles and ball")]
    FieldTooSmall { width: f32, height: f32 },

    /// AI smoothing must lie in (0, 1]
    #[error("AI smoothing out of range : {0}")]
    InvalidSmoothing(f32),

    #[error("Parsing failed : {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Could not read settings : {0}")]
    Io(#[from] std::io::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Per-frame AI tracking factor (higher = stronger AI)
    pub ai_smoothing: f32,
    /// Field size when no canvas dictates one
    pub field_width: f32,
    pub field_height: f32,
    /// Fixed RNG seed (random per session when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ai_smoothing: AI_SMOOTHING,
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }

    /// Check the setup preconditions the simulation relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_field(&self.field())?;

        if !(self.ai_smoothing > 0.0 && self.ai_smoothing <= 1.0) {
            return Err(SettingsError::InvalidSmoothing(self.ai_smoothing));
        }
        Ok(())
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "canvas_pong_settings";

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

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

/// A field must fit both paddles side by side with room for the ball
/// between them, and be taller than a paddle.
pub fn check_field(field: &Field) -> Result<(), SettingsError> {
    let (width, height) = (field.width, field.height);
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(SettingsError::InvalidField { width, height });
    }

    let min_width = 2.0 * (PADDLE_MARGIN + PADDLE_WIDTH) + BALL_SIZE;
    if width <= min_width || height <= PADDLE_HEIGHT || height <= BALL_SIZE {
        return Err(SettingsError::FieldTooSmall { width, height });
    }
    Ok(())
}
