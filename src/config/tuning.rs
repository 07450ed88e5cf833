use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// All tunable stick parameters, loaded from stick.ron.
#[derive(Debug, Clone, Resource, Serialize, Deserialize)]
pub struct StickTuning {
    /// Drag distance in local units that maps to full strength. Must be > 0.
    pub radius: f32,
    /// Fraction of the radius ignored before strength ramps up, in [0, 1].
    pub deadzone: f32,
}

impl Default for StickTuning {
    fn default() -> Self {
        Self {
            radius: 100.0,
            deadzone: 0.1,
        }
    }
}

impl StickTuning {
    /// Get the data directory for tuning files.
    pub fn data_dir() -> PathBuf {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("touchstick")
    }

    /// Path to the tuning file.
    pub fn file_path() -> PathBuf {
        Self::data_dir().join("stick.ron")
    }

    /// Load from file, or create default if not found. Loaded values are
    /// sanitized so a hand-edited file can't break the radius contract.
    pub fn load_or_default() -> Self {
        let path = Self::file_path();
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match ron::from_str::<Self>(&contents) {
                    Ok(tuning) => return tuning.sanitized(),
                    Err(e) => {
                        warn!("Failed to parse stick.ron: {e}, using defaults");
                    }
                },
                Err(e) => {
                    warn!("Failed to read stick.ron: {e}, using defaults");
                }
            }
        }
        let tuning = Self::default();
        tuning.save();
        tuning
    }

    /// Save current tuning to file.
    pub fn save(&self) {
        let path = Self::file_path();
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let pretty = ron::ser::PrettyConfig::default();
        match ron::ser::to_string_pretty(self, pretty) {
            Ok(s) => {
                if let Err(e) = std::fs::write(&path, s) {
                    warn!("Failed to write stick.ron: {e}");
                }
            }
            Err(e) => {
                warn!("Failed to serialize stick tuning: {e}");
            }
        }
    }

    /// Reload from file (called by key press).
    pub fn reload(&mut self) {
        *self = Self::load_or_default();
        info!("Stick tuning reloaded");
    }

    fn sanitized(self) -> Self {
        Self {
            radius: self.radius.max(1.0),
            deadzone: self.deadzone.clamp(0.0, 1.0),
        }
    }
}
