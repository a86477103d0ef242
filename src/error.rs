//! Error types
//!
//! The simulation core is total; errors only arise from configuration and
//! from resources acquired by the frontend.

use crate::sim::WeaponType;

/// Invalid game balance configuration
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TuningError {
    /// Fire rates feed the cadence interval `1 / rate`
    #[error("fire rate for {weapon} must be finite and positive, got {value}")]
    NonPositiveFireRate { weapon: WeaponType, value: f32 },

    #[error("spacing for {weapon} must be finite and non-negative, got {value}")]
    InvalidSpacing { weapon: WeaponType, value: f32 },

    #[error("triple spread must be finite, got {0}")]
    NonFiniteSpread(f32),

    #[error("range '{name}' is inverted or non-finite: min {min} > max {max}")]
    InvertedRange { name: &'static str, min: f32, max: f32 },

    #[error("'{name}' must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("malformed tuning document: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        TuningError::Parse(err.to_string())
    }
}

/// Resource acquisition failures (fatal to the process)
#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("failed to load texture '{path}': {reason}")]
    TextureLoad { path: String, reason: String },

    #[error("rendering surface unavailable: {0}")]
    Surface(String),
}
