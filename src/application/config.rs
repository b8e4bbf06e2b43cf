//! Runtime knobs for the demo. Resolution and rule are compiled in.

use serde::{Deserialize, Serialize};

use crate::rendering::{AGE_RATE, PALETTE_SIZE};

/// Number of glider guns dropped on the board at startup
pub const SEED_COPIES: usize = 10;

/// Largest accepted age gradient
pub const MAX_PALETTE_SIZE: usize = 65_536;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Glider guns stamped at random positions when seeding.
    pub seed_copies: usize,
    /// Generations per palette step.
    pub age_rate: u32,
    /// Entries in the age gradient.
    pub palette_size: usize,
    /// Generations advanced before each redraw.
    pub generations_per_frame: u32,
    /// Tally neighbours on the rayon pool.
    pub parallel: bool,
    /// Fixed seed; the host clock is used when absent.
    pub seed: Option<u64>,
    /// Draw the generation/population overlay.
    pub show_stats: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            seed_copies: SEED_COPIES,
            age_rate: AGE_RATE,
            palette_size: PALETTE_SIZE,
            generations_per_frame: 1,
            parallel: false,
            seed: None,
            show_stats: false,
        }
    }
}

impl LifeConfig {
    /// Parse and validate a JSON document; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.age_rate == 0 {
            return Err(ConfigError::InvalidAgeRate);
        }
        if self.palette_size == 0 {
            return Err(ConfigError::InvalidPaletteSize);
        }
        if self.palette_size > MAX_PALETTE_SIZE {
            return Err(ConfigError::PaletteTooLarge {
                size: self.palette_size,
                max: MAX_PALETTE_SIZE,
            });
        }
        if self.generations_per_frame == 0 {
            return Err(ConfigError::InvalidGenerationsPerFrame);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Age rate must be non-zero")]
    InvalidAgeRate,
    #[error("Palette needs at least one entry")]
    InvalidPaletteSize,
    #[error("Palette size {size} exceeds the maximum of {max}")]
    PaletteTooLarge { size: usize, max: usize },
    #[error("At least one generation per frame is required")]
    InvalidGenerationsPerFrame,
    #[error("Malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Could not read config: {0}")]
    Io(#[from] std::io::Error),
}
