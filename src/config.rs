//! Command-line configuration.
//!
//! The core trusts its [`GameConfig`]; every range check happens here.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::types::{GameConfig, DEFAULT_COLS, DEFAULT_LIT_PROBABILITY, DEFAULT_ROWS};

#[derive(Debug, Clone, Parser)]
#[command(name = "lights-out", version, about = "Lights Out puzzle for the terminal")]
pub struct Cli {
    /// Number of grid rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,
    /// Number of grid columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,
    /// Chance that each light starts on, in [0, 1]
    #[arg(long, default_value_t = DEFAULT_LIT_PROBABILITY)]
    pub chance: f64,
    /// Seed for board generation (defaults to the clock)
    #[arg(long)]
    pub seed: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("--rows must be at least 1")]
    ZeroRows,
    #[error("--cols must be at least 1")]
    ZeroCols,
    #[error("--chance must be between 0 and 1, got {0}")]
    ChanceOutOfRange(f64),
}

impl Cli {
    /// Validate and split into the game config and the seed to play with.
    pub fn into_config(self) -> Result<(GameConfig, u32), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.cols == 0 {
            return Err(ConfigError::ZeroCols);
        }
        if !(0.0..=1.0).contains(&self.chance) {
            return Err(ConfigError::ChanceOutOfRange(self.chance));
        }

        let seed = self.seed.unwrap_or_else(clock_seed);
        Ok((GameConfig::new(self.rows, self.cols, self.chance), seed))
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
