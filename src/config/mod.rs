//! Configuration loading, validation, and scoring-band colors.

mod color;
#[expect(clippy::module_inception, reason = "Config lives in config/config.rs")]
mod config;

pub use color::Color;
pub use config::{Config, DEFAULT_CONFIG_YAML, NUM_SCORING_BANDS};
