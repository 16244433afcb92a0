//! Small shared types with no better home.

use clap::ValueEnum;

/// Controls when colored output is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal
    Auto,
    /// Always emit color
    Always,
    /// Never emit color
    Never,
}
