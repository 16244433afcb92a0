//! Report generation in console and JSON formats
//!
//! The console reporter renders either a compact per-category score view (for
//! `analyze`) or the full marketing dashboard (for `report`). The JSON
//! reporter produces the machine-readable dashboard document written next to
//! the analyzed content.

mod console;
mod json;

pub use console::{dashboard, scores};
pub use json::{build_report, write_report};
