//! Metric derivation and normalization from content facts
//!
//! This module turns a [`ContentFacts`](crate::facts::ContentFacts) snapshot
//! into a flat, named metric set suitable for reporting and for forwarding to
//! a tracking server. Raw generation counts and the heuristic scores derived
//! from them live side by side in one statically registered table.
//!
//! # Implementation Model
//!
//! The core abstraction is the [`Metric`] type, which pairs a metric
//! definition ([`MetricDef`]) with a value ([`MetricValue`]). Each metric has:
//! - **Name**: snake_case identifier (e.g., `technical_depth_score`)
//! - **Description**: Human-readable explanation
//! - **Category**: Organizational grouping ([`MetricCategory`])
//! - **Value**: Typed data (integer or float)
//!
//! Metric definitions are statically registered in `metric_def.rs` and carry
//! a pure derivation function over a facts snapshot. The [`Scorecard`] type
//! runs every registered derivation once and answers lookups, category
//! groupings, wire-format flattening, and the three overall rollups.
//!
//! The score weights and thresholds encoded in the definition table are the
//! observable contract of this crate and are deliberately not configurable.

mod metric;
mod metric_category;
mod metric_def;
mod metric_value;
mod scorecard;

pub use metric::Metric;
pub use metric_category::MetricCategory;
pub use metric_value::MetricValue;
pub use scorecard::Scorecard;

#[cfg(any(debug_assertions, test))]
pub use metric_def::MetricDef;
