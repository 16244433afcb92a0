//! Raw fact extraction from generated content artifacts
//!
//! This module turns Markdown artifacts (LinkedIn posts, research blogs) into
//! flat numeric counts ([`ContentFacts`]). Extraction never fails: a missing
//! artifact simply yields zero counts for that channel, and any other read
//! failure is logged and degrades to zeros as well. Interpretation of the
//! counts happens in the `metrics` module.

mod content_facts;
mod extractor;
mod patterns;

pub use content_facts::{BlogFacts, ContentFacts, PostFacts};
pub use extractor::gather;
pub use patterns::split_items;
