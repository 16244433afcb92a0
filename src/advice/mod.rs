//! Heuristic content advice
//!
//! Keyword-driven helpers for polishing generated content: an engagement
//! analyzer for LinkedIn posts and a prompt catalog for technical
//! visualizations. These are fixed rule tables, not language understanding;
//! the rules are the contract.

mod post;
mod topic;

pub use post::{PostAdvice, analyze_post};
pub use topic::{TopicCategory, VisualPrompt, prompts};
