/// Raw counts extracted from the LinkedIn posts artifact.
///
/// All fields are zero when the artifact is missing or unreadable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostFacts {
    /// Number of non-empty segments separated by horizontal rules
    pub generated: u64,
    /// Whitespace-separated word count of the whole file
    pub total_words: u64,
    /// `total_words / max(generated, 1)`
    pub avg_length: f64,
    /// Occurrences of `#word` hashtags across the whole file
    pub with_hashtags: u64,
    /// Occurrences of Markdown image references
    pub with_visualizations: u64,
    /// Technical vocabulary density ratio, clamped to [0, 1]
    pub technical_depth: f64,
}

/// Raw counts extracted from the research blogs artifact.
///
/// All fields are zero when the artifact is missing or unreadable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogFacts {
    /// Number of non-empty segments separated by horizontal rules
    pub generated: u64,
    /// Whitespace-separated word count of the whole file
    pub total_words: u64,
    /// `total_words / max(generated, 1)`
    pub avg_length: f64,
    /// Number of fenced code blocks
    pub with_code: u64,
    /// Occurrences of Markdown image references
    pub with_diagrams: u64,
    /// Technical vocabulary density ratio, clamped to [0, 1]
    pub technical_depth: f64,
}

/// Everything the metric table needs to derive a scorecard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentFacts {
    pub posts: PostFacts,
    pub blogs: BlogFacts,
}
