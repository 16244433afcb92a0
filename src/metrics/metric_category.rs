use strum::{Display, EnumIter};

/// Metric groupings, serialized with their wire-format keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum MetricCategory {
    #[strum(serialize = "content_generation")]
    ContentGeneration,

    #[strum(serialize = "quality_metrics")]
    QualityMetrics,

    #[strum(serialize = "business_impact")]
    BusinessImpact,

    #[strum(serialize = "research_focus")]
    ResearchFocus,

    #[strum(serialize = "engagement_metrics")]
    EngagementMetrics,
}

impl MetricCategory {
    /// Heading used in console reports.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ContentGeneration => "Content Generation",
            Self::QualityMetrics => "Quality Metrics",
            Self::BusinessImpact => "Business Impact",
            Self::ResearchFocus => "Research Focus",
            Self::EngagementMetrics => "Engagement Metrics",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_wire_keys_are_snake_case() {
        for category in MetricCategory::iter() {
            let key = category.to_string();
            assert!(key.chars().all(|c| c.is_ascii_lowercase() || c == '_'), "bad wire key: {key}");
        }
    }
}
