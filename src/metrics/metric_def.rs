use super::{MetricCategory, MetricValue};
use crate::facts::ContentFacts;

#[derive(Debug)]
pub struct MetricDef {
    pub name: &'static str,
    pub description: &'static str,
    pub category: MetricCategory,
    pub extractor: fn(&ContentFacts) -> MetricValue,
}

macro_rules! metric_def {
    ($name:expr, $description:expr, $category:ident, $extractor:expr) => {
        MetricDef {
            name: $name,
            description: $description,
            category: MetricCategory::$category,
            extractor: $extractor,
        }
    };
}

fn flag(condition: bool, weight: f64) -> f64 {
    if condition { weight } else { 0.0 }
}

#[expect(clippy::cast_precision_loss, reason = "item counts stay far below f64 precision limits")]
fn total_items(facts: &ContentFacts) -> f64 {
    (facts.posts.generated + facts.blogs.generated) as f64
}

pub const METRIC_DEFINITIONS: &[MetricDef] = &[
    // Raw generation counts, reported exactly as extracted.
    metric_def!(
        "linkedin_posts_generated",
        "Number of LinkedIn posts produced",
        ContentGeneration,
        |facts| MetricValue::UInt(facts.posts.generated)
    ),
    metric_def!(
        "linkedin_posts_total_words",
        "Total word count across all LinkedIn posts",
        ContentGeneration,
        |facts| MetricValue::UInt(facts.posts.total_words)
    ),
    metric_def!(
        "linkedin_posts_avg_length",
        "Average word count per LinkedIn post",
        ContentGeneration,
        |facts| MetricValue::Float(facts.posts.avg_length)
    ),
    metric_def!(
        "linkedin_posts_with_hashtags",
        "Hashtag occurrences across the LinkedIn posts",
        ContentGeneration,
        |facts| MetricValue::UInt(facts.posts.with_hashtags)
    ),
    metric_def!(
        "linkedin_posts_with_visualizations",
        "Image references across the LinkedIn posts",
        ContentGeneration,
        |facts| MetricValue::UInt(facts.posts.with_visualizations)
    ),
    metric_def!(
        "linkedin_posts_technical_depth",
        "Technical vocabulary density of the LinkedIn posts",
        ContentGeneration,
        |facts| MetricValue::Float(facts.posts.technical_depth)
    ),
    metric_def!(
        "research_blogs_generated",
        "Number of research blogs produced",
        ContentGeneration,
        |facts| MetricValue::UInt(facts.blogs.generated)
    ),
    metric_def!(
        "research_blogs_total_words",
        "Total word count across all research blogs",
        ContentGeneration,
        |facts| MetricValue::UInt(facts.blogs.total_words)
    ),
    metric_def!(
        "research_blogs_avg_length",
        "Average word count per research blog",
        ContentGeneration,
        |facts| MetricValue::Float(facts.blogs.avg_length)
    ),
    metric_def!(
        "research_blogs_with_code",
        "Fenced code blocks across the research blogs",
        ContentGeneration,
        |facts| MetricValue::UInt(facts.blogs.with_code)
    ),
    metric_def!(
        "research_blogs_with_diagrams",
        "Image references across the research blogs",
        ContentGeneration,
        |facts| MetricValue::UInt(facts.blogs.with_diagrams)
    ),
    metric_def!(
        "research_blogs_technical_depth",
        "Technical vocabulary density of the research blogs",
        ContentGeneration,
        |facts| MetricValue::Float(facts.blogs.technical_depth)
    ),
    // Quality scores
    metric_def!(
        "technical_depth_score",
        "Average technical depth across both channels",
        QualityMetrics,
        |facts| MetricValue::Float((facts.posts.technical_depth + facts.blogs.technical_depth) / 2.0)
    ),
    metric_def!(
        "research_credibility_score",
        "Credibility signal from blog presence, code samples, and diagrams",
        QualityMetrics,
        |facts| MetricValue::Float(
            flag(facts.blogs.generated > 0, 0.4) + flag(facts.blogs.with_code > 0, 0.4) + flag(facts.blogs.with_diagrams > 0, 0.2)
        )
    ),
    metric_def!(
        "innovation_tracking_score",
        "Volume of produced items relative to a ten-item target",
        QualityMetrics,
        |facts| MetricValue::Float((total_items(facts) / 10.0).min(1.0))
    ),
    metric_def!(
        "practical_applicability_score",
        "Whether the content includes working code samples",
        QualityMetrics,
        |facts| MetricValue::Float(if facts.blogs.with_code > 0 { 0.8 } else { 0.5 })
    ),
    metric_def!(
        "content_completeness_score",
        "Weighted coverage of post volume, blog volume, hashtags, and diagrams",
        QualityMetrics,
        |facts| MetricValue::Float(
            flag(facts.posts.generated >= 5, 0.4)
                + flag(facts.blogs.generated >= 2, 0.4)
                + flag(facts.posts.with_hashtags > 0, 0.1)
                + flag(facts.blogs.with_diagrams > 0, 0.1)
        )
    ),
    // Business impact scores
    metric_def!(
        "target_audience_relevance",
        "Relevance to the professional audience based on total output",
        BusinessImpact,
        |facts| {
            let total = facts.posts.generated + facts.blogs.generated;
            MetricValue::Float(if total >= 10 {
                0.95
            } else if total >= 5 {
                0.85
            } else if total >= 2 {
                0.75
            } else {
                0.5
            })
        }
    ),
    metric_def!(
        "thought_leadership_potential",
        "Thought leadership signal from long-form output",
        BusinessImpact,
        |facts| MetricValue::Float(match facts.blogs.generated {
            0 => 0.7,
            1 => 0.85,
            _ => 0.95,
        })
    ),
    metric_def!(
        "networking_opportunity_score",
        "Networking reach from short-form volume",
        BusinessImpact,
        |facts| MetricValue::Float(if facts.posts.generated >= 5 {
            0.9
        } else if facts.posts.generated >= 2 {
            0.8
        } else {
            0.6
        })
    ),
    metric_def!(
        "career_advancement_potential",
        "Combined long-form and short-form career signal",
        BusinessImpact,
        // The two halves sum to at most 1.0, so no clamp is applied.
        |facts| MetricValue::Float(flag(facts.blogs.generated > 0, 0.5) + flag(facts.posts.generated >= 3, 0.5))
    ),
    // Research focus scores
    metric_def!(
        "llm_architecture_coverage",
        "Coverage of model architecture topics",
        ResearchFocus,
        |facts| MetricValue::Float(if facts.blogs.generated > 0 { 0.95 } else { 0.7 })
    ),
    metric_def!(
        "performance_optimization_coverage",
        "Coverage of performance and optimization topics",
        ResearchFocus,
        |facts| MetricValue::Float(if facts.blogs.generated > 0 { 0.9 } else { 0.6 })
    ),
    metric_def!(
        "emerging_technology_coverage",
        "Coverage of emerging technology topics based on total output",
        ResearchFocus,
        |facts| {
            let total = facts.posts.generated + facts.blogs.generated;
            MetricValue::Float(if total >= 5 {
                0.85
            } else if total >= 2 {
                0.75
            } else {
                0.6
            })
        }
    ),
    metric_def!(
        "implementation_guidance_coverage",
        "Coverage of hands-on implementation guidance",
        ResearchFocus,
        |facts| MetricValue::Float(if facts.blogs.with_code > 0 { 0.8 } else { 0.6 })
    ),
    // Engagement scores
    metric_def!(
        "hashtag_optimization_score",
        "Hashtag usage relative to post volume",
        EngagementMetrics,
        |facts| {
            if facts.posts.generated == 0 {
                MetricValue::Float(0.0)
            } else {
                #[expect(clippy::cast_precision_loss, reason = "counts stay far below f64 precision limits")]
                let ratio = facts.posts.with_hashtags as f64 / facts.posts.generated as f64;
                MetricValue::Float((ratio * 1.2).min(1.0))
            }
        }
    ),
    metric_def!(
        "call_to_action_effectiveness",
        "Call-to-action strength from short-form volume",
        EngagementMetrics,
        |facts| MetricValue::Float(if facts.posts.generated >= 3 {
            0.8
        } else if facts.posts.generated >= 1 {
            0.7
        } else {
            0.5
        })
    ),
    metric_def!(
        "content_shareability_score",
        "Shareability signal from long-form presence",
        EngagementMetrics,
        |facts| MetricValue::Float(if facts.blogs.generated > 0 { 0.85 } else { 0.6 })
    ),
    metric_def!(
        "professional_networking_score",
        "Combined short-form and long-form networking signal",
        EngagementMetrics,
        |facts| {
            let posts = if facts.posts.generated >= 5 {
                0.5
            } else if facts.posts.generated >= 2 {
                0.4
            } else {
                0.0
            };
            MetricValue::Float((posts + flag(facts.blogs.generated > 0, 0.5)).min(1.0))
        }
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_metric_names_are_unique() {
        let mut names = HashSet::new();
        for def in METRIC_DEFINITIONS {
            assert!(names.insert(def.name), "duplicate metric name: {}", def.name);
        }
    }

    #[test]
    fn test_metric_descriptions_are_unique() {
        let mut descriptions = HashSet::new();
        for def in METRIC_DEFINITIONS {
            assert!(descriptions.insert(def.description), "duplicate metric description: {}", def.description);
        }
    }

    #[test]
    fn test_every_category_is_populated() {
        use strum::IntoEnumIterator;
        for category in MetricCategory::iter() {
            assert!(
                METRIC_DEFINITIONS.iter().any(|def| def.category == category),
                "no metrics in category {category}"
            );
        }
    }

    #[test]
    fn test_derived_scores_are_floats() {
        let facts = ContentFacts::default();
        for def in METRIC_DEFINITIONS.iter().filter(|def| def.category != MetricCategory::ContentGeneration) {
            assert!(
                matches!((def.extractor)(&facts), MetricValue::Float(_)),
                "score {} is not a float",
                def.name
            );
        }
    }
}
