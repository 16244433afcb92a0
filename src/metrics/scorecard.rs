use super::Metric;
use super::MetricCategory;
use super::metric_def::METRIC_DEFINITIONS;
use crate::facts::ContentFacts;

/// One full evaluation of the metric table against a facts snapshot.
///
/// Construction never fails. Every registered metric is present exactly once,
/// in definition order.
#[derive(Debug, Clone)]
pub struct Scorecard {
    metrics: Vec<Metric>,
}

impl Scorecard {
    #[must_use]
    pub fn new(facts: &ContentFacts) -> Self {
        Self {
            metrics: METRIC_DEFINITIONS.iter().map(|def| Metric::new(def, (def.extractor)(facts))).collect(),
        }
    }

    #[must_use]
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn in_category(&self, category: MetricCategory) -> impl Iterator<Item = &Metric> {
        self.metrics.iter().filter(move |metric| metric.category() == category)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Metric> {
        self.metrics.iter().find(|metric| metric.name() == name)
    }

    /// Score lookup by bare metric name; unknown names read as 0.0.
    #[must_use]
    pub fn score(&self, name: &str) -> f64 {
        self.get(name).map_or(0.0, |metric| metric.value.as_f64())
    }

    /// The three overall rollups, in report order. These are emitted to the
    /// tracking sink without a category prefix.
    #[must_use]
    pub fn rollups(&self) -> [(&'static str, f64); 3] {
        [
            (
                "overall_content_quality_score",
                (self.score("technical_depth_score") + self.score("research_credibility_score")) / 2.0,
            ),
            (
                "overall_business_impact_score",
                (self.score("target_audience_relevance") + self.score("thought_leadership_potential")) / 2.0,
            ),
            (
                "overall_engagement_score",
                (self.score("hashtag_optimization_score") + self.score("content_shareability_score")) / 2.0,
            ),
        ]
    }

    /// Name/value pairs in the wire format forwarded to the tracking sink.
    pub fn wire_metrics(&self) -> impl Iterator<Item = (String, f64)> {
        self.metrics.iter().map(|metric| (metric.wire_name(), metric.value.as_f64()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::{BlogFacts, PostFacts};

    fn facts(posts: u64, blogs: u64) -> ContentFacts {
        ContentFacts {
            posts: PostFacts { generated: posts, ..Default::default() },
            blogs: BlogFacts { generated: blogs, ..Default::default() },
        }
    }

    fn assert_score(card: &Scorecard, name: &str, expected: f64) {
        let actual = card.score(name);
        assert!((actual - expected).abs() < 1e-9, "{name}: expected {expected}, got {actual}");
    }

    #[test]
    fn test_no_content_defaults() {
        let card = Scorecard::new(&ContentFacts::default());
        assert_score(&card, "technical_depth_score", 0.0);
        assert_score(&card, "research_credibility_score", 0.0);
        assert_score(&card, "practical_applicability_score", 0.5);
        assert_score(&card, "content_completeness_score", 0.0);
        assert_score(&card, "target_audience_relevance", 0.5);
        assert_score(&card, "thought_leadership_potential", 0.7);
        assert_score(&card, "networking_opportunity_score", 0.6);
        assert_score(&card, "hashtag_optimization_score", 0.0);
        assert_score(&card, "call_to_action_effectiveness", 0.5);
        assert_score(&card, "content_shareability_score", 0.6);
        assert_score(&card, "professional_networking_score", 0.0);
    }

    #[test]
    fn test_five_posts_two_blogs_thresholds() {
        let card = Scorecard::new(&facts(5, 2));
        assert_score(&card, "content_completeness_score", 0.8);
        assert_score(&card, "target_audience_relevance", 0.85);
        assert_score(&card, "thought_leadership_potential", 0.95);
        assert_score(&card, "networking_opportunity_score", 0.9);
        assert_score(&card, "emerging_technology_coverage", 0.85);
        assert_score(&card, "professional_networking_score", 1.0);
    }

    #[test]
    fn test_hashtag_optimization_clamps() {
        let mut content = facts(10, 0);
        content.posts.with_hashtags = 12;
        let card = Scorecard::new(&content);
        assert_score(&card, "hashtag_optimization_score", 1.0);

        content.posts.with_hashtags = 5;
        let card = Scorecard::new(&content);
        assert_score(&card, "hashtag_optimization_score", 0.6);
    }

    #[test]
    fn test_career_advancement_sums_to_one() {
        let card = Scorecard::new(&facts(3, 1));
        assert_score(&card, "career_advancement_potential", 1.0);

        let card = Scorecard::new(&facts(2, 1));
        assert_score(&card, "career_advancement_potential", 0.5);
    }

    #[test]
    fn test_no_blogs_degrades_blog_scores() {
        let card = Scorecard::new(&facts(4, 0));
        assert_score(&card, "research_credibility_score", 0.0);
        assert_score(&card, "practical_applicability_score", 0.5);
        assert_score(&card, "llm_architecture_coverage", 0.7);
        assert_score(&card, "content_shareability_score", 0.6);
        for metric in card.in_category(MetricCategory::ContentGeneration) {
            if metric.name().starts_with("research_blogs") {
                assert!(metric.value.as_f64().abs() < f64::EPSILON, "{} should be zero", metric.name());
            }
        }
    }

    #[test]
    fn test_credibility_weights() {
        let mut content = facts(0, 1);
        content.blogs.with_code = 2;
        content.blogs.with_diagrams = 1;
        let card = Scorecard::new(&content);
        assert_score(&card, "research_credibility_score", 1.0);
        assert_score(&card, "practical_applicability_score", 0.8);
        assert_score(&card, "implementation_guidance_coverage", 0.8);
    }

    #[test]
    fn test_innovation_tracking_ratio() {
        assert_score(&Scorecard::new(&facts(3, 1)), "innovation_tracking_score", 0.4);
        assert_score(&Scorecard::new(&facts(20, 5)), "innovation_tracking_score", 1.0);
    }

    #[test]
    fn test_technical_depth_is_plain_average() {
        let mut content = facts(1, 1);
        content.posts.technical_depth = 0.6;
        content.blogs.technical_depth = 1.0;
        assert_score(&Scorecard::new(&content), "technical_depth_score", 0.8);
    }

    #[test]
    fn test_rollup_formulas() {
        let mut content = facts(5, 2);
        content.posts.with_hashtags = 5;
        content.blogs.with_code = 1;
        content.blogs.with_diagrams = 1;
        let card = Scorecard::new(&content);

        let rollups = card.rollups();
        assert_eq!(rollups[0].0, "overall_content_quality_score");
        let expected = (card.score("technical_depth_score") + card.score("research_credibility_score")) / 2.0;
        assert!((rollups[0].1 - expected).abs() < 1e-9);

        assert_eq!(rollups[1].0, "overall_business_impact_score");
        assert!((rollups[1].1 - 0.9).abs() < 1e-9);

        assert_eq!(rollups[2].0, "overall_engagement_score");
        let expected = (card.score("hashtag_optimization_score") + card.score("content_shareability_score")) / 2.0;
        assert!((rollups[2].1 - expected).abs() < 1e-9);
    }

    #[test]
    fn test_wire_names_carry_category_prefix() {
        let card = Scorecard::new(&ContentFacts::default());
        let names: Vec<String> = card.wire_metrics().map(|(name, _)| name).collect();
        assert!(names.contains(&"content_generation_linkedin_posts_generated".to_string()));
        assert!(names.contains(&"quality_metrics_technical_depth_score".to_string()));
        assert!(names.contains(&"business_impact_career_advancement_potential".to_string()));
        assert!(names.contains(&"research_focus_llm_architecture_coverage".to_string()));
        assert!(names.contains(&"engagement_metrics_hashtag_optimization_score".to_string()));
        assert_eq!(names.len(), 29);
    }

    #[test]
    fn test_scorecard_is_deterministic() {
        let content = facts(7, 3);
        let a: Vec<(String, f64)> = Scorecard::new(&content).wire_metrics().collect();
        let b: Vec<(String, f64)> = Scorecard::new(&content).wire_metrics().collect();
        assert_eq!(a, b);
    }
}
