use crate::Result;
use crate::config::Config;
use crate::facts::ContentFacts;
use crate::metrics::{Metric, MetricCategory, MetricValue, Scorecard};
use crate::misc::ColorMode;
use core::fmt::{self, Write};
use owo_colors::OwoColorize;
use std::io::{IsTerminal, stdout};
use strum::IntoEnumIterator;
use terminal_size::{Width, terminal_size};

const DEFAULT_TERMINAL_WIDTH: usize = 120;
const HEADER_RULE_WIDTH: usize = 60;
const SECTION_RULE_WIDTH: usize = 30;
const ROW_INDENT: usize = 2;
const COLUMN_GAP: usize = 2;
const VALUE_WIDTH: usize = 7;
const MIN_DESCRIPTION_WIDTH: usize = 20;

/// Render the per-category score view used by `analyze`.
pub fn scores<W: Write>(card: &Scorecard, config: &Config, color: ColorMode, short: bool, writer: &mut W) -> Result<()> {
    let mut reporter = ConsoleReporter::new(writer, config, color);
    if short {
        reporter.write_short_scores(card)?;
    } else {
        reporter.write_scores(card)?;
    }
    Ok(())
}

/// Render the full marketing dashboard used by `report`.
pub fn dashboard<W: Write>(
    facts: &ContentFacts,
    card: &Scorecard,
    experiment_summary: &serde_json::Value,
    config: &Config,
    color: ColorMode,
    writer: &mut W,
) -> Result<()> {
    ConsoleReporter::new(writer, config, color).write_dashboard(facts, card, experiment_summary)
}

struct ConsoleReporter<'a, W: Write> {
    writer: &'a mut W,
    colors: ColorScheme<'a>,
    layout: Layout,
}

impl<'a, W: Write> ConsoleReporter<'a, W> {
    fn new(writer: &'a mut W, config: &'a Config, color_mode: ColorMode) -> Self {
        Self {
            writer,
            colors: ColorScheme::new(config, color_mode),
            layout: Layout::new(),
        }
    }

    fn write_short_scores(&mut self, card: &Scorecard) -> Result<()> {
        for category in score_categories() {
            write!(self.writer, "{:<width$} ", category.title(), width = self.layout.category_width)?;
            self.colors.write_colorized_percent(self.writer, category_average(card, category))?;
            writeln!(self.writer)?;
        }
        for (name, value) in card.rollups() {
            write!(self.writer, "{name:<width$} ", width = self.layout.category_width)?;
            self.colors.write_colorized_percent(self.writer, value)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_scores(&mut self, card: &Scorecard) -> Result<()> {
        for category in MetricCategory::iter() {
            self.colors.write_styled_text(self.writer, category.title(), TextStyle::Bold)?;
            writeln!(self.writer)?;

            for metric in card.in_category(category) {
                self.write_metric_row(metric)?;
            }
            writeln!(self.writer)?;
        }

        self.colors.write_styled_text(self.writer, "Overall Scores", TextStyle::Bold)?;
        writeln!(self.writer)?;
        for (name, value) in card.rollups() {
            write!(self.writer, "{:indent$}{name:<width$}: ", "", indent = ROW_INDENT, width = self.layout.metric_width)?;
            self.colors.write_colorized_percent(self.writer, value)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_metric_row(&mut self, metric: &Metric) -> Result<()> {
        let metric_width = self.layout.metric_width;
        write!(self.writer, "{:indent$}{:<metric_width$}: ", "", metric.name(), indent = ROW_INDENT)?;

        if metric.category() == MetricCategory::ContentGeneration {
            let rendered = match metric.value {
                MetricValue::UInt(v) => format!("{v:>VALUE_WIDTH$}"),
                MetricValue::Float(v) => format!("{v:>VALUE_WIDTH$.2}"),
            };
            write!(self.writer, "{rendered}")?;
        } else {
            self.colors.write_colorized_percent(self.writer, metric.value.as_f64())?;
        }

        let description = truncate(metric.description(), self.layout.max_description_width);
        write!(self.writer, "{:COLUMN_GAP$}", "")?;
        self.colors.write_styled_text(self.writer, &description, TextStyle::Dimmed)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_dashboard(&mut self, facts: &ContentFacts, card: &Scorecard, experiment_summary: &serde_json::Value) -> Result<()> {
        self.colors
            .write_styled_text(self.writer, "Content Marketing Metrics Dashboard", TextStyle::Bold)?;
        writeln!(self.writer)?;
        self.colors
            .write_styled_line(self.writer, "═", HEADER_RULE_WIDTH, TextStyle::Dimmed)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Generated: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(self.writer)?;

        self.write_executive_summary(facts, card, experiment_summary)?;
        self.write_content_analysis(facts)?;
        self.write_quality_metrics(card)?;
        self.write_business_impact(card)?;
        self.write_performance_metrics(card, experiment_summary)?;
        self.write_recommendations(facts, card)?;
        Ok(())
    }

    fn write_section_header(&mut self, title: &str) -> Result<()> {
        self.colors.write_styled_text(self.writer, title, TextStyle::Bold)?;
        writeln!(self.writer)?;
        self.colors
            .write_styled_line(self.writer, "─", SECTION_RULE_WIDTH, TextStyle::Dimmed)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_percent_bullet(&mut self, label: &str, value: f64) -> Result<()> {
        write!(self.writer, "  • {label}: ")?;
        self.colors.write_colorized_percent(self.writer, value)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_executive_summary(&mut self, facts: &ContentFacts, card: &Scorecard, experiment_summary: &serde_json::Value) -> Result<()> {
        self.write_section_header("EXECUTIVE SUMMARY")?;

        writeln!(self.writer, "Content Generated:")?;
        writeln!(self.writer, "  • LinkedIn Posts: {}", facts.posts.generated)?;
        writeln!(self.writer, "  • Research Blogs: {}", facts.blogs.generated)?;
        writeln!(self.writer, "  • Total Content Pieces: {}", facts.posts.generated + facts.blogs.generated)?;
        writeln!(self.writer)?;

        writeln!(self.writer, "Quality Scores:")?;
        self.write_percent_bullet("Technical Depth", card.score("technical_depth_score"))?;
        self.write_percent_bullet("Research Credibility", card.score("research_credibility_score"))?;
        self.write_percent_bullet("Thought Leadership", card.score("thought_leadership_potential"))?;
        writeln!(self.writer)?;

        if let Some(total_runs) = experiment_summary.get("total_runs") {
            writeln!(self.writer, "Experiment Tracking:")?;
            writeln!(self.writer, "  • Total Runs: {total_runs}")?;
            writeln!(self.writer, "  • Tracking Server: Active")?;
        } else {
            writeln!(self.writer, "Experiment Tracking: {}", render_summary(experiment_summary))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_content_analysis(&mut self, facts: &ContentFacts) -> Result<()> {
        self.write_section_header("CONTENT ANALYSIS")?;

        writeln!(self.writer, "LinkedIn Posts:")?;
        writeln!(self.writer, "  • Generated: {}", facts.posts.generated)?;
        writeln!(self.writer, "  • Total Words: {}", facts.posts.total_words)?;
        writeln!(self.writer, "  • Avg Length: {:.0} words", facts.posts.avg_length)?;
        writeln!(self.writer, "  • With Hashtags: {}", facts.posts.with_hashtags)?;
        writeln!(self.writer, "  • With Visualizations: {}", facts.posts.with_visualizations)?;
        self.write_percent_bullet("Technical Depth", facts.posts.technical_depth)?;
        writeln!(self.writer)?;

        writeln!(self.writer, "Research Blogs:")?;
        writeln!(self.writer, "  • Generated: {}", facts.blogs.generated)?;
        writeln!(self.writer, "  • Total Words: {}", facts.blogs.total_words)?;
        writeln!(self.writer, "  • Avg Length: {:.0} words", facts.blogs.avg_length)?;
        writeln!(self.writer, "  • With Code: {}", facts.blogs.with_code)?;
        writeln!(self.writer, "  • With Diagrams: {}", facts.blogs.with_diagrams)?;
        self.write_percent_bullet("Technical Depth", facts.blogs.technical_depth)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_quality_metrics(&mut self, card: &Scorecard) -> Result<()> {
        self.write_section_header("QUALITY METRICS")?;

        self.write_percent_bullet("Technical Depth Score", card.score("technical_depth_score"))?;
        self.write_percent_bullet("Research Credibility Score", card.score("research_credibility_score"))?;
        self.write_percent_bullet("Innovation Tracking Score", card.score("innovation_tracking_score"))?;
        self.write_percent_bullet("Practical Applicability Score", card.score("practical_applicability_score"))?;
        self.write_percent_bullet("Content Completeness Score", card.score("content_completeness_score"))?;

        let overall = card.rollups()[0].1;
        writeln!(self.writer)?;
        writeln!(self.writer, "Overall Quality Assessment:")?;
        write!(self.writer, "  {} (", quality_assessment(overall))?;
        self.colors.write_colorized_percent(self.writer, overall)?;
        writeln!(self.writer, ") - {}", quality_commentary(overall))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_business_impact(&mut self, card: &Scorecard) -> Result<()> {
        self.write_section_header("BUSINESS IMPACT ANALYSIS")?;

        self.write_percent_bullet("Target Audience Relevance", card.score("target_audience_relevance"))?;
        self.write_percent_bullet("Thought Leadership Potential", card.score("thought_leadership_potential"))?;
        self.write_percent_bullet("Networking Opportunity Score", card.score("networking_opportunity_score"))?;
        self.write_percent_bullet("Career Advancement Potential", card.score("career_advancement_potential"))?;

        let overall = card.rollups()[1].1;
        writeln!(self.writer)?;
        writeln!(self.writer, "Business Impact Assessment:")?;
        write!(self.writer, "  {} (", impact_assessment(overall))?;
        self.colors.write_colorized_percent(self.writer, overall)?;
        writeln!(self.writer, ") - {}", impact_commentary(overall))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_performance_metrics(&mut self, card: &Scorecard, experiment_summary: &serde_json::Value) -> Result<()> {
        self.write_section_header("PERFORMANCE METRICS")?;

        self.write_percent_bullet("LLM Architecture Coverage", card.score("llm_architecture_coverage"))?;
        self.write_percent_bullet("Performance Optimization Coverage", card.score("performance_optimization_coverage"))?;
        self.write_percent_bullet("Emerging Technology Coverage", card.score("emerging_technology_coverage"))?;
        self.write_percent_bullet("Implementation Guidance Coverage", card.score("implementation_guidance_coverage"))?;
        writeln!(self.writer)?;

        writeln!(self.writer, "Engagement Metrics:")?;
        self.write_percent_bullet("Hashtag Optimization", card.score("hashtag_optimization_score"))?;
        self.write_percent_bullet("Call-to-Action Effectiveness", card.score("call_to_action_effectiveness"))?;
        self.write_percent_bullet("Content Shareability", card.score("content_shareability_score"))?;
        self.write_percent_bullet("Professional Networking", card.score("professional_networking_score"))?;

        if let Some(total_runs) = experiment_summary.get("total_runs") {
            writeln!(self.writer)?;
            writeln!(self.writer, "Experiment Performance:")?;
            writeln!(self.writer, "  • Total Runs: {total_runs}")?;
            let latest = experiment_summary
                .get("runs")
                .and_then(|runs| runs.get(0))
                .and_then(|run| run.get("start_time"))
                .map_or_else(|| "N/A".to_string(), ToString::to_string);
            writeln!(self.writer, "  • Latest Run: {latest}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, facts: &ContentFacts, card: &Scorecard) -> Result<()> {
        self.write_section_header("RECOMMENDATIONS")?;

        let recommendations = recommendations(facts, card);
        if recommendations.is_empty() {
            writeln!(self.writer, "All metrics are within target ranges.")?;
        } else {
            for (index, recommendation) in recommendations.iter().enumerate() {
                writeln!(self.writer, "{}. {recommendation}", index + 1)?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Actionable followups derived from the current scorecard, in priority order.
pub(crate) fn recommendations(facts: &ContentFacts, card: &Scorecard) -> Vec<&'static str> {
    let mut recommendations = Vec::new();

    if facts.posts.generated < 5 {
        recommendations.push("Increase LinkedIn post generation to at least 5 posts for better networking");
    }
    if facts.blogs.generated < 2 {
        recommendations.push("Generate at least 2 research blogs to demonstrate thought leadership");
    }
    if facts.posts.with_visualizations + facts.blogs.with_diagrams < 3 {
        recommendations.push("Create more technical visualizations to enhance content engagement");
    }
    if card.score("technical_depth_score") < 0.8 {
        recommendations.push("Enhance technical depth by including more architectural analysis");
    }
    if card.score("research_credibility_score") < 0.8 {
        recommendations.push("Add code examples and technical diagrams to improve credibility");
    }
    if card.score("thought_leadership_potential") < 0.8 {
        recommendations.push("Focus on creating more comprehensive research blogs for thought leadership");
    }
    if card.score("networking_opportunity_score") < 0.8 {
        recommendations.push("Increase LinkedIn post frequency and engagement strategies");
    }
    if card.score("hashtag_optimization_score") < 0.7 {
        recommendations.push("Improve hashtag usage in LinkedIn posts for better discoverability");
    }
    if card.score("content_shareability_score") < 0.7 {
        recommendations.push("Add more visual content and infographics to increase shareability");
    }

    recommendations
}

fn quality_assessment(score: f64) -> &'static str {
    if score >= 0.9 {
        "EXCELLENT"
    } else if score >= 0.8 {
        "GOOD"
    } else if score >= 0.7 {
        "FAIR"
    } else {
        "NEEDS IMPROVEMENT"
    }
}

fn quality_commentary(score: f64) -> &'static str {
    if score >= 0.9 {
        "High-quality research content"
    } else if score >= 0.8 {
        "Solid technical content"
    } else if score >= 0.7 {
        "Adequate content quality"
    } else {
        "Content quality below target"
    }
}

fn impact_assessment(score: f64) -> &'static str {
    if score >= 0.9 {
        "HIGH IMPACT"
    } else if score >= 0.8 {
        "MODERATE IMPACT"
    } else if score >= 0.7 {
        "LIMITED IMPACT"
    } else {
        "LOW IMPACT"
    }
}

fn impact_commentary(score: f64) -> &'static str {
    if score >= 0.9 {
        "Strong career advancement potential"
    } else if score >= 0.8 {
        "Good networking opportunities"
    } else if score >= 0.7 {
        "Some career benefits"
    } else {
        "Needs improvement for career advancement"
    }
}

fn render_summary(summary: &serde_json::Value) -> String {
    summary.as_str().map_or_else(|| summary.to_string(), ToString::to_string)
}

/// Score categories shown in the short view, in report order.
fn score_categories() -> impl Iterator<Item = MetricCategory> {
    MetricCategory::iter().filter(|category| *category != MetricCategory::ContentGeneration)
}

/// Mean of the scores in a category. Every non-generation metric is a score
/// on the unit interval, so the mean is one too.
fn category_average(card: &Scorecard, category: MetricCategory) -> f64 {
    let scores: Vec<f64> = card.in_category(category).map(|metric| metric.value.as_f64()).collect();
    if scores.is_empty() {
        return 0.0;
    }
    #[expect(clippy::cast_precision_loss, reason = "category sizes are single digit")]
    let count = scores.len() as f64;
    scores.iter().sum::<f64>() / count
}

#[derive(Copy, Clone)]
enum TextStyle {
    Bold,
    Dimmed,
}

struct ColorScheme<'a> {
    config: &'a Config,
    enabled: bool,
}

impl<'a> ColorScheme<'a> {
    fn new(config: &'a Config, color_mode: ColorMode) -> Self {
        let enabled = matches!(color_mode, ColorMode::Always) || (matches!(color_mode, ColorMode::Auto) && stdout().is_terminal());
        Self { config, enabled }
    }

    fn write_styled_text<W: Write>(&self, writer: &mut W, text: &str, style: TextStyle) -> fmt::Result {
        if !self.enabled {
            return write!(writer, "{text}");
        }
        match style {
            TextStyle::Bold => write!(writer, "{}", text.bold()),
            TextStyle::Dimmed => write!(writer, "{}", text.dimmed()),
        }
    }

    fn write_styled_line<W: Write>(&self, writer: &mut W, ch: &str, width: usize, style: TextStyle) -> fmt::Result {
        if !self.enabled {
            return write!(writer, "{}", ch.repeat(width));
        }
        match style {
            TextStyle::Bold => write!(writer, "{}", ch.repeat(width).bold()),
            TextStyle::Dimmed => write!(writer, "{}", ch.repeat(width).dimmed()),
        }
    }

    /// Render a unit-interval score as a percentage, colorized by scoring band.
    fn write_colorized_percent<W: Write>(&self, writer: &mut W, score: f64) -> fmt::Result {
        let rendered = format!("{:>VALUE_WIDTH$.1}%", score * 100.0);

        if !self.enabled {
            return write!(writer, "{rendered}");
        }

        match self.config.color_index_for_score(score) {
            None => write!(writer, "{}", rendered.dimmed()),
            Some(index) => {
                let color = self.config.colors_for_scoring_bands[index].0;
                write!(writer, "{}", rendered.truecolor(color.red, color.green, color.blue))
            }
        }
    }
}

struct Layout {
    category_width: usize,
    metric_width: usize,
    max_description_width: usize,
}

impl Layout {
    fn new() -> Self {
        let terminal_width = detect_terminal_width();
        let category_width = MetricCategory::iter()
            .map(|category| category.title().len())
            .max()
            .unwrap_or(20)
            .max("overall_content_quality_score".len());
        let metric_width = crate::metrics::Scorecard::new(&ContentFacts::default())
            .metrics()
            .iter()
            .map(|metric| metric.name().len())
            .max()
            .unwrap_or(35);

        Self {
            category_width,
            metric_width,
            max_description_width: terminal_width
                .saturating_sub(ROW_INDENT + metric_width + COLUMN_GAP + VALUE_WIDTH + COLUMN_GAP)
                .max(MIN_DESCRIPTION_WIDTH),
        }
    }
}

fn truncate(text: &str, max_width: usize) -> String {
    if text.len() <= max_width {
        return text.to_string();
    }

    let mut result = String::new();
    for ch in text.chars() {
        if result.len() + 1 >= max_width {
            break;
        }
        result.push(ch);
    }

    format!("{result}…")
}

fn detect_terminal_width() -> usize {
    if stdout().is_terminal() {
        terminal_size().map_or(DEFAULT_TERMINAL_WIDTH, |(Width(w), _)| usize::from(w))
    } else {
        DEFAULT_TERMINAL_WIDTH
    }
}
