use crate::Result;
use crate::config::Color;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use palette::Srgb;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use url::Url;

/// The default configuration YAML content, embedded from `default_config.yml`
pub const DEFAULT_CONFIG_YAML: &str = include_str!("../../default_config.yml");

/// Number of scoring bands
pub const NUM_SCORING_BANDS: usize = 3;

fn default_linkedin_file() -> String {
    "research_linkedin_posts.md".to_string()
}

fn default_blogs_file() -> String {
    "research_blogs.md".to_string()
}

fn default_artifact_paths() -> Vec<String> {
    vec![
        "research_market_analysis.md".to_string(),
        "research_strategy.md".to_string(),
        "research_content_calendar.md".to_string(),
        "research_linkedin_posts.md".to_string(),
        "research_blogs.md".to_string(),
        "optimized_research_content.md".to_string(),
    ]
}

fn default_report_file() -> String {
    "metrics_dashboard_report.json".to_string()
}

fn default_tracking_uri() -> String {
    "http://localhost:5001".to_string()
}

fn default_experiment_name() -> String {
    "ai-ml-research-scientist-marketing".to_string()
}

fn default_run_name() -> String {
    "deep_technical_analysis".to_string()
}

/// Default scoring thresholds: `[good_threshold, excellent_threshold]`
/// Scores < 0.5 are red (needs attention)
/// Scores 0.5-0.79 are orange (acceptable)
/// Scores >= 0.8 are green (excellent)
const fn default_scoring_bands() -> [f64; NUM_SCORING_BANDS - 1] {
    [0.5, 0.8]
}

/// Default colors for scoring bands: red, orange, green
const fn default_colors_for_scoring_bands() -> [Color; NUM_SCORING_BANDS] {
    [
        Color(Srgb::new(255, 0, 0)),   // Bad: Red
        Color(Srgb::new(255, 165, 0)), // Good: Orange
        Color(Srgb::new(0, 255, 0)),   // Excellent: Green
    ]
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of the LinkedIn posts artifact, resolved against the base directory
    #[serde(default = "default_linkedin_file")]
    pub linkedin_file: String,

    /// Name of the research blogs artifact, resolved against the base directory
    #[serde(default = "default_blogs_file")]
    pub blogs_file: String,

    /// Files offered to the tracking server as run artifacts; missing files are skipped
    #[serde(default = "default_artifact_paths")]
    pub artifact_paths: Vec<String>,

    /// Where the JSON dashboard report is written
    #[serde(default = "default_report_file")]
    pub report_file: String,

    /// Base URI of the MLflow-compatible tracking server
    #[serde(default = "default_tracking_uri")]
    pub tracking_uri: String,

    /// Experiment the tracking runs are recorded under
    #[serde(default = "default_experiment_name")]
    pub experiment_name: String,

    /// Name given to tracking runs
    #[serde(default = "default_run_name")]
    pub run_name: String,

    #[serde(default = "default_scoring_bands")]
    pub scoring_bands: [f64; NUM_SCORING_BANDS - 1],

    #[serde(default = "default_colors_for_scoring_bands")]
    pub colors_for_scoring_bands: [Color; NUM_SCORING_BANDS],
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<(Self, Vec<String>)> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading content-rank configuration from {path}"))?;
            (path.clone(), text)
        } else {
            let candidates = [
                base_dir.join("content-rank.toml"),
                base_dir.join("content-rank.yml"),
                base_dir.join("content-rank.yaml"),
                base_dir.join("content-rank.json"),
            ];

            let mut found = None;
            for path in &candidates {
                match fs::read_to_string(path) {
                    Ok(text) => {
                        found = Some((path.clone(), text));
                        break;
                    }
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e).into_app_err_with(|| format!("reading content-rank configuration from {path}")),
                }
            }

            let Some(result) = found else {
                return Ok((Self::default(), Vec::new()));
            };
            result
        };

        let extension = final_path.extension().unwrap_or_default();
        let config: Self = match extension {
            "toml" => toml::from_str(&text).into_app_err_with(|| format!("parsing TOML configuration from {final_path}"))?,
            "yml" | "yaml" => serde_yaml::from_str(&text).into_app_err_with(|| format!("parsing YAML configuration from {final_path}"))?,
            "json" => serde_json::from_str(&text).into_app_err_with(|| format!("parsing JSON configuration from {final_path}"))?,
            _ => return Err(app_err!("unsupported configuration file extension: {extension}")),
        };

        let mut warnings = Vec::new();
        config.validate(&mut warnings);
        Ok((config, warnings))
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save(&self, output_path: &Utf8Path) -> Result<()> {
        let extension = output_path.extension().unwrap_or_default();
        let text = match extension {
            "toml" => toml::to_string_pretty(self)
                .into_app_err_with(|| format!("serializing configuration to TOML for saving to {output_path}"))?,
            "yml" | "yaml" => serde_yaml::to_string(self)
                .into_app_err_with(|| format!("serializing configuration to YAML for saving to {output_path}"))?,
            "json" => serde_json::to_string_pretty(self)
                .into_app_err_with(|| format!("serializing configuration to JSON for saving to {output_path}"))?,
            _ => return Err(app_err!("unsupported configuration file extension: {extension}")),
        };

        fs::write(output_path, text).into_app_err_with(|| format!("writing configuration to {output_path}"))?;
        Ok(())
    }

    /// Save the default configuration to a file, preserving comments for YAML format
    ///
    /// When saving to YAML format, this method writes the raw content from `default_config.yml`,
    /// preserving all comments and formatting. For other formats (TOML, JSON), it serializes
    /// the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default_with_comments(&self, output_path: &Utf8Path) -> Result<()> {
        let extension = output_path.extension().unwrap_or_default();

        if matches!(extension, "yml" | "yaml") {
            fs::write(output_path, DEFAULT_CONFIG_YAML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        } else {
            self.save(output_path)?;
        }

        Ok(())
    }

    /// Get the color for a given score based on the scoring bands
    ///
    /// Returns:
    /// - Index 0 (bad color) if score is below the first threshold
    /// - Index 1 (good color) if score is between the two thresholds
    /// - Index 2 (excellent color) if score is at or above the second threshold
    /// - None if score is negative (indicates missing/invalid data)
    #[must_use]
    pub fn color_index_for_score(&self, score: f64) -> Option<usize> {
        if score < 0.0 {
            return None;
        }

        if self.scoring_bands.len() >= 2 {
            if score >= self.scoring_bands[1] {
                Some(2) // Excellent
            } else if score >= self.scoring_bands[0] {
                Some(1) // Good
            } else {
                Some(0) // Bad
            }
        } else {
            None
        }
    }

    /// Validate the configuration to detect non-sensical settings
    fn validate(&self, warnings: &mut Vec<String>) {
        if self.scoring_bands[0] >= self.scoring_bands[1] {
            warnings.push(format!(
                "scoring_bands thresholds must be ascending, got [{}, {}]",
                self.scoring_bands[0], self.scoring_bands[1]
            ));
        }

        for threshold in self.scoring_bands {
            if !(0.0..=1.0).contains(&threshold) {
                warnings.push(format!("scoring_bands threshold {threshold} is outside the unit interval"));
            }
        }

        if let Err(e) = Url::parse(&self.tracking_uri) {
            warnings.push(format!("tracking_uri '{}' is not a valid URL: {e}", self.tracking_uri));
        }

        if self.linkedin_file.is_empty() {
            warnings.push("linkedin_file must not be empty".to_string());
        }

        if self.blogs_file.is_empty() {
            warnings.push("blogs_file must not be empty".to_string());
        }

        if self.experiment_name.is_empty() {
            warnings.push("experiment_name must not be empty".to_string());
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        serde_yaml::from_str(DEFAULT_CONFIG_YAML).expect("default_config.yml should be valid YAML that deserializes to Config")
    }
}
