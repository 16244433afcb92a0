//! A tool to score generated marketing content and publish the results to an
//! experiment tracking server.
//!
//! # Overview
//!
//! `content-rank` inspects the output files of a content generation pipeline
//! (LinkedIn-style posts and technical blog articles), computes a set of
//! heuristic quality, business impact, research focus, and engagement scores,
//! and renders them as color-coded console reports. Scores and raw counts can
//! optionally be recorded to an MLflow-compatible tracking server so runs can
//! be compared over time.
//!
//! # Installation
//!
//! ```bash
//! cargo install content-rank
//! ```
//!
//! # Quick Start
//!
//! Score the content files in the current directory:
//!
//! ```bash
//! content-rank analyze
//! ```
//!
//! This displays every metric with a color-coded percentage plus the three
//! overall rollup scores.
//!
//! # Basic Usage
//!
//! ## Analyzing Content
//!
//! **Score the current directory:**
//! ```bash
//! content-rank analyze
//! ```
//!
//! **Score a different directory:**
//! ```bash
//! content-rank analyze --base-dir path/to/output
//! ```
//!
//! **Compact view (per-category averages and rollups only):**
//! ```bash
//! content-rank analyze --short
//! ```
//!
//! **Record the scores to the tracking server:**
//! ```bash
//! content-rank analyze --track
//! ```
//!
//! ## Dashboard and Reports
//!
//! Render the full dashboard and save a JSON report:
//!
//! ```bash
//! content-rank report
//! ```
//!
//! The dashboard includes an executive summary, content statistics, quality
//! and business impact assessments, recent tracking runs, and actionable
//! recommendations. The JSON report is written to the configured report file
//! (default `metrics_dashboard_report.json`) and overwrites any previous
//! report.
//!
//! ## Running a Generation Pipeline
//!
//! Wrap an arbitrary content generation command so that its execution time,
//! outcome, parameters, and the resulting content scores are all recorded as
//! a single tracking run:
//!
//! ```bash
//! content-rank run --track --param topic=rag -- python generate.py
//! ```
//!
//! The command runs with the base directory as its working directory. If it
//! exits non-zero, the run is recorded as unsuccessful and `content-rank`
//! fails with the same observation.
//!
//! ## Content Advice
//!
//! Review individual posts for engagement potential:
//!
//! ```bash
//! content-rank advise
//! content-rank advise --file drafts/posts.md
//! ```
//!
//! Each post gets an engagement score out of 10, hashtag suggestions, and
//! concrete optimization tips.
//!
//! Generate image prompts for a topic:
//!
//! ```bash
//! content-rank advise --topic "RAG retrieval pipelines" --visual "diagram,flowchart"
//! content-rank advise --topic "LLM serving" --content-type blog
//! ```
//!
//! # CI/CD Integration
//!
//! ## Quality Gates
//!
//! Fail CI builds when any overall score lands in the lowest scoring band:
//!
//! ```bash
//! content-rank analyze --check
//! ```
//!
//! Exit codes:
//! - `0`: All overall scores meet the minimum quality standard
//! - `1`: One or more overall scores are in the lowest scoring band
//!
//! **Example CI workflow:**
//! ```yaml
//! - name: Check Content Quality
//!   run: content-rank analyze --check --base-dir generated/
//! ```
//!
//! ## Validation Only
//!
//! Validate configuration without analyzing content:
//!
//! ```bash
//! content-rank validate
//! content-rank validate --config custom.yml
//! ```
//!
//! # Configuration
//!
//! ## Using Configuration Files
//!
//! **Specify a config file:**
//! ```bash
//! content-rank analyze --config content-rank.yml
//! ```
//!
//! **Default search locations (relative to the base directory):**
//! - `content-rank.toml`
//! - `content-rank.yml`
//! - `content-rank.yaml`
//! - `content-rank.json`
//!
//! **Generate default config:**
//! ```bash
//! content-rank init content-rank.yml
//! ```
//!
//! ## Configuration Structure
//!
//! All configuration fields are optional; unspecified fields use sensible
//! defaults.
//!
//! ```yaml
//! # Content files evaluated relative to the base directory
//! linkedin_file: research_linkedin_posts.md
//! blogs_file: research_blogs.md
//!
//! # Files uploaded as run artifacts by the run subcommand
//! artifact_paths:
//!   - research_linkedin_posts.md
//!   - research_blogs.md
//!
//! # Where the report subcommand writes its JSON report
//! report_file: metrics_dashboard_report.json
//!
//! # Experiment tracking server
//! tracking_uri: http://localhost:5001
//! experiment_name: ai-ml-research-scientist-marketing
//! run_name: deep_technical_analysis
//!
//! # Score thresholds for color coding
//! scoring_bands: [0.5, 0.8]   # Red: <0.5, Orange: 0.5-0.79, Green: >=0.8
//! ```
//!
//! ## Color Ratings
//!
//! Scores are color-coded based on thresholds (configurable):
//!
//! - **Green (>=0.8)**: Meets the quality target
//! - **Orange (0.5-0.79)**: Acceptable with room for improvement
//! - **Red (<0.5)**: Below standard, quality gate fails
//!
//! # Experiment Tracking
//!
//! The `--track` flag of `analyze` and the `run` subcommand record results to
//! an MLflow-compatible REST server at the configured `tracking_uri`. The
//! experiment named by `experiment_name` is created on first use. Each
//! invocation creates one run holding all 29 metrics, the three rollup
//! scores, and (for `run`) the execution metrics and content artifacts.
//!
//! Tracking is always best-effort: if the server is unreachable, a warning is
//! printed and the analysis completes normally.
//!
//! # Troubleshooting
//!
//! ## All Scores Are Zero
//!
//! The content files were not found. Check that `--base-dir` points at the
//! pipeline output directory and that `linkedin_file` and `blogs_file` match
//! the generated file names.
//!
//! ## Tracking Warnings
//!
//! `Warning: opening tracking run failed` means the server at `tracking_uri`
//! did not respond. The analysis still completes; start the tracking server
//! or fix the URI to record results.
//!
//! ## Configuration Warnings
//!
//! Validation warnings indicate non-optimal config but don't prevent
//! execution. Use `validate` to check a configuration before running a full
//! analysis.

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};
use content_rank::Result;

mod commands;

use crate::commands::{
    AdviseArgs, AnalyzeArgs, InitArgs, ReportArgs, RunArgs, ValidateArgs, advise_content, analyze_content, init_config,
    report_dashboard, run_pipeline, validate_config,
};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "content-rank", version, about)]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score generated content and print the metric report
    Analyze(AnalyzeArgs),
    /// Render the full dashboard and save a JSON report
    Report(ReportArgs),
    /// Execute a content generation command as a tracked run
    Run(RunArgs),
    /// Review posts or generate visualization prompts
    Advise(AdviseArgs),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Analyze(analyze_args) => analyze_content(analyze_args).await,
        Command::Report(report_args) => report_dashboard(report_args).await,
        Command::Run(run_args) => run_pipeline(run_args).await,
        Command::Advise(advise_args) => advise_content(advise_args),
        Command::Init(init_args) => init_config(init_args),
        Command::Validate(validate_args) => validate_config(validate_args),
    }
}
