use super::common::{Common, CommonArgs};
use clap::Parser;
use content_rank::Result;
use content_rank::config::Config;
use content_rank::metrics::Scorecard;
use content_rank::reports;
use content_rank::track::{self, MlflowSink};
use ohno::bail;

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Show only a single line per category
    #[arg(long)]
    pub short: bool,

    /// Exit with failure if any overall score is in the lowest scoring band
    #[arg(long)]
    pub check: bool,

    /// Record all metrics to the configured tracking server
    #[arg(long)]
    pub track: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn analyze_content(args: &AnalyzeArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let facts = common.gather_facts();
    let card = Scorecard::new(&facts);

    let mut console_output = String::new();
    reports::scores(&card, &common.config, common.color, args.short, &mut console_output)?;
    print!("{console_output}");

    if args.track {
        if let Some(sink) =
            track::best_effort("opening tracking run", MlflowSink::open(&common.config, &common.config.run_name)).await
        {
            track::emit_scorecard(&sink, &card).await;
            _ = track::best_effort("closing tracking run", sink.close()).await;
        }
    }

    if args.check {
        check_quality_gate(&card, &common.config)?;
    }

    Ok(())
}

/// Fail when any overall rollup falls in the lowest scoring band.
fn check_quality_gate(card: &Scorecard, config: &Config) -> Result<()> {
    let failing: Vec<(&str, f64)> = card
        .rollups()
        .into_iter()
        .filter(|(_, score)| matches!(config.color_index_for_score(*score), Some(0)))
        .collect();

    if failing.is_empty() {
        println!("\n✓ Quality Check: all overall scores meet minimum quality standards");
        Ok(())
    } else {
        eprintln!("\n✗ Quality Check: {} overall score(s) are in the lowest scoring band:", failing.len());
        for (name, score) in &failing {
            eprintln!("  - {name} ({:.1}%)", score * 100.0);
        }

        bail!("quality check failed: {} overall score(s) are in the lowest scoring band", failing.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content_rank::facts::{BlogFacts, ContentFacts, PostFacts};

    #[test]
    fn test_quality_gate_passes_for_healthy_content() {
        let facts = ContentFacts {
            posts: PostFacts {
                generated: 6,
                total_words: 600,
                avg_length: 100.0,
                with_hashtags: 9,
                with_visualizations: 2,
                technical_depth: 0.9,
            },
            blogs: BlogFacts {
                generated: 2,
                total_words: 2000,
                avg_length: 1000.0,
                with_code: 2,
                with_diagrams: 1,
                technical_depth: 0.9,
            },
        };
        let card = Scorecard::new(&facts);
        assert!(check_quality_gate(&card, &Config::default()).is_ok());
    }

    #[test]
    fn test_quality_gate_fails_for_empty_content() {
        // With no content, the quality rollup is 0.0 and lands in band 0
        let card = Scorecard::new(&ContentFacts::default());
        assert!(check_quality_gate(&card, &Config::default()).is_err());
    }
}
