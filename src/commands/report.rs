use super::common::{Common, CommonArgs};
use chrono::Utc;
use clap::Parser;
use content_rank::Result;
use content_rank::metrics::Scorecard;
use content_rank::reports;
use content_rank::track::{self, MlflowSink};
use serde_json::Value;

#[derive(Parser, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn report_dashboard(args: &ReportArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let facts = common.gather_facts();
    let card = Scorecard::new(&facts);

    // An unreachable tracking server degrades to an explanatory string in
    // both the console dashboard and the saved report.
    let experiment_summary =
        track::best_effort("fetching experiment summary", MlflowSink::experiment_summary_for(&common.config))
            .await
            .unwrap_or_else(|| Value::String("tracking server not available".to_string()));

    let mut console_output = String::new();
    reports::dashboard(&facts, &card, &experiment_summary, &common.config, common.color, &mut console_output)?;
    print!("{console_output}");

    let report = reports::build_report(&card, &experiment_summary, Utc::now());
    let report_path = common.base_dir.join(&common.config.report_file);
    reports::write_report(&report, &report_path)?;
    println!("Detailed report saved to: {report_path}");

    Ok(())
}
