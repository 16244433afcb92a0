use super::common::{Common, CommonArgs};
use chrono::Utc;
use clap::Parser;
use content_rank::Result;
use content_rank::metrics::Scorecard;
use content_rank::track::{self, MetricSink, MlflowSink};
use ohno::{IntoAppError, app_err, bail};
use std::collections::BTreeMap;
use std::time::Instant;

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Parameter recorded with the tracking run (repeatable)
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Content generation command to execute
    #[arg(value_name = "COMMAND", required = true, trailing_var_arg = true)]
    pub command: Vec<String>,
}

pub async fn run_pipeline(args: &RunArgs) -> Result<()> {
    let common = Common::new(&args.common)?;

    let sink = track::best_effort("opening tracking run", MlflowSink::open(&common.config, &common.config.run_name)).await;

    if let Some(sink) = &sink {
        if !args.params.is_empty() {
            let params: BTreeMap<String, String> = args.params.iter().cloned().collect();
            _ = track::best_effort("recording run parameters", sink.record_parameters(&params)).await;
        }
    }

    let started = Instant::now();
    let outcome = execute(&args.command, &common).await;
    let elapsed_secs = started.elapsed().as_secs_f64();

    if let Err(e) = outcome {
        if let Some(sink) = sink {
            record_execution_metrics(&sink, false, elapsed_secs).await;
            _ = track::best_effort("closing tracking run", sink.close()).await;
        }
        return Err(e);
    }

    println!("Content generation finished in {:.1} minutes", elapsed_secs / 60.0);

    let facts = common.gather_facts();
    let card = Scorecard::new(&facts);

    if let Some(sink) = sink {
        record_execution_metrics(&sink, true, elapsed_secs).await;
        track::emit_scorecard(&sink, &card).await;
        record_artifacts(&sink, &common).await;
        _ = track::best_effort("closing tracking run", sink.close()).await;
    }

    Ok(())
}

async fn execute(command: &[String], common: &Common) -> Result<()> {
    let (program, rest) = command.split_first().ok_or_else(|| app_err!("no command given"))?;

    let status = tokio::process::Command::new(program)
        .args(rest)
        .current_dir(&common.base_dir)
        .status()
        .await
        .into_app_err_with(|| format!("launching {program}"))?;

    if !status.success() {
        bail!("content generation command exited with {status}");
    }
    Ok(())
}

#[expect(clippy::cast_precision_loss, reason = "epoch seconds are far below f64 precision limits")]
async fn record_execution_metrics(sink: &MlflowSink, successful: bool, elapsed_secs: f64) {
    let metrics = [
        ("execution_successful", if successful { 1.0 } else { 0.0 }),
        ("execution_time_minutes", elapsed_secs / 60.0),
        ("total_execution_time_seconds", elapsed_secs),
        ("run_timestamp", Utc::now().timestamp() as f64),
    ];
    for (name, value) in metrics {
        _ = track::best_effort(&format!("recording {name}"), sink.record_metric(name, value)).await;
    }
}

/// Upload the configured artifact files; missing files are skipped.
async fn record_artifacts(sink: &MlflowSink, common: &Common) {
    for name in &common.config.artifact_paths {
        let path = common.base_dir.join(name);
        if !path.exists() {
            log::debug!("artifact {path} not present, skipping");
            continue;
        }
        _ = track::best_effort(&format!("uploading {name}"), sink.record_artifact(&path)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(parse_key_value("topic=rag").unwrap(), ("topic".to_string(), "rag".to_string()));
        assert_eq!(parse_key_value("a=b=c").unwrap(), ("a".to_string(), "b=c".to_string()));
        assert!(parse_key_value("no-separator").is_err());
    }
}
