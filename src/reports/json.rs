use crate::Result;
use crate::metrics::{MetricCategory, Scorecard};
use camino::Utf8Path;
use chrono::{DateTime, Utc};
use ohno::IntoAppError;
use serde_json::{Map, Value, json};
use std::fs;
use strum::IntoEnumIterator;

const DASHBOARD_VERSION: &str = "1.0";

/// Assemble the machine-readable dashboard document.
///
/// `experiment_summary` is passed through opaquely; when the tracking server
/// was unreachable it is an explanatory string instead of an object.
#[must_use]
pub fn build_report(card: &Scorecard, experiment_summary: &Value, timestamp: DateTime<Utc>) -> Value {
    let mut content_metrics = Map::new();
    for category in MetricCategory::iter() {
        let mut section = Map::new();
        for metric in card.in_category(category) {
            _ = section.insert(metric.name().to_string(), metric.value.into());
        }
        _ = content_metrics.insert(category.to_string(), Value::Object(section));
    }

    json!({
        "timestamp": timestamp.to_rfc3339(),
        "content_metrics": content_metrics,
        "experiment_summary": experiment_summary,
        "dashboard_version": DASHBOARD_VERSION,
    })
}

/// Write the dashboard document, replacing any previous report.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_report(report: &Value, path: &Utf8Path) -> Result<()> {
    let text = serde_json::to_string_pretty(report).into_app_err("serializing dashboard report")?;
    fs::write(path, text).into_app_err_with(|| format!("writing dashboard report to {path}"))?;
    Ok(())
}
