//! Best-effort experiment tracking
//!
//! Everything in this module degrades gracefully: an unreachable or failing
//! tracking server produces console warnings, never a failed invocation. The
//! [`best_effort`] wrapper is the single place that failure policy lives;
//! callers route every sink operation through it.

mod mlflow;

pub use mlflow::MlflowSink;

use crate::Result;
use crate::metrics::Scorecard;
use camino::Utf8Path;
use std::collections::BTreeMap;

/// Destination for run data.
#[expect(async_fn_in_trait, reason = "single-threaded CLI, no Send bound needed")]
pub trait MetricSink {
    async fn record_metric(&self, name: &str, value: f64) -> Result<()>;
    async fn record_parameters(&self, params: &BTreeMap<String, String>) -> Result<()>;
    async fn record_artifact(&self, path: &Utf8Path) -> Result<()>;
}

/// Run one tracking operation, degrading failure to a console warning.
///
/// Returns `None` on failure so callers can skip dependent work without
/// propagating the error.
pub async fn best_effort<T>(what: &str, operation: impl Future<Output = Result<T>>) -> Option<T> {
    match operation.await {
        Ok(value) => Some(value),
        Err(e) => {
            println!("Warning: {what} failed: {e}");
            None
        }
    }
}

/// Emit every scorecard metric plus the overall rollups to a sink.
///
/// Individual failures are reported and do not stop the remaining emissions.
pub async fn emit_scorecard(sink: &impl MetricSink, card: &Scorecard) {
    for (name, value) in card.wire_metrics() {
        _ = best_effort(&format!("recording {name}"), sink.record_metric(&name, value)).await;
    }
    for (name, value) in card.rollups() {
        _ = best_effort(&format!("recording {name}"), sink.record_metric(name, value)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::ContentFacts;
    use ohno::app_err;
    use std::cell::RefCell;

    struct RecordingSink {
        metrics: RefCell<Vec<(String, f64)>>,
        fail_on: Option<&'static str>,
    }

    impl MetricSink for RecordingSink {
        async fn record_metric(&self, name: &str, value: f64) -> Result<()> {
            if self.fail_on == Some(name) {
                return Err(app_err!("injected failure"));
            }
            self.metrics.borrow_mut().push((name.to_string(), value));
            Ok(())
        }

        async fn record_parameters(&self, _params: &BTreeMap<String, String>) -> Result<()> {
            Ok(())
        }

        async fn record_artifact(&self, _path: &Utf8Path) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_best_effort_swallows_errors() {
        let failed: Option<()> = best_effort("doomed operation", async { Err(app_err!("boom")) }).await;
        assert!(failed.is_none());

        let succeeded = best_effort("fine operation", async { Ok(42) }).await;
        assert_eq!(succeeded, Some(42));
    }

    #[tokio::test]
    async fn test_emit_scorecard_sends_everything() {
        let sink = RecordingSink { metrics: RefCell::new(Vec::new()), fail_on: None };
        let card = Scorecard::new(&ContentFacts::default());
        emit_scorecard(&sink, &card).await;

        let metrics = sink.metrics.borrow();
        assert_eq!(metrics.len(), 32);
        assert!(metrics.iter().any(|(name, _)| name == "overall_engagement_score"));
    }

    #[tokio::test]
    async fn test_emit_scorecard_continues_past_failures() {
        let sink = RecordingSink {
            metrics: RefCell::new(Vec::new()),
            fail_on: Some("quality_metrics_technical_depth_score"),
        };
        let card = Scorecard::new(&ContentFacts::default());
        emit_scorecard(&sink, &card).await;

        let metrics = sink.metrics.borrow();
        assert_eq!(metrics.len(), 31);
        assert!(metrics.iter().any(|(name, _)| name == "overall_content_quality_score"));
    }
}
