//! MLflow-compatible REST tracking client
//!
//! Speaks the `api/2.0/mlflow` surface: experiment lookup/creation, run
//! lifecycle, metric/parameter logging, artifact upload via the
//! `mlflow-artifacts` route, and run search for the experiment summary.

use super::MetricSink;
use crate::Result;
use crate::config::Config;
use camino::Utf8Path;
use chrono::{DateTime, Utc};
use ohno::{IntoAppError, app_err};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;
use std::fs;

#[derive(Debug, Deserialize)]
struct GetExperimentResponse {
    experiment: ExperimentInfo,
}

#[derive(Debug, Deserialize)]
struct ExperimentInfo {
    experiment_id: String,
}

#[derive(Debug, Deserialize)]
struct CreateExperimentResponse {
    experiment_id: String,
}

#[derive(Debug, Deserialize)]
struct CreateRunResponse {
    run: RunRecord,
}

#[derive(Debug, Deserialize)]
struct RunRecord {
    info: RunInfo,
    #[serde(default)]
    data: RunData,
}

#[derive(Debug, Deserialize)]
struct RunInfo {
    run_id: String,
    #[serde(default)]
    start_time: Option<i64>,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RunData {
    #[serde(default)]
    metrics: Vec<KeyedMetric>,
    #[serde(default)]
    params: Vec<KeyedParam>,
    #[serde(default)]
    tags: Vec<KeyedParam>,
}

#[derive(Debug, Deserialize)]
struct KeyedMetric {
    key: String,
    value: f64,
}

#[derive(Debug, Deserialize)]
struct KeyedParam {
    key: String,
    value: String,
}

#[derive(Debug, Default, Deserialize)]
struct SearchRunsResponse {
    #[serde(default)]
    runs: Vec<RunRecord>,
}

/// A tracking sink bound to one open run on an MLflow-compatible server.
#[derive(Debug)]
pub struct MlflowSink {
    client: reqwest::Client,
    base: String,
    experiment_name: String,
    experiment_id: String,
    run_id: String,
}

impl MlflowSink {
    /// Connect to the configured tracking server and open a run.
    ///
    /// The experiment is created when it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the server is unreachable or rejects a request.
    pub async fn open(config: &Config, run_name: &str) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent("content-rank").build()?;
        let base = config.tracking_uri.trim_end_matches('/').to_string();

        let experiment_id = ensure_experiment(&client, &base, &config.experiment_name).await?;

        let url = api_url(&base, "runs/create");
        let body = json!({
            "experiment_id": experiment_id,
            "run_name": run_name,
            "start_time": Utc::now().timestamp_millis(),
        });
        let response: CreateRunResponse = post_json(&client, &url, &body).await?;

        Ok(Self {
            client,
            base,
            experiment_name: config.experiment_name.clone(),
            experiment_id,
            run_id: response.run.info.run_id,
        })
    }

    #[must_use]
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Mark the open run as finished.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the update.
    pub async fn close(self) -> Result<()> {
        let url = api_url(&self.base, "runs/update");
        let body = json!({
            "run_id": self.run_id,
            "status": "FINISHED",
            "end_time": Utc::now().timestamp_millis(),
        });
        post_expect_success(&self.client, &url, &body).await
    }

    /// Summarize all runs of the bound experiment, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the search request fails.
    pub async fn experiment_summary(&self) -> Result<Value> {
        search_summary(&self.client, &self.base, &self.experiment_name, &self.experiment_id).await
    }

    /// Summarize the configured experiment without opening a run.
    ///
    /// # Errors
    ///
    /// Returns an error if the server is unreachable or rejects a request.
    pub async fn experiment_summary_for(config: &Config) -> Result<Value> {
        let client = reqwest::Client::builder().user_agent("content-rank").build()?;
        let base = config.tracking_uri.trim_end_matches('/').to_string();
        let experiment_id = ensure_experiment(&client, &base, &config.experiment_name).await?;
        search_summary(&client, &base, &config.experiment_name, &experiment_id).await
    }
}

async fn search_summary(client: &reqwest::Client, base: &str, experiment_name: &str, experiment_id: &str) -> Result<Value> {
    let url = api_url(base, "runs/search");
    let body = json!({
        "experiment_ids": [experiment_id],
        "order_by": ["attributes.start_time DESC"],
    });
    let response: SearchRunsResponse = post_json(client, &url, &body).await?;

    let runs: Vec<Value> = response.runs.iter().map(summarize_run).collect();
    Ok(json!({
        "total_runs": runs.len(),
        "experiment_name": experiment_name,
        "runs": runs,
    }))
}

impl MetricSink for MlflowSink {
    async fn record_metric(&self, name: &str, value: f64) -> Result<()> {
        let url = api_url(&self.base, "runs/log-metric");
        let body = json!({
            "run_id": self.run_id,
            "key": name,
            "value": value,
            "timestamp": Utc::now().timestamp_millis(),
            "step": 0,
        });
        post_expect_success(&self.client, &url, &body).await
    }

    async fn record_parameters(&self, params: &BTreeMap<String, String>) -> Result<()> {
        let url = api_url(&self.base, "runs/log-parameter");
        for (key, value) in params {
            let body = json!({
                "run_id": self.run_id,
                "key": key,
                "value": value,
            });
            post_expect_success(&self.client, &url, &body).await?;
        }
        Ok(())
    }

    async fn record_artifact(&self, path: &Utf8Path) -> Result<()> {
        let file_name = path.file_name().ok_or_else(|| app_err!("artifact path {path} has no file name"))?;
        let bytes = fs::read(path).into_app_err_with(|| format!("reading artifact {path}"))?;

        let url = format!(
            "{}/api/2.0/mlflow-artifacts/artifacts/{}/{}/artifacts/{file_name}",
            self.base, self.experiment_id, self.run_id
        );
        let response = self
            .client
            .put(&url)
            .body(bytes)
            .send()
            .await
            .into_app_err_with(|| format!("uploading artifact {file_name}"))?;
        if !response.status().is_success() {
            return Err(app_err!("tracking server returned {} uploading {file_name}", response.status()));
        }
        Ok(())
    }
}

fn api_url(base: &str, path: &str) -> String {
    format!("{base}/api/2.0/mlflow/{path}")
}

async fn ensure_experiment(client: &reqwest::Client, base: &str, name: &str) -> Result<String> {
    let url = api_url(base, "experiments/get-by-name");
    let response = client
        .get(&url)
        .query(&[("experiment_name", name)])
        .send()
        .await
        .into_app_err_with(|| format!("querying experiment {name}"))?;

    if response.status().is_success() {
        let found: GetExperimentResponse = response.json().await.into_app_err("parsing experiment lookup response")?;
        return Ok(found.experiment.experiment_id);
    }

    if response.status() != reqwest::StatusCode::NOT_FOUND {
        return Err(app_err!("tracking server returned {} looking up experiment {name}", response.status()));
    }

    let url = api_url(base, "experiments/create");
    let created: CreateExperimentResponse = post_json(client, &url, &json!({ "name": name })).await?;
    Ok(created.experiment_id)
}

async fn post_expect_success(client: &reqwest::Client, url: &str, body: &Value) -> Result<()> {
    let response = client
        .post(url)
        .json(body)
        .send()
        .await
        .into_app_err_with(|| format!("posting to {url}"))?;
    if !response.status().is_success() {
        return Err(app_err!("tracking server returned {} for {url}", response.status()));
    }
    Ok(())
}

async fn post_json<T: for<'de> Deserialize<'de>>(client: &reqwest::Client, url: &str, body: &Value) -> Result<T> {
    let response = client
        .post(url)
        .json(body)
        .send()
        .await
        .into_app_err_with(|| format!("posting to {url}"))?;
    if !response.status().is_success() {
        return Err(app_err!("tracking server returned {} for {url}", response.status()));
    }
    response.json().await.into_app_err_with(|| format!("parsing response from {url}"))
}

fn summarize_run(run: &RunRecord) -> Value {
    let run_name = run
        .data
        .tags
        .iter()
        .find(|tag| tag.key == "mlflow.runName")
        .map_or("Unknown", |tag| tag.value.as_str());

    let start_time = run.info.start_time.and_then(DateTime::<Utc>::from_timestamp_millis).map_or_else(
        || "Unknown".to_string(),
        |time| time.format("%Y-%m-%d %H:%M:%S").to_string(),
    );

    let metrics: Map<String, Value> = run
        .data
        .metrics
        .iter()
        .map(|metric| (metric.key.clone(), Value::from(metric.value)))
        .collect();
    let params: Map<String, Value> = run
        .data
        .params
        .iter()
        .map(|param| (param.key.clone(), Value::from(param.value.clone())))
        .collect();

    json!({
        "run_id": run.info.run_id,
        "run_name": run_name,
        "start_time": start_time,
        "status": run.info.status.as_deref().unwrap_or("UNKNOWN"),
        "metrics": metrics,
        "params": params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn server_with_run() -> MockServer {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/2.0/mlflow/experiments/get-by-name"))
            .and(query_param("experiment_name", "ai-ml-research-scientist-marketing"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "experiment": {"experiment_id": "7", "name": "ai-ml-research-scientist-marketing"}
            })))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/2.0/mlflow/runs/create"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "run": {"info": {"run_id": "abc123", "status": "RUNNING"}}
            })))
            .mount(&server)
            .await;

        server
    }

    fn config_for(server: &MockServer) -> Config {
        let mut config = Config::default();
        config.tracking_uri = server.uri();
        config
    }

    #[tokio::test]
    async fn test_open_finds_existing_experiment() {
        let server = server_with_run().await;
        let sink = MlflowSink::open(&config_for(&server), "test-run").await.unwrap();
        assert_eq!(sink.run_id(), "abc123");
        assert_eq!(sink.experiment_id, "7");
    }

    #[tokio::test]
    async fn test_open_creates_missing_experiment() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/2.0/mlflow/experiments/get-by-name"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error_code": "RESOURCE_DOES_NOT_EXIST"
            })))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/2.0/mlflow/experiments/create"))
            .and(body_partial_json(json!({"name": "ai-ml-research-scientist-marketing"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"experiment_id": "12"})))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/2.0/mlflow/runs/create"))
            .and(body_partial_json(json!({"experiment_id": "12"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "run": {"info": {"run_id": "xyz", "status": "RUNNING"}}
            })))
            .mount(&server)
            .await;

        let sink = MlflowSink::open(&config_for(&server), "test-run").await.unwrap();
        assert_eq!(sink.run_id(), "xyz");
    }

    #[tokio::test]
    async fn test_record_metric_posts_expected_body() {
        let server = server_with_run().await;

        Mock::given(method("POST"))
            .and(path("/api/2.0/mlflow/runs/log-metric"))
            .and(body_partial_json(json!({"run_id": "abc123", "key": "overall_engagement_score", "value": 0.85, "step": 0})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let sink = MlflowSink::open(&config_for(&server), "test-run").await.unwrap();
        sink.record_metric("overall_engagement_score", 0.85).await.unwrap();
    }

    #[tokio::test]
    async fn test_record_metric_surfaces_server_errors() {
        let server = server_with_run().await;

        Mock::given(method("POST"))
            .and(path("/api/2.0/mlflow/runs/log-metric"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let sink = MlflowSink::open(&config_for(&server), "test-run").await.unwrap();
        assert!(sink.record_metric("x", 1.0).await.is_err());
    }

    #[tokio::test]
    async fn test_record_parameters_sends_each_pair() {
        let server = server_with_run().await;

        Mock::given(method("POST"))
            .and(path("/api/2.0/mlflow/runs/log-parameter"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(2)
            .mount(&server)
            .await;

        let sink = MlflowSink::open(&config_for(&server), "test-run").await.unwrap();
        let params: BTreeMap<String, String> =
            [("topic".to_string(), "rag".to_string()), ("audience".to_string(), "ml".to_string())].into();
        sink.record_parameters(&params).await.unwrap();
    }

    #[tokio::test]
    async fn test_record_artifact_uploads_file() {
        let server = server_with_run().await;

        Mock::given(method("PUT"))
            .and(path("/api/2.0/mlflow-artifacts/artifacts/7/abc123/artifacts/notes.md"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let file = Utf8Path::from_path(dir.path()).unwrap().join("notes.md");
        fs::write(&file, "artifact body").unwrap();

        let sink = MlflowSink::open(&config_for(&server), "test-run").await.unwrap();
        sink.record_artifact(&file).await.unwrap();
    }

    #[tokio::test]
    async fn test_experiment_summary_shape() {
        let server = server_with_run().await;

        Mock::given(method("POST"))
            .and(path("/api/2.0/mlflow/runs/search"))
            .and(body_partial_json(json!({"experiment_ids": ["7"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "runs": [{
                    "info": {"run_id": "r1", "status": "FINISHED", "start_time": 1_700_000_000_000_i64},
                    "data": {
                        "metrics": [{"key": "overall_engagement_score", "value": 0.8, "timestamp": 1, "step": 0}],
                        "params": [{"key": "topic", "value": "rag"}],
                        "tags": [{"key": "mlflow.runName", "value": "deep_technical_analysis"}]
                    }
                }]
            })))
            .mount(&server)
            .await;

        let sink = MlflowSink::open(&config_for(&server), "test-run").await.unwrap();
        let summary = sink.experiment_summary().await.unwrap();

        assert_eq!(summary["total_runs"], 1);
        assert_eq!(summary["experiment_name"], "ai-ml-research-scientist-marketing");
        assert_eq!(summary["runs"][0]["run_name"], "deep_technical_analysis");
        assert_eq!(summary["runs"][0]["status"], "FINISHED");
        assert_eq!(summary["runs"][0]["metrics"]["overall_engagement_score"], 0.8);
        assert_eq!(summary["runs"][0]["params"]["topic"], "rag");
        assert!(summary["runs"][0]["start_time"].as_str().unwrap().starts_with("2023-11-1"));
    }

    #[tokio::test]
    async fn test_experiment_summary_without_run() {
        let server = server_with_run().await;

        Mock::given(method("POST"))
            .and(path("/api/2.0/mlflow/runs/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"runs": []})))
            .mount(&server)
            .await;

        let summary = MlflowSink::experiment_summary_for(&config_for(&server)).await.unwrap();
        assert_eq!(summary["total_runs"], 0);
        assert_eq!(summary["runs"], json!([]));
    }

    #[tokio::test]
    async fn test_close_marks_run_finished() {
        let server = server_with_run().await;

        Mock::given(method("POST"))
            .and(path("/api/2.0/mlflow/runs/update"))
            .and(body_partial_json(json!({"run_id": "abc123", "status": "FINISHED"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let sink = MlflowSink::open(&config_for(&server), "test-run").await.unwrap();
        sink.close().await.unwrap();
    }
}
