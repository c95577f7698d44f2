use fraudlens_core::{AnalysisError, AnalysisResult, AnalysisResultStore, ClientLimits, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Raw wire shape of the analysis endpoint. `data` stays untyped until the
/// required array fields have been checked, so a half-shaped payload never
/// reaches the store.
#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

/// Drives the upload -> analyze -> accept/reject flow.
///
/// One submission may be in flight at a time; the manager itself rejects
/// re-entrant calls rather than relying on the UI to disable its trigger.
/// The store is written exactly once per submission, on success, as a whole
/// result; every failure path leaves it at the empty baseline established
/// when the submission began.
pub struct RequestLifecycleManager {
    client: Client,
    limits: ClientLimits,
    store: Arc<AnalysisResultStore>,
    in_flight: AtomicBool,
}

struct FlightGuard<'a>(&'a AtomicBool);

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl RequestLifecycleManager {
    pub fn new(limits: ClientLimits, store: Arc<AnalysisResultStore>) -> Result<Self> {
        let client = Client::builder()
            .user_agent("FraudLens/0.1")
            .build()
            .map_err(|e| AnalysisError::Network(e.to_string()))?;
        Ok(Self {
            client,
            limits,
            store,
            in_flight: AtomicBool::new(false),
        })
    }

    pub fn store(&self) -> &Arc<AnalysisResultStore> {
        &self.store
    }

    /// Submit a CSV for analysis. On success the accepted result has already
    /// been swapped into the store and is returned.
    pub async fn submit(&self, path: &Path) -> Result<Arc<AnalysisResult>> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(AnalysisError::Validation(
                "an analysis is already in flight".to_string(),
            ));
        }
        let _guard = FlightGuard(&self.in_flight);

        self.validate_file(path)?;

        // Empty baseline before any I/O: a failed attempt must never leave a
        // mix of stale and partial data visible.
        self.store.clear();

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.csv".to_string());
        let bytes = tokio::fs::read(path).await?;
        debug!(file = %filename, size = bytes.len(), "uploading file for analysis");

        let part = Part::bytes(bytes)
            .file_name(filename)
            .mime_str("text/csv")
            .map_err(|e| AnalysisError::Network(e.to_string()))?;
        let form = Form::new().part("file", part);
        let request = self.client.post(&self.limits.endpoint).multipart(form).send();

        // Client-side deadline; elapsing drops the in-flight request, which
        // cancels the transport. The cleared store stays untouched.
        let response =
            match tokio::time::timeout(self.limits.request_timeout(), request).await {
                Err(_) => {
                    warn!(
                        timeout_secs = self.limits.request_timeout_secs,
                        "analysis request timed out"
                    );
                    return Err(AnalysisError::Timeout(self.limits.request_timeout_secs));
                }
                Ok(Err(e)) => {
                    warn!(error = %e, "analysis request failed at transport level");
                    return Err(AnalysisError::Network(e.to_string()));
                }
                Ok(Ok(response)) => response,
            };

        let http_status = response.status();
        let body: AnalyzeResponse = response
            .json()
            .await
            .map_err(|_| AnalysisError::Server("invalid response".to_string()))?;

        // A non-2xx response is a failure no matter what the body claims;
        // the body's message is still the better thing to surface.
        if !http_status.is_success() {
            let message = body.message.unwrap_or_else(|| {
                format!("analysis endpoint returned HTTP {}", http_status.as_u16())
            });
            warn!(status = %http_status, message = %message, "analysis endpoint rejected the request");
            return Err(AnalysisError::Server(message));
        }

        if body.status != "ok" {
            let message = body
                .message
                .unwrap_or_else(|| "analysis failed".to_string());
            warn!(message = %message, "analysis endpoint reported an error");
            return Err(AnalysisError::Server(message));
        }

        let result = Self::validate_shape(body.data)?;
        let accepted = self.store.replace(result);
        info!(
            nodes = accepted.nodes.len(),
            edges = accepted.edges.len(),
            rings = accepted.fraud_rings.len(),
            "analysis result accepted"
        );
        Ok(accepted)
    }

    fn validate_file(&self, path: &Path) -> Result<()> {
        let is_csv = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if !is_csv {
            return Err(AnalysisError::Validation(
                "only .csv files are accepted".to_string(),
            ));
        }
        let metadata = std::fs::metadata(path).map_err(|_| {
            AnalysisError::Validation(format!("file not found: {}", path.display()))
        })?;
        if metadata.len() > self.limits.max_file_bytes {
            return Err(AnalysisError::Validation(format!(
                "file exceeds the {} byte upload limit",
                self.limits.max_file_bytes
            )));
        }
        Ok(())
    }

    /// A successful status still requires the payload to carry `nodes` and
    /// `edges` arrays before it is trusted as an AnalysisResult.
    fn validate_shape(data: Option<serde_json::Value>) -> Result<AnalysisResult> {
        let data = data.ok_or_else(|| {
            AnalysisError::MalformedResponse("response carried no data".to_string())
        })?;
        for field in ["nodes", "edges"] {
            if !data.get(field).map(|v| v.is_array()).unwrap_or(false) {
                return Err(AnalysisError::MalformedResponse(format!(
                    "missing required array field: {field}"
                )));
            }
        }
        serde_json::from_value(data)
            .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))
    }
}
