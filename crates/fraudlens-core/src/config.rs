use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Rendering budget for the graph view. Deployments tune these; nothing in
/// the analytics pipeline hardcodes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderBudget {
    /// Maximum nodes handed to the renderer.
    #[serde(default = "RenderBudget::default_max_nodes")]
    pub max_nodes: usize,
    /// Maximum edges handed to the renderer.
    #[serde(default = "RenderBudget::default_max_edges")]
    pub max_edges: usize,
    /// Above this node count the renderer trades layout fidelity for
    /// responsiveness (fewer iterations, animation off).
    #[serde(default = "RenderBudget::default_large_graph_threshold")]
    pub large_graph_threshold: usize,
}

impl RenderBudget {
    fn default_max_nodes() -> usize {
        420
    }

    fn default_max_edges() -> usize {
        2200
    }

    fn default_large_graph_threshold() -> usize {
        260
    }
}

impl Default for RenderBudget {
    fn default() -> Self {
        Self {
            max_nodes: Self::default_max_nodes(),
            max_edges: Self::default_max_edges(),
            large_graph_threshold: Self::default_large_graph_threshold(),
        }
    }
}

/// Client-side limits enforced before and around the analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientLimits {
    /// Analysis endpoint URL.
    #[serde(default = "ClientLimits::default_endpoint")]
    pub endpoint: String,
    /// Maximum upload size in bytes.
    #[serde(default = "ClientLimits::default_max_file_bytes")]
    pub max_file_bytes: u64,
    /// End-to-end deadline for one submission, in seconds.
    #[serde(default = "ClientLimits::default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ClientLimits {
    fn default_endpoint() -> String {
        "http://localhost:5000/analyze".to_string()
    }

    fn default_max_file_bytes() -> u64 {
        10 * 1024 * 1024
    }

    fn default_request_timeout_secs() -> u64 {
        30
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ClientLimits {
    fn default() -> Self {
        Self {
            endpoint: Self::default_endpoint(),
            max_file_bytes: Self::default_max_file_bytes(),
            request_timeout_secs: Self::default_request_timeout_secs(),
        }
    }
}
