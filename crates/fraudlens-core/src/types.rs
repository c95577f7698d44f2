use serde::{Deserialize, Serialize};

pub type AccountId = String;
pub type RingId = String;

/// Clamp a score into the [0, 100] range. Consumers never assume scores
/// arrive pre-clamped from the analysis engine.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}

/// An account in the transaction graph, as scored by the analysis engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountNode {
    pub account_id: AccountId,
    #[serde(default)]
    pub suspicion_score: f64,
    #[serde(default)]
    pub is_suspicious: bool,
    #[serde(default)]
    pub ring_id: RingId,
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub in_degree: u32,
    #[serde(default)]
    pub out_degree: u32,
    #[serde(default)]
    pub total_in_amount: f64,
    #[serde(default)]
    pub total_out_amount: f64,
}

impl AccountNode {
    pub fn score(&self) -> f64 {
        clamp_score(self.suspicion_score)
    }
}

/// Aggregated transfers for one ordered (source, target) pair. The engine
/// emits at most one edge record per pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferEdge {
    pub source: AccountId,
    pub target: AccountId,
    #[serde(default)]
    pub transaction_count: u64,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub sample_transaction_ids: Vec<String>,
    #[serde(default)]
    pub last_timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudRing {
    pub ring_id: RingId,
    #[serde(default)]
    pub member_accounts: Vec<AccountId>,
    #[serde(default)]
    pub member_count: u32,
    #[serde(default)]
    pub risk_score: f64,
    #[serde(default)]
    pub pattern_type: String,
}

impl FraudRing {
    pub fn risk(&self) -> f64 {
        clamp_score(self.risk_score)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    #[serde(default)]
    pub total_accounts: u64,
    #[serde(default)]
    pub suspicious_accounts: u64,
    #[serde(default)]
    pub fraud_rings: u64,
    #[serde(default)]
    pub processing_time_seconds: f64,
}

/// Root analysis payload. Immutable once accepted into the store; replaced
/// only as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub nodes: Vec<AccountNode>,
    #[serde(default)]
    pub edges: Vec<TransferEdge>,
    #[serde(default)]
    pub suspicious_accounts: Vec<AccountNode>,
    #[serde(default)]
    pub fraud_rings: Vec<FraudRing>,
    #[serde(default)]
    pub summary_stats: SummaryStats,
}

impl AnalysisResult {
    /// The zero state the store holds before any accepted analysis and
    /// after a reset.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_score_bounds() {
        assert_eq!(clamp_score(-5.0), 0.0);
        assert_eq!(clamp_score(0.0), 0.0);
        assert_eq!(clamp_score(55.5), 55.5);
        assert_eq!(clamp_score(100.0), 100.0);
        assert_eq!(clamp_score(250.0), 100.0);
        assert_eq!(clamp_score(f64::NAN), 0.0);
    }

    #[test]
    fn sparse_node_json_deserializes_with_defaults() {
        let node: AccountNode = serde_json::from_str(r#"{"account_id":"A1"}"#).unwrap();
        assert_eq!(node.account_id, "A1");
        assert_eq!(node.suspicion_score, 0.0);
        assert!(!node.is_suspicious);
        assert!(node.patterns.is_empty());
        assert!(node.ring_id.is_empty());
    }

    #[test]
    fn sparse_edge_json_deserializes_with_defaults() {
        let edge: TransferEdge =
            serde_json::from_str(r#"{"source":"A1","target":"B2"}"#).unwrap();
        assert_eq!(edge.transaction_count, 0);
        assert!(edge.last_timestamp.is_none());
        assert!(edge.sample_transaction_ids.is_empty());
    }

    #[test]
    fn empty_result_is_empty() {
        assert!(AnalysisResult::empty().is_empty());
    }
}
