use fraudlens_core::AnalysisResult;
use serde::{Deserialize, Serialize};

/// Fixed filename for the downloadable report artifact.
pub const REPORT_FILENAME: &str = "fraud_analysis_report.json";

/// Externally published report schema. Field names here are a stable
/// contract with downstream consumers; internal renames of AnalysisResult
/// must not leak into this document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FraudReport {
    pub suspicious_accounts: Vec<ReportedAccount>,
    pub fraud_rings: Vec<ReportedRing>,
    pub summary: ReportSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportedAccount {
    pub account_id: String,
    pub suspicion_score: f64,
    pub detected_patterns: Vec<String>,
    pub ring_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportedRing {
    pub ring_id: String,
    pub member_accounts: Vec<String>,
    pub pattern_type: String,
    pub risk_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_accounts_analyzed: u64,
    pub suspicious_accounts_flagged: u64,
    pub fraud_rings_detected: u64,
    pub processing_time_seconds: f64,
}

/// Derive the external report document from a stored result. An empty
/// result produces the same schema with empty collections and zeroed
/// counters, never null or absent fields.
pub fn to_report(result: &AnalysisResult) -> FraudReport {
    FraudReport {
        suspicious_accounts: result
            .suspicious_accounts
            .iter()
            .map(|a| ReportedAccount {
                account_id: a.account_id.clone(),
                suspicion_score: a.score(),
                detected_patterns: a.patterns.clone(),
                ring_id: a.ring_id.clone(),
            })
            .collect(),
        fraud_rings: result
            .fraud_rings
            .iter()
            .map(|r| ReportedRing {
                ring_id: r.ring_id.clone(),
                member_accounts: r.member_accounts.clone(),
                pattern_type: r.pattern_type.clone(),
                risk_score: r.risk(),
            })
            .collect(),
        summary: ReportSummary {
            total_accounts_analyzed: result.summary_stats.total_accounts,
            suspicious_accounts_flagged: result.summary_stats.suspicious_accounts,
            fraud_rings_detected: result.summary_stats.fraud_rings,
            processing_time_seconds: result.summary_stats.processing_time_seconds,
        },
    }
}
