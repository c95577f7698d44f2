use fraudlens_core::clamp_score;
use serde::Serialize;
use std::fmt;

/// Severity tier for an account suspicion score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScoreTier::Low => "low",
            ScoreTier::Medium => "medium",
            ScoreTier::High => "high",
            ScoreTier::Critical => "critical",
        };
        write!(f, "{}", s)
    }
}

/// Risk chip shown on a fraud-ring row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskChip {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskChip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskChip::Low => "low",
            RiskChip::Medium => "medium",
            RiskChip::High => "high",
        };
        write!(f, "{}", s)
    }
}

/// Classify a suspicion score: <40 low, 40-69 medium, 70-89 high, >=90 critical.
pub fn score_tier(score: f64) -> ScoreTier {
    let score = clamp_score(score);
    if score >= 90.0 {
        ScoreTier::Critical
    } else if score >= 70.0 {
        ScoreTier::High
    } else if score >= 40.0 {
        ScoreTier::Medium
    } else {
        ScoreTier::Low
    }
}

/// Classify a ring risk score: <55 low, 55-79 medium, >=80 high.
pub fn risk_chip(score: f64) -> RiskChip {
    let score = clamp_score(score);
    if score >= 80.0 {
        RiskChip::High
    } else if score >= 55.0 {
        RiskChip::Medium
    } else {
        RiskChip::Low
    }
}

/// Human-readable label for an engine pattern code. Unknown codes pass
/// through unchanged.
pub fn pattern_label(code: &str) -> String {
    if let Some(n) = code.strip_prefix("cycle_length_") {
        return format!("Cycle {}", n);
    }
    match code {
        "smurfing_fan_in" => "Fan-in".to_string(),
        "smurfing_fan_out" => "Fan-out".to_string(),
        "layered_shell" => "Shell".to_string(),
        other => other.to_string(),
    }
}

/// Suspicion tier color for the graph view.
pub fn score_color(score: f64) -> &'static str {
    match score_tier(score) {
        ScoreTier::Critical => "#d32f2f",
        ScoreTier::High => "#f57c00",
        ScoreTier::Medium => "#fbc02d",
        ScoreTier::Low => "#66bb6a",
    }
}
