use crate::adapters::{score_tier, ScoreTier};
use crate::filter::{filter_accounts, filter_transactions};
use fraudlens_core::{AccountNode, AnalysisResult, FraudRing, TransferEdge};
use std::sync::Arc;

/// Drill-down detail for one account: the node, its incident edges and the
/// ring it belongs to, if any.
#[derive(Debug, Clone)]
pub struct AccountDetail {
    pub account: AccountNode,
    pub tier: ScoreTier,
    pub incident_edges: Vec<TransferEdge>,
    pub ring: Option<FraudRing>,
}

/// View-side command surface over a result snapshot. UI events translate
/// into calls here; outputs drive rendering. Holds presentation state only
/// (search term, selection) and never writes back to the store.
#[derive(Debug, Clone)]
pub struct DashboardView {
    snapshot: Arc<AnalysisResult>,
    search_term: String,
    selected_account: Option<String>,
}

impl DashboardView {
    pub fn new(snapshot: Arc<AnalysisResult>) -> Self {
        Self {
            snapshot,
            search_term: String::new(),
            selected_account: None,
        }
    }

    /// Swap in a new snapshot, dropping selection state that may no longer
    /// resolve. The search term is kept; it is user input, not derived data.
    pub fn set_snapshot(&mut self, snapshot: Arc<AnalysisResult>) {
        self.snapshot = snapshot;
        self.selected_account = None;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn select_account(&mut self, account_id: &str) -> Option<AccountDetail> {
        let account = self
            .snapshot
            .nodes
            .iter()
            .find(|n| n.account_id == account_id)?
            .clone();
        self.selected_account = Some(account.account_id.clone());

        let incident_edges: Vec<TransferEdge> = self
            .snapshot
            .edges
            .iter()
            .filter(|e| e.source == account_id || e.target == account_id)
            .cloned()
            .collect();
        let ring = if account.ring_id.is_empty() {
            None
        } else {
            self.snapshot
                .fraud_rings
                .iter()
                .find(|r| r.ring_id == account.ring_id)
                .cloned()
        };

        Some(AccountDetail {
            tier: score_tier(account.suspicion_score),
            account,
            incident_edges,
            ring,
        })
    }

    pub fn clear_selection(&mut self) {
        self.selected_account = None;
    }

    pub fn selected_account(&self) -> Option<&str> {
        self.selected_account.as_deref()
    }

    /// Suspicious accounts visible under the current search term.
    pub fn visible_accounts(&self) -> Vec<&AccountNode> {
        filter_accounts(&self.snapshot.suspicious_accounts, &self.search_term)
    }

    /// Aggregated transfers visible under the current search term.
    pub fn visible_transactions(&self) -> Vec<&TransferEdge> {
        filter_transactions(&self.snapshot.edges, &self.search_term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraudlens_core::SummaryStats;

    fn snapshot() -> Arc<AnalysisResult> {
        let a1 = AccountNode {
            account_id: "A1".to_string(),
            suspicion_score: 95.0,
            is_suspicious: true,
            ring_id: "R1".to_string(),
            patterns: vec!["smurfing_fan_in".to_string()],
            in_degree: 2,
            out_degree: 0,
            total_in_amount: 500.0,
            total_out_amount: 0.0,
        };
        let b2 = AccountNode {
            account_id: "B2".to_string(),
            suspicion_score: 20.0,
            is_suspicious: false,
            ring_id: String::new(),
            patterns: Vec::new(),
            in_degree: 0,
            out_degree: 1,
            total_in_amount: 0.0,
            total_out_amount: 250.0,
        };
        Arc::new(AnalysisResult {
            nodes: vec![a1.clone(), b2],
            edges: vec![TransferEdge {
                source: "B2".to_string(),
                target: "A1".to_string(),
                transaction_count: 3,
                total_amount: 250.0,
                sample_transaction_ids: vec!["TX-1".to_string()],
                last_timestamp: None,
            }],
            suspicious_accounts: vec![a1],
            fraud_rings: vec![FraudRing {
                ring_id: "R1".to_string(),
                member_accounts: vec!["A1".to_string()],
                member_count: 1,
                risk_score: 90.0,
                pattern_type: "smurfing".to_string(),
            }],
            summary_stats: SummaryStats::default(),
        })
    }

    #[test]
    fn select_account_resolves_detail() {
        let mut view = DashboardView::new(snapshot());
        let detail = view.select_account("A1").unwrap();
        assert_eq!(detail.tier, ScoreTier::Critical);
        assert_eq!(detail.incident_edges.len(), 1);
        assert_eq!(detail.ring.as_ref().unwrap().ring_id, "R1");
        assert_eq!(view.selected_account(), Some("A1"));

        view.clear_selection();
        assert!(view.selected_account().is_none());
    }

    #[test]
    fn select_unknown_account_is_none() {
        let mut view = DashboardView::new(snapshot());
        assert!(view.select_account("NOPE").is_none());
        assert!(view.selected_account().is_none());
    }

    #[test]
    fn search_term_narrows_visible_sets() {
        let mut view = DashboardView::new(snapshot());
        assert_eq!(view.visible_accounts().len(), 1);
        view.set_search_term("fan_in");
        assert_eq!(view.visible_accounts().len(), 1);
        view.set_search_term("zzz");
        assert!(view.visible_accounts().is_empty());
        view.set_search_term("tx-1");
        assert_eq!(view.visible_transactions().len(), 1);
    }

    #[test]
    fn new_snapshot_drops_selection_keeps_term() {
        let mut view = DashboardView::new(snapshot());
        view.set_search_term("a1");
        view.select_account("A1");
        view.set_snapshot(Arc::new(AnalysisResult::empty()));
        assert!(view.selected_account().is_none());
        assert!(view.visible_accounts().is_empty());
    }
}
