use fraudlens_core::{AccountNode, RenderBudget, TransferEdge};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

/// A bounded, render-ready subset of the analysis graph.
#[derive(Debug, Clone)]
pub struct ScaledGraph {
    pub nodes: Vec<AccountNode>,
    pub edges: Vec<TransferEdge>,
    /// Hint for the renderer: above the configured threshold it should
    /// reduce layout iterations and disable animation.
    pub is_large: bool,
}

/// Select a representative subset of nodes and edges within the render
/// budget. Pure and deterministic: equal scores are broken by ascending
/// account id, equal transaction counts by ascending (source, target), so
/// the same input always yields the same selection.
pub fn scale_graph(
    nodes: &[AccountNode],
    edges: &[TransferEdge],
    budget: &RenderBudget,
) -> ScaledGraph {
    let mut ranked: Vec<AccountNode> = nodes.to_vec();
    ranked.sort_by(|a, b| {
        b.score()
            .partial_cmp(&a.score())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.account_id.cmp(&b.account_id))
    });
    ranked.truncate(budget.max_nodes);

    let surviving: HashSet<&str> = ranked.iter().map(|n| n.account_id.as_str()).collect();

    let mut kept: Vec<TransferEdge> = edges
        .iter()
        .filter(|e| surviving.contains(e.source.as_str()) && surviving.contains(e.target.as_str()))
        .cloned()
        .collect();
    kept.sort_by(|a, b| {
        b.transaction_count
            .cmp(&a.transaction_count)
            .then_with(|| a.source.cmp(&b.source))
            .then_with(|| a.target.cmp(&b.target))
    });
    kept.truncate(budget.max_edges);

    let is_large = ranked.len() > budget.large_graph_threshold;
    debug!(
        selected_nodes = ranked.len(),
        selected_edges = kept.len(),
        is_large,
        "graph scaled for rendering"
    );

    ScaledGraph {
        nodes: ranked,
        edges: kept,
        is_large,
    }
}
