use fraudlens_core::{AccountNode, TransferEdge};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Whole-dataset connectivity statistics. Always computed over the full
/// node/edge sets, never the render-truncated subset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub average_degree: f64,
    pub largest_component_size: usize,
}

/// Disjoint-set forest with path compression and union by size.
/// `find` amortizes to near-constant time, keeping the full statistics pass
/// near-linear in nodes + edges.
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression: point everything on the walk at the root.
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let mut ra = self.find(a);
        let mut rb = self.find(b);
        if ra == rb {
            return;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
    }
}

/// Compute connectivity statistics via disjoint-set union over account ids.
/// Edge direction is ignored; edges referencing unknown account ids are
/// skipped rather than treated as errors.
pub fn graph_stats(nodes: &[AccountNode], edges: &[TransferEdge]) -> GraphStats {
    let node_count = nodes.len();
    let edge_count = edges.len();

    if node_count == 0 {
        return GraphStats {
            node_count: 0,
            edge_count,
            average_degree: 0.0,
            largest_component_size: 0,
        };
    }

    let index: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.account_id.as_str(), i))
        .collect();

    let mut dsu = DisjointSet::new(node_count);
    for edge in edges {
        if let (Some(&s), Some(&t)) =
            (index.get(edge.source.as_str()), index.get(edge.target.as_str()))
        {
            dsu.union(s, t);
        }
    }

    let mut largest = 0;
    for i in 0..node_count {
        if dsu.find(i) == i {
            largest = largest.max(dsu.size[i]);
        }
    }

    let stats = GraphStats {
        node_count,
        edge_count,
        average_degree: 2.0 * edge_count as f64 / node_count as f64,
        largest_component_size: largest,
    };
    debug!(?stats, "connectivity statistics computed");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn node(id: &str) -> AccountNode {
        AccountNode {
            account_id: id.to_string(),
            suspicion_score: 0.0,
            is_suspicious: false,
            ring_id: String::new(),
            patterns: Vec::new(),
            in_degree: 0,
            out_degree: 0,
            total_in_amount: 0.0,
            total_out_amount: 0.0,
        }
    }

    fn edge(source: &str, target: &str) -> TransferEdge {
        TransferEdge {
            source: source.to_string(),
            target: target.to_string(),
            transaction_count: 1,
            total_amount: 0.0,
            sample_transaction_ids: Vec::new(),
            last_timestamp: None,
        }
    }

    #[test]
    fn empty_graph_is_all_zero() {
        let stats = graph_stats(&[], &[]);
        assert_eq!(stats, GraphStats::default());
        assert_eq!(stats.average_degree, 0.0);
    }

    #[test]
    fn singletons_have_component_size_one() {
        let nodes = vec![node("A"), node("B"), node("C")];
        let stats = graph_stats(&nodes, &[]);
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.largest_component_size, 1);
        assert_eq!(stats.average_degree, 0.0);
    }

    #[test]
    fn chain_forms_one_component() {
        let nodes = vec![node("A"), node("B"), node("C"), node("D")];
        let edges = vec![edge("A", "B"), edge("B", "C"), edge("C", "D")];
        let stats = graph_stats(&nodes, &edges);
        assert_eq!(stats.largest_component_size, 4);
        assert_relative_eq!(stats.average_degree, 1.5);
    }

    #[test]
    fn two_components_and_isolate() {
        let nodes = vec![node("A"), node("B"), node("C"), node("D"), node("E")];
        let edges = vec![edge("A", "B"), edge("C", "D")];
        let stats = graph_stats(&nodes, &edges);
        assert_eq!(stats.largest_component_size, 2);
        assert_eq!(stats.node_count, 5);
    }

    #[test]
    fn unknown_endpoints_are_ignored() {
        let nodes = vec![node("A"), node("B")];
        let edges = vec![edge("A", "GHOST"), edge("GHOST", "B"), edge("A", "B")];
        let stats = graph_stats(&nodes, &edges);
        assert_eq!(stats.largest_component_size, 2);
        // edge_count reflects the dataset, not the unionable subset
        assert_eq!(stats.edge_count, 3);
    }

    #[test]
    fn component_sizes_sum_to_node_count() {
        let nodes: Vec<AccountNode> = (0..100).map(|i| node(&format!("N{i}"))).collect();
        // rings of 10
        let edges: Vec<TransferEdge> = (0..100)
            .map(|i| {
                let base = (i / 10) * 10;
                edge(&format!("N{i}"), &format!("N{}", base + (i + 1) % 10))
            })
            .collect();
        let stats = graph_stats(&nodes, &edges);
        assert_eq!(stats.largest_component_size, 10);

        let index: HashMap<&str, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.account_id.as_str(), i))
            .collect();
        let mut dsu = DisjointSet::new(nodes.len());
        for e in &edges {
            if let (Some(&s), Some(&t)) = (index.get(e.source.as_str()), index.get(e.target.as_str())) {
                dsu.union(s, t);
            }
        }
        let roots: Vec<usize> = (0..nodes.len()).filter(|&i| dsu.find(i) == i).collect();
        let total: usize = roots.into_iter().map(|i| dsu.size[i]).sum();
        assert_eq!(total, stats.node_count);
    }

    #[test]
    fn self_loops_do_not_inflate_components() {
        let nodes = vec![node("A"), node("B")];
        let edges = vec![edge("A", "A")];
        let stats = graph_stats(&nodes, &edges);
        assert_eq!(stats.largest_component_size, 1);
    }
}
