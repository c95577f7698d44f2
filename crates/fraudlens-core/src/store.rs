use crate::types::AnalysisResult;
use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::debug;

/// Process-wide slot holding the latest accepted analysis result.
///
/// The slot is replaced only as a single atomic swap; readers loading during
/// a replace observe either the old result or the new one in full, never a
/// mix. There is no partial-mutation path: callers that need a changed view
/// derive it from a snapshot.
#[derive(Debug)]
pub struct AnalysisResultStore {
    current: ArcSwap<AnalysisResult>,
}

impl AnalysisResultStore {
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(AnalysisResult::empty()),
        }
    }

    /// Snapshot of the current result. Cheap; clones an Arc, not the data.
    pub fn load(&self) -> Arc<AnalysisResult> {
        self.current.load_full()
    }

    /// Replace the stored result wholesale.
    pub fn replace(&self, result: AnalysisResult) -> Arc<AnalysisResult> {
        let next = Arc::new(result);
        self.current.store(next.clone());
        debug!(
            nodes = next.nodes.len(),
            edges = next.edges.len(),
            "analysis result replaced"
        );
        next
    }

    /// Reset to the empty baseline, e.g. before a new submission begins.
    pub fn clear(&self) {
        self.current.store(Arc::new(AnalysisResult::empty()));
    }
}

impl Default for AnalysisResultStore {
    fn default() -> Self {
        Self::new()
    }
}
