use fraudlens_core::{AccountNode, TransferEdge};

/// Case-insensitive substring filter over account id or any pattern code.
/// An empty term matches everything. Never mutates the input collection.
pub fn filter_accounts<'a>(accounts: &'a [AccountNode], term: &str) -> Vec<&'a AccountNode> {
    let needle = term.to_lowercase();
    accounts
        .iter()
        .filter(|a| {
            needle.is_empty()
                || a.account_id.to_lowercase().contains(&needle)
                || a.patterns.iter().any(|p| p.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Case-insensitive substring filter over sample transaction ids, sender id
/// or receiver id.
pub fn filter_transactions<'a>(edges: &'a [TransferEdge], term: &str) -> Vec<&'a TransferEdge> {
    let needle = term.to_lowercase();
    edges
        .iter()
        .filter(|e| {
            needle.is_empty()
                || e.source.to_lowercase().contains(&needle)
                || e.target.to_lowercase().contains(&needle)
                || e.sample_transaction_ids
                    .iter()
                    .any(|t| t.to_lowercase().contains(&needle))
        })
        .collect()
}
