use dashmap::DashMap;
use std::sync::Arc;

use crate::models::LeaderboardEntry;

/// In-memory tally of chickens requested per client
///
/// Cloning is cheap and every clone shares the same map. Increments are
/// atomic per client: the shard lock is held for the whole
/// read-modify-write.
#[derive(Clone, Default)]
pub struct Leaderboard {
    counts: Arc<DashMap<String, u64>>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` chickens to the tally for `client_id`
    pub fn record(&self, client_id: &str, amount: u64) {
        self.counts
            .entry(client_id.to_string())
            .and_modify(|total| *total = total.saturating_add(amount))
            .or_insert(amount);

        tracing::debug!(client = %client_id, amount, "Recorded chicken request");
    }

    /// Top `limit` consumers, highest count first, with 1-based ranks
    ///
    /// Ties are ordered by client identifier.
    pub fn top(&self, limit: usize) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();

        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        entries
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(idx, (client, chickens))| LeaderboardEntry {
                client,
                chickens,
                rank: idx + 1,
            })
            .collect()
    }

    /// Current tally for a single client
    pub fn get(&self, client_id: &str) -> Option<u64> {
        self.counts.get(client_id).map(|total| *total)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Forget every client
    pub fn reset(&self) {
        self.counts.clear();
    }
}
