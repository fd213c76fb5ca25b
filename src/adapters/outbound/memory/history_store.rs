use crate::ports::outbound::ComparisonHistory;
use crate::sbom_comparison::domain::ComparisonResult;
use crate::shared::error::ComparisonError;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// InMemoryHistoryStore adapter: append-only log keyed by comparison id
///
/// A monotonically increasing sequence number orders records that share a
/// `created_at` timestamp.
#[derive(Default)]
pub struct InMemoryHistoryStore {
    records: DashMap<String, (u64, ComparisonResult)>,
    sequence: AtomicU64,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl ComparisonHistory for InMemoryHistoryStore {
    async fn record(&self, result: &ComparisonResult) -> Result<()> {
        match self.records.entry(result.comparison_id().to_string()) {
            Entry::Occupied(_) => Err(ComparisonError::HistoryConflict {
                comparison_id: result.comparison_id().to_string(),
            }
            .into()),
            Entry::Vacant(slot) => {
                let sequence = self.sequence.fetch_add(1, Ordering::SeqCst);
                slot.insert((sequence, result.clone()));
                Ok(())
            }
        }
    }

    async fn find(&self, comparison_id: &str) -> Result<Option<ComparisonResult>> {
        Ok(self
            .records
            .get(comparison_id)
            .map(|entry| entry.value().1.clone()))
    }

    async fn list(&self) -> Result<Vec<ComparisonResult>> {
        let mut records: Vec<(u64, ComparisonResult)> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        records.sort_by(|(seq_a, a), (seq_b, b)| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| seq_b.cmp(seq_a))
        });
        Ok(records.into_iter().map(|(_, record)| record).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_comparison::domain::{Component, ComponentInventory};
    use crate::sbom_comparison::services::ComparisonEngine;
    use crate::shared::result::comparison_error;

    fn create_test_result() -> ComparisonResult {
        ComparisonEngine::default()
            .compare(
                &ComponentInventory::new("a", "A", "web", vec![Component::new("vue")]),
                &ComponentInventory::new("b", "B", "web", vec![]),
            )
            .unwrap()
    }

    #[tokio::test]
    async fn test_record_find_and_conflict() {
        let store = InMemoryHistoryStore::new();
        let result = create_test_result();

        store.record(&result).await.unwrap();
        assert_eq!(
            store.find(result.comparison_id()).await.unwrap(),
            Some(result.clone())
        );

        let err = store.record(&result).await.unwrap_err();
        assert!(matches!(
            comparison_error(&err),
            Some(ComparisonError::HistoryConflict { .. })
        ));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let store = InMemoryHistoryStore::new();
        let results: Vec<ComparisonResult> = (0..3).map(|_| create_test_result()).collect();
        for result in &results {
            store.record(result).await.unwrap();
        }

        let listed = store.list().await.unwrap();
        let ids: Vec<&str> = listed.iter().map(|r| r.comparison_id()).collect();
        let expected: Vec<&str> = results.iter().rev().map(|r| r.comparison_id()).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_find_unknown() {
        let store = InMemoryHistoryStore::new();
        assert!(store.find("missing").await.unwrap().is_none());
        assert!(store.is_empty());
    }
}
