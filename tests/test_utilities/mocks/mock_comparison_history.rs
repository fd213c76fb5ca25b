use async_trait::async_trait;
use sbom_compare::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ComparisonHistory keeping records in insertion order
///
/// `failing()` makes every `record` call fail, to check that errors from the
/// store reach the caller.
#[derive(Default, Clone)]
pub struct MockComparisonHistory {
    pub records: Arc<Mutex<Vec<ComparisonResult>>>,
    fail_on_record: bool,
}

impl MockComparisonHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_on_record: true,
            ..Self::default()
        }
    }

    pub fn recorded(&self) -> Vec<ComparisonResult> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl ComparisonHistory for MockComparisonHistory {
    async fn record(&self, result: &ComparisonResult) -> Result<()> {
        if self.fail_on_record {
            anyhow::bail!("history store unavailable");
        }
        self.records.lock().unwrap().push(result.clone());
        Ok(())
    }

    async fn find(&self, comparison_id: &str) -> Result<Option<ComparisonResult>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.comparison_id() == comparison_id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<ComparisonResult>> {
        let mut records = self.recorded();
        records.reverse();
        Ok(records)
    }
}
