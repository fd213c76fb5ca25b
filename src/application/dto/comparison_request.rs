/// ComparisonRequest - Internal request DTO for the comparison use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRequest {
    /// Identifier of the baseline inventory
    pub app1_id: String,
    /// Identifier of the inventory compared against the baseline
    pub app2_id: String,
    /// Whether the result is appended to the comparison history
    pub record_history: bool,
}

impl ComparisonRequest {
    pub fn new(app1_id: impl Into<String>, app2_id: impl Into<String>) -> Self {
        Self {
            app1_id: app1_id.into(),
            app2_id: app2_id.into(),
            record_history: true,
        }
    }

    /// Skips recording the result in history
    pub fn without_history(mut self) -> Self {
        self.record_history = false;
        self
    }
}
