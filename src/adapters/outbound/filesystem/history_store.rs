use crate::ports::outbound::ComparisonHistory;
use crate::sbom_comparison::domain::ComparisonResult;
use crate::shared::error::ComparisonError;
use crate::shared::security::{safe_read_to_string, validate_identifier};
use crate::shared::Result;
use async_trait::async_trait;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// FileSystemHistoryStore adapter persisting one JSON file per comparison
///
/// Records are written to `<history_dir>/<comparison_id>.json` through a
/// temporary sibling that is persisted without clobbering, so a record is
/// either fully present or absent and never overwritten.
///
/// File access runs on tokio's blocking pool.
#[derive(Debug, Clone)]
pub struct FileSystemHistoryStore {
    history_dir: PathBuf,
}

impl FileSystemHistoryStore {
    pub fn new(history_dir: impl Into<PathBuf>) -> Self {
        Self {
            history_dir: history_dir.into(),
        }
    }

    pub fn history_dir(&self) -> &Path {
        &self.history_dir
    }

    fn record_path(&self, comparison_id: &str) -> PathBuf {
        self.history_dir.join(format!("{}.json", comparison_id))
    }

    fn write_error(&self, path: &Path, details: impl Into<String>) -> anyhow::Error {
        ComparisonError::FileWriteError {
            path: path.to_path_buf(),
            details: details.into(),
        }
        .into()
    }

    fn write_record(&self, result: &ComparisonResult) -> Result<()> {
        validate_identifier(result.comparison_id())?;
        let path = self.record_path(result.comparison_id());

        fs::create_dir_all(&self.history_dir).map_err(|e| {
            self.write_error(
                &self.history_dir,
                format!("Failed to create history directory: {}", e),
            )
        })?;

        let json = serde_json::to_vec_pretty(result)?;

        let mut temp = NamedTempFile::new_in(&self.history_dir)
            .map_err(|e| self.write_error(&path, format!("Failed to create temp file: {}", e)))?;
        temp.write_all(&json)
            .and_then(|_| temp.as_file().sync_all())
            .map_err(|e| self.write_error(&path, e.to_string()))?;

        temp.persist_noclobber(&path).map_err(|e| {
            if e.error.kind() == io::ErrorKind::AlreadyExists {
                ComparisonError::HistoryConflict {
                    comparison_id: result.comparison_id().to_string(),
                }
                .into()
            } else {
                self.write_error(&path, e.error.to_string())
            }
        })?;

        tracing::debug!(path = %path.display(), "comparison recorded");
        Ok(())
    }

    /// Reads a record and checks it is stored under its own `comparison_id`
    fn read_record(&self, path: &Path, expected_id: &str) -> Result<ComparisonResult> {
        let content = safe_read_to_string(path, "History record")?;
        let record: ComparisonResult = serde_json::from_str(&content).map_err(|e| {
            ComparisonError::FileReadError {
                path: path.to_path_buf(),
                details: format!("Invalid history record: {}", e),
            }
        })?;

        if record.comparison_id() != expected_id {
            return Err(ComparisonError::FileReadError {
                path: path.to_path_buf(),
                details: format!(
                    "History record stored as '{}' holds comparison '{}'",
                    expected_id,
                    record.comparison_id()
                ),
            }
            .into());
        }
        Ok(record)
    }

    fn find_record(&self, comparison_id: &str) -> Result<Option<ComparisonResult>> {
        validate_identifier(comparison_id)?;
        let path = self.record_path(comparison_id);

        match fs::symlink_metadata(&path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            _ => self.read_record(&path, comparison_id).map(Some),
        }
    }

    fn list_records(&self) -> Result<Vec<ComparisonResult>> {
        let entries = match fs::read_dir(&self.history_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(ComparisonError::FileReadError {
                    path: self.history_dir.clone(),
                    details: e.to_string(),
                }
                .into())
            }
        };

        let mut records = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            match self.read_record(&path, stem) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable history record")
                }
            }
        }

        records.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| a.comparison_id().cmp(b.comparison_id()))
        });
        Ok(records)
    }
}

#[async_trait]
impl ComparisonHistory for FileSystemHistoryStore {
    async fn record(&self, result: &ComparisonResult) -> Result<()> {
        let store = self.clone();
        let result = result.clone();
        tokio::task::spawn_blocking(move || store.write_record(&result)).await?
    }

    async fn find(&self, comparison_id: &str) -> Result<Option<ComparisonResult>> {
        let store = self.clone();
        let comparison_id = comparison_id.to_string();
        tokio::task::spawn_blocking(move || store.find_record(&comparison_id)).await?
    }

    async fn list(&self) -> Result<Vec<ComparisonResult>> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.list_records()).await?
    }
}
