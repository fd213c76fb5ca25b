//! Configuration file support for sbom-compare.
//!
//! Provides YAML-based configuration through `sbom-compare.config.yml` files,
//! including data structures, file loading, validation and the defaults that
//! command-line flags are layered on top of.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::ExportFormat;
use crate::sbom_comparison::policies::MatchKey;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-compare.config.yml";

/// Default directory holding `<inventory_id>.json` files
pub const DEFAULT_INVENTORY_DIR: &str = ".";

/// Default directory holding recorded comparisons
pub const DEFAULT_HISTORY_DIR: &str = ".sbom-compare/history";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub inventory_dir: Option<PathBuf>,
    pub history_dir: Option<PathBuf>,
    pub format: Option<String>,
    pub match_key: Option<String>,
    pub fail_on_difference: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings after defaults and the config file are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub inventory_dir: PathBuf,
    pub history_dir: PathBuf,
    pub format: ExportFormat,
    pub match_key: MatchKey,
    pub fail_on_difference: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            inventory_dir: PathBuf::from(DEFAULT_INVENTORY_DIR),
            history_dir: PathBuf::from(DEFAULT_HISTORY_DIR),
            format: ExportFormat::default(),
            match_key: MatchKey::default(),
            fail_on_difference: false,
        }
    }
}

impl Settings {
    /// Overlays a (validated) config file on the defaults
    pub fn from_config(config: Option<&ConfigFile>) -> Result<Self> {
        let mut settings = Self::default();
        let Some(config) = config else {
            return Ok(settings);
        };

        if let Some(dir) = &config.inventory_dir {
            settings.inventory_dir = dir.clone();
        }
        if let Some(dir) = &config.history_dir {
            settings.history_dir = dir.clone();
        }
        if let Some(format) = &config.format {
            settings.format = ExportFormat::from_str(format)?;
        }
        if let Some(match_key) = &config.match_key {
            settings.match_key = MatchKey::from_str(match_key).map_err(anyhow::Error::msg)?;
        }
        if let Some(fail) = config.fail_on_difference {
            settings.fail_on_difference = fail;
        }
        Ok(settings)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Loads the explicit config when given, otherwise looks for one in `dir`.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(dir),
    }
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = &config.format {
        if ExportFormat::from_str(format).is_err() {
            bail!(
                "Invalid config: format '{}' is not supported.\n\n\
                 💡 Hint: Use one of 'json', 'csv' or 'report'.",
                format
            );
        }
    }

    if let Some(match_key) = &config.match_key {
        if MatchKey::from_str(match_key).is_err() {
            bail!(
                "Invalid config: match_key '{}' is not supported.\n\n\
                 💡 Hint: Use 'name' or 'name-purl'.",
                match_key
            );
        }
    }

    for (field, dir) in [
        ("inventory_dir", &config.inventory_dir),
        ("history_dir", &config.history_dir),
    ] {
        if dir.as_ref().is_some_and(|d| d.as_os_str().is_empty()) {
            bail!(
                "Invalid config: {} must not be empty.\n\n\
                 💡 Hint: Remove the key to use the default directory.",
                field
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
inventory_dir: ./inventories
history_dir: /var/lib/sbom-compare
format: csv
match_key: name-purl
fail_on_difference: true
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.inventory_dir.as_deref(),
            Some(Path::new("./inventories"))
        );
        assert_eq!(config.format.as_deref(), Some("csv"));
        assert_eq!(config.match_key.as_deref(), Some("name-purl"));
        assert_eq!(config.fail_on_difference, Some(true));

        let settings = Settings::from_config(Some(&config)).unwrap();
        assert_eq!(settings.history_dir, PathBuf::from("/var/lib/sbom-compare"));
        assert_eq!(settings.format, ExportFormat::Csv);
        assert_eq!(settings.match_key, MatchKey::NamePurl);
        assert!(settings.fail_on_difference);
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::from_config(None).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.inventory_dir, PathBuf::from("."));
        assert_eq!(settings.history_dir, PathBuf::from(".sbom-compare/history"));
        assert_eq!(settings.format, ExportFormat::Json);
        assert_eq!(settings.match_key, MatchKey::Name);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = ConfigFile {
            format: Some("report".to_string()),
            ..ConfigFile::default()
        };
        let settings = Settings::from_config(Some(&config)).unwrap();
        assert_eq!(settings.format, ExportFormat::Report);
        assert_eq!(settings.inventory_dir, PathBuf::from("."));
        assert!(!settings.fail_on_difference);
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_explicit_config_wins_over_discovery() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\n").unwrap();
        let explicit = dir.path().join("ci.yml");
        fs::write(&explicit, "format: csv\n").unwrap();

        let config = load_config(Some(&explicit), dir.path()).unwrap().unwrap();
        assert_eq!(config.format.as_deref(), Some("csv"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_format_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: pdf\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("format 'pdf' is not supported"));
    }

    #[test]
    fn test_invalid_match_key_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "match_key: sha256\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("match_key 'sha256' is not supported"));
    }

    #[test]
    fn test_empty_directory_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "history_dir: \"\"\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("history_dir must not be empty"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: json
exclude_packages: [pip]
another_unknown: value
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("exclude_packages"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.inventory_dir.is_none());
        assert!(config.history_dir.is_none());
        assert!(config.format.is_none());
        assert!(config.match_key.is_none());
        assert!(config.fail_on_difference.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
