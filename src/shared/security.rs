use crate::shared::error::ComparisonError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size for security (100 MB)
/// This prevents DoS attacks via excessively large inventory or history files
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Maximum length of an inventory or comparison identifier
pub const MAX_IDENTIFIER_LENGTH: usize = 128;

/// Validates an identifier that is used as a file stem
///
/// # Security
/// Identifiers are joined onto a base directory, so anything that could
/// escape it (separators, `..`, leading dots) is rejected.
///
/// # Errors
/// Returns `InvalidInput` if the identifier is empty, too long or contains
/// characters outside `[A-Za-z0-9._-]`
pub fn validate_identifier(identifier: &str) -> Result<()> {
    if identifier.is_empty() {
        return Err(ComparisonError::invalid_input(
            "Identifier must not be empty",
            "Pass the identifier of a generated inventory",
        )
        .into());
    }

    if identifier.len() > MAX_IDENTIFIER_LENGTH {
        return Err(ComparisonError::invalid_input(
            format!(
                "Identifier is too long ({} bytes). Maximum allowed: {} bytes",
                identifier.len(),
                MAX_IDENTIFIER_LENGTH
            ),
            "Use the identifier assigned when the SBOM was generated",
        )
        .into());
    }

    let valid_chars = identifier
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
    if !valid_chars || identifier.starts_with('.') {
        return Err(ComparisonError::invalid_input(
            format!("Identifier '{}' contains invalid characters", identifier),
            "Only letters, digits, '-', '_' and '.' are allowed, and it must not start with '.'",
        )
        .into());
    }

    Ok(())
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "inventory", "history record")
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| ComparisonError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(ComparisonError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "For security reasons, symbolic links are not allowed. Use a regular file instead"
                .to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(ComparisonError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", path.display()),
        }
        .into());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns a security error if the file size exceeds `max_size`
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(ComparisonError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes",
                file_size, max_size
            ),
            hint: "Split or regenerate the file".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Reads a file as UTF-8 after the regular-file and size checks
pub fn safe_read_to_string(path: &Path, file_description: &str) -> Result<String> {
    validate_regular_file(path, file_description)?;
    fs::read_to_string(path).map_err(|e| {
        ComparisonError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::result::comparison_error;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_identifier_accepts_plain_ids() {
        assert!(validate_identifier("app-1").is_ok());
        assert!(validate_identifier("3f2b9c1e-7d4a-4e1b-9a51-0c7d2e8f6a11").is_ok());
        assert!(validate_identifier("release_2.1").is_ok());
    }

    #[test]
    fn test_validate_identifier_rejects_traversal() {
        for bad in ["../etc/passwd", "a/b", "a\\b", "..", ".hidden", ""] {
            let err = validate_identifier(bad).unwrap_err();
            assert!(
                matches!(
                    comparison_error(&err),
                    Some(ComparisonError::InvalidInput { .. })
                ),
                "expected InvalidInput for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_validate_identifier_too_long() {
        let long = "a".repeat(MAX_IDENTIFIER_LENGTH + 1);
        let err = validate_identifier(&long).unwrap_err();
        assert!(err.to_string().contains("too long"));
    }

    #[test]
    fn test_validate_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("inventory.json");
        fs::write(&file_path, "{}").unwrap();

        assert!(validate_regular_file(&file_path, "inventory").is_ok());
    }

    #[test]
    fn test_validate_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_regular_file(temp_dir.path(), "inventory");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_regular_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_regular_file(&link, "inventory").unwrap_err();
        assert!(matches!(
            comparison_error(&err),
            Some(ComparisonError::SecurityError { .. })
        ));
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/file.json");
        assert!(validate_file_size(1000, &path, MAX_FILE_SIZE).is_ok());
        let result = validate_file_size(MAX_FILE_SIZE + 1, &path, MAX_FILE_SIZE);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_safe_read_to_string_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = safe_read_to_string(&temp_dir.path().join("missing.json"), "inventory")
            .unwrap_err();
        assert!(matches!(
            comparison_error(&err),
            Some(ComparisonError::FileReadError { .. })
        ));
    }
}
