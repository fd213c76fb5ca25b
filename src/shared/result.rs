use crate::shared::error::ComparisonError;

/// Result alias used across the crate.
///
/// Typed failures are raised as [`ComparisonError`] and travel inside
/// `anyhow::Error`; use [`comparison_error`] to recover them at the boundary.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Returns the typed comparison error carried by `err`, if any.
pub fn comparison_error(err: &anyhow::Error) -> Option<&ComparisonError> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ComparisonError>())
}
