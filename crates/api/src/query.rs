//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for list endpoints (`?include_deleted=true`).
///
/// Soft-deleted rows are hidden unless the flag is set.
#[derive(Debug, Default, Deserialize)]
pub struct IncludeDeletedParams {
    #[serde(default)]
    pub include_deleted: bool,
}
