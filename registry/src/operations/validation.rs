// Registry Input Validation Helpers
// This module provides validation functions for operation inputs.

use crate::error::{RegistryError, RegistryResult};

/// Validate an account identifier.
/// Account ids are opaque strings; the registry only requires them to be
/// non-empty (full validation belongs to the host environment).
pub fn validate_account_id(account_id: &str) -> RegistryResult<()> {
    if account_id.is_empty() {
        return Err(RegistryError::InvalidAccountId);
    }
    Ok(())
}

/// Parse a pagination start index.
/// `None` defaults to the start of the collection; anything else must be a
/// stringified non-negative integer.
pub fn parse_start_index(from_index: Option<&str>) -> RegistryResult<u64> {
    match from_index {
        None => Ok(0),
        Some(raw) => raw.parse().map_err(|_| RegistryError::InvalidStartIndex),
    }
}
