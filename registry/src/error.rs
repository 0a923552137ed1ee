// Token Registry - Error Types
// This module defines all error types for registry operations.
//
// Error groups:
// - Lookup errors (missing / duplicate tokens)
// - Input validation errors (account ids, pagination, metadata, royalty terms)
// - System errors (checked arithmetic)

use thiserror::Error;

/// Registry operation result type
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry error type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    // ========================================
    // Lookup errors
    // ========================================
    #[error("Token not found")]
    TokenNotFound,

    #[error("Token already exists")]
    TokenAlreadyExists,

    // ========================================
    // Input validation errors
    // ========================================
    #[error("Invalid account id")]
    InvalidAccountId,

    #[error("Invalid pagination start index")]
    InvalidStartIndex,

    #[error("Title too long")]
    TitleTooLong,

    #[error("Description too long")]
    DescriptionTooLong,

    #[error("URI too long")]
    UriTooLong,

    #[error("Extra data too long")]
    ExtraTooLong,

    #[error("Royalty too high")]
    RoyaltyTooHigh,

    #[error("Royalty split exceeds percentage")]
    RoyaltySplitTooLarge,

    #[error("Too many royalty recipients")]
    TooManyRoyaltyRecipients,

    // ========================================
    // System errors
    // ========================================
    #[error("Arithmetic overflow")]
    Overflow,
}
