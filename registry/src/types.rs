// Token Registry - Core Types
// This module defines all data structures for token registry operations.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::{RegistryError, RegistryResult};

// ========================================
// Protocol Constants
// ========================================

/// Basis point denominator for royalty math (10000 = 100.00%)
pub const ROYALTY_SCALE: u16 = 10_000;

/// Maximum recipients in a royalty split
pub const MAX_ROYALTY_RECIPIENTS: usize = 32;

/// Maximum metadata title length (bytes)
pub const MAX_TITLE_LENGTH: usize = 256;

/// Maximum metadata description length (bytes)
pub const MAX_DESCRIPTION_LENGTH: usize = 1_024;

/// Maximum media/reference URI length (bytes)
pub const MAX_URI_LENGTH: usize = 512;

/// Maximum extra data length (bytes)
pub const MAX_EXTRA_LENGTH: usize = 1_024;

// ========================================
// Type Aliases
// ========================================

/// Globally unique token identifier
pub type TokenId = String;

/// Opaque account identifier; the registry only requires non-emptiness
pub type AccountId = String;

/// Token amount / sale price; exact integer arithmetic only
pub type Balance = u128;

// ========================================
// Token Metadata
// ========================================

/// Per-token metadata blob, stored in the metadata collaborator and
/// joined into the token on single-token lookup
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Display title
    pub title: Option<String>,

    /// Free-form description
    pub description: Option<String>,

    /// URI of the associated media
    pub media: Option<String>,

    /// Number of copies this metadata describes
    pub copies: Option<u64>,

    /// Extra data the issuer wants to attach, may be stringified JSON
    pub extra: Option<String>,

    /// URI of an off-chain JSON document with further information
    pub reference: Option<String>,
}

impl TokenMetadata {
    /// Validate field length caps
    pub fn validate(&self) -> RegistryResult<()> {
        if let Some(ref title) = self.title {
            if title.len() > MAX_TITLE_LENGTH {
                return Err(RegistryError::TitleTooLong);
            }
        }
        if let Some(ref description) = self.description {
            if description.len() > MAX_DESCRIPTION_LENGTH {
                return Err(RegistryError::DescriptionTooLong);
            }
        }
        if let Some(ref media) = self.media {
            if media.len() > MAX_URI_LENGTH {
                return Err(RegistryError::UriTooLong);
            }
        }
        if let Some(ref reference) = self.reference {
            if reference.len() > MAX_URI_LENGTH {
                return Err(RegistryError::UriTooLong);
            }
        }
        if let Some(ref extra) = self.extra {
            if extra.len() > MAX_EXTRA_LENGTH {
                return Err(RegistryError::ExtraTooLong);
            }
        }
        Ok(())
    }
}

// ========================================
// Royalty Terms
// ========================================

/// Royalty terms attached to a token at mint time, immutable afterwards.
///
/// Each `split_between` entry is that recipient's portion of the TOTAL
/// sale price in basis points, not a portion of the royalty bucket.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRoyalty {
    /// Total royalty percentage in basis points (2500 = 25.00%)
    pub percentage: u16,

    /// Basis-point share of the sale price per recipient
    pub split_between: IndexMap<AccountId, u16>,
}

impl TokenRoyalty {
    /// Create new royalty terms
    pub fn new(percentage: u16, split_between: IndexMap<AccountId, u16>) -> Self {
        Self {
            percentage,
            split_between,
        }
    }

    /// Validate the royalty terms.
    ///
    /// The split must stay within the percentage, and the percentage
    /// within the basis-point scale, so that payouts can never exceed
    /// the sale price.
    pub fn validate(&self) -> RegistryResult<()> {
        if self.percentage > ROYALTY_SCALE {
            return Err(RegistryError::RoyaltyTooHigh);
        }
        if self.split_between.len() > MAX_ROYALTY_RECIPIENTS {
            return Err(RegistryError::TooManyRoyaltyRecipients);
        }
        let mut total: u32 = 0;
        for (recipient, share) in &self.split_between {
            if recipient.is_empty() {
                return Err(RegistryError::InvalidAccountId);
            }
            total += u32::from(*share);
        }
        if total > u32::from(self.percentage) {
            return Err(RegistryError::RoyaltySplitTooLarge);
        }
        Ok(())
    }
}

// ========================================
// Token
// ========================================

/// A minted non-fungible token
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token ID (globally unique, immutable once minted)
    pub id: TokenId,

    /// Current owner
    pub owner_id: AccountId,

    /// Owner before the current one; equals `owner_id` for a fresh mint
    pub prev_owner_id: AccountId,

    /// Metadata, resolved from the metadata store on lookup
    pub metadata: Option<TokenMetadata>,

    /// Royalty terms fixed at mint time
    pub royalty: Option<TokenRoyalty>,
}

// ========================================
// Payout
// ========================================

/// Result of splitting a sale price among royalty recipients and the
/// current owner; the values sum exactly to the sale price
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    /// Amount owed per account
    pub payout: IndexMap<AccountId, Balance>,
}

impl Payout {
    /// Sum of all amounts in the mapping
    pub fn total(&self) -> Balance {
        self.payout.values().sum()
    }
}
