// Registry Mint Operation
// Creates a token, records its metadata through the metadata store and
// announces it on the event sink.

use log::debug;

use crate::error::RegistryResult;
use crate::events::{EventSink, NftEvent, NftMintLog};
use crate::metadata::MetadataStore;
use crate::store::TokenStore;
use crate::types::{AccountId, Token, TokenMetadata, TokenRoyalty};

use super::validation::validate_account_id;

// ========================================
// Mint Parameters
// ========================================

/// Parameters for minting a single token
#[derive(Clone, Debug)]
pub struct MintParams {
    /// Initial owner
    pub owner_id: AccountId,
    /// Metadata blob, written once to the metadata store
    pub metadata: TokenMetadata,
    /// Royalty terms, fixed for the token's lifetime
    pub royalty: Option<TokenRoyalty>,
}

impl MintParams {
    /// Create new mint parameters
    pub fn new(owner_id: impl Into<AccountId>) -> Self {
        Self {
            owner_id: owner_id.into(),
            metadata: TokenMetadata::default(),
            royalty: None,
        }
    }

    /// Set the metadata blob
    pub fn with_metadata(mut self, metadata: TokenMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set the royalty terms
    pub fn with_royalty(mut self, royalty: TokenRoyalty) -> Self {
        self.royalty = Some(royalty);
        self
    }
}

// ========================================
// Mint Operation
// ========================================

/// Mint a single token
///
/// # Parameters
/// - `store`: Registry storage backend
/// - `metadata_store`: Metadata collaborator
/// - `events`: Event sink
/// - `params`: Mint parameters
///
/// # Returns
/// - `Ok(Token)`: The minted token, metadata attached
/// - `Err(RegistryError)`: Validation or storage failure
pub fn mint<S, M, E>(
    store: &mut S,
    metadata_store: &mut M,
    events: &mut E,
    params: MintParams,
) -> RegistryResult<Token>
where
    S: TokenStore + ?Sized,
    M: MetadataStore + ?Sized,
    E: EventSink + ?Sized,
{
    // Step 1: Input validation
    validate_account_id(&params.owner_id)?;
    params.metadata.validate()?;
    if let Some(ref royalty) = params.royalty {
        royalty.validate()?;
    }

    // Step 2: Allocate the token id
    let token_id = store.allocate_token_id()?;

    // Step 3: Create and insert the token.
    // A fresh mint has no previous owner, so prev_owner_id starts at the
    // minting owner.
    let mut token = Token {
        id: token_id.clone(),
        owner_id: params.owner_id.clone(),
        prev_owner_id: params.owner_id.clone(),
        metadata: None,
        royalty: params.royalty,
    };
    store.insert(token.clone())?;

    // Step 4: Record the metadata blob
    metadata_store.set(&token_id, params.metadata.clone());

    // Step 5: Announce the mint
    events.emit(NftEvent::NftMint(vec![NftMintLog {
        owner_id: params.owner_id.clone(),
        token_ids: vec![token_id.clone()],
    }]));
    debug!("minted token {} for {}", token_id, params.owner_id);

    // Step 6: Return the token with its metadata attached
    token.metadata = Some(params.metadata);
    Ok(token)
}
