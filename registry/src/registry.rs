// Token Registry Facade
// One explicit instance owning a token store, a metadata store and an
// event sink. Constructed once at process start and passed to whatever
// needs it; there is no ambient global registry.

use crate::error::RegistryResult;
use crate::events::{EventSink, LogEventSink};
use crate::metadata::{MemoryMetadataStore, MetadataStore};
use crate::operations;
use crate::operations::MintParams;
use crate::store::{MemoryTokenStore, TokenStore};
use crate::types::{Balance, Payout, Token};

/// A token registry bound to its storage backend and collaborators.
///
/// The defaults give a self-contained in-memory registry that logs its
/// events; embedders swap in their own backend or sink through
/// [`NftRegistry::with_parts`].
pub struct NftRegistry<S = MemoryTokenStore, M = MemoryMetadataStore, E = LogEventSink>
where
    S: TokenStore,
    M: MetadataStore,
    E: EventSink,
{
    store: S,
    metadata: M,
    events: E,
}

impl NftRegistry {
    /// Create an empty in-memory registry with a logging event sink
    pub fn new() -> Self {
        Self::with_parts(
            MemoryTokenStore::new(),
            MemoryMetadataStore::new(),
            LogEventSink,
        )
    }
}

impl Default for NftRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, M, E> NftRegistry<S, M, E>
where
    S: TokenStore,
    M: MetadataStore,
    E: EventSink,
{
    /// Assemble a registry from explicit parts
    pub fn with_parts(store: S, metadata: M, events: E) -> Self {
        Self {
            store,
            metadata,
            events,
        }
    }

    // ========================================
    // Mutating Operations
    // ========================================

    /// Mint a token and return it with its metadata attached
    pub fn mint(&mut self, params: MintParams) -> RegistryResult<Token> {
        operations::mint(&mut self.store, &mut self.metadata, &mut self.events, params)
    }

    /// Transfer a token to `receiver_id`; transferring an unknown token
    /// is a defined no-op
    pub fn transfer(&mut self, token_id: &str, receiver_id: &str) -> RegistryResult<()> {
        operations::transfer(&mut self.store, &mut self.events, token_id, receiver_id)
    }

    // ========================================
    // Read Operations
    // ========================================

    /// Get a token by id, metadata included
    pub fn nft_token(&self, token_id: &str) -> RegistryResult<Token> {
        operations::token(&self.store, &self.metadata, token_id)
    }

    /// Total number of minted tokens, as a decimal string
    pub fn nft_total_supply(&self) -> String {
        operations::total_supply(&self.store)
    }

    /// Number of tokens held by `account_id`, as a decimal string
    pub fn nft_supply_for_owner(&self, account_id: &str) -> String {
        operations::supply_for_owner(&self.store, account_id)
    }

    /// Page through all tokens in mint order
    pub fn nft_tokens(&self, from_index: Option<&str>, limit: u64) -> RegistryResult<Vec<Token>> {
        operations::tokens(&self.store, from_index, limit)
    }

    /// Page through the tokens held by `account_id`
    pub fn nft_tokens_for_owner(
        &self,
        account_id: &str,
        from_index: Option<&str>,
        limit: u64,
    ) -> RegistryResult<Vec<Token>> {
        operations::tokens_for_owner(&self.store, account_id, from_index, limit)
    }

    /// Payout breakdown for selling `token_id` at `sale_price`
    pub fn nft_payout(&self, token_id: &str, sale_price: Balance) -> RegistryResult<Payout> {
        operations::payout(&self.store, token_id, sale_price)
    }

    // ========================================
    // Component Access
    // ========================================

    /// The underlying token store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The metadata collaborator
    pub fn metadata(&self) -> &M {
        &self.metadata
    }

    /// The event sink
    pub fn events(&self) -> &E {
        &self.events
    }

    /// Mutable access to the event sink, mainly for draining buffered
    /// events out of a capturing sink
    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }
}
