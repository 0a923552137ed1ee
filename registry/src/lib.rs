// In-process non-fungible token registry and marketplace primitives.
//
// Features:
// - Token registry with dual indexing (by id and by owner)
// - Deterministic, order-stable pagination over both indices
// - Ownership transfers with audit fields and structured events
// - Royalty payout splits with exact integer conservation
//
// Module Structure:
// - error: Error types
// - types: Core data structures (Token, TokenRoyalty, Payout, etc.)
// - store: Registry storage abstraction and in-memory backend
// - metadata: Metadata store collaborator
// - events: Event sink collaborator
// - operations: Core operation logic (mint, transfer, query, payout)
// - registry: Facade owning one store and its collaborators

pub mod error;
pub mod events;
pub mod metadata;
pub mod operations;
pub mod registry;
pub mod store;
pub mod types;

pub use error::{RegistryError, RegistryResult};
pub use events::{EventSink, LogEventSink, MemoryEventSink, NftEvent, NftMintLog, NftTransferLog};
pub use metadata::{MemoryMetadataStore, MetadataStore};
pub use operations::MintParams;
pub use registry::NftRegistry;
pub use store::{MemoryTokenStore, TokenStore};
pub use types::{
    AccountId, Balance, Payout, Token, TokenId, TokenMetadata, TokenRoyalty, MAX_DESCRIPTION_LENGTH,
    MAX_EXTRA_LENGTH, MAX_ROYALTY_RECIPIENTS, MAX_TITLE_LENGTH, MAX_URI_LENGTH, ROYALTY_SCALE,
};
