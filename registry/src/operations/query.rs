// Registry Query Operations
// Read-only lookups and the enumeration engine: deterministic,
// order-stable pagination over the global mint order and each owner's
// insertion order.

use crate::error::RegistryResult;
use crate::metadata::MetadataStore;
use crate::store::TokenStore;
use crate::types::Token;

use super::validation::parse_start_index;

// ========================================
// Single-Token Lookup
// ========================================

/// Get a token by id, with its metadata joined from the metadata store
///
/// # Parameters
/// - `store`: Registry storage backend
/// - `metadata_store`: Metadata collaborator
/// - `token_id`: Token ID
///
/// # Returns
/// - `Ok(Token)`: The token, metadata attached when present
/// - `Err(RegistryError)`: `TokenNotFound` if absent
pub fn token<S, M>(store: &S, metadata_store: &M, token_id: &str) -> RegistryResult<Token>
where
    S: TokenStore + ?Sized,
    M: MetadataStore + ?Sized,
{
    let mut token = store.get(token_id)?;
    token.metadata = metadata_store.get(token_id);
    Ok(token)
}

// ========================================
// Supply Queries
// ========================================

/// Total number of minted tokens, as a decimal string
pub fn total_supply<S: TokenStore + ?Sized>(store: &S) -> String {
    store.total_supply().to_string()
}

/// Number of tokens held by `account_id`, as a decimal string
/// (0 for an unknown owner)
pub fn supply_for_owner<S: TokenStore + ?Sized>(store: &S, account_id: &str) -> String {
    store.supply_for_owner(account_id).to_string()
}

// ========================================
// Enumeration Engine
// ========================================

/// Page through all tokens in global mint order
///
/// `from_index` is a stringified non-negative integer, defaulting to the
/// start of the collection. A `limit` of 0 means "no explicit limit"; the
/// page is always clipped to the collection end, and a start index past
/// the end yields an empty page rather than an error.
///
/// # Parameters
/// - `store`: Registry storage backend
/// - `from_index`: Positional start index
/// - `limit`: Maximum page size (0 = unbounded)
///
/// # Returns
/// - `Ok(Vec<Token>)`: The requested page
/// - `Err(RegistryError)`: `InvalidStartIndex` for non-numeric input
pub fn tokens<S: TokenStore + ?Sized>(
    store: &S,
    from_index: Option<&str>,
    limit: u64,
) -> RegistryResult<Vec<Token>> {
    let start = parse_start_index(from_index)?;
    let count = if limit == 0 { store.total_supply() } else { limit };
    let end = start.saturating_add(count);

    let mut page = Vec::new();
    for index in start..end {
        match store.token_at(index) {
            Some(token) => page.push(token),
            None => break,
        }
    }
    Ok(page)
}

/// Page through the tokens held by `account_id`, in the order the owner
/// received them; the slicing rule is identical to [`tokens`]
///
/// # Parameters
/// - `store`: Registry storage backend
/// - `account_id`: Owner to enumerate
/// - `from_index`: Positional start index
/// - `limit`: Maximum page size (0 = unbounded)
///
/// # Returns
/// - `Ok(Vec<Token>)`: The requested page (empty for an unknown owner)
/// - `Err(RegistryError)`: `InvalidStartIndex` for non-numeric input
pub fn tokens_for_owner<S: TokenStore + ?Sized>(
    store: &S,
    account_id: &str,
    from_index: Option<&str>,
    limit: u64,
) -> RegistryResult<Vec<Token>> {
    let start = parse_start_index(from_index)?;
    let count = if limit == 0 {
        store.supply_for_owner(account_id)
    } else {
        limit
    };
    let end = start.saturating_add(count);

    let mut page = Vec::new();
    for index in start..end {
        match store.token_id_for_owner_at(account_id, index) {
            Some(id) => page.push(store.get(&id)?),
            None => break,
        }
    }
    Ok(page)
}
