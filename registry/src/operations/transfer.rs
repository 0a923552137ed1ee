// Registry Transfer Operation
// Reassigns ownership of a token and announces the transfer.

use log::debug;

use crate::error::RegistryResult;
use crate::events::{EventSink, NftEvent, NftTransferLog};
use crate::store::TokenStore;

use super::validation::validate_account_id;

/// Transfer a token to a new owner
///
/// Transferring a nonexistent token is a defined no-op, not an error:
/// callers observe no state change and no event. This permissive policy is
/// part of the contract and relied upon by callers.
///
/// # Parameters
/// - `store`: Registry storage backend
/// - `events`: Event sink
/// - `token_id`: Token to move
/// - `receiver_id`: New owner
///
/// # Returns
/// - `Ok(())`: Transfer applied, or token absent (no-op)
/// - `Err(RegistryError)`: Invalid receiver id
pub fn transfer<S, E>(
    store: &mut S,
    events: &mut E,
    token_id: &str,
    receiver_id: &str,
) -> RegistryResult<()>
where
    S: TokenStore + ?Sized,
    E: EventSink + ?Sized,
{
    // Step 1: Input validation
    validate_account_id(receiver_id)?;

    // Step 2: Missing token is a no-op
    if !store.contains(token_id) {
        debug!("transfer of unknown token {} ignored", token_id);
        return Ok(());
    }

    // Step 3: Reassign ownership; both indices move in one critical section
    let token = store.reassign_owner(token_id, receiver_id)?;

    // Step 4: Announce the transfer
    events.emit(NftEvent::NftTransfer(vec![NftTransferLog {
        old_owner_id: token.prev_owner_id,
        new_owner_id: token.owner_id,
        token_ids: vec![token.id],
    }]));
    Ok(())
}
