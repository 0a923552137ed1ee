// Registry Royalty Payout Calculator
// Splits a sale price among royalty recipients and the current owner.
// Pure advisory output for an external settlement mechanism; registry
// state is never touched.

use crate::error::{RegistryError, RegistryResult};
use crate::store::TokenStore;
use crate::types::{Balance, Payout, ROYALTY_SCALE};

/// Compute one recipient's cut of the sale price.
/// `share` is in basis points of the TOTAL sale price; integer floor
/// division, never floating point.
fn royalty_cut(sale_price: Balance, share: u16) -> RegistryResult<Balance> {
    sale_price
        .checked_mul(Balance::from(share))
        .ok_or(RegistryError::Overflow)?
        .checked_div(Balance::from(ROYALTY_SCALE))
        .ok_or(RegistryError::Overflow)
}

/// Compute the payout breakdown for selling `token_id` at `sale_price`
///
/// Without royalty terms the whole price goes to the current owner. With
/// royalty terms each recipient receives `sale_price * share / 10000`,
/// and the residual — including all rounding remainders — accrues to the
/// owner, additively if the owner also appears in the split. The returned
/// amounts always sum to `sale_price` exactly.
///
/// # Parameters
/// - `store`: Registry storage backend
/// - `token_id`: Token being sold
/// - `sale_price`: Sale price in indivisible units
///
/// # Returns
/// - `Ok(Payout)`: Amount owed per account
/// - `Err(RegistryError)`: `TokenNotFound` if absent
pub fn payout<S: TokenStore + ?Sized>(
    store: &S,
    token_id: &str,
    sale_price: Balance,
) -> RegistryResult<Payout> {
    // Step 1: Look up the token and its royalty terms
    let token = store.get(token_id)?;

    let mut payout = Payout::default();
    match token.royalty {
        // Step 2a: No royalty, the owner takes the whole price
        None => {
            payout.payout.insert(token.owner_id, sale_price);
        }
        // Step 2b: Pay each recipient its share, then credit the
        // residual to the owner
        Some(royalty) => {
            let mut distributed: Balance = 0;
            for (recipient, share) in &royalty.split_between {
                let amount = royalty_cut(sale_price, *share)?;
                *payout.payout.entry(recipient.clone()).or_insert(0) += amount;
                distributed = distributed
                    .checked_add(amount)
                    .ok_or(RegistryError::Overflow)?;
            }
            let residual = sale_price
                .checked_sub(distributed)
                .ok_or(RegistryError::Overflow)?;
            *payout.payout.entry(token.owner_id).or_insert(0) += residual;
        }
    }
    Ok(payout)
}
