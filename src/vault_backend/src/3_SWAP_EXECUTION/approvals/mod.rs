//! # Router Approval Module
//!
//! Grants the router an allowance for exactly one swap's input and resets
//! it to zero once the swap settles. The grant-execute-revoke bracket is
//! the only place a nonzero allowance may exist; no stale approval
//! survives a call.

use candid::{Nat, Principal};
use crate::infrastructure::Result;
use crate::types::icrc::Account;
use crate::_2_CUSTODY::ledger::TokenLedger;

/// Approve the router for the full swap input
pub async fn grant_router(
    ledger: &dyn TokenLedger,
    token: Principal,
    router: Principal,
    amount: Nat,
) -> Result<Nat> {
    crate::log!("📝 Approving {} of {} for router {}", amount, token, router);

    let block = ledger
        .approve(token, Account::from(router), amount)
        .await?;

    crate::log!("✅ Approval complete (block: {})", block);
    Ok(block)
}

/// Reset the router's allowance for `token` back to zero
pub async fn revoke_router(
    ledger: &dyn TokenLedger,
    token: Principal,
    router: Principal,
) -> Result<Nat> {
    ledger
        .approve(token, Account::from(router), Nat::from(0u64))
        .await
}

/// Current router allowance for a held token
///
/// Not part of the swap flow; operator diagnostics and the allowance-reset
/// tests read through this.
pub async fn router_allowance(
    ledger: &dyn TokenLedger,
    vault: Principal,
    token: Principal,
    router: Principal,
) -> Result<Nat> {
    ledger
        .allowance(token, Account::from(vault), Account::from(router))
        .await
}
