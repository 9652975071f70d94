//! # Swap Gateway
//!
//! Translates "swap the vault's entire balance of A into B" into venue
//! calls without leaking approvals or losing funds to a stale quote.
//!
//! ## Swap Flow
//! 1. Read the vault's balance of the input token (zero → `NothingToSwap`)
//! 2. Quote the expected output for the bound fee tier
//! 3. Derive the minimum-output floor from the quote
//! 4. Approve the router for exactly the input balance
//! 5. Execute the swap with the floor as minimum out
//! 6. Reset the router allowance to zero on success AND on venue failure
//!
//! An allowance is nonzero only between steps 4 and 6.

use candid::{Nat, Principal};
use crate::infrastructure::{Result, VaultError, SwapError};
use crate::types::icrc::Account;
use crate::types::venue::{QuoteArgs, SwapArgs};
use crate::types::VenueConfig;
use crate::_2_CUSTODY::ledger::TokenLedger;
use super::venue::SwapVenue;
use super::{approvals, slippage};

/// Result of one directed full-balance swap
#[derive(Clone, Debug)]
pub struct SwapOutcome {
    pub amount_in: Nat,
    pub amount_out: Nat,
    pub minimum_out: Nat,
}

/// Swap the vault's entire balance of `token_in` into `token_out`
pub async fn swap_full_balance(
    vault: Principal,
    token_in: Principal,
    token_out: Principal,
    venue_cfg: &VenueConfig,
    ledger: &dyn TokenLedger,
    venue: &dyn SwapVenue,
) -> Result<SwapOutcome> {
    let balance = ledger.balance_of(token_in, Account::from(vault)).await?;
    if balance == Nat::from(0u64) {
        return Err(VaultError::Swap(SwapError::NothingToSwap {
            token: token_in.to_text(),
        }));
    }

    let expected = venue
        .quote(QuoteArgs {
            token_in,
            token_out,
            fee_tier: venue_cfg.fee_tier,
            amount_in: balance.clone(),
        })
        .await?;

    let minimum_out = slippage::default_minimum_receive(&expected)?;

    crate::log!(
        "🔄 Swapping {} of {} for {} (expected {}, floor {})",
        balance,
        token_in,
        token_out,
        expected,
        minimum_out
    );

    approvals::grant_router(ledger, token_in, venue_cfg.router, balance.clone()).await?;

    let swap_result = venue
        .swap(SwapArgs {
            token_in,
            token_out,
            fee_tier: venue_cfg.fee_tier,
            amount_in: balance.clone(),
            min_amount_out: minimum_out.clone(),
            recipient: vault,
        })
        .await;

    // The allowance must not outlive this call, whether or not the venue
    // executed. Reset before inspecting the swap result.
    let reset_result = approvals::revoke_router(ledger, token_in, venue_cfg.router).await;

    let reply = swap_result?;

    if let Err(e) = reset_result {
        // The swap itself settled; the position commit must go through.
        // Leave the cleanup failure in the log for operator action.
        crate::log!("⚠️ Failed to reset router allowance for {}: {}", token_in, e);
    }

    slippage::check_execution(&minimum_out, &reply.amount_out)?;

    crate::log!(
        "✅ Swap complete: {} {} → {} {}",
        balance,
        token_in,
        reply.amount_out,
        token_out
    );

    Ok(SwapOutcome {
        amount_in: balance,
        amount_out: reply.amount_out,
        minimum_out,
    })
}
