//! # Swap Venue Boundary
//!
//! `SwapVenue` is the seam to the external price-discovery and execution
//! service. The venue is untrusted in one specific way: its calls may
//! attempt to reenter the vault, which the reentrancy guard rejects. It is
//! trusted in another: it either honors `min_amount_out` or rejects.
//!
//! The production implementation talks to the quoter and router canisters
//! bound at setup.

use async_trait::async_trait;
use candid::Nat;
use crate::infrastructure::{Result, VaultError, SwapError, vault_state};
use crate::types::venue::{QuoteArgs, QuoteReply, SwapArgs, SwapReply};

#[cfg(test)]
pub mod mock;

/// Async seam over the external swap venue
#[async_trait(?Send)]
pub trait SwapVenue {
    /// Expected output for an exact-input swap, without executing it
    async fn quote(&self, args: QuoteArgs) -> Result<Nat>;

    /// Execute an exact-input swap; the venue honors `min_amount_out` or
    /// rejects the whole swap
    async fn swap(&self, args: SwapArgs) -> Result<SwapReply>;
}

/// Production venue client
///
/// Resolves the quoter and router canisters from the vault's venue
/// binding at call time, so a `setup` reconfiguration takes effect on the
/// next trade without rewiring anything.
pub struct CanisterVenue;

#[async_trait(?Send)]
impl SwapVenue for CanisterVenue {
    async fn quote(&self, args: QuoteArgs) -> Result<Nat> {
        let config = vault_state::venue_config()?;

        let (result,): (std::result::Result<QuoteReply, String>,) =
            ic_cdk::call(config.quoter, "quote", (args,))
                .await
                .map_err(|(code, msg)| {
                    VaultError::Swap(SwapError::QuoteFailed {
                        reason: format!("Inter-canister call failed: {} - {}", code as u32, msg),
                    })
                })?;

        match result {
            Ok(reply) => Ok(reply.amount_out),
            Err(e) => Err(VaultError::Swap(SwapError::QuoteFailed { reason: e })),
        }
    }

    async fn swap(&self, args: SwapArgs) -> Result<SwapReply> {
        let config = vault_state::venue_config()?;
        let token_in = args.token_in;
        let token_out = args.token_out;
        let amount_in = args.amount_in.clone();

        let (result,): (std::result::Result<SwapReply, String>,) =
            ic_cdk::call(config.router, "swap", (args,))
                .await
                .map_err(|(code, msg)| {
                    VaultError::Swap(SwapError::SwapFailed {
                        token_in: token_in.to_text(),
                        token_out: token_out.to_text(),
                        amount: amount_in.to_string(),
                        reason: format!("Inter-canister call failed: {} - {}", code as u32, msg),
                    })
                })?;

        // Surface the venue's own failure reason unmodified
        result.map_err(|e| {
            VaultError::Swap(SwapError::SwapFailed {
                token_in: token_in.to_text(),
                token_out: token_out.to_text(),
                amount: amount_in.to_string(),
                reason: e,
            })
        })
    }
}
