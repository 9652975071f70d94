//! # Token Ledger Boundary
//!
//! `TokenLedger` is the vault's seam to the external token-balance
//! service. The production implementation talks ICRC-1/ICRC-2 to the
//! ledger canisters; tests substitute an in-memory double.
//!
//! ## Semantics Assumed of the Ledger
//! - Standard fungible-token behavior: no fee-on-transfer surprises, no
//!   balance-changing hooks beyond what the reentrancy guard already
//!   rejects
//! - `approve` and `transfer` act on the vault's own default account

use async_trait::async_trait;
use candid::{Nat, Principal};
use crate::infrastructure::{Result, VaultError, LedgerError, SwapError, APPROVAL_EXPIRY_NANOS};
use crate::types::icrc::{Account, Allowance, AllowanceArgs, ApproveArgs, ApproveError, TransferArg, TransferError};

#[cfg(test)]
pub mod mock;

/// Async seam over the external token-balance service
#[async_trait(?Send)]
pub trait TokenLedger {
    /// Balance of `account` on the `token` ledger
    async fn balance_of(&self, token: Principal, account: Account) -> Result<Nat>;

    /// Current allowance granted by `account` to `spender`
    async fn allowance(&self, token: Principal, account: Account, spender: Account) -> Result<Nat>;

    /// Approve `spender` to pull `amount` from the vault's account.
    /// Approving zero revokes. Returns the ledger block index.
    async fn approve(&self, token: Principal, spender: Account, amount: Nat) -> Result<Nat>;

    /// Transfer `amount` from the vault's account to `to`.
    /// Returns the ledger block index.
    async fn transfer(&self, token: Principal, to: Account, amount: Nat) -> Result<Nat>;
}

/// Production ledger client backed by inter-canister calls
pub struct IcrcLedger;

#[async_trait(?Send)]
impl TokenLedger for IcrcLedger {
    async fn balance_of(&self, token: Principal, account: Account) -> Result<Nat> {
        let (balance,): (Nat,) = ic_cdk::call(token, "icrc1_balance_of", (account,))
            .await
            .map_err(|(code, msg)| {
                VaultError::Ledger(LedgerError::CallFailed {
                    canister: token.to_text(),
                    method: "icrc1_balance_of".to_string(),
                    reason: format!("{} - {}", code as u32, msg),
                })
            })?;

        Ok(balance)
    }

    async fn allowance(&self, token: Principal, account: Account, spender: Account) -> Result<Nat> {
        let (allowance,): (Allowance,) = ic_cdk::call(
            token,
            "icrc2_allowance",
            (AllowanceArgs { account, spender },),
        )
        .await
        .map_err(|(code, msg)| {
            VaultError::Ledger(LedgerError::CallFailed {
                canister: token.to_text(),
                method: "icrc2_allowance".to_string(),
                reason: format!("{} - {}", code as u32, msg),
            })
        })?;

        Ok(allowance.allowance)
    }

    async fn approve(&self, token: Principal, spender: Account, amount: Nat) -> Result<Nat> {
        let approve_args = ApproveArgs {
            from_subaccount: None,
            spender,
            amount: amount.clone(),
            expected_allowance: None,
            expires_at: Some(ic_cdk::api::time() + APPROVAL_EXPIRY_NANOS),
            fee: None, // Use ledger default
            memo: None,
            created_at_time: Some(ic_cdk::api::time()),
        };

        let (result,): (std::result::Result<Nat, ApproveError>,) =
            ic_cdk::call(token, "icrc2_approve", (approve_args,))
                .await
                .map_err(|(code, msg)| {
                    VaultError::Swap(SwapError::ApprovalFailed {
                        token: token.to_text(),
                        amount: amount.to_string(),
                        reason: format!("Inter-canister call failed: {} - {}", code as u32, msg),
                    })
                })?;

        result.map_err(|e| {
            VaultError::Swap(SwapError::ApprovalFailed {
                token: token.to_text(),
                amount: amount.to_string(),
                reason: format!("{:?}", e),
            })
        })
    }

    async fn transfer(&self, token: Principal, to: Account, amount: Nat) -> Result<Nat> {
        let transfer_args = TransferArg {
            from_subaccount: None,
            to,
            amount: amount.clone(),
            fee: None, // Use ledger default
            memo: None,
            created_at_time: Some(ic_cdk::api::time()),
        };

        let (result,): (std::result::Result<Nat, TransferError>,) =
            ic_cdk::call(token, "icrc1_transfer", (transfer_args,))
                .await
                .map_err(|(code, msg)| {
                    VaultError::Ledger(LedgerError::TransferFailed {
                        token: token.to_text(),
                        amount: amount.to_string(),
                        reason: format!("Inter-canister call failed: {} - {}", code as u32, msg),
                    })
                })?;

        result.map_err(|e| {
            VaultError::Ledger(LedgerError::TransferFailed {
                token: token.to_text(),
                amount: amount.to_string(),
                reason: format!("{:?}", e),
            })
        })
    }
}
