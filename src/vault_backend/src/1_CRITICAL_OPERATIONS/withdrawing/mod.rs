//! # Emergency Withdrawal
//!
//! Owner-only escape hatch: drain the vault's full balance of one held
//! token back to the owner. Runs under the same whole-vault lock as
//! `trade` so a withdrawal can never interleave with an in-flight swap.

use candid::{Nat, Principal};
use crate::infrastructure::{
    Result, VaultError, WithdrawError, VaultGuard, audit, require_owner, vault_state,
};
use crate::types::icrc::Account;
use crate::_2_CUSTODY::ledger::TokenLedger;

/// Transfer the vault's entire balance of `token` to the owner
///
/// `token` must be one of the two bound custody tokens; anything else is
/// rejected outright so a typo cannot silently no-op against an unrelated
/// ledger.
pub async fn withdraw_token(
    caller: Principal,
    now: u64,
    vault: Principal,
    token: Principal,
    ledger: &dyn TokenLedger,
) -> Result<Nat> {
    vault_state::with_state(|state| require_owner(state, caller))?;

    let _guard = VaultGuard::acquire("withdraw")?;

    let pair = vault_state::token_pair()?;
    if token != pair.base && token != pair.trade {
        return Err(VaultError::Withdraw(WithdrawError::InvalidToken {
            token: token.to_text(),
        }));
    }

    let balance = ledger.balance_of(token, Account::from(vault)).await?;
    if balance == Nat::from(0u64) {
        return Err(VaultError::Withdraw(WithdrawError::NoBalance {
            token: token.to_text(),
        }));
    }

    // require_owner already proved caller == owner
    let block = ledger
        .transfer(token, Account::from(caller), balance.clone())
        .await?;

    audit::record(caller, now, format!("WITHDRAW {} of {}", balance, token));
    crate::log!(
        "✅ Withdrawal complete: {} of {} to {} (block: {})",
        balance,
        token,
        caller,
        block
    );

    Ok(balance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use crate::infrastructure::{AuthError, SystemError};
    use crate::_2_CUSTODY::ledger::mock::MockLedger;

    fn principal(tag: u8) -> Principal {
        Principal::from_slice(&[tag; 4])
    }

    struct Fixture {
        vault: Principal,
        owner: Principal,
        base: Principal,
        trade: Principal,
        ledger: MockLedger,
    }

    fn fixture() -> Fixture {
        let vault = principal(0);
        let owner = principal(1);
        let base = principal(10);
        let trade = principal(11);

        vault_state::initialize(owner).unwrap();
        vault_state::setup(owner, 0, base, trade, 500, principal(20), principal(21), principal(22))
            .unwrap();

        Fixture {
            vault,
            owner,
            base,
            trade,
            ledger: MockLedger::new(vault),
        }
    }

    #[test]
    fn test_non_owner_cannot_withdraw() {
        let f = fixture();
        f.ledger.set_balance(f.base, f.vault, Nat::from(100u64));

        let result = block_on(withdraw_token(principal(9), 0, f.vault, f.base, &f.ledger));
        assert!(matches!(
            result,
            Err(VaultError::Auth(AuthError::Unauthorized { .. }))
        ));
        assert_eq!(f.ledger.balance(f.base, f.vault), Nat::from(100u64));
    }

    #[test]
    fn test_unbound_token_is_invalid() {
        let f = fixture();
        let result = block_on(withdraw_token(f.owner, 0, f.vault, principal(99), &f.ledger));
        assert!(matches!(
            result,
            Err(VaultError::Withdraw(WithdrawError::InvalidToken { .. }))
        ));
    }

    #[test]
    fn test_zero_balance_rejected() {
        let f = fixture();
        let result = block_on(withdraw_token(f.owner, 0, f.vault, f.base, &f.ledger));
        assert!(matches!(
            result,
            Err(VaultError::Withdraw(WithdrawError::NoBalance { .. }))
        ));
    }

    #[test]
    fn test_withdraw_drains_full_balance_to_owner() {
        let f = fixture();
        f.ledger.set_balance(f.base, f.vault, Nat::from(10_000u64));

        let withdrawn =
            block_on(withdraw_token(f.owner, 0, f.vault, f.base, &f.ledger)).unwrap();

        assert_eq!(withdrawn, Nat::from(10_000u64));
        assert_eq!(f.ledger.balance(f.base, f.vault), Nat::from(0u64));
        assert_eq!(f.ledger.balance(f.base, f.owner), Nat::from(10_000u64));
    }

    #[test]
    fn test_both_sides_withdrawable() {
        let f = fixture();
        f.ledger.set_balance(f.base, f.vault, Nat::from(10u64));
        f.ledger.set_balance(f.trade, f.vault, Nat::from(20u64));

        block_on(withdraw_token(f.owner, 0, f.vault, f.base, &f.ledger)).unwrap();
        block_on(withdraw_token(f.owner, 0, f.vault, f.trade, &f.ledger)).unwrap();

        assert_eq!(f.ledger.balance(f.base, f.owner), Nat::from(10u64));
        assert_eq!(f.ledger.balance(f.trade, f.owner), Nat::from(20u64));

        // Second drain of an emptied side fails
        let again = block_on(withdraw_token(f.owner, 0, f.vault, f.base, &f.ledger));
        assert!(matches!(
            again,
            Err(VaultError::Withdraw(WithdrawError::NoBalance { .. }))
        ));
    }

    #[test]
    fn test_withdraw_respects_vault_lock() {
        let f = fixture();
        f.ledger.set_balance(f.base, f.vault, Nat::from(100u64));

        let _held = VaultGuard::acquire("trade").unwrap();
        let result = block_on(withdraw_token(f.owner, 0, f.vault, f.base, &f.ledger));
        assert!(matches!(
            result,
            Err(VaultError::System(SystemError::ReentrantCall { .. }))
        ));
    }
}
