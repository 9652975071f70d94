//! Custody balance snapshots
//!
//! Queries both held balances in parallel so callers see one coherent
//! picture of which side of the pair the vault is actually sitting on.

use candid::Principal;
use crate::infrastructure::{Result, vault_state};
use crate::types::icrc::Account;
use crate::types::VaultBalances;
use super::ledger::TokenLedger;

/// Snapshot the vault's balance of both bound tokens
pub async fn held_balances(vault: Principal, ledger: &dyn TokenLedger) -> Result<VaultBalances> {
    let pair = vault_state::token_pair()?;

    let (base_amount, trade_amount) = futures::join!(
        ledger.balance_of(pair.base, Account::from(vault)),
        ledger.balance_of(pair.trade, Account::from(vault)),
    );

    Ok(VaultBalances {
        base_token: pair.base,
        base_amount: base_amount?,
        trade_token: pair.trade,
        trade_amount: trade_amount?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use candid::Nat;
    use futures::executor::block_on;
    use crate::_2_CUSTODY::ledger::mock::MockLedger;
    use crate::infrastructure::vault_state;

    fn principal(tag: u8) -> Principal {
        Principal::from_slice(&[tag; 4])
    }

    #[test]
    fn test_held_balances_requires_setup() {
        let vault = principal(0);
        let ledger = MockLedger::new(vault);
        let result = block_on(held_balances(vault, &ledger));
        assert!(result.is_err());
    }

    #[test]
    fn test_held_balances_snapshots_both_sides() {
        let vault = principal(0);
        let owner = principal(1);
        let base = principal(10);
        let trade = principal(11);

        vault_state::initialize(owner).unwrap();
        vault_state::setup(owner, 0, base, trade, 500, principal(20), principal(21), principal(22))
            .unwrap();

        let ledger = MockLedger::new(vault);
        ledger.set_balance(base, vault, Nat::from(1_000u64));

        let balances = block_on(held_balances(vault, &ledger)).unwrap();
        assert_eq!(balances.base_amount, Nat::from(1_000u64));
        assert_eq!(balances.trade_amount, Nat::from(0u64));
    }
}
