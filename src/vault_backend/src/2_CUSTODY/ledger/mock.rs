//! In-memory ledger double for native unit tests
//!
//! Models a family of ICRC ledgers keyed by token principal. Subaccounts
//! are ignored; every account is its owner principal.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use async_trait::async_trait;
use candid::{Nat, Principal};
use crate::infrastructure::{Result, VaultError, LedgerError, SwapError};
use crate::types::icrc::Account;
use super::TokenLedger;

pub struct MockLedger {
    vault: Principal,
    balances: RefCell<HashMap<(Principal, Principal), Nat>>,
    allowances: RefCell<HashMap<(Principal, Principal, Principal), Nat>>,
    fail_approvals: Cell<bool>,
}

impl MockLedger {
    pub fn new(vault: Principal) -> Self {
        MockLedger {
            vault,
            balances: RefCell::new(HashMap::new()),
            allowances: RefCell::new(HashMap::new()),
            fail_approvals: Cell::new(false),
        }
    }

    pub fn set_balance(&self, token: Principal, owner: Principal, amount: Nat) {
        self.balances.borrow_mut().insert((token, owner), amount);
    }

    pub fn balance(&self, token: Principal, owner: Principal) -> Nat {
        self.balances
            .borrow()
            .get(&(token, owner))
            .cloned()
            .unwrap_or_else(|| Nat::from(0u64))
    }

    pub fn allowance_of(&self, token: Principal, owner: Principal, spender: Principal) -> Nat {
        self.allowances
            .borrow()
            .get(&(token, owner, spender))
            .cloned()
            .unwrap_or_else(|| Nat::from(0u64))
    }

    pub fn set_fail_approvals(&self, fail: bool) {
        self.fail_approvals.set(fail);
    }

    /// Remove `amount` from an account, saturating at zero
    pub fn debit(&self, token: Principal, owner: Principal, amount: &Nat) {
        let current = self.balance(token, owner);
        let next = if current > *amount {
            current - amount.clone()
        } else {
            Nat::from(0u64)
        };
        self.set_balance(token, owner, next);
    }

    /// Add `amount` to an account
    pub fn credit(&self, token: Principal, owner: Principal, amount: &Nat) {
        let current = self.balance(token, owner);
        self.set_balance(token, owner, current + amount.clone());
    }

    /// Consume part of an allowance after a pull (venue double uses this)
    pub fn consume_allowance(&self, token: Principal, owner: Principal, spender: Principal, amount: &Nat) {
        let current = self.allowance_of(token, owner, spender);
        let next = if current > *amount {
            current - amount.clone()
        } else {
            Nat::from(0u64)
        };
        self.allowances
            .borrow_mut()
            .insert((token, owner, spender), next);
    }
}

#[async_trait(?Send)]
impl TokenLedger for MockLedger {
    async fn balance_of(&self, token: Principal, account: Account) -> Result<Nat> {
        Ok(self.balance(token, account.owner))
    }

    async fn allowance(&self, token: Principal, account: Account, spender: Account) -> Result<Nat> {
        Ok(self.allowance_of(token, account.owner, spender.owner))
    }

    async fn approve(&self, token: Principal, spender: Account, amount: Nat) -> Result<Nat> {
        if self.fail_approvals.get() {
            return Err(VaultError::Swap(SwapError::ApprovalFailed {
                token: token.to_text(),
                amount: amount.to_string(),
                reason: "ledger rejected approval".to_string(),
            }));
        }

        self.allowances
            .borrow_mut()
            .insert((token, self.vault, spender.owner), amount);
        Ok(Nat::from(1u64))
    }

    async fn transfer(&self, token: Principal, to: Account, amount: Nat) -> Result<Nat> {
        let available = self.balance(token, self.vault);
        if available < amount {
            return Err(VaultError::Ledger(LedgerError::TransferFailed {
                token: token.to_text(),
                amount: amount.to_string(),
                reason: format!("insufficient funds: balance {}", available),
            }));
        }

        self.debit(token, self.vault, &amount);
        self.credit(token, to.owner, &amount);
        Ok(Nat::from(1u64))
    }
}
