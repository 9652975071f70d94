//! Venue double for native unit tests
//!
//! Prices swaps at a configurable rate and settles them against the
//! shared mock ledger the way the real venue settles against the token
//! canisters: it pulls the input through the router allowance and credits
//! the output to the recipient. A divergent execution rate simulates the
//! pool moving between quote and execution.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use async_trait::async_trait;
use candid::{Nat, Principal};
use crate::infrastructure::{Result, VaultError, SwapError, BPS_DENOMINATOR};
use crate::infrastructure::math::multiply_and_divide;
use crate::types::venue::{QuoteArgs, SwapArgs, SwapReply};
use crate::_2_CUSTODY::ledger::mock::MockLedger;
use super::SwapVenue;

pub struct MockVenue {
    pub ledger: Rc<MockLedger>,
    pub vault: Principal,
    pub router: Principal,
    /// Output per 10_000 units of input at quote time
    pub quote_rate_bps: Cell<u64>,
    /// Output rate at execution time; `None` means "same as quoted"
    pub execution_rate_bps: Cell<Option<u64>>,
    /// Forces the next swap to be rejected with this reason
    pub reject_swap: RefCell<Option<String>>,
    /// Last swap the router saw, for floor assertions
    pub last_swap: RefCell<Option<SwapArgs>>,
}

impl MockVenue {
    pub fn new(ledger: Rc<MockLedger>, vault: Principal, router: Principal) -> Self {
        MockVenue {
            ledger,
            vault,
            router,
            quote_rate_bps: Cell::new(BPS_DENOMINATOR),
            execution_rate_bps: Cell::new(None),
            reject_swap: RefCell::new(None),
            last_swap: RefCell::new(None),
        }
    }

    fn price(&self, amount_in: &Nat, rate_bps: u64) -> Result<Nat> {
        multiply_and_divide(
            amount_in,
            &Nat::from(rate_bps),
            &Nat::from(BPS_DENOMINATOR),
        )
    }
}

#[async_trait(?Send)]
impl SwapVenue for MockVenue {
    async fn quote(&self, args: QuoteArgs) -> Result<Nat> {
        self.price(&args.amount_in, self.quote_rate_bps.get())
    }

    async fn swap(&self, args: SwapArgs) -> Result<SwapReply> {
        *self.last_swap.borrow_mut() = Some(args.clone());

        if let Some(reason) = self.reject_swap.borrow_mut().take() {
            return Err(VaultError::Swap(SwapError::SwapFailed {
                token_in: args.token_in.to_text(),
                token_out: args.token_out.to_text(),
                amount: args.amount_in.to_string(),
                reason,
            }));
        }

        let granted = self
            .ledger
            .allowance_of(args.token_in, self.vault, self.router);
        if granted < args.amount_in {
            return Err(VaultError::Swap(SwapError::SwapFailed {
                token_in: args.token_in.to_text(),
                token_out: args.token_out.to_text(),
                amount: args.amount_in.to_string(),
                reason: format!("insufficient allowance: granted {}", granted),
            }));
        }

        let rate = self
            .execution_rate_bps
            .get()
            .unwrap_or_else(|| self.quote_rate_bps.get());
        let amount_out = self.price(&args.amount_in, rate)?;

        // Honor min_amount_out or reject the whole swap
        if amount_out < args.min_amount_out {
            return Err(VaultError::Swap(SwapError::SwapFailed {
                token_in: args.token_in.to_text(),
                token_out: args.token_out.to_text(),
                amount: args.amount_in.to_string(),
                reason: format!(
                    "output {} below minimum {}",
                    amount_out, args.min_amount_out
                ),
            }));
        }

        self.ledger.debit(args.token_in, self.vault, &args.amount_in);
        self.ledger
            .credit(args.token_out, args.recipient, &amount_out);
        self.ledger
            .consume_allowance(args.token_in, self.vault, self.router, &args.amount_in);

        Ok(SwapReply { amount_out })
    }
}
