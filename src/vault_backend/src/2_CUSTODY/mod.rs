//! Custody - Token ledger boundary
//! The only code that reads or moves the vault's token balances

pub mod balances;
pub mod ledger;

pub use ledger::{IcrcLedger, TokenLedger};
