//! Infrastructure - Shared utilities and types
//! Foundation layer for all other modules

pub mod access;
pub mod audit;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod math;
pub mod reentrancy;
pub mod stable_storage;
pub mod vault_state;

// Re-export commonly used items
pub use constants::*;
pub use errors::{
    Result, VaultError, AuthError, ConfigError, TradeError, SwapError, LedgerError,
    WithdrawError, SystemError,
};
pub use access::{permission_of, require_owner, require_trade_auth, Permission};
pub use reentrancy::VaultGuard;
