//! Error types for the trading vault
//!
//! One crate-wide `VaultError` wraps per-domain sub-enums so every failure
//! carries enough context to diagnose from the canister log alone. All
//! errors are rejected synchronously; a failed call never leaves partial
//! vault state behind.

use candid::{CandidType, Deserialize};
use std::fmt;

pub type Result<T> = std::result::Result<T, VaultError>;

/// Top-level error type returned by every vault endpoint
#[derive(CandidType, Deserialize, Debug, Clone, PartialEq)]
pub enum VaultError {
    Auth(AuthError),
    Config(ConfigError),
    Trade(TradeError),
    Swap(SwapError),
    Ledger(LedgerError),
    Withdraw(WithdrawError),
    System(SystemError),
}

/// Caller identity failed the role check for the attempted operation
#[derive(CandidType, Deserialize, Debug, Clone, PartialEq)]
pub enum AuthError {
    Unauthorized {
        caller: String,
        required: String,
    },
}

/// Lifecycle and configuration failures
#[derive(CandidType, Deserialize, Debug, Clone, PartialEq)]
pub enum ConfigError {
    AlreadyInitialized,
    NotConfigured,
    InvalidTokenPair {
        reason: String,
    },
}

/// Trade state machine guard failures
#[derive(CandidType, Deserialize, Debug, Clone, PartialEq)]
pub enum TradeError {
    TradingStopped,
    CooldownActive {
        remaining_seconds: u64,
    },
}

/// Swap gateway failures (quote, approval, execution)
#[derive(CandidType, Deserialize, Debug, Clone, PartialEq)]
pub enum SwapError {
    NothingToSwap {
        token: String,
    },
    QuoteFailed {
        reason: String,
    },
    ApprovalFailed {
        token: String,
        amount: String,
        reason: String,
    },
    SwapFailed {
        token_in: String,
        token_out: String,
        amount: String,
        reason: String,
    },
    SlippageExceeded {
        minimum: String,
        actual: String,
    },
}

/// Token ledger boundary failures
#[derive(CandidType, Deserialize, Debug, Clone, PartialEq)]
pub enum LedgerError {
    CallFailed {
        canister: String,
        method: String,
        reason: String,
    },
    TransferFailed {
        token: String,
        amount: String,
        reason: String,
    },
}

/// Withdrawal validation failures
#[derive(CandidType, Deserialize, Debug, Clone, PartialEq)]
pub enum WithdrawError {
    InvalidToken {
        token: String,
    },
    NoBalance {
        token: String,
    },
}

/// Cross-cutting system failures
#[derive(CandidType, Deserialize, Debug, Clone, PartialEq)]
pub enum SystemError {
    ReentrantCall {
        operation: String,
    },
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VaultError::Auth(e) => write!(f, "{}", e),
            VaultError::Config(e) => write!(f, "{}", e),
            VaultError::Trade(e) => write!(f, "{}", e),
            VaultError::Swap(e) => write!(f, "{}", e),
            VaultError::Ledger(e) => write!(f, "{}", e),
            VaultError::Withdraw(e) => write!(f, "{}", e),
            VaultError::System(e) => write!(f, "{}", e),
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Unauthorized { caller, required } => {
                write!(f, "Not authorized: {} is not {}", caller, required)
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::AlreadyInitialized => {
                write!(f, "Vault is already initialized")
            }
            ConfigError::NotConfigured => {
                write!(f, "Vault tokens and venue are not configured; run setup first")
            }
            ConfigError::InvalidTokenPair { reason } => {
                write!(f, "Invalid token pair: {}", reason)
            }
        }
    }
}

impl fmt::Display for TradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeError::TradingStopped => write!(f, "Trading is stopped"),
            TradeError::CooldownActive { remaining_seconds } => {
                write!(
                    f,
                    "Trade allowed only once per day ({}s of cooldown remaining)",
                    remaining_seconds
                )
            }
        }
    }
}

impl fmt::Display for SwapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapError::NothingToSwap { token } => {
                write!(f, "Nothing to swap: vault holds no {}", token)
            }
            SwapError::QuoteFailed { reason } => {
                write!(f, "Quote failed: {}", reason)
            }
            SwapError::ApprovalFailed { token, amount, reason } => {
                write!(f, "Approval of {} {} failed: {}", amount, token, reason)
            }
            SwapError::SwapFailed { token_in, token_out, amount, reason } => {
                write!(
                    f,
                    "Swap of {} {} for {} failed: {}",
                    amount, token_in, token_out, reason
                )
            }
            SwapError::SlippageExceeded { minimum, actual } => {
                write!(
                    f,
                    "Slippage exceeded: received {} below minimum {}",
                    actual, minimum
                )
            }
        }
    }
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::CallFailed { canister, method, reason } => {
                write!(f, "Ledger call {}.{} failed: {}", canister, method, reason)
            }
            LedgerError::TransferFailed { token, amount, reason } => {
                write!(f, "Transfer of {} {} failed: {}", amount, token, reason)
            }
        }
    }
}

impl fmt::Display for WithdrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WithdrawError::InvalidToken { token } => {
                write!(f, "Invalid token: {} is not held by this vault", token)
            }
            WithdrawError::NoBalance { token } => {
                write!(f, "No balance to withdraw for {}", token)
            }
        }
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::ReentrantCall { operation } => {
                write!(f, "Reentrant call rejected: {} is already in progress", operation)
            }
        }
    }
}
