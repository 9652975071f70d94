//! Vault domain types

use candid::{CandidType, Deserialize, Nat, Principal};

/// The two ledgers the vault custodies
#[derive(CandidType, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TokenPair {
    pub base: Principal,
    pub trade: Principal,
}

/// Swap venue bindings: pool, router, quoter, and the pool fee tier
#[derive(CandidType, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct VenueConfig {
    pub pool: Principal,
    pub router: Principal,
    pub quoter: Principal,
    pub fee_tier: u32,
}

/// Which way a trade toggled the vault
#[derive(CandidType, Deserialize, Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum TradeDirection {
    /// base → trade (entering the position)
    Buy,
    /// trade → base (exiting the position)
    Sell,
}

/// Record of one executed trade
#[derive(CandidType, Deserialize, Clone, Debug, PartialEq, serde::Serialize)]
pub struct TradeRecord {
    pub timestamp: u64,
    pub caller: Principal,
    pub direction: TradeDirection,
    pub sold_token: Principal,
    pub sold_amount: Nat,
    pub received_token: Principal,
    pub received_amount: Nat,
    pub minimum_out: Nat,
}

/// Vault status snapshot for monitoring
#[derive(CandidType, Deserialize, Debug)]
pub struct VaultStatus {
    pub owner: Option<Principal>,
    pub trader: Option<Principal>,
    pub configured: bool,
    pub is_trade_active: bool,
    pub trading_stopped: bool,
    pub last_trade_timestamp: Option<u64>,
    pub next_trade_allowed_at: Option<u64>,
    pub recent_trades: Vec<TradeRecord>,
}

/// Both custody balances, snapshotted in one call
#[derive(CandidType, Deserialize, Clone, Debug)]
pub struct VaultBalances {
    pub base_token: Principal,
    pub base_amount: Nat,
    pub trade_token: Principal,
    pub trade_amount: Nat,
}
