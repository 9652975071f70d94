//! Vault state aggregate and configuration operations
//!
//! All persistent vault state lives in one owned aggregate behind a single
//! thread-local cell. Operations borrow it explicitly through `with_state`
//! and `with_state_mut`; nothing else in the crate holds mutable statics.
//!
//! The reentrancy lock is NOT part of this aggregate: it is transient
//! per-call state and must never survive an upgrade.

use candid::{CandidType, Deserialize, Principal};
use std::cell::RefCell;
use crate::infrastructure::{Result, VaultError, ConfigError, audit, access};
use crate::types::{TokenPair, VenueConfig};

/// The vault singleton
///
/// `is_trade_active = false` means the vault intends to hold the base
/// token and is eligible to buy; `true` means it intends to hold the trade
/// token and is eligible to sell.
#[derive(CandidType, Deserialize, Clone, Debug, Default)]
pub struct VaultState {
    pub owner: Option<Principal>,
    pub trader: Option<Principal>,
    pub tokens: Option<TokenPair>,
    pub venue: Option<VenueConfig>,
    pub is_trade_active: bool,
    pub last_trade_timestamp: Option<u64>,
    pub trading_stopped: bool,
}

thread_local! {
    static VAULT_STATE: RefCell<VaultState> = RefCell::new(VaultState::default());
}

pub fn with_state<R>(f: impl FnOnce(&VaultState) -> R) -> R {
    VAULT_STATE.with(|state| f(&state.borrow()))
}

pub fn with_state_mut<R>(f: impl FnOnce(&mut VaultState) -> R) -> R {
    VAULT_STATE.with(|state| f(&mut state.borrow_mut()))
}

// === LIFECYCLE ===

/// One-time initialization, wired to the canister install hook
///
/// Sets the owner to the installing principal and leaves every flag
/// zeroed. A second invocation fails: storage is allocated exactly once
/// and logic upgrades preserve it.
pub fn initialize(owner: Principal) -> Result<()> {
    with_state_mut(|state| {
        if state.owner.is_some() {
            return Err(VaultError::Config(ConfigError::AlreadyInitialized));
        }
        state.owner = Some(owner);
        Ok(())
    })
}

/// Bind the custody token pair and the swap venue (owner-only)
///
/// Re-running setup after launch is a deliberate reconfiguration: it
/// replaces the token and venue bindings but never touches
/// `is_trade_active`, `last_trade_timestamp`, or `trading_stopped`.
pub fn setup(
    caller: Principal,
    now: u64,
    base_token: Principal,
    trade_token: Principal,
    fee_tier: u32,
    pool: Principal,
    router: Principal,
    quoter: Principal,
) -> Result<()> {
    with_state_mut(|state| {
        access::require_owner(state, caller)?;

        if base_token == trade_token {
            return Err(VaultError::Config(ConfigError::InvalidTokenPair {
                reason: "base and trade token must differ".to_string(),
            }));
        }

        state.tokens = Some(TokenPair {
            base: base_token,
            trade: trade_token,
        });
        state.venue = Some(VenueConfig {
            pool,
            router,
            quoter,
            fee_tier,
        });
        Ok(())
    })?;

    audit::record(
        caller,
        now,
        format!(
            "SETUP base={} trade={} fee_tier={}",
            base_token, trade_token, fee_tier
        ),
    );
    Ok(())
}

// === ROLE MANAGEMENT ===

/// Replace the owner immediately (single-step handover)
pub fn transfer_ownership(caller: Principal, now: u64, new_owner: Principal) -> Result<()> {
    with_state_mut(|state| {
        access::require_owner(state, caller)?;
        state.owner = Some(new_owner);
        Ok(())
    })?;

    audit::record(caller, now, format!("OWNERSHIP_TRANSFERRED to {}", new_owner));
    Ok(())
}

/// Appoint or clear the trader (owner-only)
pub fn set_trader(caller: Principal, now: u64, trader: Option<Principal>) -> Result<()> {
    with_state_mut(|state| {
        access::require_owner(state, caller)?;
        state.trader = trader;
        Ok(())
    })?;

    let action = match trader {
        Some(t) => format!("TRADER_SET {}", t),
        None => "TRADER_CLEARED".to_string(),
    };
    audit::record(caller, now, action);
    Ok(())
}

// === MANUAL OVERRIDES ===

/// Overwrite the position flag (owner-only)
///
/// Moves no tokens. Careless use desynchronizes the flag from actual
/// custody; the owner is expected to reconcile via `withdraw_token` or a
/// later `trade`.
pub fn set_is_trade_active(caller: Principal, now: u64, active: bool) -> Result<()> {
    with_state_mut(|state| {
        access::require_owner(state, caller)?;
        state.is_trade_active = active;
        Ok(())
    })?;

    audit::record(caller, now, format!("TRADE_ACTIVE_OVERRIDE {}", active));
    Ok(())
}

/// Toggle the kill-switch (owner-only)
///
/// While stopped, `trade` is rejected unconditionally, regardless of
/// cooldown or position.
pub fn set_trading_stopped(caller: Principal, now: u64, stopped: bool) -> Result<()> {
    with_state_mut(|state| {
        access::require_owner(state, caller)?;
        state.trading_stopped = stopped;
        Ok(())
    })?;

    audit::record(caller, now, format!("TRADING_STOPPED {}", stopped));
    Ok(())
}

// === READ ACCESS ===

pub fn owner() -> Option<Principal> {
    with_state(|state| state.owner)
}

pub fn trader() -> Option<Principal> {
    with_state(|state| state.trader)
}

pub fn is_trade_active() -> bool {
    with_state(|state| state.is_trade_active)
}

pub fn trading_stopped() -> bool {
    with_state(|state| state.trading_stopped)
}

pub fn last_trade_timestamp() -> Option<u64> {
    with_state(|state| state.last_trade_timestamp)
}

/// Bound token pair, or `NotConfigured` before setup
pub fn token_pair() -> Result<TokenPair> {
    with_state(|state| {
        state
            .tokens
            .clone()
            .ok_or(VaultError::Config(ConfigError::NotConfigured))
    })
}

/// Bound venue configuration, or `NotConfigured` before setup
pub fn venue_config() -> Result<VenueConfig> {
    with_state(|state| {
        state
            .venue
            .clone()
            .ok_or(VaultError::Config(ConfigError::NotConfigured))
    })
}

// === UPGRADE PERSISTENCE ===

pub fn export_state() -> VaultState {
    with_state(|state| state.clone())
}

pub fn import_state(state: VaultState) {
    with_state_mut(|current| *current = state);
}
