//! # Trade State Machine
//!
//! The vault's one privileged operation: toggle the entire balance
//! between the base and trade tokens through the swap venue.
//!
//! ## States
//! - `is_trade_active = false`: holding base, next trade buys
//! - `is_trade_active = true`: holding trade, next trade sells
//!
//! ## Guard Order
//! 1. Caller must be the owner or the appointed trader
//! 2. The vault-wide reentrancy lock must be free
//! 3. The vault must be configured
//! 4. The kill-switch takes precedence over everything else, so the
//!    operator can always freeze activity regardless of cooldown state
//! 5. At least 24 hours must have passed since the last trade
//!
//! A failure at any guard leaves state and custody untouched. The
//! position flag and cooldown timestamp commit only after the venue
//! confirms execution.

use std::cell::RefCell;
use candid::Principal;
use crate::infrastructure::{
    Result, VaultError, ConfigError, TradeError, VaultGuard, vault_state,
    require_trade_auth, MAX_TRADE_HISTORY, TRADE_COOLDOWN_NANOS, NANOS_PER_SECOND,
};
use crate::types::{TradeDirection, TradeRecord, VaultStatus};
use crate::_2_CUSTODY::ledger::TokenLedger;
use crate::_3_SWAP_EXECUTION::venue::SwapVenue;
use crate::_3_SWAP_EXECUTION::swaps;


thread_local! {
    static TRADE_HISTORY: RefCell<Vec<TradeRecord>> = RefCell::new(Vec::new());
}

/// Number of recent trades included in the status snapshot
const STATUS_RECENT_TRADES: usize = 10;

/// Toggle the vault's position through the swap venue
///
/// From `HoldingBase` swaps base→trade and sets `is_trade_active`; from
/// `HoldingTrade` swaps trade→base and clears it. Either way the whole
/// balance of the held side is the swap input and the cooldown restarts.
pub async fn trade(
    caller: Principal,
    now: u64,
    vault: Principal,
    ledger: &dyn TokenLedger,
    venue: &dyn SwapVenue,
) -> Result<TradeRecord> {
    vault_state::with_state(|state| require_trade_auth(state, caller))?;

    let _guard = VaultGuard::acquire("trade")?;

    let snapshot = vault_state::with_state(|state| {
        let pair = state
            .tokens
            .clone()
            .ok_or(VaultError::Config(ConfigError::NotConfigured))?;
        let venue_cfg = state
            .venue
            .clone()
            .ok_or(VaultError::Config(ConfigError::NotConfigured))?;

        if state.trading_stopped {
            return Err(VaultError::Trade(TradeError::TradingStopped));
        }

        if let Some(last) = state.last_trade_timestamp {
            let elapsed = now.saturating_sub(last);
            if elapsed < TRADE_COOLDOWN_NANOS {
                return Err(VaultError::Trade(TradeError::CooldownActive {
                    remaining_seconds: (TRADE_COOLDOWN_NANOS - elapsed) / NANOS_PER_SECOND,
                }));
            }
        }

        Ok((pair, venue_cfg, state.is_trade_active))
    });
    let (pair, venue_cfg, active) = snapshot?;

    let (token_in, token_out, direction) = if active {
        (pair.trade, pair.base, TradeDirection::Sell)
    } else {
        (pair.base, pair.trade, TradeDirection::Buy)
    };

    crate::log!("🔄 Trade {:?}: {} → {}", direction, token_in, token_out);

    let outcome =
        swaps::swap_full_balance(vault, token_in, token_out, &venue_cfg, ledger, venue).await?;

    // Commit the toggle only now that the venue has settled
    vault_state::with_state_mut(|state| {
        state.is_trade_active = !active;
        state.last_trade_timestamp = Some(now);
    });

    let record = TradeRecord {
        timestamp: now,
        caller,
        direction,
        sold_token: token_in,
        sold_amount: outcome.amount_in,
        received_token: token_out,
        received_amount: outcome.amount_out,
        minimum_out: outcome.minimum_out,
    };
    record_trade(record.clone());

    crate::log!(
        "✅ Trade complete: sold {} {}, received {} {}",
        record.sold_amount,
        record.sold_token,
        record.received_amount,
        record.received_token
    );

    Ok(record)
}

/// Append a trade to history, evicting the oldest past the cap
fn record_trade(record: TradeRecord) {
    TRADE_HISTORY.with(|history| {
        let mut history = history.borrow_mut();
        history.push(record);
        if history.len() > MAX_TRADE_HISTORY {
            history.remove(0);
        }
    });
}

/// Full trade history (oldest first)
pub fn get_full_trade_history() -> Vec<TradeRecord> {
    TRADE_HISTORY.with(|history| history.borrow().clone())
}

/// Status snapshot for monitoring
pub fn vault_status() -> VaultStatus {
    let recent_trades = TRADE_HISTORY.with(|history| {
        let history = history.borrow();
        let start = history.len().saturating_sub(STATUS_RECENT_TRADES);
        history[start..].to_vec()
    });

    vault_state::with_state(|state| VaultStatus {
        owner: state.owner,
        trader: state.trader,
        configured: state.tokens.is_some() && state.venue.is_some(),
        is_trade_active: state.is_trade_active,
        trading_stopped: state.trading_stopped,
        last_trade_timestamp: state.last_trade_timestamp,
        next_trade_allowed_at: state
            .last_trade_timestamp
            .map(|last| last + TRADE_COOLDOWN_NANOS),
        recent_trades,
    })
}

// === UPGRADE PERSISTENCE ===

pub fn export_history_for_stable() -> Vec<TradeRecord> {
    get_full_trade_history()
}

pub fn load_history_from_stable(history: Vec<TradeRecord>) {
    TRADE_HISTORY.with(|cell| *cell.borrow_mut() = history);
}
