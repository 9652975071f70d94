//! Trading Vault Backend - Security-First Architecture with Numbered Zones
//!
//! Architecture:
//! 1_CRITICAL_OPERATIONS - Trade toggle, emergency withdrawal (highest security)
//! 2_CUSTODY - Token ledger boundary (balances, transfers, allowances)
//! 3_SWAP_EXECUTION - DEX interactions (quote, approve, swap, allowance reset)
//! 4_INFRASTRUCTURE - Access control, reentrancy, state, errors, audit
//!
//! The vault custodies exactly two tokens and toggles its entire balance
//! between them through an external swap venue, at most once per 24 hours.

// Import numbered modules with explicit paths
#[path = "1_CRITICAL_OPERATIONS/mod.rs"]
mod critical_operations_1;
use critical_operations_1 as _1_CRITICAL_OPERATIONS;

#[path = "2_CUSTODY/mod.rs"]
mod custody_2;
use custody_2 as _2_CUSTODY;

#[path = "3_SWAP_EXECUTION/mod.rs"]
mod swap_execution_3;
use swap_execution_3 as _3_SWAP_EXECUTION;

#[path = "4_INFRASTRUCTURE/mod.rs"]
mod infrastructure_4;
use infrastructure_4 as infrastructure;

mod types;

use candid::{candid_method, Nat, Principal};
use ic_cdk::{init, post_upgrade, pre_upgrade, query, update};
use infrastructure::{audit, vault_state, Result};
use types::{TradeRecord, VaultBalances, VaultStatus};
use _2_CUSTODY::IcrcLedger;
use _3_SWAP_EXECUTION::CanisterVenue;

// ===== CONFIGURATION (owner-only) =====

/// Bind the custody token pair and the swap venue
///
/// Re-running setup is a deliberate reconfiguration: it replaces the
/// bindings but never resets position state or accrued cooldown.
#[update]
#[candid_method(update)]
fn setup(
    base_token: Principal,
    trade_token: Principal,
    fee_tier: u32,
    pool: Principal,
    router: Principal,
    quoter: Principal,
) -> Result<()> {
    let caller = ic_cdk::caller();
    vault_state::setup(
        caller,
        ic_cdk::api::time(),
        base_token,
        trade_token,
        fee_tier,
        pool,
        router,
        quoter,
    )
}

#[update]
#[candid_method(update)]
fn transfer_ownership(new_owner: Principal) -> Result<()> {
    let caller = ic_cdk::caller();
    vault_state::transfer_ownership(caller, ic_cdk::api::time(), new_owner)
}

#[update]
#[candid_method(update)]
fn set_trader(trader: Option<Principal>) -> Result<()> {
    let caller = ic_cdk::caller();
    vault_state::set_trader(caller, ic_cdk::api::time(), trader)
}

#[update]
#[candid_method(update)]
fn set_is_trade_active(active: bool) -> Result<()> {
    let caller = ic_cdk::caller();
    vault_state::set_is_trade_active(caller, ic_cdk::api::time(), active)
}

#[update]
#[candid_method(update)]
fn set_trading_stopped(stopped: bool) -> Result<()> {
    let caller = ic_cdk::caller();
    vault_state::set_trading_stopped(caller, ic_cdk::api::time(), stopped)
}

// ===== TRADING =====

/// Toggle the vault's full balance between the base and trade tokens
#[update]
#[candid_method(update)]
async fn trade() -> Result<TradeRecord> {
    let caller = ic_cdk::caller();
    _1_CRITICAL_OPERATIONS::trading::trade(
        caller,
        ic_cdk::api::time(),
        ic_cdk::id(),
        &IcrcLedger,
        &CanisterVenue,
    )
    .await
}

// ===== WITHDRAWAL =====

/// Drain the vault's full balance of one held token back to the owner
#[update]
#[candid_method(update)]
async fn withdraw_token(token: Principal) -> Result<Nat> {
    let caller = ic_cdk::caller();
    _1_CRITICAL_OPERATIONS::withdrawing::withdraw_token(
        caller,
        ic_cdk::api::time(),
        ic_cdk::id(),
        token,
        &IcrcLedger,
    )
    .await
}

// ===== STATE QUERIES =====

#[query]
#[candid_method(query)]
fn owner() -> Option<Principal> {
    vault_state::owner()
}

#[query]
#[candid_method(query)]
fn trader() -> Option<Principal> {
    vault_state::trader()
}

#[query]
#[candid_method(query)]
fn is_trade_active() -> bool {
    vault_state::is_trade_active()
}

#[query]
#[candid_method(query)]
fn trading_stopped() -> bool {
    vault_state::trading_stopped()
}

#[query]
#[candid_method(query)]
fn last_trade_timestamp() -> Option<u64> {
    vault_state::last_trade_timestamp()
}

#[query]
#[candid_method(query)]
fn get_vault_status() -> VaultStatus {
    _1_CRITICAL_OPERATIONS::trading::vault_status()
}

/// Get full trade history (all trades since deployment, oldest first)
#[query]
#[candid_method(query)]
fn get_trade_history() -> Vec<TradeRecord> {
    _1_CRITICAL_OPERATIONS::trading::get_full_trade_history()
}

/// Get paginated trade history
#[query]
#[candid_method(query)]
fn get_trade_history_paginated(offset: u64, limit: u64) -> (Vec<TradeRecord>, u64) {
    let full_history = _1_CRITICAL_OPERATIONS::trading::get_full_trade_history();
    let total = full_history.len() as u64;

    let start = offset as usize;
    let end = std::cmp::min(start + (limit as usize), full_history.len());

    let page = if start < full_history.len() {
        full_history[start..end].to_vec()
    } else {
        Vec::new()
    };

    (page, total)
}

/// Get the audit log of administrative actions (owner only)
#[query]
#[candid_method(query)]
fn get_audit_log() -> Result<Vec<audit::AuditEntry>> {
    let caller = ic_cdk::caller();
    vault_state::with_state(|state| infrastructure::require_owner(state, caller))?;
    Ok(audit::entries())
}

/// Both custody balances in one snapshot
///
/// Must be an update call: balance reads are inter-canister calls to the
/// token ledgers and cannot run in query context.
#[update]
#[candid_method(update)]
async fn get_vault_balances() -> Result<VaultBalances> {
    _2_CUSTODY::balances::held_balances(ic_cdk::id(), &IcrcLedger).await
}

#[query]
#[candid_method(query)]
fn get_canister_id() -> Principal {
    ic_cdk::id()
}

// ===== INITIALIZATION =====

#[init]
fn init() {
    let deployer = ic_cdk::caller();
    if let Err(e) = vault_state::initialize(deployer) {
        ic_cdk::trap(&format!("Initialization failed: {}", e));
    }

    crate::log!("===================================");
    crate::log!("Trading Vault Initialized");
    crate::log!("Owner: {}", deployer);
    crate::log!("Architecture: Numbered Security Zones");
    crate::log!("===================================");
}

#[pre_upgrade]
fn pre_upgrade() {
    crate::log!("===================================");
    crate::log!("Trading Vault Pre-Upgrade");
    crate::log!("===================================");

    let vault = vault_state::export_state();
    let trade_history = _1_CRITICAL_OPERATIONS::trading::export_history_for_stable();
    let audit_log = audit::export_log();

    infrastructure::stable_storage::save_state(vault, trade_history, audit_log);
}

#[post_upgrade]
fn post_upgrade() {
    crate::log!("===================================");
    crate::log!("Trading Vault Post-Upgrade");
    crate::log!("===================================");

    let (vault, trade_history, audit_log) = infrastructure::stable_storage::restore_state();
    let trades_restored = trade_history.len();

    vault_state::import_state(vault);
    _1_CRITICAL_OPERATIONS::trading::load_history_from_stable(trade_history);
    audit::import_log(audit_log);

    crate::log!("✅ Vault upgraded successfully ({} trades restored)", trades_restored);
}

// ===== CANDID EXPORT =====

ic_cdk::export_candid!();
