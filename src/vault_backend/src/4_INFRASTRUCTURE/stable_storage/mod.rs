//! Stable storage management for upgrade persistence
//!
//! Saves the vault aggregate, trade history, and audit log across logic
//! upgrades. The reentrancy lock is transient by design and excluded.

use candid::{CandidType, Deserialize};
use crate::infrastructure::audit::AuditEntry;
use crate::infrastructure::vault_state::VaultState;
use crate::types::TradeRecord;

#[derive(CandidType, Deserialize, Default)]
pub struct StableState {
    pub vault: VaultState,
    pub trade_history: Vec<TradeRecord>,
    pub audit_log: Vec<AuditEntry>,
}

#[cfg(target_arch = "wasm32")]
pub fn save_state(vault: VaultState, trade_history: Vec<TradeRecord>, audit_log: Vec<AuditEntry>) {
    let state = StableState { vault, trade_history, audit_log };
    crate::log!(
        "💾 Saving vault state ({} trades, {} audit entries) to stable storage",
        state.trade_history.len(),
        state.audit_log.len()
    );

    // If stable storage fails we log and continue rather than trapping:
    // trapping here would brick the upgrade, which is worse than losing
    // the history (custody itself lives on the token ledgers).
    match ic_cdk::storage::stable_save((state,)) {
        Ok(_) => {
            crate::log!("✅ State saved to stable memory");
        }
        Err(e) => {
            crate::log!("⚠️ WARNING: Failed to save state to stable memory: {}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn restore_state() -> (VaultState, Vec<TradeRecord>, Vec<AuditEntry>) {
    match ic_cdk::storage::stable_restore::<(StableState,)>() {
        Ok((state,)) => {
            crate::log!(
                "✅ Restored vault state ({} trades, {} audit entries) from stable storage",
                state.trade_history.len(),
                state.audit_log.len()
            );
            (state.vault, state.trade_history, state.audit_log)
        }
        Err(e) => {
            crate::log!("⚠️ No stable state to restore (first deployment or empty): {}", e);
            (VaultState::default(), Vec::new(), Vec::new())
        }
    }
}

// Stable memory only exists inside the canister runtime; the native build
// (unit tests) compiles the upgrade hooks against these no-op shims.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_state(
    _vault: VaultState,
    _trade_history: Vec<TradeRecord>,
    _audit_log: Vec<AuditEntry>,
) {
}

#[cfg(not(target_arch = "wasm32"))]
pub fn restore_state() -> (VaultState, Vec<TradeRecord>, Vec<AuditEntry>) {
    (VaultState::default(), Vec::new(), Vec::new())
}
