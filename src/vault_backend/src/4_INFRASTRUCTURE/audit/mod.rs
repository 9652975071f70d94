//! Audit log for administrative actions
//!
//! Records ownership changes, trader changes, kill-switch toggles, manual
//! position overrides, reconfigurations, and withdrawals. Owner-readable,
//! capped, and persisted across upgrades.

use candid::Principal;
use std::cell::RefCell;
use crate::infrastructure::constants::MAX_AUDIT_LOG_ENTRIES;

/// One administrative action
#[derive(Clone, Debug, candid::CandidType, candid::Deserialize, serde::Serialize)]
pub struct AuditEntry {
    pub timestamp: u64,
    pub actor: Principal,
    pub action: String,
}

thread_local! {
    static AUDIT_LOG: RefCell<Vec<AuditEntry>> = RefCell::new(Vec::new());
}

/// Append an action to the audit log, evicting the oldest entries past the cap
pub fn record(actor: Principal, now: u64, action: String) {
    AUDIT_LOG.with(|log| {
        let mut log = log.borrow_mut();

        log.push(AuditEntry {
            timestamp: now,
            actor,
            action: action.clone(),
        });

        let len = log.len();
        if len > MAX_AUDIT_LOG_ENTRIES {
            log.drain(0..(len - MAX_AUDIT_LOG_ENTRIES));
        }
    });

    crate::log!("📝 {} by {}", action, actor);
}

/// Full audit log (owner-gated at the endpoint)
pub fn entries() -> Vec<AuditEntry> {
    AUDIT_LOG.with(|log| log.borrow().clone())
}

/// Export for stable storage before an upgrade
pub fn export_log() -> Vec<AuditEntry> {
    entries()
}

/// Restore from stable storage after an upgrade
pub fn import_log(entries: Vec<AuditEntry>) {
    AUDIT_LOG.with(|log| *log.borrow_mut() = entries);
}
