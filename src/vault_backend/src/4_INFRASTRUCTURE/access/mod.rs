//! Access control for vault entry points
//!
//! Resolves a caller principal to a permission level against the vault
//! state and rejects unauthorized calls before any state change. Role
//! checks have no side effects.

use candid::Principal;
use crate::infrastructure::{Result, VaultError, AuthError};
use crate::infrastructure::vault_state::VaultState;

/// Permission level a caller resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Owner,
    Trader,
    None,
}

/// Resolve the caller's permission level
pub fn permission_of(state: &VaultState, caller: Principal) -> Permission {
    if state.owner == Some(caller) {
        Permission::Owner
    } else if state.trader == Some(caller) {
        Permission::Trader
    } else {
        Permission::None
    }
}

/// Require the caller to be the vault owner
pub fn require_owner(state: &VaultState, caller: Principal) -> Result<()> {
    match permission_of(state, caller) {
        Permission::Owner => Ok(()),
        _ => Err(VaultError::Auth(AuthError::Unauthorized {
            caller: caller.to_text(),
            required: "the vault owner".to_string(),
        })),
    }
}

/// Require the caller to be the owner or the appointed trader
pub fn require_trade_auth(state: &VaultState, caller: Principal) -> Result<()> {
    match permission_of(state, caller) {
        Permission::Owner | Permission::Trader => Ok(()),
        Permission::None => Err(VaultError::Auth(AuthError::Unauthorized {
            caller: caller.to_text(),
            required: "the vault owner or trader".to_string(),
        })),
    }
}
