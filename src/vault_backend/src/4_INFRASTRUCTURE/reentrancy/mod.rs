//! Reentrancy guard for critical operations
//!
//! One exclusive lock scoped to the whole vault. Any guarded operation
//! (`trade`, `withdraw_token`) acquires it on entry; a nested call that
//! arrives while it is held (e.g. the swap venue calling back into the
//! vault mid-swap) is rejected with `ReentrantCall`.
//!
//! The lock is deliberately coarse: the vault executes one guarded
//! operation at a time, full stop. It is transient state and is never
//! persisted across upgrades.

use std::cell::Cell;
use crate::infrastructure::{Result, VaultError, SystemError};

thread_local! {
    static VAULT_LOCKED: Cell<bool> = Cell::new(false);
}

/// RAII guard over the vault-wide exclusive lock
///
/// Release happens in `Drop`, so every exit path (success, `?` early
/// return, or panic unwinding in tests) clears the lock.
pub struct VaultGuard {
    operation: &'static str,
}

impl VaultGuard {
    /// Acquire the vault lock, failing if any guarded operation is in flight
    pub fn acquire(operation: &'static str) -> Result<Self> {
        let acquired = VAULT_LOCKED.with(|locked| {
            if locked.get() {
                false
            } else {
                locked.set(true);
                true
            }
        });

        if acquired {
            Ok(VaultGuard { operation })
        } else {
            Err(VaultError::System(SystemError::ReentrantCall {
                operation: operation.to_string(),
            }))
        }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl Drop for VaultGuard {
    fn drop(&mut self) {
        VAULT_LOCKED.with(|locked| locked.set(false));
    }
}

/// Whether the vault lock is currently held (monitoring/tests)
pub fn is_locked() -> bool {
    VAULT_LOCKED.with(|locked| locked.get())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_prevents_reentrancy() {
        let _guard = VaultGuard::acquire("trade").expect("first acquire should succeed");

        let nested = VaultGuard::acquire("trade");
        assert!(matches!(
            nested,
            Err(VaultError::System(SystemError::ReentrantCall { .. }))
        ));
    }

    #[test]
    fn test_guard_releases_on_drop() {
        {
            let _guard = VaultGuard::acquire("withdraw").expect("acquire should succeed");
            assert!(is_locked());
        }
        assert!(!is_locked());

        let _guard = VaultGuard::acquire("trade").expect("should succeed after drop");
    }

    #[test]
    fn test_guard_blocks_across_operations() {
        // The lock is whole-vault: a withdraw cannot start while a trade runs
        let _trade = VaultGuard::acquire("trade").expect("acquire should succeed");
        assert!(VaultGuard::acquire("withdraw").is_err());
    }

    #[test]
    fn test_guard_releases_after_error_path() {
        let guard = VaultGuard::acquire("trade").unwrap();
        assert_eq!(guard.operation(), "trade");
        drop(guard);
        assert!(!is_locked());
    }
}
