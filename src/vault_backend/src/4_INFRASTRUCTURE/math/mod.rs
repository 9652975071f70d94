//! Pure mathematical functions - no I/O, no async
//! All functions here must be deterministic and side-effect free

use candid::Nat;
use num_bigint::BigUint;
use crate::infrastructure::errors::{Result, VaultError, SwapError};

/// Multiply two Nats and divide by a third with arbitrary precision
/// Formula: (a × b) ÷ c
pub fn multiply_and_divide(a: &Nat, b: &Nat, c: &Nat) -> Result<Nat> {
    if c == &Nat::from(0u64) {
        return Err(VaultError::Swap(SwapError::QuoteFailed {
            reason: format!("division by zero in ({} × {}) ÷ {}", a, b, c),
        }));
    }

    let a_big: BigUint = a.0.clone();
    let b_big: BigUint = b.0.clone();
    let c_big: BigUint = c.0.clone();

    let result = (a_big * b_big) / c_big;

    Ok(Nat::from(result))
}
