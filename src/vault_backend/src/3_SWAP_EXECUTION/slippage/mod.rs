//! # Slippage Protection Module
//!
//! Turns the quoter's expected output into a minimum-output floor and
//! verifies execution against it.
//!
//! ## Policy
//! The floor is the expected output discounted by a fixed basis-point
//! tolerance (`SLIPPAGE_TOLERANCE_BPS`). The venue enforces the floor at
//! execution time; `check_execution` re-verifies the reply so a
//! misbehaving router cannot under-deliver silently.

use candid::Nat;
use num_traits::ToPrimitive;
use crate::infrastructure::{Result, VaultError, SwapError, BPS_DENOMINATOR, SLIPPAGE_TOLERANCE_BPS};
use crate::infrastructure::math::multiply_and_divide;

/// Minimum acceptable output for a quoted swap
///
/// ## Example
/// - Expected: 1_000_000, tolerance 100 bps → floor 990_000
pub fn minimum_receive(expected: &Nat, tolerance_bps: u64) -> Result<Nat> {
    if expected == &Nat::from(0u64) {
        return Err(VaultError::Swap(SwapError::QuoteFailed {
            reason: "venue quoted zero output".to_string(),
        }));
    }

    multiply_and_divide(
        expected,
        &Nat::from(BPS_DENOMINATOR - tolerance_bps),
        &Nat::from(BPS_DENOMINATOR),
    )
}

/// Verify the executed output met the floor
pub fn check_execution(minimum: &Nat, actual: &Nat) -> Result<()> {
    if actual < minimum {
        return Err(VaultError::Swap(SwapError::SlippageExceeded {
            minimum: minimum.to_string(),
            actual: actual.to_string(),
        }));
    }

    let minimum_f64 = minimum.0.to_u64().unwrap_or(u64::MAX) as f64;
    let actual_f64 = actual.0.to_u64().unwrap_or(u64::MAX) as f64;
    if minimum_f64 > 0.0 {
        crate::log!(
            "📊 Execution {:.2}% above floor",
            ((actual_f64 - minimum_f64) / minimum_f64) * 100.0
        );
    }

    Ok(())
}

/// Floor with the vault's standard tolerance
pub fn default_minimum_receive(expected: &Nat) -> Result<Nat> {
    minimum_receive(expected, SLIPPAGE_TOLERANCE_BPS)
}
