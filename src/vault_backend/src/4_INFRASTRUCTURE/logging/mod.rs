//! Canister logging shim
//!
//! Routes operational log lines to the IC debug print on wasm targets and
//! to stdout on native targets, so modules that log can still be exercised
//! by native unit tests.

#[cfg(target_arch = "wasm32")]
pub fn print_log(message: impl AsRef<str>) {
    ic_cdk::println!("{}", message.as_ref());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn print_log(message: impl AsRef<str>) {
    println!("{}", message.as_ref());
}

/// Formatted logging macro used throughout the vault
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::infrastructure::logging::print_log(format!($($arg)*))
    };
}
