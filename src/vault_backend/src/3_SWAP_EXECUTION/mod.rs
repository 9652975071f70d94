//! Swap Execution - DEX boundary
//! Quote, approve, execute, allowance-reset: nothing else touches the venue

pub mod approvals;
pub mod slippage;
pub mod swaps;
pub mod venue;

pub use swaps::{swap_full_balance, SwapOutcome};
pub use venue::{CanisterVenue, SwapVenue};
