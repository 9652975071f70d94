//! Operational constants for the trading vault
//! All durations are in nanoseconds (IC system time resolution)

/// Minimum interval between successive trades (24 hours)
pub const TRADE_COOLDOWN_NANOS: u64 = 86_400_000_000_000;

/// Nanoseconds per second, for converting remaining-cooldown into
/// human-readable error messages
pub const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Slippage tolerance applied to the quoter's expected output when
/// computing the minimum-output floor for a swap (basis points)
pub const SLIPPAGE_TOLERANCE_BPS: u64 = 100;

/// Basis-point denominator (100% = 10_000 bps)
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Router approval expiry in nanoseconds (15 minutes)
/// Long enough to survive network congestion, short enough that an
/// approval orphaned by a trapped call cannot linger
pub const APPROVAL_EXPIRY_NANOS: u64 = 900_000_000_000;

/// Maximum number of trade records kept in history
pub const MAX_TRADE_HISTORY: usize = 100;

/// Maximum number of audit log entries kept
pub const MAX_AUDIT_LOG_ENTRIES: usize = 1000;
