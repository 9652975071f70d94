//! Candid wire types shared across zones

pub mod icrc;
pub mod vault;
pub mod venue;

pub use vault::{TokenPair, TradeDirection, TradeRecord, VaultBalances, VaultStatus, VenueConfig};
