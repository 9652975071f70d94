//! Swap venue wire types
//!
//! The venue is a pool behind a router and quoter pair: the quoter prices
//! an exact-input swap without executing it, the router executes it with a
//! minimum-output bound and either honors the bound or rejects.

use candid::{CandidType, Deserialize, Nat, Principal};

#[derive(CandidType, Deserialize, Clone, Debug)]
pub struct QuoteArgs {
    pub token_in: Principal,
    pub token_out: Principal,
    pub fee_tier: u32,
    pub amount_in: Nat,
}

#[derive(CandidType, Deserialize, Clone, Debug)]
pub struct QuoteReply {
    pub amount_out: Nat,
}

#[derive(CandidType, Deserialize, Clone, Debug)]
pub struct SwapArgs {
    pub token_in: Principal,
    pub token_out: Principal,
    pub fee_tier: u32,
    pub amount_in: Nat,
    pub min_amount_out: Nat,
    pub recipient: Principal,
}

#[derive(CandidType, Deserialize, Clone, Debug)]
pub struct SwapReply {
    pub amount_out: Nat,
}
