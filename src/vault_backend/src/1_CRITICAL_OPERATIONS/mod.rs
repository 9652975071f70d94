//! Critical Operations - trade toggle and emergency withdrawal
//! Highest-security zone: the only code that moves pooled value

pub mod trading;
pub mod withdrawing;
