// Wallet domain models
pub mod balance;

pub use balance::*;
