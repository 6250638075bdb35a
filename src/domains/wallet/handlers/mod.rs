// Wallet domain handlers
pub mod balance_handler;
