// Wallet domain services
pub mod balance_service;
pub mod state;

pub use balance_service::BalanceService;
pub use state::WalletState;
