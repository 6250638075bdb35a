// Shared errors
pub mod config_error;
pub mod swap_error;
pub mod token_error;
pub mod wallet_error;

pub use config_error::*;
pub use swap_error::*;
pub use token_error::*;
pub use wallet_error::*;
