// Swap domain handlers
pub mod quote_handler;
pub mod swap_handler;

pub use quote_handler::*;
pub use swap_handler::*;
