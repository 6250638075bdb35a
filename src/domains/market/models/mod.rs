// Market domain models
pub mod sol_price;

pub use sol_price::*;
