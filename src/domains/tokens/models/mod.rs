// Tokens domain models
pub mod token;

pub use token::*;
