// Domain modules
pub mod links;
pub mod market;
pub mod swap;
pub mod tokens;
pub mod wallet;
