// Swap domain models
pub mod envelope;
pub mod quote;
pub mod swap;

pub use envelope::*;
pub use quote::*;
pub use swap::*;
