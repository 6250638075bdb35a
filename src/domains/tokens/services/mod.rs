// Tokens domain services
pub mod state;
pub mod token_service;

pub use state::TokenState;
pub use token_service::TokenService;
