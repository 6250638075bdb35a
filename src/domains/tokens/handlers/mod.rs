// Tokens domain handlers
pub mod token_handler;
