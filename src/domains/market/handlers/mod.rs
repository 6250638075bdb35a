// Market domain handlers
pub mod price_handler;
