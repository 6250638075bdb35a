// Links domain handlers
pub mod redirect_handler;
