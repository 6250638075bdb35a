// Swap domain: Jupiter quote / swap-transaction proxy
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
