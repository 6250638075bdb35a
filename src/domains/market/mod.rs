// Market domain: SOL/USD price shown in the footer
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
