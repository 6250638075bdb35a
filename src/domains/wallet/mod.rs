// Wallet domain: on-chain balance lookups for the connected wallet
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
