// Tokens domain: SolanaTracker search / 24h volume ranking, Jupiter token list fallback
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
