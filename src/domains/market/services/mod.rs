// Market domain services
pub mod price_tracker;
pub mod state;

pub use price_tracker::SolPriceTracker;
pub use state::MarketState;
