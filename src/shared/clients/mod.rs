// 외부 API 클라이언트
// External API clients
pub mod http;
pub mod jupiter;
pub mod solana;
pub mod solana_tracker;
pub mod sol_price;

pub use http::*;
pub use jupiter::*;
pub use solana::*;
pub use solana_tracker::*;
pub use sol_price::*;
