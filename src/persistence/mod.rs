pub mod json_file;
pub mod memory;

pub use self::json_file::{JsonFileAuctionRepository, JsonFilePaymentRepository};
pub use self::memory::{InMemoryAuctionRepository, InMemoryPaymentRepository};
