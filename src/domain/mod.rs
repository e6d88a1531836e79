pub mod auctions;
pub mod bids;
pub mod clock;
pub mod core;
pub mod evaluator;
pub mod payments;
pub mod ports;

pub use self::auctions::*;
pub use self::bids::*;
pub use self::clock::*;
pub use self::core::*;
pub use self::evaluator::*;
pub use self::payments::*;
pub use self::ports::*;
