pub mod closer;
pub mod notifier;
pub mod payment_generator;

pub use self::closer::AuctionCloser;
pub use self::notifier::LogNotifier;
pub use self::payment_generator::PaymentGenerator;
