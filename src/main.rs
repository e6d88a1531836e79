use std::sync::Arc;

use auction_services::config::Settings;
use auction_services::domain::{Errors, Evaluator};
use auction_services::persistence::{JsonFileAuctionRepository, JsonFilePaymentRepository};
use auction_services::services::{AuctionCloser, LogNotifier, PaymentGenerator};
use log::info;

// One pass of the nightly job: close stale auctions, then bill the closed ones.
fn run(settings: &Settings) -> Result<(), Errors> {
    let auctions = Arc::new(JsonFileAuctionRepository::new(&settings.auctions_path));
    // fail fast on an unreadable store instead of logging a no-op run
    auctions.read_auctions()?;

    let mut closer = AuctionCloser::new(Box::new(auctions.clone()), Box::new(LogNotifier));
    closer.close();

    let payments = JsonFilePaymentRepository::new(&settings.payments_path);
    let mut generator = PaymentGenerator::new(Box::new(auctions), Box::new(payments), Box::new(Evaluator::new()));
    generator.generate();

    info!(
        "Run finished: {} auctions closed, {} payments generated",
        closer.total_closed(),
        generator.total_generated()
    );
    Ok(())
}

fn main() -> Result<(), Errors> {
    let settings = Settings::from_env();
    env_logger::Builder::new()
        .parse_filters(&settings.log_filter)
        .init();

    info!(
        "Using auctions from {} and payments in {}",
        settings.auctions_path.display(),
        settings.payments_path.display()
    );
    run(&settings)
}
