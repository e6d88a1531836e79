use log::info;

use crate::domain::{Auction, Errors, Notifier};

/// Writes the closing notice to the log instead of mailing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, auction: &Auction) -> Result<(), Errors> {
        let bidders: Vec<&str> = auction.bids.iter().map(|bid| bid.bidder.name.as_str()).collect();
        info!(
            "Auction '{}' was closed; notifying {} bidder(s): {}",
            auction.name,
            bidders.len(),
            bidders.join(", ")
        );
        Ok(())
    }
}
