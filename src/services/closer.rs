use chrono::Duration;
use log::{debug, error, info, warn};

use crate::domain::{AuctionRepository, Clock, Notifier, SystemClock};

/// Closes auctions that have been open for more than a week.
///
/// Each auction is handled on its own: a failed update or notification is
/// logged and the remaining auctions are still processed.
pub struct AuctionCloser {
    auctions: Box<dyn AuctionRepository>,
    notifier: Box<dyn Notifier>,
    clock: Box<dyn Clock>,
    total_closed: usize,
}

impl AuctionCloser {
    pub fn new(auctions: Box<dyn AuctionRepository>, notifier: Box<dyn Notifier>) -> Self {
        AuctionCloser {
            auctions,
            notifier,
            clock: Box::new(SystemClock),
            total_closed: 0,
        }
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn close(&mut self) {
        let open = match self.auctions.list_open() {
            Ok(open) => open,
            Err(err) => {
                error!("Could not list open auctions: {}", err);
                return;
            }
        };

        let now = self.clock.now();
        let mut closed_now = 0;
        for mut auction in open {
            if !auction.started_more_than(Duration::weeks(1), now) {
                continue;
            }
            auction.close();

            if let Err(err) = self.auctions.update(&auction) {
                error!("Could not persist closing of auction {} ({}): {}", auction.auction_id, auction.name, err);
                continue;
            }
            closed_now += 1;
            self.total_closed += 1;
            debug!("Closed auction {} ({})", auction.auction_id, auction.name);

            if let Err(err) = self.notifier.notify(&auction) {
                warn!("Could not notify closing of auction {} ({}): {}", auction.auction_id, auction.name, err);
            }
        }

        info!("Closed {} auctions ({} in total)", closed_now, self.total_closed);
    }

    pub fn total_closed(&self) -> usize {
        self.total_closed
    }
}
