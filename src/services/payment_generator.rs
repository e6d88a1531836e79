use log::{debug, error, info, warn};

use crate::domain::{
    next_business_day, AuctionRepository, BidEvaluator, Clock, Payment, PaymentRepository, SystemClock,
};

/// Turns closed auctions into payments due on the next business day.
pub struct PaymentGenerator {
    auctions: Box<dyn AuctionRepository>,
    payments: Box<dyn PaymentRepository>,
    evaluator: Box<dyn BidEvaluator>,
    clock: Box<dyn Clock>,
    total_generated: usize,
}

impl PaymentGenerator {
    pub fn new(
        auctions: Box<dyn AuctionRepository>,
        payments: Box<dyn PaymentRepository>,
        evaluator: Box<dyn BidEvaluator>,
    ) -> Self {
        PaymentGenerator {
            auctions,
            payments,
            evaluator,
            clock: Box::new(SystemClock),
            total_generated: 0,
        }
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn generate(&mut self) {
        let closed = match self.auctions.list_closed() {
            Ok(closed) => closed,
            Err(err) => {
                error!("Could not list closed auctions: {}", err);
                return;
            }
        };

        let due_date = next_business_day(self.clock.today());
        let mut generated_now = 0;
        for auction in closed {
            let amount = match self.evaluator.highest_bid(&auction) {
                Ok(amount) => amount,
                Err(err) => {
                    warn!("Skipping payment for auction {} ({}): {}", auction.auction_id, auction.name, err);
                    continue;
                }
            };

            let payment = Payment::new(amount, due_date);
            match self.payments.save(&payment) {
                Ok(()) => {
                    generated_now += 1;
                    self.total_generated += 1;
                    debug!("Payment of {} due {} for auction {}", amount, due_date, auction.auction_id);
                }
                Err(err) => {
                    error!("Could not save payment for auction {} ({}): {}", auction.auction_id, auction.name, err);
                }
            }
        }

        info!("Generated {} payments ({} in total)", generated_now, self.total_generated);
    }

    pub fn total_generated(&self) -> usize {
        self.total_generated
    }
}
