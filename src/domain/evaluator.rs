use crate::money::Amount;
use super::auctions::Auction;
use super::bids::Bid;
use super::core::Errors;

pub trait BidEvaluator {
    fn highest_bid(&self, auction: &Auction) -> Result<Amount, Errors>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub highest: Bid,
    pub lowest: Bid,
    /// Up to three bids, highest first.
    pub top_three: Vec<Bid>,
}

/// Ranks the bids of an auction by value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Evaluator
    }

    pub fn evaluate(&self, auction: &Auction) -> Result<Evaluation, Errors> {
        let mut ranked: Vec<Bid> = auction.bids.clone();
        // stable, so equal bids keep the order they were placed in
        ranked.sort_by(|a, b| b.bid_amount.value().cmp(&a.bid_amount.value()));

        let (highest, lowest) = match (ranked.first(), ranked.last()) {
            (Some(highest), Some(lowest)) => (highest.clone(), lowest.clone()),
            _ => return Err(Errors::NoBids(auction.auction_id)),
        };
        ranked.truncate(3);

        Ok(Evaluation {
            highest,
            lowest,
            top_three: ranked,
        })
    }
}

impl BidEvaluator for Evaluator {
    fn highest_bid(&self, auction: &Auction) -> Result<Amount, Errors> {
        auction
            .bids
            .iter()
            .map(|bid| bid.bid_amount)
            .max_by_key(|amount| amount.value())
            .ok_or(Errors::NoBids(auction.auction_id))
    }
}
