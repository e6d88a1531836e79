use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::money::{Amount, AmountValue, Currency};
use super::bids::Bid;
use super::core::{AuctionId, User};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    #[serde(rename = "id")]
    pub auction_id: AuctionId,
    pub name: String,
    #[serde(rename = "startsAt")]
    pub starts_at: DateTime<Utc>,
    pub closed: bool,
    pub bids: Vec<Bid>,
}

impl Auction {
    pub fn new(name: &str, starts_at: DateTime<Utc>) -> Self {
        Auction {
            auction_id: Uuid::new_v4(),
            name: name.to_string(),
            starts_at,
            closed: false,
            bids: Vec::new(),
        }
    }

    /// Marks the auction as no longer accepting bids. Closing twice is a no-op.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn add_bid(&mut self, bid: Bid) {
        self.bids.push(bid);
    }

    /// True when more than `age` has elapsed between the start and `now`.
    /// Exactly `age` does not count.
    pub fn started_more_than(&self, age: Duration, now: DateTime<Utc>) -> bool {
        now - self.starts_at > age
    }
}

/// Builds auctions for tests and fixtures.
///
/// Unset fields fall back to an empty name, a start of "now" and no bids.
#[derive(Debug, Clone, Default)]
pub struct AuctionBuilder {
    name: Option<String>,
    starts_at: Option<DateTime<Utc>>,
    currency: Currency,
    bids: Vec<Bid>,
}

impl AuctionBuilder {
    pub fn new() -> Self {
        AuctionBuilder::default()
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn starting_at(mut self, starts_at: DateTime<Utc>) -> Self {
        self.starts_at = Some(starts_at);
        self
    }

    pub fn in_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn bid(mut self, bidder: User, value: AmountValue) -> Self {
        self.bids.push(Bid::new(bidder, Amount::new(self.currency, value)));
        self
    }

    pub fn build(self) -> Auction {
        let mut auction = Auction::new(
            self.name.as_deref().unwrap_or_default(),
            self.starts_at.unwrap_or_else(Utc::now),
        );
        for bid in self.bids {
            auction.add_bid(bid);
        }
        auction
    }
}
