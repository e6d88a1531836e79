mod utils;

use auction_services::domain::{Evaluator, FixedClock};
use auction_services::persistence::{InMemoryAuctionRepository, InMemoryPaymentRepository};
use auction_services::services::{AuctionCloser, LogNotifier, PaymentGenerator};
use chrono::{NaiveDate, TimeZone, Utc};
use std::sync::Arc;
use utils::*;

#[test]
fn closing_then_billing_uses_the_same_store() {
    let saturday_noon = Utc.with_ymd_and_hms(2012, 4, 7, 12, 0, 0).unwrap();
    let mut stale = tv_with_two_bids();
    stale.starts_at = long_ago();
    let fresh = auction_started("Geladeira", saturday_noon - chrono::Duration::days(2));

    let auctions = Arc::new(InMemoryAuctionRepository::new(vec![stale.clone(), fresh.clone()]));
    let payments = Arc::new(InMemoryPaymentRepository::new());

    let mut closer = AuctionCloser::new(Box::new(auctions.clone()), Box::new(LogNotifier))
        .with_clock(Box::new(FixedClock::new(saturday_noon)));
    closer.close();

    let mut generator = PaymentGenerator::new(
        Box::new(auctions.clone()),
        Box::new(payments.clone()),
        Box::new(Evaluator::new()),
    )
    .with_clock(Box::new(FixedClock::new(saturday_noon)));
    generator.generate();

    assert_eq!(closer.total_closed(), 1);
    assert_eq!(generator.total_generated(), 1);

    let stored = auctions.all().unwrap();
    assert!(stored.iter().any(|a| a.auction_id == stale.auction_id && a.is_closed()));
    assert!(stored.iter().any(|a| a.auction_id == fresh.auction_id && !a.is_closed()));

    let saved = payments.all().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].amount(), vac(2500));
    assert_eq!(saved[0].due_date(), NaiveDate::from_ymd_opt(2012, 4, 9).unwrap());
}
