#![allow(dead_code)]
// See https://users.rust-lang.org/t/sharing-code-and-macros-in-tests-directory/3098/7

use auction_services::domain::{
    Auction, AuctionBuilder, AuctionRepository, Errors, Notifier, Payment, PaymentRepository, User,
};
use auction_services::money::{Amount, Currency};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use mockall::mock;
use std::sync::{Arc, Mutex};

mock! {
    pub Auctions {}
    impl AuctionRepository for Auctions {
        fn list_open(&self) -> Result<Vec<Auction>, Errors>;
        fn list_closed(&self) -> Result<Vec<Auction>, Errors>;
        fn update(&self, auction: &Auction) -> Result<(), Errors>;
    }
}

mock! {
    pub Payments {}
    impl PaymentRepository for Payments {
        fn save(&self, payment: &Payment) -> Result<(), Errors>;
    }
}

mock! {
    pub Mailer {}
    impl Notifier for Mailer {
        fn notify(&self, auction: &Auction) -> Result<(), Errors>;
    }
}

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2012, 4, 4, 10, 30, 0).unwrap()
}

pub fn long_ago() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1999, 2, 20, 0, 0, 0).unwrap()
}

pub fn ten_days_ago() -> DateTime<Utc> {
    now() - Duration::days(10)
}

pub fn yesterday() -> DateTime<Utc> {
    now() - Duration::days(1)
}

pub fn saturday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2012, 4, 7).unwrap()
}

pub fn sunday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2012, 4, 8).unwrap()
}

pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2012, 4, 9).unwrap()
}

pub fn jose() -> User {
    User::new("Jose")
}

pub fn maria() -> User {
    User::new("Maria")
}

pub fn vac(value: i64) -> Amount {
    Amount::new(Currency::VAC, value)
}

pub fn auction_started(name: &str, starts_at: DateTime<Utc>) -> Auction {
    AuctionBuilder::new().named(name).starting_at(starts_at).build()
}

pub fn tv_with_two_bids() -> Auction {
    AuctionBuilder::new()
        .named("TV")
        .bid(jose(), 2000)
        .bid(maria(), 2500)
        .build()
}

pub fn open_auctions(auctions: Vec<Auction>) -> MockAuctions {
    let mut repository = MockAuctions::new();
    repository
        .expect_list_open()
        .times(1)
        .returning(move || Ok(auctions.clone()));
    repository
}

pub fn closed_auctions(auctions: Vec<Auction>) -> MockAuctions {
    let mut repository = MockAuctions::new();
    repository
        .expect_list_closed()
        .times(1)
        .returning(move || Ok(auctions.clone()));
    repository
}

/// A payment repository that keeps every saved payment.
pub fn recording_payments() -> (MockPayments, Arc<Mutex<Vec<Payment>>>) {
    let saved = Arc::new(Mutex::new(Vec::new()));
    let sink = saved.clone();
    let mut payments = MockPayments::new();
    payments.expect_save().returning(move |payment| {
        sink.lock().unwrap().push(payment.clone());
        Ok(())
    });
    (payments, saved)
}

pub fn temp_file(name: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("auction-services-{}-{}", uuid::Uuid::new_v4(), name));
    let _ = std::fs::remove_file(&path);
    path
}
