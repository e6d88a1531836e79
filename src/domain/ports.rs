use std::sync::Arc;
use super::auctions::Auction;
use super::core::Errors;
use super::payments::Payment;

pub trait AuctionRepository {
    /// Auctions that are still accepting bids.
    fn list_open(&self) -> Result<Vec<Auction>, Errors>;
    fn list_closed(&self) -> Result<Vec<Auction>, Errors>;
    fn update(&self, auction: &Auction) -> Result<(), Errors>;
}

pub trait PaymentRepository {
    fn save(&self, payment: &Payment) -> Result<(), Errors>;
}

/// Tells the participants of an auction that it was closed.
pub trait Notifier {
    fn notify(&self, auction: &Auction) -> Result<(), Errors>;
}

impl<T: AuctionRepository + ?Sized> AuctionRepository for Arc<T> {
    fn list_open(&self) -> Result<Vec<Auction>, Errors> {
        (**self).list_open()
    }

    fn list_closed(&self) -> Result<Vec<Auction>, Errors> {
        (**self).list_closed()
    }

    fn update(&self, auction: &Auction) -> Result<(), Errors> {
        (**self).update(auction)
    }
}

impl<T: PaymentRepository + ?Sized> PaymentRepository for Arc<T> {
    fn save(&self, payment: &Payment) -> Result<(), Errors> {
        (**self).save(payment)
    }
}
