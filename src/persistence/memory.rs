use std::sync::{Mutex, MutexGuard};

use crate::domain::{Auction, AuctionRepository, Errors, Payment, PaymentRepository};

fn guard<T>(lock: &Mutex<T>) -> Result<MutexGuard<'_, T>, Errors> {
    lock.lock()
        .map_err(|_| Errors::Repository("in-memory store lock poisoned".to_string()))
}

/// Keeps auctions in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryAuctionRepository {
    auctions: Mutex<Vec<Auction>>,
}

impl InMemoryAuctionRepository {
    pub fn new(auctions: Vec<Auction>) -> Self {
        InMemoryAuctionRepository {
            auctions: Mutex::new(auctions),
        }
    }

    pub fn add(&self, auction: Auction) -> Result<(), Errors> {
        guard(&self.auctions)?.push(auction);
        Ok(())
    }

    pub fn all(&self) -> Result<Vec<Auction>, Errors> {
        Ok(guard(&self.auctions)?.clone())
    }

    fn matching(&self, closed: bool) -> Result<Vec<Auction>, Errors> {
        Ok(guard(&self.auctions)?
            .iter()
            .filter(|auction| auction.closed == closed)
            .cloned()
            .collect())
    }
}

impl AuctionRepository for InMemoryAuctionRepository {
    fn list_open(&self) -> Result<Vec<Auction>, Errors> {
        self.matching(false)
    }

    fn list_closed(&self) -> Result<Vec<Auction>, Errors> {
        self.matching(true)
    }

    fn update(&self, auction: &Auction) -> Result<(), Errors> {
        let mut auctions = guard(&self.auctions)?;
        match auctions.iter_mut().find(|stored| stored.auction_id == auction.auction_id) {
            Some(stored) => {
                *stored = auction.clone();
                Ok(())
            }
            None => Err(Errors::Repository(format!("Unknown auction: {}", auction.auction_id))),
        }
    }
}

#[derive(Debug, Default)]
pub struct InMemoryPaymentRepository {
    payments: Mutex<Vec<Payment>>,
}

impl InMemoryPaymentRepository {
    pub fn new() -> Self {
        InMemoryPaymentRepository::default()
    }

    pub fn all(&self) -> Result<Vec<Payment>, Errors> {
        Ok(guard(&self.payments)?.clone())
    }
}

impl PaymentRepository for InMemoryPaymentRepository {
    fn save(&self, payment: &Payment) -> Result<(), Errors> {
        guard(&self.payments)?.push(payment.clone());
        Ok(())
    }
}
