use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use serde_json::{from_str, to_string, to_string_pretty};

use crate::domain::{Auction, AuctionRepository, Errors, Payment, PaymentRepository};

/// Stores all auctions as one JSON array. Every update rewrites the file.
#[derive(Debug, Clone)]
pub struct JsonFileAuctionRepository {
    path: PathBuf,
}

impl JsonFileAuctionRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonFileAuctionRepository {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// A missing file reads as no auctions.
    pub fn read_auctions(&self) -> Result<Vec<Auction>, Errors> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(from_str(&text)?)
    }

    pub fn write_auctions(&self, auctions: &[Auction]) -> Result<(), Errors> {
        let json = to_string_pretty(auctions)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn matching(&self, closed: bool) -> Result<Vec<Auction>, Errors> {
        let mut auctions = self.read_auctions()?;
        auctions.retain(|auction| auction.closed == closed);
        Ok(auctions)
    }
}

impl AuctionRepository for JsonFileAuctionRepository {
    fn list_open(&self) -> Result<Vec<Auction>, Errors> {
        self.matching(false)
    }

    fn list_closed(&self) -> Result<Vec<Auction>, Errors> {
        self.matching(true)
    }

    fn update(&self, auction: &Auction) -> Result<(), Errors> {
        let mut auctions = self.read_auctions()?;
        let stored = auctions
            .iter_mut()
            .find(|stored| stored.auction_id == auction.auction_id)
            .ok_or_else(|| Errors::Repository(format!("Unknown auction: {}", auction.auction_id)))?;
        *stored = auction.clone();
        self.write_auctions(&auctions)
    }
}

/// Appends one JSON payment per line.
#[derive(Debug, Clone)]
pub struct JsonFilePaymentRepository {
    path: PathBuf,
}

impl JsonFilePaymentRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonFilePaymentRepository {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn read_payments(&self) -> Result<Vec<Payment>, Errors> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut payments = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            payments.push(from_str(&line)?);
        }
        Ok(payments)
    }
}

impl PaymentRepository for JsonFilePaymentRepository {
    fn save(&self, payment: &Payment) -> Result<(), Errors> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", to_string(payment)?)?;
        Ok(())
    }
}
