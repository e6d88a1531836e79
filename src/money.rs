use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Currency {
    VAC, // Virtual auction currency
    SEK,
    DKK,
}

impl Default for Currency {
    fn default() -> Self {
        Currency::VAC
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Currency::VAC => "VAC",
            Currency::SEK => "SEK",
            Currency::DKK => "DKK",
        };
        f.write_str(code)
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VAC" => Ok(Currency::VAC),
            "SEK" => Ok(Currency::SEK),
            "DKK" => Ok(Currency::DKK),
            other => Err(MoneyError::UnknownCurrency(other.to_string())),
        }
    }
}

pub type AmountValue = i64;

/// A monetary value in whole units of a currency.
///
/// Ordering compares the currency first, so only amounts of the same
/// currency should be compared with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Amount {
    currency: Currency,
    value: AmountValue,
}

impl Amount {
    pub fn new(currency: Currency, value: AmountValue) -> Self {
        Amount { currency, value }
    }

    pub fn zero(currency: Currency) -> Self {
        Amount::new(currency, 0)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn value(&self) -> AmountValue {
        self.value
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Cannot add amounts with different currencies: {0} and {1}")]
    CurrencyMismatch(Currency, Currency),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl Add for Amount {
    type Output = Result<Amount, MoneyError>;

    fn add(self, other: Self) -> Self::Output {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(self.currency, other.currency));
        }
        Ok(Amount::new(self.currency, self.value + other.value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency, self.value)
    }
}

impl FromStr for Amount {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        if split == 0 {
            return Err(MoneyError::InvalidAmount(s.to_string()));
        }

        let (code, digits) = s.split_at(split);
        let currency = code.parse::<Currency>()?;
        let value = digits
            .parse::<AmountValue>()
            .map_err(|_| MoneyError::InvalidAmount(s.to_string()))?;

        Ok(Amount::new(currency, value))
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse::<Amount>().map_err(serde::de::Error::custom)
    }
}
