use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use crate::money::Amount;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    amount: Amount,
    #[serde(rename = "dueDate")]
    due_date: NaiveDate,
}

impl Payment {
    pub fn new(amount: Amount, due_date: NaiveDate) -> Self {
        Payment { amount, due_date }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}

/// Moves a weekend date forward to the following Monday.
pub fn next_business_day(date: NaiveDate) -> NaiveDate {
    let skip = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date.checked_add_days(Days::new(skip)).unwrap_or(date)
}
