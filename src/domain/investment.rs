use chrono::Local;
use serde::{Deserialize, Serialize};

/// Column names of the persisted ledger file, in file order.
/// This header is part of the on-disk format and must not change.
pub const CSV_HEADER: [&str; 5] = ["ID", "Coin Name", "Price", "Amount", "Timestamp"];

/// An investment records a single purchase of a cryptocurrency.
/// Investments are immutable - the only way to correct one is to delete it
/// and add it again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    /// Digits-only token derived from the creation instant, unique per record
    #[serde(rename = "ID")]
    pub id: String,
    /// Asset name exactly as entered by the user (no normalization)
    #[serde(rename = "Coin Name")]
    pub coin_name: String,
    /// Unit price paid at purchase
    #[serde(rename = "Price")]
    pub price: f64,
    /// Quantity purchased
    #[serde(rename = "Amount")]
    pub amount: f64,
    /// Wall-clock purchase time, same instant as `id`
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
}

impl Investment {
    /// Create a new investment stamped with the current wall-clock time.
    /// The id carries nanosecond resolution so rapid successive appends
    /// within the same second cannot collide.
    pub fn new(coin_name: impl Into<String>, price: f64, amount: f64) -> Self {
        let now = Local::now();
        Self {
            id: now.format("%Y%m%d%H%M%S%9f").to_string(),
            coin_name: coin_name.into(),
            price,
            amount,
            timestamp: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Money spent on this purchase.
    pub fn invested(&self) -> f64 {
        self.price * self.amount
    }
}

/// Aggregate over a set of investments: total quantity held and total money
/// spent acquiring it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub amount: f64,
    pub invested: f64,
}

impl Totals {
    /// Fold an investment into the running totals.
    pub fn add(&mut self, investment: &Investment) {
        self.amount += investment.amount;
        self.invested += investment.invested();
    }
}
