//! Data models for storage

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A medicine kept in stock
#[derive(Debug, Clone, Serialize)]
pub struct Medicine {
    /// Identifier assigned by the database (0 until inserted)
    pub id: i64,

    /// Display name
    pub name: String,

    /// Expiry date, `None` if the product does not expire
    pub expiry_date: Option<NaiveDate>,

    /// Unit price
    pub price: f64,

    /// Units on hand
    pub stock: i64,
}

impl Medicine {
    /// Create a medicine that has not been stored yet
    pub fn new(name: String, expiry_date: Option<NaiveDate>, price: f64, stock: i64) -> Self {
        Self {
            id: 0, // Will be set by database
            name,
            expiry_date,
            price,
            stock,
        }
    }

    /// Whether the medicine expired strictly before `today`
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date.is_some_and(|date| date < today)
    }
}

// Identity is the database id alone.
impl PartialEq for Medicine {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Medicine {}

impl Hash for Medicine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Medicine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expiry = match self.expiry_date {
            Some(date) => format!("expires {}", date.format("%Y-%m-%d")),
            None => "no expiry".to_string(),
        };
        write!(
            f,
            "#{} {} | {} | price {:.2} | stock {}",
            self.id, self.name, expiry, self.price, self.stock
        )
    }
}
