//! pharmacy - A small console tool for managing a pharmacy's medicine stock
//!
//! Medicines live in a single SQLite table. Listing the stock sorts it by
//! expiry, hides expired entries and flags anything running low.

pub mod cli;
pub mod config;
pub mod inventory;
pub mod storage;

use thiserror::Error;

/// Main error type for pharmacy
#[derive(Error, Debug)]
pub enum PharmacyError {
    #[error("Medicine with ID {0} not found")]
    NotFound(i64),

    #[error("Error {operation}: {source}")]
    Storage {
        operation: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl PharmacyError {
    /// Wrap a lower-level failure raised while performing `operation`.
    pub fn storage<E>(operation: &'static str, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Storage {
            operation,
            source: source.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, PharmacyError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "pharmacy";
