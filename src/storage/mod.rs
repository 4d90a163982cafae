//! Storage module for pharmacy
//!
//! Handles the `medicines` table in SQLite. Every operation opens its own
//! connection and drops it before returning.

mod database;
mod models;
mod repository;

pub use database::Database;
pub use models::Medicine;
pub use repository::{MedicineRepository, Repository};
