//! Configuration module for pharmacy
//!
//! Handles loading and managing application settings from TOML files.

mod settings;

pub use settings::{DatabaseSettings, GeneralSettings, Settings, DATA_DIR_ENV};
