//! CLI argument definitions using clap

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// pharmacy - Keep track of medicines, expiry dates and stock levels
#[derive(Parser, Debug)]
#[command(name = "pharmacy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new medicine
    Add {
        /// Medicine name
        #[arg(short, long)]
        name: String,

        /// Expiry date (YYYY-MM-DD); omit for medicines that do not expire
        #[arg(short, long)]
        expiry: Option<NaiveDate>,

        /// Unit price
        #[arg(short, long)]
        price: f64,

        /// Units in stock
        #[arg(short, long)]
        stock: i64,
    },

    /// List medicines that have not expired, soonest expiry first
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a single medicine
    Show {
        /// Medicine ID
        id: i64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Update fields of an existing medicine
    Update {
        /// Medicine ID
        id: i64,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New expiry date (YYYY-MM-DD)
        #[arg(short, long, conflicts_with = "clear_expiry")]
        expiry: Option<NaiveDate>,

        /// Remove the expiry date
        #[arg(long)]
        clear_expiry: bool,

        /// New unit price
        #[arg(short, long)]
        price: Option<f64>,

        /// New stock level
        #[arg(short, long)]
        stock: Option<i64>,
    },

    /// Delete a medicine
    Delete {
        /// Medicine ID
        id: i64,
    },

    /// Run the interactive menu
    Menu,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
