//! pharmacy - Medicine stock management
//!
//! Entry point for the pharmacy CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pharmacy::cli::commands::{self, MedicineChanges};
use pharmacy::cli::{Cli, Commands};
use pharmacy::config::Settings;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            pharmacy::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                Commands::Add {
                    name,
                    expiry,
                    price,
                    stock,
                } => {
                    commands::add_medicine(&settings, name, expiry, price, stock)?;
                }
                Commands::List { json } => {
                    commands::list_medicines(&settings, json)?;
                }
                Commands::Show { id, json } => {
                    commands::show_medicine(&settings, id, json)?;
                }
                Commands::Update {
                    id,
                    name,
                    expiry,
                    clear_expiry,
                    price,
                    stock,
                } => {
                    let changes = MedicineChanges {
                        name,
                        expiry: if clear_expiry { Some(None) } else { expiry.map(Some) },
                        price,
                        stock,
                    };
                    commands::update_medicine(&settings, id, changes)?;
                }
                Commands::Delete { id } => {
                    commands::delete_medicine(&settings, id)?;
                }
                Commands::Menu => {
                    commands::run_menu(&settings)?;
                }
                Commands::Config(config_cmd) => {
                    commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
