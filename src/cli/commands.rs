//! CLI command implementations

use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::io::Write;

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::inventory::{InventoryView, LowStockNotice};
use crate::storage::{Medicine, MedicineRepository, Repository};

/// Fields to change on an existing medicine; `None` keeps the current value
#[derive(Debug, Default)]
pub struct MedicineChanges {
    pub name: Option<String>,
    pub expiry: Option<Option<NaiveDate>>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

impl MedicineChanges {
    pub fn apply(self, medicine: &mut Medicine) {
        if let Some(name) = self.name {
            medicine.name = name;
        }
        if let Some(expiry) = self.expiry {
            medicine.expiry_date = expiry;
        }
        if let Some(price) = self.price {
            medicine.price = price;
        }
        if let Some(stock) = self.stock {
            medicine.stock = stock;
        }
    }
}

/// Add a new medicine
pub fn add_medicine(
    settings: &Settings,
    name: String,
    expiry: Option<NaiveDate>,
    price: f64,
    stock: i64,
) -> Result<()> {
    let repo = Repository::new(settings)?;

    let mut medicine = Medicine::new(name, expiry, price, stock);
    let id = repo.add(&mut medicine)?;
    println!("Medicine added! ID = {}", id);

    Ok(())
}

/// List medicines that have not expired
pub fn list_medicines(settings: &Settings, json: bool) -> Result<()> {
    let repo = Repository::new(settings)?;
    let view = repo.list_view(Local::now().date_naive())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view.medicines)?);
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    write_inventory(&mut stdout, &view)?;
    Ok(())
}

/// Show a single medicine
pub fn show_medicine(settings: &Settings, id: i64, json: bool) -> Result<()> {
    let repo = Repository::new(settings)?;
    let medicine = repo.get_by_id(id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&medicine)?);
    } else {
        println!("{}", medicine);
    }

    Ok(())
}

/// Update fields of an existing medicine
pub fn update_medicine(settings: &Settings, id: i64, changes: MedicineChanges) -> Result<()> {
    let repo = Repository::new(settings)?;

    let mut medicine = repo.get_by_id(id)?;
    changes.apply(&mut medicine);
    repo.update(&medicine)?;
    println!("Updated successfully!");

    Ok(())
}

/// Delete a medicine
pub fn delete_medicine(settings: &Settings, id: i64) -> Result<()> {
    let repo = Repository::new(settings)?;
    repo.delete(id)?;
    println!("Deleted successfully!");
    Ok(())
}

/// Run the interactive menu on stdin/stdout
pub fn run_menu(settings: &Settings) -> Result<()> {
    let repo = Repository::new(settings)?;
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    crate::cli::menu::Menu::new(&repo, stdin, stdout).run()
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

/// Render the inventory table followed by the low-stock block
pub fn write_inventory<W: Write>(out: &mut W, view: &InventoryView) -> std::io::Result<()> {
    if view.medicines.is_empty() {
        writeln!(out, "No medicines found")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<6} {:<30} {:<12} {:>10} {:>8}",
        "ID", "Name", "Expiry", "Price", "Stock"
    )?;
    writeln!(out, "{}", "-".repeat(70))?;

    for medicine in &view.medicines {
        let expiry = medicine
            .expiry_date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "{:<6} {:<30} {:<12} {:>10.2} {:>8}",
            medicine.id,
            truncate(&medicine.name, 30),
            expiry,
            medicine.price,
            medicine.stock
        )?;
    }

    write_low_stock(out, &view.low_stock)
}

fn write_low_stock<W: Write>(out: &mut W, notice: &LowStockNotice) -> std::io::Result<()> {
    if notice.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "Low Stock Medicines:")?;
    for (name, stock) in notice.iter() {
        writeln!(out, "{} -> {} units left", name, stock)?;
    }
    Ok(())
}

// Helper functions

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    }
}
