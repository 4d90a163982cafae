//! Interactive numbered menu
//!
//! Reads answers line by line so it can be driven from a terminal or from a
//! scripted input in tests. A failed action is reported and the menu keeps
//! going; only `0` or end of input leaves the loop.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::cli::commands::{write_inventory, MedicineChanges};
use crate::storage::{Medicine, MedicineRepository};

pub struct Menu<'a, R, W> {
    repo: &'a dyn MedicineRepository,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(repo: &'a dyn MedicineRepository, input: R, output: W) -> Self {
        Self {
            repo,
            input,
            output,
        }
    }

    /// Run until the user picks exit or input runs out
    pub fn run(mut self) -> Result<()> {
        loop {
            self.show_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            let result = match line.trim() {
                "1" => self.add_medicine(),
                "2" => self.view_all(),
                "3" => self.view_by_id(),
                "4" => self.update_medicine(),
                "5" => self.delete_medicine(),
                "0" => {
                    writeln!(self.output, "Exiting... Goodbye!")?;
                    break;
                }
                _ => {
                    writeln!(self.output, "Invalid choice.")?;
                    continue;
                }
            };

            if let Err(err) = result {
                tracing::debug!(error = %err, "menu action failed");
                writeln!(self.output, "Error: {:#}", err)?;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Pharmacy Store ---")?;
        writeln!(self.output, "1. Add Medicine")?;
        writeln!(self.output, "2. View All Medicines")?;
        writeln!(self.output, "3. View Medicine By ID")?;
        writeln!(self.output, "4. Update Medicine")?;
        writeln!(self.output, "5. Delete Medicine")?;
        writeln!(self.output, "0. Exit")?;
        write!(self.output, "Enter choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn add_medicine(&mut self) -> Result<()> {
        let name = self.prompt("Name: ")?;
        let expiry = parse_optional_date(&self.prompt("Expiry Date (YYYY-MM-DD): ")?)?;
        let price: f64 = parse_field(&self.prompt("Price: ")?, "price")?;
        let stock: i64 = parse_field(&self.prompt("Stock: ")?, "stock")?;

        let mut medicine = Medicine::new(name, expiry, price, stock);
        let id = self.repo.add(&mut medicine)?;
        writeln!(self.output, "Medicine added! ID = {}", id)?;
        Ok(())
    }

    fn view_all(&mut self) -> Result<()> {
        let view = self.repo.list_view(Local::now().date_naive())?;
        write_inventory(&mut self.output, &view)?;
        Ok(())
    }

    fn view_by_id(&mut self) -> Result<()> {
        let id = self.prompt_id("Enter ID: ")?;
        let medicine = self.repo.get_by_id(id)?;
        writeln!(self.output, "{}", medicine)?;
        Ok(())
    }

    fn update_medicine(&mut self) -> Result<()> {
        let id = self.prompt_id("Enter ID to update: ")?;
        let mut medicine = self.repo.get_by_id(id)?;

        let current_expiry = medicine
            .expiry_date
            .map(|date| date.to_string())
            .unwrap_or_else(|| "none".to_string());

        let name = self.prompt(&format!("New Name ({}): ", medicine.name))?;
        let expiry = self.prompt(&format!("New Expiry Date ({}): ", current_expiry))?;
        let price = self.prompt(&format!("New Price ({}): ", medicine.price))?;
        let stock = self.prompt(&format!("New Stock ({}): ", medicine.stock))?;

        let changes = MedicineChanges {
            name: non_blank(&name).map(str::to_string),
            expiry: non_blank(&expiry)
                .map(|s| parse_date(s).map(Some))
                .transpose()?,
            price: non_blank(&price)
                .map(|s| parse_field(s, "price"))
                .transpose()?,
            stock: non_blank(&stock)
                .map(|s| parse_field(s, "stock"))
                .transpose()?,
        };
        changes.apply(&mut medicine);

        self.repo.update(&medicine)?;
        writeln!(self.output, "Updated successfully!")?;
        Ok(())
    }

    fn delete_medicine(&mut self) -> Result<()> {
        let id = self.prompt_id("Enter ID to delete: ")?;
        self.repo.delete(id)?;
        writeln!(self.output, "Deleted successfully!")?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()?.context("unexpected end of input")
    }

    fn prompt_id(&mut self, label: &str) -> Result<i64> {
        let answer = self.prompt(label)?;
        parse_field(&answer, "ID")
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", s.trim()))
}

fn parse_optional_date(s: &str) -> Result<Option<NaiveDate>> {
    non_blank(s).map(parse_date).transpose()
}

fn parse_field<T>(s: &str, field: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    s.trim()
        .parse()
        .with_context(|| format!("invalid {} '{}'", field, s.trim()))
}
