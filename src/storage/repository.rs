//! Medicine repository
//!
//! CRUD over the `medicines` table. Update and delete detect a missing id
//! from the affected-row count of the statement itself.

use chrono::{Local, NaiveDate};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::config::Settings;
use crate::inventory::{self, InventoryView};
use crate::storage::{Database, Medicine};
use crate::{PharmacyError, Result};

const MEDICINE_SELECT_SQL: &str =
    "SELECT medicine_id, name, expiry_date, price, stock FROM medicines";

/// Persistence operations on medicines
pub trait MedicineRepository {
    /// Insert `medicine`, store the generated id on it and return that id
    fn add(&self, medicine: &mut Medicine) -> Result<i64>;
    fn get_by_id(&self, id: i64) -> Result<Medicine>;
    fn update(&self, medicine: &Medicine) -> Result<()>;
    fn delete(&self, id: i64) -> Result<()>;

    /// The processed inventory as of `today`, without emitting the notice
    fn list_view(&self, today: NaiveDate) -> Result<InventoryView>;

    /// Every non-expired medicine ordered by expiry; low stock is logged
    fn get_all(&self) -> Result<Vec<Medicine>> {
        let view = self.list_view(Local::now().date_naive())?;
        view.low_stock.emit();
        Ok(view.medicines)
    }
}

/// SQLite-backed medicine repository
#[derive(Debug, Clone)]
pub struct Repository {
    db: Database,
}

impl Repository {
    /// Create a repository over the configured database
    pub fn new(settings: &Settings) -> Result<Self> {
        let db = Database::open(settings)?;
        Ok(Self { db })
    }

    pub fn from_database(db: Database) -> Self {
        Self { db }
    }

    fn connect(&self, operation: &'static str) -> Result<Connection> {
        self.db
            .connect()
            .map_err(|e| PharmacyError::storage(operation, e))
    }

    fn fetch_all(&self) -> rusqlite::Result<Vec<Medicine>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(MEDICINE_SELECT_SQL)?;
        let medicines = stmt
            .query_map([], row_to_medicine)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(medicines)
    }
}

impl MedicineRepository for Repository {
    fn add(&self, medicine: &mut Medicine) -> Result<i64> {
        const OP: &str = "adding medicine";
        let conn = self.connect(OP)?;

        conn.execute(
            "INSERT INTO medicines (name, expiry_date, price, stock) VALUES (?1, ?2, ?3, ?4)",
            params![
                medicine.name,
                medicine.expiry_date,
                medicine.price,
                medicine.stock,
            ],
        )
        .map_err(|e| PharmacyError::storage(OP, e))?;

        medicine.id = conn.last_insert_rowid();
        tracing::debug!(id = medicine.id, name = %medicine.name, "medicine added");
        Ok(medicine.id)
    }

    fn get_by_id(&self, id: i64) -> Result<Medicine> {
        const OP: &str = "fetching medicine";
        let conn = self.connect(OP)?;

        conn.query_row(
            &format!("{MEDICINE_SELECT_SQL} WHERE medicine_id = ?1"),
            params![id],
            row_to_medicine,
        )
        .optional()
        .map_err(|e| PharmacyError::storage(OP, e))?
        .ok_or(PharmacyError::NotFound(id))
    }

    fn list_view(&self, today: NaiveDate) -> Result<InventoryView> {
        let medicines = self
            .fetch_all()
            .map_err(|e| PharmacyError::storage("fetching medicines", e))?;
        Ok(inventory::build_view(medicines, today))
    }

    fn update(&self, medicine: &Medicine) -> Result<()> {
        const OP: &str = "updating medicine";
        let conn = self.connect(OP)?;

        let rows = conn
            .execute(
                "UPDATE medicines SET name = ?1, expiry_date = ?2, price = ?3, stock = ?4
                 WHERE medicine_id = ?5",
                params![
                    medicine.name,
                    medicine.expiry_date,
                    medicine.price,
                    medicine.stock,
                    medicine.id,
                ],
            )
            .map_err(|e| PharmacyError::storage(OP, e))?;

        if rows == 0 {
            return Err(PharmacyError::NotFound(medicine.id));
        }
        tracing::debug!(id = medicine.id, "medicine updated");
        Ok(())
    }

    fn delete(&self, id: i64) -> Result<()> {
        const OP: &str = "deleting medicine";
        let conn = self.connect(OP)?;

        let rows = conn
            .execute("DELETE FROM medicines WHERE medicine_id = ?1", params![id])
            .map_err(|e| PharmacyError::storage(OP, e))?;

        if rows == 0 {
            return Err(PharmacyError::NotFound(id));
        }
        tracing::debug!(id, "medicine deleted");
        Ok(())
    }
}

fn row_to_medicine(row: &Row) -> rusqlite::Result<Medicine> {
    Ok(Medicine {
        id: row.get(0)?,
        name: row.get(1)?,
        expiry_date: row.get(2)?,
        price: row.get(3)?,
        stock: row.get(4)?,
    })
}
