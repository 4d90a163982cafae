//! Inventory view over the full medicine list
//!
//! Turns the raw rows read from storage into what a pharmacist wants to see:
//! medicines ordered by expiry, expired stock hidden, and a notice listing
//! everything that is running low.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::storage::Medicine;

/// Stock at or below this many units is reported as low.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Low-stock medicines keyed by name.
///
/// Advisory only. Two rows sharing a name collapse into one entry and the
/// later row in list order wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LowStockNotice {
    entries: BTreeMap<String, i64>,
}

impl LowStockNotice {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Units left for `name`, if it is on the notice
    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(name, stock)| (name.as_str(), *stock))
    }

    /// Log one warning per entry
    pub fn emit(&self) {
        for (name, stock) in self.iter() {
            tracing::warn!(medicine = name, units_left = stock, "low stock");
        }
    }
}

/// Processed medicine list plus its low-stock notice
#[derive(Debug, Clone, Default)]
pub struct InventoryView {
    pub medicines: Vec<Medicine>,
    pub low_stock: LowStockNotice,
}

/// Build the inventory view for `today` from unordered storage rows.
pub fn build_view(mut medicines: Vec<Medicine>, today: NaiveDate) -> InventoryView {
    // `None < Some(_)` for Option, so flag missing dates to push them last.
    medicines.sort_by_key(|m| (m.expiry_date.is_none(), m.expiry_date, m.id));
    medicines.retain(|m| !m.is_expired(today));

    let mut low_stock = LowStockNotice::default();
    for medicine in &medicines {
        if medicine.stock <= LOW_STOCK_THRESHOLD {
            low_stock
                .entries
                .insert(medicine.name.clone(), medicine.stock);
        }
    }

    InventoryView {
        medicines,
        low_stock,
    }
}
