//! Portion records
//!
//! Food-specific named portions ("1 cup", "large") with their gram weight.
//! Source rows are `(id, food id, seq, quantity, unit id, description, label, grams)`
//! after a header line. Records keep source file order per food.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use super::{csv_reader, parse_column, DataResult};

const FOOD_ID_COLUMN: usize = 1;
const QUANTITY_COLUMN: usize = 3;
const LABEL_COLUMN: usize = 6;
const GRAMS_COLUMN: usize = 7;

/// One named real-world portion of a food
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortionRecord {
    pub unit_label: String,
    pub quantity: f64,
    pub grams: f64,
}

impl PortionRecord {
    /// Grams for a single unit, not for the record's whole quantity
    pub fn grams_per_unit(&self) -> f64 {
        self.grams / self.quantity
    }
}

#[derive(Debug, Clone, Default)]
pub struct PortionTable {
    by_food: HashMap<i64, Vec<PortionRecord>>,
}

impl PortionTable {
    pub fn from_path(path: &Path) -> DataResult<Self> {
        let file = super::open(path)?;
        Self::from_reader(file, &path.display().to_string())
    }

    pub fn from_reader<R: Read>(reader: R, file: &str) -> DataResult<Self> {
        let mut table = Self::default();

        for record in csv_reader(reader).records() {
            let record = record?;
            let food_id: i64 = parse_column(&record, FOOD_ID_COLUMN, "food id", file)?;
            let quantity: f64 = parse_column(&record, QUANTITY_COLUMN, "quantity", file)?;
            let unit_label: String = parse_column(&record, LABEL_COLUMN, "unit label", file)?;
            let grams: f64 = parse_column(&record, GRAMS_COLUMN, "grams", file)?;

            table.push(
                food_id,
                PortionRecord {
                    unit_label,
                    quantity,
                    grams,
                },
            );
        }

        Ok(table)
    }

    pub fn push(&mut self, food_id: i64, record: PortionRecord) {
        self.by_food.entry(food_id).or_default().push(record);
    }

    /// Portion records for a food, in source file order
    pub fn records_for(&self, food_id: i64) -> &[PortionRecord] {
        self.by_food.get(&food_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of foods with at least one portion record
    pub fn len(&self) -> usize {
        self.by_food.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_food.is_empty()
    }
}
