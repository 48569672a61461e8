//! Nutrient amount store
//!
//! Per-100g nutrient profiles indexed by food id. Source rows are
//! `(id, food id, nutrient code, amount, ...)` after a header line.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use super::{csv_reader, parse_column, DataResult};
use crate::models::{NutrientKind, NutrientProfile};

const FOOD_ID_COLUMN: usize = 1;
const NUTRIENT_CODE_COLUMN: usize = 2;
const AMOUNT_COLUMN: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct NutrientProfileStore {
    profiles: HashMap<i64, NutrientProfile>,
}

impl NutrientProfileStore {
    pub fn from_path(path: &Path) -> DataResult<Self> {
        let file = super::open(path)?;
        Self::from_reader(file, &path.display().to_string())
    }

    /// Index every row once; later positive rows override earlier ones
    pub fn from_reader<R: Read>(reader: R, file: &str) -> DataResult<Self> {
        let mut store = Self::default();
        let mut rows = 0usize;

        for record in csv_reader(reader).records() {
            let record = record?;
            let food_id: i64 = parse_column(&record, FOOD_ID_COLUMN, "food id", file)?;
            let code: u32 = parse_column(&record, NUTRIENT_CODE_COLUMN, "nutrient code", file)?;
            let amount: f64 = parse_column(&record, AMOUNT_COLUMN, "amount", file)?;
            rows += 1;

            if amount <= 0.0 {
                continue;
            }
            if let Some(kind) = NutrientKind::from_code(code) {
                store.profiles.entry(food_id).or_default().record(kind, amount);
            }
        }

        tracing::debug!(rows, foods = store.profiles.len(), "Indexed nutrient amounts");
        Ok(store)
    }

    /// Per-100g profile; all zeros for a food with no rows
    pub fn get_profile(&self, food_id: i64) -> NutrientProfile {
        self.profiles.get(&food_id).cloned().unwrap_or_default()
    }

    /// Number of foods with at least one tracked positive amount
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
