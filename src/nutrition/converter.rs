//! Unit conversion
//!
//! Converts a diary unit into grams for a specific food: the food's own portion
//! records first, the static fallback table second.

use super::units::fallback_grams_per_unit;
use crate::data::PortionTable;
use crate::error::{DiaryError, DiaryResult};

/// Grams-per-unit resolver over the portion table
#[derive(Debug, Clone, Copy)]
pub struct UnitConverter<'a> {
    portions: &'a PortionTable,
}

impl<'a> UnitConverter<'a> {
    pub fn new(portions: &'a PortionTable) -> Self {
        Self { portions }
    }

    /// Grams in one `unit` of the food
    ///
    /// A portion record matches when `unit` occurs anywhere in its label, so
    /// "cup" matches "1 cup (240 ml)" and a short unit like "g" can match
    /// unrelated labels. The first matching record in source file order wins.
    pub fn grams_per_unit(&self, food_id: i64, unit: &str) -> DiaryResult<f64> {
        let mut valid_units = Vec::new();

        for record in self.portions.records_for(food_id) {
            valid_units.push(record.unit_label.clone());
            if !record.unit_label.contains(unit) {
                continue;
            }
            if record.quantity > 0.0 {
                tracing::debug!(
                    food_id,
                    unit,
                    label = %record.unit_label,
                    "Matched portion record"
                );
                return Ok(record.grams_per_unit());
            }
            tracing::warn!(
                food_id,
                label = %record.unit_label,
                "Skipping portion record with non-positive quantity"
            );
        }

        tracing::warn!("{} was not found for food {}, attempting fallback", unit, food_id);
        fallback_grams_per_unit(unit).ok_or_else(|| DiaryError::UnitNotFound {
            unit: unit.to_string(),
            food_id,
            valid_units,
        })
    }
}
