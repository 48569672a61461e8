//! Diary entry model
//!
//! One parsed and resolved line of a food diary, plus what the aggregator
//! reports for it.

use serde::Serialize;

use super::NutrientVector;

/// A diary line resolved against the food catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiaryEntry {
    /// Always finite and strictly positive
    pub quantity: f64,
    pub unit: String,
    pub food_name: String,
    pub food_id: i64,
}

/// A fully processed entry: the entry, its mass and its scaled nutrients
#[derive(Debug, Clone, Serialize)]
pub struct EntryReport {
    pub entry: DiaryEntry,
    pub mass_grams: f64,
    pub nutrients: NutrientVector,
}
