//! Data models
//!
//! Plain Rust types shared across the pipeline.

mod entry;
mod nutrient;

pub use entry::{DiaryEntry, EntryReport};
pub use nutrient::{DailyTotal, NutrientKind, NutrientProfile, NutrientVector};
