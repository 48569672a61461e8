//! Nutrition calculation module
//!
//! Diary parsing, unit conversion, aggregation and the daily summary.

pub mod aggregator;
pub mod converter;
pub mod parser;
pub mod summary;
pub mod units;

pub use aggregator::RunContext;
pub use converter::UnitConverter;
pub use parser::EntryParser;
pub use summary::{Macro, MacroShare, Summary, SummaryCalculator, DEFAULT_BMR};
pub use units::{fallback_grams_per_unit, FALLBACK_UNITS};
