//! Food Diary Library
//!
//! Resolves a day's free-text food-diary lines into nutrient totals: food name
//! lookup, portion-to-gram conversion, per-100g nutrient scaling and daily
//! aggregation with a body-fat and macro-calorie summary.

pub mod build_info;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod nutrition;
pub mod report;

pub use error::{DiaryError, DiaryResult, LineError};
