//! Run configuration
//!
//! Command-line flags with environment fallbacks, resolved into concrete paths
//! for the reference data and the diary file.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};

use crate::nutrition::DEFAULT_BMR;

pub const REGISTRY_FILE: &str = "foodID.txt";
pub const NUTRIENT_FILE: &str = "food_nutrient.csv";
pub const PORTION_FILE: &str = "food_portion.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Resolve a day's food diary into nutrient totals
#[derive(Debug, Parser)]
#[command(name = "food-diary", version, about)]
pub struct Cli {
    /// Diary file to read; defaults to <diary-dir>/<date>.txt
    pub diary: Option<PathBuf>,

    /// Day whose diary to read (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Directory holding dated diary files
    #[arg(long, env = "FOOD_DIARY_DIARY_DIR", default_value = ".")]
    pub diary_dir: PathBuf,

    /// Directory holding food_nutrient.csv and food_portion.csv
    #[arg(long, env = "FOOD_DIARY_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Food registry file; defaults to <data-dir>/foodID.txt
    #[arg(long, env = "FOOD_DIARY_REGISTRY")]
    pub registry: Option<PathBuf>,

    /// Basal metabolic rate in kcal/day
    #[arg(long, env = "FOOD_DIARY_BMR", default_value_t = DEFAULT_BMR, value_parser = parse_bmr)]
    pub bmr: f64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Report every failing line instead of stopping at the first
    #[arg(long)]
    pub keep_going: bool,
}

fn parse_bmr(s: &str) -> Result<f64, String> {
    let bmr: f64 = s.parse().map_err(|_| format!("{:?} is not a number", s))?;
    if bmr.is_finite() && bmr >= 0.0 {
        Ok(bmr)
    } else {
        Err(format!("BMR must be a non-negative number, got {}", s))
    }
}

/// Fully resolved configuration for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub registry_path: PathBuf,
    pub nutrient_path: PathBuf,
    pub portion_path: PathBuf,
    pub diary_path: PathBuf,
    pub bmr: f64,
    pub format: OutputFormat,
    pub keep_going: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        let today = Local::now().date_naive();
        Self::resolve(cli, today)
    }

    /// Resolve paths, using `today` when no diary or date is given
    pub fn resolve(cli: Cli, today: NaiveDate) -> Self {
        let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
        let registry_path = cli
            .registry
            .unwrap_or_else(|| data_dir.join(REGISTRY_FILE));
        let diary_path = cli
            .diary
            .unwrap_or_else(|| diary_file(&cli.diary_dir, cli.date.unwrap_or(today)));

        Self {
            registry_path,
            nutrient_path: data_dir.join(NUTRIENT_FILE),
            portion_path: data_dir.join(PORTION_FILE),
            diary_path,
            bmr: cli.bmr,
            format: cli.format,
            keep_going: cli.keep_going,
        }
    }
}

/// `<dir>/YYYY-MM-DD.txt`
pub fn diary_file(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(format!("{}.txt", date.format("%Y-%m-%d")))
}

/// `data/` next to the project root when run from target/, else next to the binary
fn default_data_dir() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    // Go up from target/release or target/debug to project root
    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(grandparent) = path.parent().and_then(Path::parent) {
            path = grandparent.to_path_buf();
        }
    }

    path.push("data");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_diary_file_name() {
        let path = diary_file(Path::new("diaries"), day(2024, 3, 7));
        assert_eq!(path, Path::new("diaries").join("2024-03-07.txt"));
    }

    #[test]
    fn test_resolve_defaults_to_today() {
        let cli = Cli::try_parse_from([
            "food-diary",
            "--data-dir",
            "/srv/usda",
            "--diary-dir",
            "/home/me/meals",
        ])
        .unwrap();
        let config = Config::resolve(cli, day(2025, 1, 31));

        assert_eq!(config.registry_path, Path::new("/srv/usda/foodID.txt"));
        assert_eq!(config.nutrient_path, Path::new("/srv/usda/food_nutrient.csv"));
        assert_eq!(config.portion_path, Path::new("/srv/usda/food_portion.csv"));
        assert_eq!(config.diary_path, Path::new("/home/me/meals/2025-01-31.txt"));
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.keep_going);
    }

    #[test]
    fn test_explicit_date_and_registry() {
        let cli = Cli::try_parse_from([
            "food-diary",
            "--data-dir",
            "/srv/usda",
            "--diary-dir",
            "meals",
            "--registry",
            "foods.txt",
            "--date",
            "2024-12-25",
            "--bmr",
            "1650",
            "--format",
            "json",
            "--keep-going",
        ])
        .unwrap();
        let config = Config::resolve(cli, day(2025, 1, 31));

        assert_eq!(config.registry_path, Path::new("foods.txt"));
        assert_eq!(config.diary_path, Path::new("meals/2024-12-25.txt"));
        assert_eq!(config.bmr, 1650.0);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.keep_going);
    }

    #[test]
    fn test_positional_diary_wins() {
        let cli = Cli::try_parse_from([
            "food-diary",
            "--data-dir",
            "d",
            "--date",
            "2024-12-25",
            "today.txt",
        ])
        .unwrap();
        let config = Config::resolve(cli, day(2025, 1, 31));
        assert_eq!(config.diary_path, Path::new("today.txt"));
    }

    #[test]
    fn test_bad_values_rejected() {
        assert!(Cli::try_parse_from(["food-diary", "--bmr", "-5"]).is_err());
        assert!(Cli::try_parse_from(["food-diary", "--bmr", "lots"]).is_err());
        assert!(Cli::try_parse_from(["food-diary", "--date", "yesterday"]).is_err());
        assert!(Cli::try_parse_from(["food-diary", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_parse_bmr() {
        assert_eq!(parse_bmr("1400"), Ok(1400.0));
        assert!(parse_bmr("inf").is_err());
    }
}
