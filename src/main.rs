//! Food Diary
//!
//! Reads today's diary (or the one given) and prints per-entry nutrients, daily
//! totals, the estimated body-fat change and the calorie breakdown.

use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use food_diary::build_info::BuildInfo;
use food_diary::config::{Cli, Config, OutputFormat};
use food_diary::data::{DataError, DataSources};
use food_diary::nutrition::{RunContext, SummaryCalculator};
use food_diary::report::{JsonReport, ReportSink, TextReport};
use food_diary::DiaryResult;

fn run(config: &Config) -> DiaryResult<()> {
    let data = DataSources::load(
        &config.registry_path,
        &config.nutrient_path,
        &config.portion_path,
    )?;

    tracing::info!("Opening {}...", config.diary_path.display());
    let diary = std::fs::read_to_string(&config.diary_path).map_err(|source| DataError::Io {
        path: config.diary_path.clone(),
        source,
    })?;

    let out = io::stdout().lock();
    let mut sink: Box<dyn ReportSink> = match config.format {
        OutputFormat::Text => Box::new(TextReport::new(out)),
        OutputFormat::Json => Box::new(JsonReport::new(out)),
    };

    let mut run = RunContext::with_sources(&data, sink.as_mut());
    if config.keep_going {
        run.process_lines_collecting(diary.lines())?;
    } else {
        run.process_lines(diary.lines())?;
    }
    run.finish(&SummaryCalculator::new(config.bmr))?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("food_diary=info".parse()?))
        .with_writer(io::stderr)
        .init();

    let config = Config::from_cli(Cli::parse());
    tracing::debug!(?config, "{}", BuildInfo::current().version_line());

    if let Err(err) = run(&config) {
        io::stdout().flush()?;
        eprintln!("error: {}", err);
        std::process::exit(1);
    }

    Ok(())
}
