//! Daily nutrient aggregation
//!
//! `RunContext` owns one run: it parses each diary line, converts the portion
//! to grams, scales the food's per-100g profile and adds the result to the
//! daily total.

use super::{EntryParser, Summary, SummaryCalculator, UnitConverter};
use crate::data::{DataSources, FoodCatalog, NutrientProfileStore, PortionTable};
use crate::error::{DiaryError, DiaryResult, LineError};
use crate::models::{DailyTotal, EntryReport, NutrientVector};
use crate::report::ReportSink;

/// State of a single diary run; never shared across runs
pub struct RunContext<'a> {
    catalog: &'a FoodCatalog,
    nutrients: &'a NutrientProfileStore,
    portions: &'a PortionTable,
    sink: &'a mut dyn ReportSink,
    total: DailyTotal,
    entries: usize,
}

impl<'a> RunContext<'a> {
    pub fn new(
        catalog: &'a FoodCatalog,
        nutrients: &'a NutrientProfileStore,
        portions: &'a PortionTable,
        sink: &'a mut dyn ReportSink,
    ) -> Self {
        Self {
            catalog,
            nutrients,
            portions,
            sink,
            total: DailyTotal::zero(),
            entries: 0,
        }
    }

    pub fn with_sources(data: &'a DataSources, sink: &'a mut dyn ReportSink) -> Self {
        Self::new(&data.catalog, &data.nutrients, &data.portions, sink)
    }

    /// Process one diary line
    ///
    /// Blank lines yield `Ok(None)` and are not counted as entries.
    pub fn process_line(&mut self, line: &str) -> DiaryResult<Option<NutrientVector>> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        let entry = EntryParser::new(self.catalog).parse(line)?;
        let grams_per_unit =
            UnitConverter::new(self.portions).grams_per_unit(entry.food_id, &entry.unit)?;
        let mass_grams = entry.quantity * grams_per_unit;

        let nutrients = self
            .nutrients
            .get_profile(entry.food_id)
            .to_vector()
            .scale(mass_grams / 100.0);

        tracing::debug!(
            food = %entry.food_name,
            food_id = entry.food_id,
            mass_grams,
            "Processed diary entry"
        );

        self.sink.entry(&EntryReport {
            entry,
            mass_grams,
            nutrients,
        })?;

        self.total += nutrients;
        self.entries += 1;
        Ok(Some(nutrients))
    }

    /// Process every line, stopping at the first failure
    pub fn process_lines<I, S>(&mut self, lines: I) -> DiaryResult<DailyTotal>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (i, line) in lines.into_iter().enumerate() {
            if let Err(err) = self.process_line(line.as_ref()) {
                tracing::debug!(line_number = i + 1, "Diary line failed");
                return Err(err);
            }
        }
        Ok(self.total)
    }

    /// Process every line, collecting all failures before reporting them
    ///
    /// Entries from good lines still reach the sink; the total is only returned
    /// when no line failed.
    pub fn process_lines_collecting<I, S>(&mut self, lines: I) -> DiaryResult<DailyTotal>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut failures = Vec::new();

        for (i, line) in lines.into_iter().enumerate() {
            match self.process_line(line.as_ref()) {
                Ok(_) => {}
                Err(DiaryError::Report(err)) => return Err(DiaryError::Report(err)),
                Err(error) => failures.push(LineError {
                    line_number: i + 1,
                    error,
                }),
            }
        }

        if failures.is_empty() {
            Ok(self.total)
        } else {
            Err(DiaryError::Lines(failures))
        }
    }

    /// Summarize the total and emit the final report
    pub fn finish(self, calculator: &SummaryCalculator) -> DiaryResult<(DailyTotal, Summary)> {
        let summary = calculator.summarize(&self.total);
        tracing::info!(
            entries = self.entries,
            calories = summary.total_calories,
            "Diary complete"
        );
        self.sink.finish(&self.total, &summary)?;
        Ok((self.total, summary))
    }

    pub fn total(&self) -> &DailyTotal {
        &self.total
    }

    /// Number of non-blank lines processed so far
    pub fn entry_count(&self) -> usize {
        self.entries
    }
}
