//! Report output
//!
//! The aggregator hands every processed entry to a `ReportSink`; the final
//! totals and summary follow once the diary is done. Two renderers are provided:
//! a plain-text terminal report and a JSON document.

use std::io::{self, Write};

use serde::Serialize;

use crate::build_info::BuildInfo;
use crate::models::{DailyTotal, EntryReport, NutrientVector};
use crate::nutrition::{Macro, Summary};

/// Width of the calorie breakdown bar in characters
pub const BAR_WIDTH: usize = 70;

const LABEL_WIDTH: usize = 13;
const AMOUNT_WIDTH: usize = 9;
const TOTAL_BOX_WIDTH: usize = 21;

/// Receives report output as the diary is processed
pub trait ReportSink {
    /// Called once per processed diary entry, in file order
    fn entry(&mut self, report: &EntryReport) -> io::Result<()>;

    /// Called once after the last entry
    fn finish(&mut self, total: &DailyTotal, summary: &Summary) -> io::Result<()>;
}

/// Keeps entry reports in memory and ignores the final report
impl ReportSink for Vec<EntryReport> {
    fn entry(&mut self, report: &EntryReport) -> io::Result<()> {
        self.push(report.clone());
        Ok(())
    }

    fn finish(&mut self, _total: &DailyTotal, _summary: &Summary) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// Text Report
// ============================================================================

/// Plain-text terminal report, written as entries arrive
pub struct TextReport<W: Write> {
    out: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn nutrient_table(&mut self, values: &NutrientVector, indent: usize) -> io::Result<()> {
        let pad = "   ".repeat(indent);
        for (kind, amount) in values.iter() {
            writeln!(
                self.out,
                "{}{:<label$}│{:>amount$}",
                pad,
                kind.label(),
                format_amount(amount),
                label = LABEL_WIDTH,
                amount = AMOUNT_WIDTH,
            )?;
        }
        writeln!(self.out)
    }
}

impl<W: Write> ReportSink for TextReport<W> {
    fn entry(&mut self, report: &EntryReport) -> io::Result<()> {
        let entry = &report.entry;
        writeln!(
            self.out,
            " • {} {} {} ({} g)",
            entry.quantity,
            entry.unit,
            entry.food_name,
            format_amount(report.mass_grams)
        )?;
        self.nutrient_table(&report.nutrients, 1)
    }

    fn finish(&mut self, total: &DailyTotal, summary: &Summary) -> io::Result<()> {
        let rule = "━".repeat(TOTAL_BOX_WIDTH);
        writeln!(self.out, "┏{}┓", rule)?;
        writeln!(self.out, "┃{:^width$}┃", "Total", width = TOTAL_BOX_WIDTH)?;
        writeln!(self.out, "┗{}┛", rule)?;
        self.nutrient_table(total, 0)?;

        writeln!(
            self.out,
            "Body Fat Change: {:+6.1} g (Assuming BMR of {:.1} kcal/day)",
            summary.body_fat_delta_grams, summary.bmr
        )?;
        writeln!(self.out)?;

        let Some(shares) = &summary.macro_shares else {
            return self.out.flush();
        };

        writeln!(self.out, "{:^width$}", "Calorie Breakdown", width = BAR_WIDTH)?;
        writeln!(self.out)?;
        for share in shares {
            let chars = bar_chars(share.share);
            let label = format!(
                "{} ({:.1}%)",
                share.macronutrient.label(),
                share.share * 100.0
            );
            write!(self.out, "{}", center(&label, chars, bar_fill(share.macronutrient)))?;
        }
        writeln!(self.out)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Characters of the bar given to one share; ties round to even
fn bar_chars(share: f64) -> usize {
    let chars = (BAR_WIDTH as f64 * share).round_ties_even();
    if chars.is_finite() && chars > 0.0 {
        chars as usize
    } else {
        0
    }
}

fn bar_fill(m: Macro) -> char {
    match m {
        Macro::Carbs => '░',
        Macro::Fat => '▒',
        Macro::Protein => '▓',
    }
}

/// Center `text` in `width` characters using `fill`; never truncates
fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    let mut out = String::with_capacity(width * fill.len_utf8() + text.len());
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(text);
    out.extend(std::iter::repeat(fill).take(right));
    out
}

/// One decimal place with thousands separators, e.g. `1,234.5`
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.1}", value);
    let (sign, digits) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

// ============================================================================
// JSON Report
// ============================================================================

#[derive(Serialize)]
struct JsonDocument<'a> {
    build: BuildInfo,
    entries: &'a [EntryReport],
    total: &'a DailyTotal,
    summary: &'a Summary,
}

/// JSON report, written as a single document once the diary is done
pub struct JsonReport<W: Write> {
    out: W,
    entries: Vec<EntryReport>,
}

impl<W: Write> JsonReport<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            entries: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonReport<W> {
    fn entry(&mut self, report: &EntryReport) -> io::Result<()> {
        self.entries.push(report.clone());
        Ok(())
    }

    fn finish(&mut self, total: &DailyTotal, summary: &Summary) -> io::Result<()> {
        let doc = JsonDocument {
            build: BuildInfo::current(),
            entries: &self.entries,
            total,
            summary,
        };
        serde_json::to_writer_pretty(&mut self.out, &doc)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DiaryEntry;
    use crate::nutrition::SummaryCalculator;

    fn oats_report() -> EntryReport {
        EntryReport {
            entry: DiaryEntry {
                quantity: 2.0,
                unit: "cup".to_string(),
                food_name: "oats".to_string(),
                food_id: 999,
            },
            mass_grams: 300.0,
            nutrients: NutrientVector::from_array([1140.0, 198.0, 19.5, 39.0, 3.0, 30.0]),
        }
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.0");
        assert_eq!(format_amount(12.34), "12.3");
        assert_eq!(format_amount(999.95), "1,000.0");
        assert_eq!(format_amount(1234567.0), "1,234,567.0");
        assert_eq!(format_amount(-1500.26), "-1,500.3");
    }

    #[test]
    fn test_center() {
        assert_eq!(center("ab", 6, '.'), "..ab..");
        assert_eq!(center("a", 4, '.'), ".a..");
        assert_eq!(center("toolong", 3, '.'), "toolong");
    }

    #[test]
    fn test_bar_chars() {
        assert_eq!(bar_chars(0.5), 35);
        assert_eq!(bar_chars(0.0), 0);
        assert_eq!(bar_chars(1.0), 70);
        assert_eq!(bar_chars(f64::NAN), 0);
    }

    #[test]
    fn test_text_entry() {
        let mut report = TextReport::new(Vec::new());
        report.entry(&oats_report()).unwrap();
        let text = String::from_utf8(report.into_inner()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], " • 2 cup oats (300.0 g)");
        assert_eq!(lines[1], "   Calories     │  1,140.0");
        assert_eq!(lines[6], "   Fiber        │     30.0");
        assert_eq!(lines[7], "");
    }

    #[test]
    fn test_text_finish() {
        let total = oats_report().nutrients;
        let summary = SummaryCalculator::default().summarize(&total);

        let mut report = TextReport::new(Vec::new());
        report.finish(&total, &summary).unwrap();
        let text = String::from_utf8(report.into_inner()).unwrap();

        assert!(text.contains("┃        Total        ┃"));
        assert!(text.contains("Calories     │  1,140.0"));
        assert!(text.contains("Body Fat Change:  -28.9 g (Assuming BMR of 1400.0 kcal/day)"));
        assert!(text.contains("Calorie Breakdown"));
        // 198 g carbs * 4 / 1140 = 69.5%
        assert!(text.contains("Carbs (69.5%)"));
        assert!(text.contains("Fat (15.4%)"));
        assert!(text.contains("Protein (13.7%)"));
    }

    #[test]
    fn test_text_finish_zero_calories_skips_breakdown() {
        let total = NutrientVector::zero();
        let summary = SummaryCalculator::default().summarize(&total);

        let mut report = TextReport::new(Vec::new());
        report.finish(&total, &summary).unwrap();
        let text = String::from_utf8(report.into_inner()).unwrap();

        assert!(text.contains("Body Fat Change: -155.6 g"));
        assert!(!text.contains("Calorie Breakdown"));
    }

    #[test]
    fn test_json_report() {
        let entry = oats_report();
        let total = entry.nutrients;
        let summary = SummaryCalculator::default().summarize(&total);

        let mut report = JsonReport::new(Vec::new());
        report.entry(&entry).unwrap();
        report.finish(&total, &summary).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&report.into_inner()).unwrap();
        assert_eq!(value["entries"][0]["entry"]["food_name"], "oats");
        assert_eq!(value["entries"][0]["mass_grams"], 300.0);
        assert_eq!(value["total"]["Calories"], 1140.0);
        assert_eq!(value["summary"]["bmr"], 1400.0);
        assert_eq!(value["summary"]["macro_shares"][0]["macro"], "Carbs");
        assert_eq!(value["build"]["name"], "food-diary");
    }
}
