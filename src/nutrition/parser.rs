//! Diary line parsing
//!
//! A line is `<quantity> <unit> <food>` or `<quantity> <food>`; the two-token
//! form takes the unit from the food's registry default.

use crate::data::FoodCatalog;
use crate::error::{DiaryError, DiaryResult};
use crate::models::DiaryEntry;

#[derive(Debug, Clone, Copy)]
pub struct EntryParser<'a> {
    catalog: &'a FoodCatalog,
}

impl<'a> EntryParser<'a> {
    pub fn new(catalog: &'a FoodCatalog) -> Self {
        Self { catalog }
    }

    /// Parse and resolve one diary line
    pub fn parse(&self, line: &str) -> DiaryResult<DiaryEntry> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let (quantity, unit, food_name) = match tokens.as_slice() {
            [quantity, unit, food] => (*quantity, Some(*unit), *food),
            [quantity, food] => (*quantity, None, *food),
            _ => return Err(malformed(line)),
        };

        let quantity = parse_quantity(quantity).ok_or_else(|| malformed(line))?;
        let record = self.catalog.resolve(food_name)?;

        let unit = match unit {
            Some(unit) => unit.to_string(),
            None => record
                .default_unit
                .clone()
                .ok_or_else(|| DiaryError::MissingDefaultUnit {
                    food: food_name.to_string(),
                })?,
        };

        Ok(DiaryEntry {
            quantity,
            unit,
            food_name: food_name.to_string(),
            food_id: record.food_id,
        })
    }
}

/// A finite, strictly positive number
fn parse_quantity(token: &str) -> Option<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|q| q.is_finite() && *q > 0.0)
}

fn malformed(line: &str) -> DiaryError {
    DiaryError::MalformedEntry {
        line: line.trim_end().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> FoodCatalog {
        FoodCatalog::from_reader(
            "egg 12345 each\noats 999 cup\nbutter 173430\n".as_bytes(),
            "foodID.txt",
        )
        .unwrap()
    }

    #[test]
    fn test_three_tokens() {
        let c = catalog();
        let entry = EntryParser::new(&c).parse("2 cup oats").unwrap();
        assert_eq!(
            entry,
            DiaryEntry {
                quantity: 2.0,
                unit: "cup".to_string(),
                food_name: "oats".to_string(),
                food_id: 999,
            }
        );
    }

    #[test]
    fn test_three_tokens_unit_is_literal() {
        let c = catalog();
        let entry = EntryParser::new(&c).parse("1.5 tbsp butter").unwrap();
        assert_eq!(entry.unit, "tbsp");
        assert_eq!(entry.quantity, 1.5);
        assert_eq!(entry.food_id, 173430);
    }

    #[test]
    fn test_two_tokens_uses_default_unit() {
        let c = catalog();
        let entry = EntryParser::new(&c).parse("  3   egg \n").unwrap();
        assert_eq!(entry.quantity, 3.0);
        assert_eq!(entry.unit, "each");
        assert_eq!(entry.food_name, "egg");
        assert_eq!(entry.food_id, 12345);
    }

    #[test]
    fn test_two_tokens_without_default_unit() {
        let c = catalog();
        match EntryParser::new(&c).parse("2 butter") {
            Err(DiaryError::MissingDefaultUnit { food }) => assert_eq!(food, "butter"),
            other => panic!("expected MissingDefaultUnit, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_token_count() {
        let c = catalog();
        let parser = EntryParser::new(&c);
        for line in ["oats", "2 large cup oats", "1 2 3 4 5"] {
            match parser.parse(line) {
                Err(DiaryError::MalformedEntry { line: raw }) => assert_eq!(raw, line),
                other => panic!("expected MalformedEntry for {:?}, got {:?}", line, other),
            }
        }
    }

    #[test]
    fn test_bad_quantity() {
        let c = catalog();
        let parser = EntryParser::new(&c);
        for line in ["two cup oats", "0 cup oats", "-1 egg", "inf egg", "NaN egg"] {
            assert!(
                matches!(parser.parse(line), Err(DiaryError::MalformedEntry { .. })),
                "{:?} should be malformed",
                line
            );
        }
    }

    #[test]
    fn test_unknown_food_propagates() {
        let c = catalog();
        match EntryParser::new(&c).parse("1 cup kale") {
            Err(DiaryError::UnknownFood { name }) => assert_eq!(name, "kale"),
            other => panic!("expected UnknownFood, got {:?}", other),
        }
    }
}
