//! Diary processing errors
//!
//! Every failure carries enough context (raw line, food name, unit) for the user
//! to fix the diary text directly.

use std::fmt;

use thiserror::Error;

use crate::data::DataError;

/// Errors raised while resolving a diary
#[derive(Debug, Error)]
pub enum DiaryError {
    #[error("Error processing line: {line:?}")]
    MalformedEntry { line: String },

    #[error("{name} is not in the database")]
    UnknownFood { name: String },

    #[error("{unit} was not found for food {food_id}. Valid options: {valid_units:?}")]
    UnitNotFound {
        unit: String,
        food_id: i64,
        valid_units: Vec<String>,
    },

    #[error("{food} has no default unit; write the line as <quantity> <unit> {food}")]
    MissingDefaultUnit { food: String },

    #[error("Total calories are zero; macro calorie shares are undefined")]
    ZeroCalories,

    #[error("{} diary line(s) failed:\n{}", .0.len(), LineErrors(.0))]
    Lines(Vec<LineError>),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error("Failed to write report: {0}")]
    Report(#[from] std::io::Error),
}

/// Result type for diary operations
pub type DiaryResult<T> = Result<T, DiaryError>;

/// A failure tied to its 1-based diary line number
#[derive(Debug)]
pub struct LineError {
    pub line_number: usize,
    pub error: DiaryError,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line_number, self.error)
    }
}

struct LineErrors<'a>(&'a [LineError]);

impl fmt::Display for LineErrors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {}", err)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_not_found_message_lists_options() {
        let err = DiaryError::UnitNotFound {
            unit: "each".to_string(),
            food_id: 12345,
            valid_units: vec!["large".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("each"));
        assert!(msg.contains("12345"));
        assert!(msg.contains("large"));
    }

    #[test]
    fn test_collected_errors_message() {
        let err = DiaryError::Lines(vec![
            LineError {
                line_number: 2,
                error: DiaryError::UnknownFood { name: "kale".to_string() },
            },
            LineError {
                line_number: 5,
                error: DiaryError::MalformedEntry { line: "oops".to_string() },
            },
        ]);
        let msg = err.to_string();
        assert!(msg.starts_with("2 diary line(s) failed"));
        assert!(msg.contains("line 2: kale is not in the database"));
        assert!(msg.contains("line 5: Error processing line"));
    }
}
