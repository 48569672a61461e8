//! Food registry
//!
//! Resolves a diary food name to its food id and optional default unit.
//! Registry lines are whitespace delimited: `name id [default unit...]`.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use super::{DataError, DataResult};
use crate::error::{DiaryError, DiaryResult};

/// One registry record
#[derive(Debug, Clone, PartialEq)]
pub struct FoodRecord {
    pub name: String,
    pub food_id: i64,
    pub default_unit: Option<String>,
}

/// Name-indexed food registry
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    records: Vec<FoodRecord>,
    by_name: HashMap<String, usize>,
}

impl FoodCatalog {
    pub fn from_path(path: &Path) -> DataResult<Self> {
        let file = super::open(path)?;
        Self::from_reader(file, &path.display().to_string())
    }

    /// Parse a registry; `file` only labels errors
    pub fn from_reader<R: Read>(reader: R, file: &str) -> DataResult<Self> {
        let mut catalog = Self::default();

        for (i, line) in BufReader::new(reader).lines().enumerate() {
            let line = line.map_err(|source| DataError::Io {
                path: file.into(),
                source,
            })?;
            let line_number = i as u64 + 1;

            let mut tokens = line.split_whitespace();
            let Some(name) = tokens.next() else {
                continue;
            };
            let malformed = |reason: String| DataError::MalformedRecord {
                file: file.to_string(),
                line: line_number,
                reason,
            };
            let id_token = tokens
                .next()
                .ok_or_else(|| malformed(format!("{:?} has no food id", name)))?;
            let food_id = id_token
                .parse()
                .map_err(|_| malformed(format!("invalid food id {:?}", id_token)))?;

            let rest: Vec<&str> = tokens.collect();
            let default_unit = (!rest.is_empty()).then(|| rest.join(" "));

            catalog.push(FoodRecord {
                name: name.to_string(),
                food_id,
                default_unit,
            });
        }

        Ok(catalog)
    }

    /// Append a record; an existing name keeps resolving to its first record
    pub fn push(&mut self, record: FoodRecord) {
        let index = self.records.len();
        self.by_name.entry(record.name.clone()).or_insert(index);
        self.records.push(record);
    }

    /// Resolve a food name by exact match
    pub fn resolve(&self, name: &str) -> DiaryResult<&FoodRecord> {
        self.by_name
            .get(name)
            .map(|&i| &self.records[i])
            .ok_or_else(|| DiaryError::UnknownFood {
                name: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
