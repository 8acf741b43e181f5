// ABOUTME: Import of USDA-style reference nutrition tables from CSV
// ABOUTME: Maps nutrient columns onto NutritionFacts and skips incomplete rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

//! Reference nutrition import
//!
//! The expected header carries a name column (`name`, `description`,
//! `food_name` or `食物名稱`) and the nutrient columns `energy`, `protein`,
//! `total_lipid_fat`, `carbohydrate_by_difference`, `fiber_total_dietary`,
//! and `sodium_na`. `food_id`, `total_sugars`, `latitude` and `longitude`
//! are optional. Rows missing a name or any required nutrient are skipped.

use foodbridge_core::models::{GeoPoint, NutritionFacts};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io;
use std::mem;
use std::path::Path;
use thiserror::Error;
use tokio::fs;

const NAME_COLUMNS: [&str; 4] = ["name", "description", "food_name", "食物名稱"];

/// Reference import failures
#[derive(Debug, Error)]
pub enum ReferenceImportError {
    /// The file could not be read
    #[error("Failed to read reference file: {0}")]
    Io(#[from] io::Error),
    /// The file has no header row
    #[error("Reference file is empty")]
    Empty,
    /// A required column is absent from the header
    #[error("Reference file is missing column '{0}'")]
    MissingColumn(String),
    /// A quoted field never closes
    #[error("Unterminated quoted field starting on line {0}")]
    UnterminatedQuote(usize),
}

/// One food from the reference table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceFood {
    /// Identifier from the source table, or the row number
    pub food_id: String,
    /// Food name
    pub name: String,
    /// Nutrients per serving
    pub nutrition: NutritionFacts,
    /// Where the food is sold, when the table says
    pub position: Option<GeoPoint>,
}

/// Result of importing a reference table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceImport {
    /// Complete rows, in file order
    pub foods: Vec<ReferenceFood>,
    /// Rows dropped for a blank or unparseable required value
    pub skipped_rows: usize,
}

struct Columns {
    food_id: Option<usize>,
    name: usize,
    energy: usize,
    protein: usize,
    fat: usize,
    carbohydrate: usize,
    fiber: usize,
    sodium: usize,
    sugars: Option<usize>,
    latitude: Option<usize>,
    longitude: Option<usize>,
}

impl Columns {
    fn from_header(header: &[String]) -> Result<Self, ReferenceImportError> {
        let index: HashMap<String, usize> = header
            .iter()
            .enumerate()
            .map(|(position, column)| (column.trim().to_lowercase(), position))
            .collect();
        let required = |column: &str| {
            index
                .get(column)
                .copied()
                .ok_or_else(|| ReferenceImportError::MissingColumn(column.to_owned()))
        };

        let name = NAME_COLUMNS
            .iter()
            .find_map(|column| index.get(*column).copied())
            .ok_or_else(|| ReferenceImportError::MissingColumn("name".to_owned()))?;

        Ok(Self {
            food_id: index.get("food_id").copied(),
            name,
            energy: required("energy")?,
            protein: required("protein")?,
            fat: required("total_lipid_fat")?,
            carbohydrate: required("carbohydrate_by_difference")?,
            fiber: required("fiber_total_dietary")?,
            sodium: required("sodium_na")?,
            sugars: index.get("total_sugars").copied(),
            latitude: index.get("latitude").copied(),
            longitude: index.get("longitude").copied(),
        })
    }

    fn food(&self, row_number: usize, row: &[String]) -> Option<ReferenceFood> {
        let text = |column: usize| row.get(column).map_or("", |value| value.trim());
        let number = |column: usize| text(column).parse::<f64>().ok().filter(|v| v.is_finite());
        let optional = |column: Option<usize>| column.and_then(number);

        let name = text(self.name);
        if name.is_empty() {
            return None;
        }

        let nutrition = NutritionFacts {
            energy: number(self.energy)?,
            protein: number(self.protein)?,
            fat: number(self.fat)?,
            carbohydrate: number(self.carbohydrate)?,
            fiber: number(self.fiber)?,
            sodium: number(self.sodium)?,
            sugars: optional(self.sugars),
        };

        let food_id = self
            .food_id
            .map(text)
            .filter(|id| !id.is_empty())
            .map_or_else(|| row_number.to_string(), str::to_owned);

        Some(ReferenceFood {
            food_id,
            name: name.to_owned(),
            nutrition,
            position: GeoPoint::from_parts(optional(self.latitude), optional(self.longitude)),
        })
    }
}

/// Parse a reference table from CSV text
///
/// # Errors
///
/// Returns an error when the header is absent or lacks a required column,
/// or when a quoted field is never closed
pub fn parse_reference_csv(text: &str) -> Result<ReferenceImport, ReferenceImportError> {
    let mut records = split_records(text)?.into_iter();
    let header = records.next().ok_or(ReferenceImportError::Empty)?;
    let columns = Columns::from_header(&header)?;

    let mut import = ReferenceImport::default();
    for (offset, row) in records.enumerate() {
        if row.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        match columns.food(offset + 1, &row) {
            Some(food) => import.foods.push(food),
            None => import.skipped_rows += 1,
        }
    }

    tracing::debug!(
        foods.count = import.foods.len(),
        rows.skipped = import.skipped_rows,
        "Parsed reference nutrition table"
    );
    Ok(import)
}

/// Read and parse a reference table from disk
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to parse
pub async fn load_reference_csv(path: &Path) -> Result<ReferenceImport, ReferenceImportError> {
    let text = fs::read_to_string(path).await?;
    parse_reference_csv(text.trim_start_matches('\u{feff}'))
}

/// Split CSV text into records of unquoted fields
///
/// Quoted fields may contain commas, doubled quotes, and line breaks.
fn split_records(text: &str) -> Result<Vec<Vec<String>>, ReferenceImportError> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quote_line = 0;
    let mut line = 1;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match (in_quotes, c) {
            (true, '"') if chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            (true, '"') => in_quotes = false,
            (true, other) => {
                if other == '\n' {
                    line += 1;
                }
                field.push(other);
            }
            (false, '"') => {
                in_quotes = true;
                quote_line = line;
            }
            (false, ',') => record.push(mem::take(&mut field)),
            (false, '\r') => {}
            (false, '\n') => {
                line += 1;
                record.push(mem::take(&mut field));
                records.push(mem::take(&mut record));
            }
            (false, other) => field.push(other),
        }
    }

    if in_quotes {
        return Err(ReferenceImportError::UnterminatedQuote(quote_line));
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_fields_keep_commas_and_quotes() {
        let records = split_records("a,\"b, c\",\"say \"\"hi\"\"\"\n1,2,3").unwrap();
        assert_eq!(records[0], vec!["a", "b, c", "say \"hi\""]);
        assert_eq!(records[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let records = split_records("a,b\r\n1,2\r\n").unwrap();
        assert_eq!(records, vec![vec!["a", "b"], vec!["1", "2"]]);
    }

    #[test]
    fn test_unterminated_quote_reports_line() {
        let error = split_records("a,b\n\"open,2\n").unwrap_err();
        assert!(matches!(error, ReferenceImportError::UnterminatedQuote(2)));
    }
}
