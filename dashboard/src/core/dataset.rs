//! Uploaded CSV data
//!
//! The first record is the header. Every column is typed after the whole
//! file is read: a column is numeric when each non-empty cell parses as a
//! float, otherwise it stays text. Empty cells are kept as gaps.

use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Rows shown in the table preview
pub const PREVIEW_ROWS: usize = 200;

/// Why an upload could not be read as a table. The message is shown to
/// the visitor as is.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("No columns to parse from file")]
    NoColumns,

    #[error("Expected {expected} fields in line {line}, saw {saw}")]
    TooManyFields { expected: usize, line: usize, saw: usize },

    #[error("{0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Number(value) if value.is_finite() => serializer.serialize_f64(*value),
            Cell::Text(text) => serializer.serialize_str(text),
            Cell::Number(_) | Cell::Empty => serializer.serialize_none(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(value) => write!(f, "{}", value),
            Cell::Text(text) => f.write_str(text),
            Cell::Empty => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub values: Vec<Cell>,
}

impl Column {
    fn from_raw(name: String, raw: Vec<String>) -> Self {
        let numeric = raw
            .iter()
            .map(|cell| cell.trim())
            .filter(|cell| !cell.is_empty())
            .all(|cell| cell.parse::<f64>().is_ok());

        let values = raw
            .into_iter()
            .map(|cell| {
                let trimmed = cell.trim();
                if trimmed.is_empty() {
                    Cell::Empty
                } else if numeric {
                    trimmed.parse().map(Cell::Number).unwrap_or(Cell::Empty)
                } else {
                    Cell::Text(cell)
                }
            })
            .collect();

        Self {
            name,
            kind: if numeric { ColumnKind::Numeric } else { ColumnKind::Text },
            values,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

/// Blank headers become `Unnamed: <i>`, repeated ones get a `.1`, `.2` suffix
fn normalise_headers(headers: &csv::StringRecord) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(headers.len());
    for (i, header) in headers.iter().enumerate() {
        let base = match header.trim() {
            "" => format!("Unnamed: {i}"),
            name => name.to_string(),
        };
        let mut name = base.clone();
        let mut n = 1;
        while names.contains(&name) {
            name = format!("{base}.{n}");
            n += 1;
        }
        names.push(name);
    }
    names
}

impl Dataset {
    pub fn from_csv(bytes: &[u8]) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(bytes);

        let headers = reader.headers()?.clone();
        if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
            return Err(DatasetError::NoColumns);
        }
        let names = normalise_headers(&headers);

        let mut raw: Vec<Vec<String>> = vec![Vec::new(); names.len()];
        let mut row_count = 0;
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            if record.len() > names.len() {
                // header is line 1
                return Err(DatasetError::TooManyFields {
                    expected: names.len(),
                    line: index + 2,
                    saw: record.len(),
                });
            }
            for (i, column) in raw.iter_mut().enumerate() {
                column.push(record.get(i).unwrap_or_default().to_string());
            }
            row_count += 1;
        }

        let columns = names
            .into_iter()
            .zip(raw)
            .map(|(name, values)| Column::from_raw(name, values))
            .collect();

        Ok(Self { columns, row_count })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// The first `limit` rows as display strings
    pub fn preview(&self, limit: usize) -> Vec<Vec<String>> {
        (0..self.row_count.min(limit))
            .map(|row| {
                self.columns
                    .iter()
                    .map(|column| column.values[row].to_string())
                    .collect()
            })
            .collect()
    }
}

/// Anything whose name mentions "csv" is treated as CSV
pub fn is_csv_filename(filename: &str) -> bool {
    filename.to_ascii_lowercase().contains("csv")
}
