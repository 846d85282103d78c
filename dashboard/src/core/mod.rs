//! Dataset parsing and chart building

pub mod chart;
pub mod dataset;

pub use chart::{ChartKind, figure};
pub use dataset::{Cell, Column, ColumnKind, Dataset, DatasetError, PREVIEW_ROWS, is_csv_filename};
