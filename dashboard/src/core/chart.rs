//! Plotly figure JSON for a pair of columns

use serde_json::{Value, json};
use std::fmt;
use std::str::FromStr;

use crate::core::dataset::Dataset;
use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Scatter,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Bar, ChartKind::Line, ChartKind::Scatter];

    pub fn value(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar Chart",
            ChartKind::Line => "Line Chart",
            ChartKind::Scatter => "Scatter Plot",
        }
    }

    /// Plotly trace `type` and `mode`
    fn trace_style(&self) -> Value {
        match self {
            ChartKind::Bar => json!({ "type": "bar" }),
            ChartKind::Line => json!({ "type": "scatter", "mode": "lines" }),
            ChartKind::Scatter => json!({ "type": "scatter", "mode": "markers" }),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for ChartKind {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.value() == s.trim().to_lowercase())
            .ok_or_else(|| DashboardError::UnknownChartKind(s.to_string()))
    }
}

/// A single-trace figure plotting column `y` against column `x`
pub fn figure(dataset: &Dataset, x: &str, y: &str, kind: ChartKind) -> Result<Value, DashboardError> {
    let x_column = dataset
        .column(x)
        .ok_or_else(|| DashboardError::UnknownColumn(x.to_string()))?;
    let y_column = dataset
        .column(y)
        .ok_or_else(|| DashboardError::UnknownColumn(y.to_string()))?;

    let mut trace = kind.trace_style();
    trace["x"] = json!(x_column.values);
    trace["y"] = json!(y_column.values);
    trace["name"] = json!(y);

    Ok(json!({
        "data": [trace],
        "layout": {
            "title": { "text": format!("{y} by {x}") },
            "xaxis": { "title": { "text": x } },
            "yaxis": { "title": { "text": y } },
        },
    }))
}
