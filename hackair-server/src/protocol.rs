//! Request and response bodies of the JSON dashboard protocol.

use hackair::{Measurement, Target};
use serde::{Deserialize, Serialize};

/// Body of `POST /query`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    /// Requested window.
    pub range: QueryRange,
    /// Targets to answer, in order.
    #[serde(default)]
    pub targets: Vec<QueryTarget>,
}

/// Window bounds as ISO-8601 instants, e.g. `2016-10-31T06:33:44.866Z`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRange {
    /// Inclusive start.
    pub from: String,
    /// Inclusive end.
    pub to: String,
}

/// One requested target. `refId` and `type` are accepted but unused.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryTarget {
    /// Target name; unknown names are skipped.
    pub target: String,
    /// Panel-side reference id.
    #[serde(rename = "refId", default)]
    pub ref_id: Option<String>,
    /// Panel-side response type hint.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Header of a table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Column title.
    pub text: &'static str,
}

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// Text cell, e.g. a sensor id.
    Text(String),
    /// Integer cell, e.g. a count.
    Count(usize),
}

/// Table-shaped answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    /// Column headers.
    pub columns: Vec<Column>,
    /// Rows, each with one cell per column.
    pub rows: Vec<Vec<Cell>>,
    /// Always `"table"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl Table {
    fn single_column(title: &'static str, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            columns: vec![Column { text: title }],
            rows,
            kind: "table",
        }
    }

    /// One row per sensor id.
    pub fn sensors<I: IntoIterator<Item = String>>(ids: I) -> Self {
        Self::single_column(
            "sensor_id",
            ids.into_iter().map(|id| vec![Cell::Text(id)]).collect(),
        )
    }

    /// A single row holding the sensor count.
    #[must_use]
    pub fn sensor_count(n: usize) -> Self {
        Self::single_column("sensor_count", vec![vec![Cell::Count(n)]])
    }
}

/// Time-series answer: `[value, epoch_ms]` pairs in ascending time order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    /// Target the series answers.
    pub target: Target,
    /// Observations.
    pub datapoints: Vec<Measurement>,
}

/// One element of the `/query` response array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryResponse {
    /// Table-shaped answer.
    Table(Table),
    /// Time-series answer.
    TimeSeries(TimeSeries),
}

/// Error body returned with any non-2xx status.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Human-readable description.
    pub error: String,
}
