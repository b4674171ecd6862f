use async_trait::async_trait;
use strum::Display;
use thiserror::Error;

/// A named target table within the external tabular store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Destination {
    /// The default table every department writes to.
    #[strum(serialize = "main")]
    Main,
    /// Auxiliary table for the routed job type (unattended machine runs).
    #[strum(serialize = "automated")]
    Automated,
}

/// One cell of an appended row.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            Cell::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Text(_) => None,
            Cell::Number(value) => Some(*value),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

pub type Row = Vec<Cell>;

/// Errors from the external tabular store.
#[derive(Debug, Error)]
pub enum SheetStoreError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Store(String),
}

/// Outbound port for the external tabular store.
///
/// The store offers no transactions; a multi-destination write is a
/// sequence of independent appends, serialized by the store in the order
/// received.
#[async_trait]
pub trait SheetStore: Send + Sync + 'static {
    /// Bulk-append rows below the destination's current last row, in order.
    async fn append_rows(&self, destination: Destination, rows: &[Row])
        -> Result<(), SheetStoreError>;

    /// Occupied row count, observed before an append to address a later
    /// single-cell patch.
    async fn row_count(&self, destination: Destination) -> Result<usize, SheetStoreError>;

    /// Overwrite one cell. `row` and `col` are 1-based.
    async fn update_cell(
        &self,
        destination: Destination,
        row: usize,
        col: usize,
        value: Cell,
    ) -> Result<(), SheetStoreError>;
}
