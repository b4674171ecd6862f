use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::ports::outbound::{Cell, Destination, Row, SheetStore, SheetStoreError};

/// In-memory sheet store backed by a HashMap, for tests and offline runs.
///
/// Append failures can be injected per destination to exercise the
/// partial-batch failure paths.
#[derive(Clone, Default)]
pub struct InMemorySheetStore {
    tables: Arc<RwLock<HashMap<Destination, Vec<Row>>>>,
    fail_appends_to: Arc<RwLock<Option<Destination>>>,
}

impl InMemorySheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a destination with existing rows.
    pub fn with_rows(self, destination: Destination, rows: Vec<Row>) -> Self {
        {
            let mut tables = self.tables.write().unwrap();
            tables.insert(destination, rows);
        }
        self
    }

    /// Make every append to the given destination fail with a transport
    /// error until [`clear_failure`](Self::clear_failure) is called.
    pub fn failing_appends_to(self, destination: Destination) -> Self {
        {
            let mut failing = self.fail_appends_to.write().unwrap();
            *failing = Some(destination);
        }
        self
    }

    pub fn clear_failure(&self) {
        *self.fail_appends_to.write().unwrap() = None;
    }

    /// Current rows of a destination (for test assertions).
    pub fn rows(&self, destination: Destination) -> Vec<Row> {
        self.tables
            .read()
            .unwrap()
            .get(&destination)
            .cloned()
            .unwrap_or_default()
    }

    pub fn len(&self, destination: Destination) -> usize {
        self.tables
            .read()
            .unwrap()
            .get(&destination)
            .map(Vec::len)
            .unwrap_or(0)
    }

    pub fn is_empty(&self, destination: Destination) -> bool {
        self.len(destination) == 0
    }
}

#[async_trait]
impl SheetStore for InMemorySheetStore {
    async fn append_rows(
        &self,
        destination: Destination,
        rows: &[Row],
    ) -> Result<(), SheetStoreError> {
        if *self.fail_appends_to.read().unwrap() == Some(destination) {
            return Err(SheetStoreError::Transport(format!(
                "injected append failure for {}",
                destination
            )));
        }

        self.tables
            .write()
            .unwrap()
            .entry(destination)
            .or_default()
            .extend(rows.iter().cloned());
        Ok(())
    }

    async fn row_count(&self, destination: Destination) -> Result<usize, SheetStoreError> {
        Ok(self.len(destination))
    }

    async fn update_cell(
        &self,
        destination: Destination,
        row: usize,
        col: usize,
        value: Cell,
    ) -> Result<(), SheetStoreError> {
        let mut tables = self.tables.write().unwrap();
        let rows = tables.entry(destination).or_default();

        let Some(target) = rows.get_mut(row.wrapping_sub(1)) else {
            return Err(SheetStoreError::Store(format!(
                "row {} is out of range for {}",
                row, destination
            )));
        };

        while target.len() < col {
            target.push(Cell::text(""));
        }
        target[col - 1] = value;
        Ok(())
    }
}
