use async_trait::async_trait;
use serde_json::Value;

use crate::domain::ports::outbound::{Cell, Destination, Row, SheetStore, SheetStoreError};

/// Where each logical destination lives inside the configured spreadsheet.
#[derive(Debug, Clone)]
pub struct WorksheetNames {
    pub main: String,
    pub automated: Option<String>,
}

impl WorksheetNames {
    pub fn single(main: impl Into<String>) -> Self {
        Self {
            main: main.into(),
            automated: None,
        }
    }

    pub fn with_automated(main: impl Into<String>, automated: impl Into<String>) -> Self {
        Self {
            main: main.into(),
            automated: Some(automated.into()),
        }
    }

    fn resolve(&self, destination: Destination) -> Result<&str, SheetStoreError> {
        match destination {
            Destination::Main => Ok(&self.main),
            Destination::Automated => self.automated.as_deref().ok_or_else(|| {
                SheetStoreError::Store(
                    "no worksheet is configured for the automated destination".to_string(),
                )
            }),
        }
    }
}

/// Adapter that exposes one spreadsheet as the [`SheetStore`] port.
pub struct GsheetsStore {
    client: gsheets::SheetsClient,
    worksheets: WorksheetNames,
}

impl GsheetsStore {
    pub fn new(
        credentials: gsheets::Credentials,
        spreadsheet_id: impl Into<String>,
        worksheets: WorksheetNames,
    ) -> Self {
        Self {
            client: gsheets::SheetsClient::new(credentials, spreadsheet_id),
            worksheets,
        }
    }
}

#[async_trait]
impl SheetStore for GsheetsStore {
    async fn append_rows(
        &self,
        destination: Destination,
        rows: &[Row],
    ) -> Result<(), SheetStoreError> {
        let sheet = self.worksheets.resolve(destination)?;
        let values = rows
            .iter()
            .map(|row| row.iter().map(to_value).collect())
            .collect();

        self.client
            .append_rows(sheet, values)
            .await
            .map_err(map_fetch_error)?;
        Ok(())
    }

    async fn row_count(&self, destination: Destination) -> Result<usize, SheetStoreError> {
        let sheet = self.worksheets.resolve(destination)?;
        self.client.row_count(sheet).await.map_err(map_fetch_error)
    }

    async fn update_cell(
        &self,
        destination: Destination,
        row: usize,
        col: usize,
        value: Cell,
    ) -> Result<(), SheetStoreError> {
        let sheet = self.worksheets.resolve(destination)?;
        self.client
            .update_cell(sheet, row, col, to_value(&value))
            .await
            .map_err(map_fetch_error)?;
        Ok(())
    }
}

fn to_value(cell: &Cell) -> Value {
    match cell {
        Cell::Text(text) => Value::from(text.as_str()),
        Cell::Number(value) => Value::from(*value),
    }
}

fn map_fetch_error(error: gsheets::SheetsFetchError) -> SheetStoreError {
    match error {
        gsheets::SheetsFetchError::Unauthorized => SheetStoreError::Unauthorized,
        other => SheetStoreError::Transport(other.to_string()),
    }
}
