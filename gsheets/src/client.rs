use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::{
    domain::{AppendValuesResponse, UpdateValuesResponse, ValueRange},
    SheetsURL,
};

use super::Credentials;

/// External I/O must never hang a submission indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct SheetsClient {
    credentials: Credentials,
    spreadsheet_id: String,
}

impl SheetsClient {
    pub fn new(credentials: Credentials, spreadsheet_id: impl Into<String>) -> Self {
        Self {
            credentials,
            spreadsheet_id: spreadsheet_id.into(),
        }
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    /// URL for a `values/{range}` resource; the A1 range is percent-encoded
    /// so quoted worksheet titles survive the path.
    fn values_url(&self, range: &str, suffix: &str) -> SheetsURL {
        SheetsURL::from_env()
            .append_path(&self.spreadsheet_id)
            .append_path(&format!(
                "values/{}{}",
                urlencoding::encode(range),
                suffix
            ))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: impl AsRef<str>,
    ) -> Result<T, SheetsFetchError> {
        let client = reqwest::Client::new();

        let resp = client
            .get(url.as_ref())
            .timeout(REQUEST_TIMEOUT)
            .header("Authorization", self.credentials.as_bearer_header())
            .send()
            .await
            .map_err(|e| SheetsFetchError::ResponseError(e.to_string()))?;

        Self::decode(resp).await
    }

    async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        url: impl AsRef<str>,
        body: &B,
    ) -> Result<T, SheetsFetchError> {
        let client = reqwest::Client::new();

        let resp = client
            .request(method, url.as_ref())
            .timeout(REQUEST_TIMEOUT)
            .header("Authorization", self.credentials.as_bearer_header())
            .json(body)
            .send()
            .await
            .map_err(|e| SheetsFetchError::ResponseError(e.to_string()))?;

        Self::decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, SheetsFetchError> {
        if resp.status() == 401 || resp.status() == 403 {
            return Err(SheetsFetchError::Unauthorized);
        }

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(SheetsFetchError::ResponseError(format!(
                "{}: {}",
                status, text
            )));
        }

        let resp_data = resp.json::<T>().await.map_err(|e| {
            SheetsFetchError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })?;

        Ok(resp_data)
    }

    /// Bulk-append rows below the last table row of the given worksheet.
    ///
    /// Values go through the same input pipeline as keyboard entry
    /// (`USER_ENTERED`), so dates and numbers are typed by the sheet.
    pub async fn append_rows(
        &self,
        sheet_title: &str,
        rows: Vec<Vec<Value>>,
    ) -> Result<AppendValuesResponse, SheetsFetchError> {
        let range = format!("{}!A1", quote_sheet_title(sheet_title));
        let url = self
            .values_url(&range, ":append")
            .with_param("valueInputOption", "USER_ENTERED")
            .with_param("insertDataOption", "INSERT_ROWS");

        tracing::debug!(sheet = sheet_title, rows = rows.len(), "appending rows");

        self.send(reqwest::Method::POST, url, &ValueRange::from_rows(rows))
            .await
    }

    /// Number of occupied rows in the worksheet, read from its first column.
    pub async fn row_count(&self, sheet_title: &str) -> Result<usize, SheetsFetchError> {
        let range = format!("{}!A:A", quote_sheet_title(sheet_title));
        let url = self.values_url(&range, "");

        let response: ValueRange = self.fetch(url).await?;
        Ok(response.row_count())
    }

    /// Overwrite a single cell. `row` and `col` are 1-based, matching the
    /// sheet's own coordinates.
    pub async fn update_cell(
        &self,
        sheet_title: &str,
        row: usize,
        col: usize,
        value: Value,
    ) -> Result<UpdateValuesResponse, SheetsFetchError> {
        let range = a1_cell(sheet_title, row, col);
        let url = self
            .values_url(&range, "")
            .with_param("valueInputOption", "USER_ENTERED");

        let body = ValueRange {
            range: Some(range),
            ..ValueRange::from_rows(vec![vec![value]])
        };

        self.send(reqwest::Method::PUT, url, &body).await
    }
}

#[derive(Error, Debug)]
pub enum SheetsFetchError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
    #[error("Other: {0}")]
    Other(String),
}

/// Worksheet titles are quoted unconditionally; titles like `自動運転` or
/// anything with spaces are then always valid in A1 notation.
fn quote_sheet_title(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

/// 1-based column index to A1 letters (1 → A, 27 → AA).
fn column_letter(mut col: usize) -> String {
    debug_assert!(col >= 1);
    let mut letters = Vec::new();
    while col > 0 {
        let rem = (col - 1) % 26;
        letters.push(b'A' + rem as u8);
        col = (col - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

fn a1_cell(sheet_title: &str, row: usize, col: usize) -> String {
    format!("{}!{}{}", quote_sheet_title(sheet_title), column_letter(col), row)
}
