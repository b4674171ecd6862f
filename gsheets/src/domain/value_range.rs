use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A block of cell values addressed by an A1 range, as the API sends and
/// receives them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Vec<Value>>>,
}

impl ValueRange {
    pub fn from_rows(rows: Vec<Vec<Value>>) -> Self {
        Self {
            values: Some(rows),
            ..Self::default()
        }
    }

    pub fn row_count(&self) -> usize {
        self.values.as_ref().map(Vec::len).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateValuesResponse {
    pub spreadsheet_id: String,
    pub updated_range: String,
    #[serde(default)]
    pub updated_rows: Option<u32>,
    #[serde(default)]
    pub updated_columns: Option<u32>,
    #[serde(default)]
    pub updated_cells: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendValuesResponse {
    pub spreadsheet_id: String,
    #[serde(default)]
    pub table_range: Option<String>,
    pub updates: UpdateValuesResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_response_deserializes() {
        let raw = r#"{
            "spreadsheetId": "sheet-id",
            "tableRange": "'シート1'!A1:G4",
            "updates": {
                "spreadsheetId": "sheet-id",
                "updatedRange": "'シート1'!A5:G6",
                "updatedRows": 2,
                "updatedColumns": 7,
                "updatedCells": 14
            }
        }"#;

        let response: AppendValuesResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.updates.updated_rows, Some(2));
        assert_eq!(response.updates.updated_range, "'シート1'!A5:G6");
    }

    #[test]
    fn value_range_counts_rows() {
        let range = ValueRange::from_rows(vec![
            vec![Value::from("2025-01-10"), Value::from(1.5)],
            vec![Value::from("2025-01-11"), Value::from(2.0)],
        ]);
        assert_eq!(range.row_count(), 2);

        let empty = ValueRange::default();
        assert_eq!(empty.row_count(), 0);
    }
}
