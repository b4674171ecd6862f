use std::sync::Arc;

use serde::Deserialize;

use crate::domain::{
    models::{SubmissionBatch, WorkRecord},
    ports::outbound::{Cell, Destination, Row, SheetStore, SheetStoreError},
};

/// 1-based column carrying the per-submission total on a batch's last row.
pub const SUMMARY_COLUMN: usize = 7;

/// How the trailing summary reaches a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryMode {
    /// Every row is padded to seven columns and the total travels inline
    /// with the single bulk append.
    #[default]
    InlineColumn,
    /// Six-column rows are appended, then the summary cell is patched with
    /// a second call addressed from the row count observed before the
    /// append. The observe-append-patch sequence is not atomic.
    TrailingPatch,
}

/// What one submit actually wrote to one destination.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationReceipt {
    pub destination: Destination,
    pub rows: usize,
    pub total_hours: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteReceipt {
    pub destinations: Vec<DestinationReceipt>,
}

impl WriteReceipt {
    pub fn rows_written(&self) -> usize {
        self.destinations.iter().map(|receipt| receipt.rows).sum()
    }

    pub fn total_hours(&self) -> f64 {
        self.destinations
            .iter()
            .map(|receipt| receipt.total_hours)
            .sum()
    }
}

/// Shapes a submission batch into row tuples and writes them to the
/// destination tables, one bulk append per destination, each destination
/// getting its own trailing total.
pub struct SheetWriter<S> {
    store: Arc<S>,
    summary_mode: SummaryMode,
}

impl<S: SheetStore> SheetWriter<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            summary_mode: SummaryMode::default(),
        }
    }

    pub fn with_summary_mode(mut self, summary_mode: SummaryMode) -> Self {
        self.summary_mode = summary_mode;
        self
    }

    /// Write the batch. Destinations are written in a fixed order (main,
    /// then automated); there is no rollback of an already-appended
    /// destination when a later one fails.
    pub async fn write(
        &self,
        batch: &SubmissionBatch,
        routed_job_type: Option<&str>,
    ) -> Result<WriteReceipt, SheetStoreError> {
        let (main, automated) = batch.split_by_job_type(routed_job_type);

        let mut receipt = WriteReceipt::default();
        for (destination, records) in [
            (Destination::Main, main),
            (Destination::Automated, automated),
        ] {
            if records.is_empty() {
                continue;
            }

            let total_hours: f64 = records.iter().map(|record| record.hours).sum();
            self.write_destination(destination, batch, &records, total_hours)
                .await?;

            tracing::info!(
                destination = %destination,
                rows = records.len(),
                total_hours,
                "wrote report rows"
            );

            receipt.destinations.push(DestinationReceipt {
                destination,
                rows: records.len(),
                total_hours,
            });
        }

        Ok(receipt)
    }

    async fn write_destination(
        &self,
        destination: Destination,
        batch: &SubmissionBatch,
        records: &[&WorkRecord],
        total_hours: f64,
    ) -> Result<(), SheetStoreError> {
        let summary = format_summary(total_hours);

        match self.summary_mode {
            SummaryMode::InlineColumn => {
                let rows: Vec<Row> = records
                    .iter()
                    .enumerate()
                    .map(|(i, record)| {
                        let mut row = shape_row(batch, record);
                        if i == records.len() - 1 {
                            row.push(Cell::text(summary.clone()));
                        } else {
                            row.push(Cell::text(""));
                        }
                        row
                    })
                    .collect();

                self.store.append_rows(destination, &rows).await
            }
            SummaryMode::TrailingPatch => {
                let rows_before = self.store.row_count(destination).await?;

                let rows: Vec<Row> = records
                    .iter()
                    .map(|record| shape_row(batch, record))
                    .collect();
                self.store.append_rows(destination, &rows).await?;

                let last_row = rows_before + rows.len();
                self.store
                    .update_cell(destination, last_row, SUMMARY_COLUMN, Cell::text(summary))
                    .await
            }
        }
    }
}

/// The trailing total, e.g. "合計 2.00 時間".
pub fn format_summary(total_hours: f64) -> String {
    format!("合計 {:.2} 時間", total_hours)
}

/// Fixed persisted column order:
/// date, worker, customer, job type, job number, hours.
fn shape_row(batch: &SubmissionBatch, record: &WorkRecord) -> Row {
    vec![
        Cell::text(batch.date.to_string()),
        Cell::text(batch.worker.clone()),
        Cell::text(record.effective_customer()),
        Cell::text(record.effective_job_type()),
        Cell::text(record.job_number.clone()),
        Cell::Number(record.hours),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::InMemorySheetStore;
    use crate::domain::models::MISC_CUSTOMER;
    use time::macros::date;

    fn two_record_batch() -> SubmissionBatch {
        SubmissionBatch::new(
            date!(2025 - 01 - 10),
            "田中",
            vec![
                WorkRecord::new("ABC Corp", "新規", "51A111", 1.5),
                WorkRecord::new(MISC_CUSTOMER, "", "CLEANUP", 0.5),
            ],
        )
    }

    #[test]
    fn summary_formatting_is_fixed_precision() {
        assert_eq!(format_summary(2.0), "合計 2.00 時間");
        assert_eq!(format_summary(3.5), "合計 3.50 時間");
        assert_eq!(format_summary(0.25), "合計 0.25 時間");
    }

    #[tokio::test]
    async fn inline_mode_pads_rows_and_stamps_only_the_last() {
        let store = Arc::new(InMemorySheetStore::new());
        let writer = SheetWriter::new(store.clone());

        let receipt = writer.write(&two_record_batch(), None).await.unwrap();
        assert_eq!(receipt.rows_written(), 2);
        assert!((receipt.total_hours() - 2.0).abs() < f64::EPSILON);

        let rows = store.rows(Destination::Main);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == SUMMARY_COLUMN));
        assert_eq!(rows[0][SUMMARY_COLUMN - 1].as_text(), Some(""));
        assert_eq!(rows[1][SUMMARY_COLUMN - 1].as_text(), Some("合計 2.00 時間"));
        // Miscellaneous row keeps its job-type column empty.
        assert_eq!(rows[1][3].as_text(), Some(""));
    }

    #[tokio::test]
    async fn patch_mode_addresses_the_last_appended_row() {
        let existing = vec![vec![Cell::text("header")], vec![Cell::text("old row")]];
        let store =
            Arc::new(InMemorySheetStore::new().with_rows(Destination::Main, existing));
        let writer = SheetWriter::new(store.clone()).with_summary_mode(SummaryMode::TrailingPatch);

        writer.write(&two_record_batch(), None).await.unwrap();

        let rows = store.rows(Destination::Main);
        assert_eq!(rows.len(), 4);
        // Appended rows are six columns wide until the patch lands.
        assert_eq!(rows[2].len(), 6);
        assert_eq!(rows[3].len(), SUMMARY_COLUMN);
        assert_eq!(rows[3][SUMMARY_COLUMN - 1].as_text(), Some("合計 2.00 時間"));
    }

    #[tokio::test]
    async fn routed_records_get_their_own_destination_and_summary() {
        let store = Arc::new(InMemorySheetStore::new());
        let writer = SheetWriter::new(store.clone());

        let batch = SubmissionBatch::new(
            date!(2025 - 02 - 03),
            "大地",
            vec![
                WorkRecord::new("ヨロズ", "新規", "51A100", 3.0),
                WorkRecord::new("ヨロズ", "自動運転", "51A100", 5.0),
                WorkRecord::new("三池", "自動運転", "51B200", 2.0),
            ],
        );

        writer.write(&batch, Some("自動運転")).await.unwrap();

        let main = store.rows(Destination::Main);
        assert_eq!(main.len(), 1);
        assert_eq!(main[0][SUMMARY_COLUMN - 1].as_text(), Some("合計 3.00 時間"));

        let automated = store.rows(Destination::Automated);
        assert_eq!(automated.len(), 2);
        assert_eq!(automated[0][SUMMARY_COLUMN - 1].as_text(), Some(""));
        assert_eq!(
            automated[1][SUMMARY_COLUMN - 1].as_text(),
            Some("合計 7.00 時間")
        );
    }

    #[tokio::test]
    async fn rows_carry_the_shared_date_and_worker() {
        let store = Arc::new(InMemorySheetStore::new());
        let writer = SheetWriter::new(store.clone());

        writer.write(&two_record_batch(), None).await.unwrap();

        let rows = store.rows(Destination::Main);
        for row in &rows {
            assert_eq!(row[0].as_text(), Some("2025-01-10"));
            assert_eq!(row[1].as_text(), Some("田中"));
        }
        assert_eq!(rows[0][5].as_number(), Some(1.5));
    }

    #[tokio::test]
    async fn partial_multi_destination_failure_leaves_main_written() {
        // The accepted risk of the no-transaction design: main is durable,
        // automated failed, and a retry would duplicate the main rows.
        let store =
            Arc::new(InMemorySheetStore::new().failing_appends_to(Destination::Automated));
        let writer = SheetWriter::new(store.clone());

        let batch = SubmissionBatch::new(
            date!(2025 - 02 - 03),
            "大地",
            vec![
                WorkRecord::new("ヨロズ", "新規", "51A100", 3.0),
                WorkRecord::new("ヨロズ", "自動運転", "51A100", 5.0),
            ],
        );

        let err = writer.write(&batch, Some("自動運転")).await.unwrap_err();
        assert!(matches!(err, SheetStoreError::Transport(_)));
        assert_eq!(store.rows(Destination::Main).len(), 1);
        assert!(store.rows(Destination::Automated).is_empty());

        // Retrying the same eligible records appends main again: delivery
        // is at-least-once, not exactly-once.
        store.clear_failure();
        writer.write(&batch, Some("自動運転")).await.unwrap();
        assert_eq!(store.rows(Destination::Main).len(), 2);
        assert_eq!(store.rows(Destination::Automated).len(), 1);
    }
}
