use std::sync::Arc;

use time::Date;

use crate::domain::{
    hours::parse_hours_or_zero,
    models::{DepartmentProfile, SubmissionBatch, WorkRecord, MISC_CUSTOMER, OTHER_CUSTOMER, PLEASE_SELECT},
    ports::outbound::{FieldSource, SheetStore},
    session::SessionState,
    SubmitError,
};

use super::{SheetWriter, WriteReceipt};

/// Everything gathered from the rendering layer in one pass over the form.
#[derive(Debug, Clone)]
pub struct FormInput {
    pub date: Date,
    pub worker: String,
    pub records: Vec<WorkRecord>,
}

/// The records that survive validation, with their hour totals split by
/// the routed category when the department has one.
#[derive(Debug, Clone, Default)]
pub struct ValidSubset {
    pub records: Vec<WorkRecord>,
    pub normal_hours: f64,
    pub automated_hours: f64,
}

impl ValidSubset {
    pub fn total_hours(&self) -> f64 {
        self.normal_hours + self.automated_hours
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Orchestrates one department's form session: collects up to
/// `slot_cap` records, validates them, totals the hours and drives the
/// submit workflow against the sheet writer.
pub struct FormSession<S> {
    profile: DepartmentProfile,
    state: SessionState,
    writer: SheetWriter<S>,
}

impl<S: SheetStore> FormSession<S> {
    pub fn new(profile: DepartmentProfile, store: Arc<S>) -> Self {
        let state = SessionState::new(profile.slot_cap);
        Self {
            profile,
            state,
            writer: SheetWriter::new(store),
        }
    }

    pub fn with_writer(profile: DepartmentProfile, writer: SheetWriter<S>) -> Self {
        let state = SessionState::new(profile.slot_cap);
        Self {
            profile,
            state,
            writer,
        }
    }

    pub fn profile(&self) -> &DepartmentProfile {
        &self.profile
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn add_slot(&mut self) {
        self.state.add_slot();
    }

    /// One-shot success acknowledgment; see [`SessionState::consume_just_submitted`].
    pub fn consume_just_submitted(&mut self) -> bool {
        self.state.consume_just_submitted()
    }

    /// Request every field of the form from the collaborator: the shared
    /// date and worker name, then one record per visible slot, in slot
    /// order. Returns None until a real worker name has been chosen;
    /// nothing below the name renders before that.
    pub fn collect(&self, fields: &impl FieldSource, today: Date) -> Option<FormInput> {
        let worker = fields.select("名前", &self.profile.worker_options(), "name");
        if worker == PLEASE_SELECT {
            return None;
        }

        let date = fields.date("日付を選択してください", "day", today);

        let records = (1..=self.state.slot_count())
            .map(|index| self.collect_slot(fields, index))
            .collect();

        Some(FormInput {
            date,
            worker,
            records,
        })
    }

    fn collect_slot(&self, fields: &impl FieldSource, index: usize) -> WorkRecord {
        let customer = fields.select(
            &format!("メーカー{index}"),
            &self.profile.customer_options(),
            &format!("customer_{index}"),
        );

        let customer_other = if customer == OTHER_CUSTOMER {
            fields.text(
                &format!("メーカー名を入力{index}"),
                &format!("new_customer_{index}"),
                "",
            )
        } else {
            String::new()
        };

        // Miscellaneous work is never categorized; the job type stays blank.
        let job_type = if customer != PLEASE_SELECT && customer != MISC_CUSTOMER {
            fields.select(
                &format!("作業内容{index}"),
                &self.profile.job_type_options(),
                &format!("genre_{index}"),
            )
        } else {
            String::new()
        };

        let job_number = if job_type != PLEASE_SELECT {
            fields
                .text(
                    &format!("工番を入力{index}"),
                    &format!("number_{index}"),
                    self.profile.default_job_number(&job_type),
                )
                .to_uppercase()
        } else {
            String::new()
        };

        let hours = parse_hours_or_zero(&fields.text(
            &format!("時間を入力{index}"),
            &format!("time_{index}"),
            "",
        ));

        WorkRecord {
            customer,
            customer_other,
            job_type,
            job_number,
            hours,
        }
    }

    /// Filter to complete records and total their hours. Incomplete slots
    /// contribute nothing; they are advisory noise, not errors.
    pub fn valid_subset(&self, records: &[WorkRecord]) -> ValidSubset {
        let mut subset = ValidSubset::default();

        for record in records.iter().filter(|record| record.is_complete()) {
            let routed = self
                .profile
                .routed_job_type
                .is_some_and(|routed| routed == record.job_type);
            if routed {
                subset.automated_hours += record.hours;
            } else {
                subset.normal_hours += record.hours;
            }
            subset.records.push(record.clone());
        }

        subset
    }

    /// Submit the complete records as one batch.
    ///
    /// Guarded by the session's advisory in-flight gate; the gate is
    /// always released afterwards so a failed attempt can be retried with
    /// the entered values intact. Nothing is retried automatically.
    pub async fn submit(
        &mut self,
        records: &[WorkRecord],
        date: Date,
        worker: &str,
    ) -> Result<WriteReceipt, SubmitError> {
        if self.state.is_submitting() {
            return Err(SubmitError::AlreadyInFlight);
        }

        self.state.mark_validating();
        let subset = self.valid_subset(records);
        if subset.is_empty() {
            self.state.mark_collecting();
            return Err(SubmitError::NothingToSubmit);
        }

        if !self.state.begin_submit() {
            return Err(SubmitError::AlreadyInFlight);
        }

        let batch = SubmissionBatch::new(date, worker, subset.records);
        tracing::info!(
            worker,
            date = %date,
            records = batch.records.len(),
            total_hours = subset.normal_hours + subset.automated_hours,
            "submitting report batch"
        );

        match self.writer.write(&batch, self.profile.routed_job_type).await {
            Ok(receipt) => {
                self.state.end_submit(true);
                Ok(receipt)
            }
            Err(source) => {
                self.state.end_submit(false);
                let err = SubmitError::Store(source);
                tracing::error!(error = %err, "report batch was not written");
                Err(err)
            }
        }
    }
}
