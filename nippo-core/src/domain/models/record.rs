use time::Date;

use super::{MISC_CUSTOMER, OTHER_CUSTOMER, PLEASE_SELECT};

/// One form slot's entry: the work a person did on one job.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkRecord {
    /// Catalogue value, or the miscellaneous/other sentinels.
    pub customer: String,
    /// Free-text customer name; meaningful only when `customer` is the
    /// other-customer sentinel.
    pub customer_other: String,
    /// Catalogue value; blank for miscellaneous work.
    pub job_type: String,
    /// Upper-cased free text, e.g. "51A111".
    pub job_number: String,
    pub hours: f64,
}

impl WorkRecord {
    pub fn new(
        customer: impl Into<String>,
        job_type: impl Into<String>,
        job_number: impl Into<String>,
        hours: f64,
    ) -> Self {
        Self {
            customer: customer.into(),
            customer_other: String::new(),
            job_type: job_type.into(),
            job_number: job_number.into(),
            hours,
        }
    }

    pub fn with_customer_other(mut self, name: impl Into<String>) -> Self {
        self.customer_other = name.into();
        self
    }

    /// The customer name written downstream: the free-text name when the
    /// other-customer sentinel was chosen, else the catalogue value.
    ///
    /// Choosing "other" and leaving the free text blank yields an empty
    /// name; that permissive behavior is intentional.
    pub fn effective_customer(&self) -> &str {
        if self.customer == OTHER_CUSTOMER {
            &self.customer_other
        } else {
            &self.customer
        }
    }

    /// The job type written downstream; miscellaneous work is never
    /// categorized, so it maps to the empty string.
    pub fn effective_job_type(&self) -> &str {
        if self.customer == MISC_CUSTOMER {
            ""
        } else {
            &self.job_type
        }
    }

    /// Eligible for submission: customer chosen, job type chosen (or
    /// miscellaneous), job number filled in, hours positive.
    pub fn is_complete(&self) -> bool {
        let customer_chosen = !self.customer.is_empty() && self.customer != PLEASE_SELECT;
        let job_type_chosen = self.customer == MISC_CUSTOMER
            || (!self.job_type.is_empty() && self.job_type != PLEASE_SELECT);

        customer_chosen && job_type_chosen && !self.job_number.is_empty() && self.hours > 0.0
    }
}

/// The complete records collected by one submit action, sharing one date
/// and one worker name.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionBatch {
    pub date: Date,
    pub worker: String,
    pub records: Vec<WorkRecord>,
}

impl SubmissionBatch {
    pub fn new(date: Date, worker: impl Into<String>, records: Vec<WorkRecord>) -> Self {
        Self {
            date,
            worker: worker.into(),
            records,
        }
    }

    pub fn total_hours(&self) -> f64 {
        self.records.iter().map(|record| record.hours).sum()
    }

    /// Split into (main, routed) record sets; everything lands in main
    /// when the department routes no job type.
    pub fn split_by_job_type(&self, routed_job_type: Option<&str>) -> (Vec<&WorkRecord>, Vec<&WorkRecord>) {
        match routed_job_type {
            Some(routed) => self
                .records
                .iter()
                .partition(|record| record.job_type != routed),
            None => (self.records.iter().collect(), Vec::new()),
        }
    }
}
