//! Trait abstraction for form submission to enable mocking in tests

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Acknowledgement returned for an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub reference: Uuid,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    /// A fresh receipt stamped with the current time
    pub fn issue() -> Self {
        Self {
            reference: Uuid::new_v4(),
            submitted_at: Utc::now(),
        }
    }

    /// First block of the reference, for status lines
    pub fn short_reference(&self) -> String {
        self.reference.simple().to_string()[..8].to_string()
    }
}

/// Why a collaborator refused a submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct SubmissionError(pub String);

/// Receives a finalized form once every step has validated
#[cfg_attr(test, mockall::automock)]
pub trait Submitter<F: 'static> {
    fn submit(&mut self, form: &F) -> Result<SubmissionReceipt, SubmissionError>;
}
