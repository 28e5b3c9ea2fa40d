//! Wizard error types

use crate::marketplace::SubmissionError;
use crate::state::forms::{FieldError, FieldTypeMismatch};
use thiserror::Error;

/// Errors for wizard operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// The step being left (or any step, on submit) has invalid fields
    #[error("{label} is incomplete: {} field(s) need attention", .errors.len())]
    StepIncomplete {
        step: usize,
        label: &'static str,
        errors: Vec<FieldError>,
    },

    #[error("Wizard already submitted")]
    AlreadySubmitted,

    #[error(transparent)]
    FieldType(#[from] FieldTypeMismatch),

    #[error("Submission failed: {0}")]
    SubmissionFailed(#[from] SubmissionError),
}
