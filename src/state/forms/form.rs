//! The contract between a multi-step form and the wizard that drives it

use super::field::{FieldId, FieldSpec, FieldValue};
use super::validation::ValidationResult;
use std::fmt::Debug;
use thiserror::Error;

/// One page of a multi-step form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition<F: 'static> {
    pub id: &'static str,
    pub label: &'static str,
    pub fields: &'static [F],
}

/// Returned when a setter receives a value it cannot store in a field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field {field} expects a {expected} value, got {actual}")]
pub struct FieldTypeMismatch {
    pub field: &'static str,
    pub expected: &'static str,
    pub actual: &'static str,
}

/// A form that can be driven step by step by a wizard.
///
/// Step order is fixed by [`WizardForm::steps`] and every field belongs to
/// exactly one step. Visibility and validation must agree: a field for which
/// [`WizardForm::is_visible`] is false never appears in a validation result.
pub trait WizardForm: Clone + Debug + 'static {
    type Field: FieldId;
    type Rules: Debug;

    /// Ordered step table
    fn steps() -> &'static [StepDefinition<Self::Field>];

    fn field_spec(field: Self::Field) -> FieldSpec;

    fn value(&self, field: Self::Field) -> FieldValue;

    fn set_value(&mut self, field: Self::Field, value: FieldValue)
        -> Result<(), FieldTypeMismatch>;

    /// Whether a field is currently rendered and required
    fn is_visible(&self, _field: Self::Field) -> bool {
        true
    }

    /// Validate the fields of one step. Collects every error in one pass.
    fn validate_step(&self, step: usize, rules: &Self::Rules) -> ValidationResult<Self::Field>;

    /// Index of the step that owns a field
    #[cfg(test)]
    fn step_of(field: Self::Field) -> Option<usize> {
        Self::steps()
            .iter()
            .position(|step| step.fields.contains(&field))
    }
}

/// Build a [`FieldTypeMismatch`] for a field and the offending value
pub fn mismatch<F: FieldId>(field: F, expected: FieldSpec, actual: &FieldValue) -> FieldTypeMismatch {
    FieldTypeMismatch {
        field: field.name(),
        expected: expected.kind.value_kind(),
        actual: actual.kind_name(),
    }
}

/// Resolve a choice value against an option set. Unknown options are rejected.
pub fn parse_choice<F: FieldId, C>(
    field: F,
    value: Option<&'static str>,
    from_value: fn(&str) -> Option<C>,
) -> Result<Option<C>, FieldTypeMismatch> {
    match value {
        None => Ok(None),
        Some(v) => from_value(v).map(Some).ok_or(FieldTypeMismatch {
            field: field.name(),
            expected: "choice",
            actual: "unknown option",
        }),
    }
}
