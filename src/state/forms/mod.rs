//! Form domain layer
//!
//! Typed form state for the job and partner wizards, the step tables that
//! drive them, and the validation rules each step is gated on.

mod detail;
mod field;
mod form;
mod job_form;
mod job_rules;
mod partner_form;
mod validation;

pub use detail::ListingDetail;
pub use field::{ChoiceOption, FieldKind, FieldSpec, FieldValue};
pub use form::{FieldTypeMismatch, StepDefinition, WizardForm};
pub use job_form::{JobForm, Priority};
pub use job_rules::JobRules;
pub use partner_form::{Membership, PartnerProfile};
pub use validation::{FieldError, ValidationResult};

#[cfg(test)]
pub use job_form::{CargoType, JobField, PaymentTerms};
