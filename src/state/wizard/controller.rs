//! Wizard state machine
//!
//! States are the step indices `0..N` plus a terminal submitted state.
//! `next` advances one step when the active step validates (submitting from
//! the last step), `back` retreats one step, `go_to` only jumps backward.
//! Nothing leaves the submitted state.

use super::error::WizardError;
use crate::marketplace::{SubmissionReceipt, Submitter};
use crate::state::forms::{FieldValue, StepDefinition, ValidationResult, WizardForm};

/// Result of a successful `next`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Advanced { from: usize, to: usize },
    Submitted(SubmissionReceipt),
}

/// One breadcrumb of the step indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepStatus {
    pub index: usize,
    pub label: &'static str,
    pub active: bool,
    pub completed: bool,
}

/// Drives one form through its steps
#[derive(Debug)]
pub struct WizardController<F: WizardForm> {
    form: F,
    rules: F::Rules,
    active_step: usize,
    /// Errors currently shown for the active step
    errors: ValidationResult<F::Field>,
    receipt: Option<SubmissionReceipt>,
}

impl<F: WizardForm> WizardController<F> {
    pub fn new(form: F, rules: F::Rules) -> Self {
        Self {
            form,
            rules,
            active_step: 0,
            errors: ValidationResult::new(),
            receipt: None,
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn steps(&self) -> &'static [StepDefinition<F::Field>] {
        F::steps()
    }

    pub fn active_step(&self) -> usize {
        self.active_step
    }

    pub fn current_step(&self) -> &'static StepDefinition<F::Field> {
        &F::steps()[self.active_step]
    }

    pub fn is_terminal_step(&self) -> bool {
        self.active_step + 1 >= F::steps().len()
    }

    pub fn is_submitted(&self) -> bool {
        self.receipt.is_some()
    }

    #[cfg(test)]
    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        self.receipt.as_ref()
    }

    /// Breadcrumbs: a step is complete once the wizard has moved past it
    pub fn step_statuses(&self) -> Vec<StepStatus> {
        F::steps()
            .iter()
            .enumerate()
            .map(|(index, step)| StepStatus {
                index,
                label: step.label,
                active: index == self.active_step && !self.is_submitted(),
                completed: self.is_submitted() || index < self.active_step,
            })
            .collect()
    }

    pub fn value(&self, field: F::Field) -> FieldValue {
        self.form.value(field)
    }

    /// Replace one field's value.
    ///
    /// While the active step shows errors, the step is re-validated and the
    /// flagged fields keep only errors that still apply.
    pub fn set_value(&mut self, field: F::Field, value: FieldValue) -> Result<(), WizardError> {
        if self.is_submitted() {
            return Err(WizardError::AlreadySubmitted);
        }
        self.form.set_value(field, value)?;

        if !self.errors.is_empty() {
            let flagged: Vec<F::Field> = self.errors.fields().collect();
            let mut fresh = self.form.validate_step(self.active_step, &self.rules);
            fresh.retain(|f| flagged.contains(&f));
            self.errors = fresh;
        }
        Ok(())
    }

    pub fn error(&self, field: F::Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Errors currently shown for the active step
    pub fn errors(&self) -> &ValidationResult<F::Field> {
        &self.errors
    }

    pub fn is_visible(&self, field: F::Field) -> bool {
        self.form.is_visible(field)
    }

    /// Fields of the active step that are currently rendered
    pub fn visible_fields(&self) -> Vec<F::Field> {
        self.current_step()
            .fields
            .iter()
            .copied()
            .filter(|f| self.is_visible(*f))
            .collect()
    }

    fn incomplete(&self, step: usize, result: &ValidationResult<F::Field>) -> WizardError {
        WizardError::StepIncomplete {
            step,
            label: F::steps()[step].label,
            errors: result.to_field_errors(),
        }
    }

    /// Validate the active step and move forward, submitting from the last step
    pub fn next<S>(&mut self, submitter: &mut S) -> Result<Transition, WizardError>
    where
        S: Submitter<F> + ?Sized,
    {
        if self.is_submitted() {
            return Err(WizardError::AlreadySubmitted);
        }

        let result = self.form.validate_step(self.active_step, &self.rules);
        if !result.is_valid() {
            let err = self.incomplete(self.active_step, &result);
            tracing::debug!(step = self.active_step, errors = result.len(), "step incomplete");
            self.errors = result;
            return Err(err);
        }
        self.errors = ValidationResult::new();

        if self.is_terminal_step() {
            return self.submit(submitter).map(Transition::Submitted);
        }

        let from = self.active_step;
        self.active_step += 1;
        tracing::debug!(from, to = self.active_step, "wizard advanced");
        Ok(Transition::Advanced {
            from,
            to: self.active_step,
        })
    }

    /// Move back one step. Returns false at the first step or after submission.
    pub fn back(&mut self) -> bool {
        if self.is_submitted() || self.active_step == 0 {
            return false;
        }
        self.active_step -= 1;
        self.errors = ValidationResult::new();
        true
    }

    /// Revisit an earlier (or the current) step. Forward jumps are ignored.
    pub fn go_to(&mut self, step: usize) -> bool {
        if self.is_submitted() || step > self.active_step {
            return false;
        }
        if step != self.active_step {
            self.active_step = step;
            self.errors = ValidationResult::new();
        }
        true
    }

    /// Re-validate every step and hand the form to the submitter.
    ///
    /// On failure the wizard moves to the first invalid step and shows its
    /// errors. A refused submission leaves the wizard where it was.
    pub fn submit<S>(&mut self, submitter: &mut S) -> Result<SubmissionReceipt, WizardError>
    where
        S: Submitter<F> + ?Sized,
    {
        if self.is_submitted() {
            return Err(WizardError::AlreadySubmitted);
        }

        for step in 0..F::steps().len() {
            let result = self.form.validate_step(step, &self.rules);
            if !result.is_valid() {
                let err = self.incomplete(step, &result);
                tracing::debug!(step, errors = result.len(), "submit blocked by invalid step");
                self.active_step = step;
                self.errors = result;
                return Err(err);
            }
        }

        let receipt = submitter.submit(&self.form).map_err(|e| {
            tracing::warn!(error = %e, "submission refused");
            WizardError::from(e)
        })?;
        tracing::info!(reference = %receipt.reference, "wizard submitted");
        self.errors = ValidationResult::new();
        self.receipt = Some(receipt.clone());
        Ok(receipt)
    }

    #[cfg(test)]
    pub fn into_form(self) -> F {
        self.form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketplace::{MockSubmitter, SubmissionError};
    use crate::state::fixtures::{date, harbor_freight, reefer_job};
    use crate::state::forms::{JobField, JobForm, JobRules, PartnerProfile};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn receipt() -> SubmissionReceipt {
        SubmissionReceipt {
            reference: Uuid::nil(),
            submitted_at: Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    /// A submitter that must never be called
    fn untouched() -> MockSubmitter<JobForm> {
        let mut mock = MockSubmitter::new();
        mock.expect_submit().never();
        mock
    }

    fn accepting() -> MockSubmitter<JobForm> {
        let mut mock = MockSubmitter::new();
        mock.expect_submit().returning(|_| Ok(receipt()));
        mock
    }

    fn job_wizard(form: JobForm) -> WizardController<JobForm> {
        WizardController::new(form, JobRules::default())
    }

    fn blank_wizard() -> WizardController<JobForm> {
        job_wizard(JobForm::new(date(2025, 5, 1)))
    }

    mod initial_state_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_at_first_step() {
            let wizard = blank_wizard();
            assert_eq!(wizard.active_step(), 0);
            assert_eq!(wizard.current_step().id, "basicInfo");
            assert!(!wizard.is_submitted());
            assert!(wizard.errors().is_empty());
        }

        #[test]
        fn test_step_statuses_initially_none_completed() {
            let statuses = blank_wizard().step_statuses();
            assert_eq!(statuses.len(), 6);
            assert!(statuses[0].active);
            assert!(statuses.iter().all(|s| !s.completed));
            assert_eq!(statuses[4].label, "Budget & Bidding");
        }
    }

    mod next_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_invalid_step_blocks_and_surfaces_errors() {
            let mut wizard = blank_wizard();
            let err = wizard.next(&mut untouched()).unwrap_err();

            match err {
                WizardError::StepIncomplete { step, label, errors } => {
                    assert_eq!(step, 0);
                    assert_eq!(label, "Basic Info");
                    let names: Vec<_> = errors.iter().map(|e| e.field).collect();
                    assert_eq!(names, vec!["title", "category", "description"]);
                }
                other => panic!("unexpected error: {other:?}"),
            }
            assert_eq!(wizard.active_step(), 0);
            assert_eq!(
                wizard.error(JobField::Title),
                Some("Job title must be at least 10 characters")
            );
        }

        #[test]
        fn test_valid_step_advances_by_exactly_one_per_call() {
            let mut wizard = job_wizard(reefer_job());
            let mut submitter = untouched();

            assert_eq!(
                wizard.next(&mut submitter).unwrap(),
                Transition::Advanced { from: 0, to: 1 }
            );
            assert_eq!(
                wizard.next(&mut submitter).unwrap(),
                Transition::Advanced { from: 1, to: 2 }
            );
            assert_eq!(wizard.active_step(), 2);
        }

        #[test]
        fn test_completed_flags_follow_active_step() {
            let mut wizard = job_wizard(reefer_job());
            wizard.next(&mut untouched()).unwrap();
            wizard.next(&mut untouched()).unwrap();
            let completed: Vec<_> = wizard
                .step_statuses()
                .iter()
                .map(|s| s.completed)
                .collect();
            assert_eq!(completed, vec![true, true, false, false, false, false]);
        }

        #[test]
        fn test_next_only_validates_active_step() {
            let mut form = reefer_job();
            form.contact_info.terms_accepted = false;
            let mut wizard = job_wizard(form);
            assert!(wizard.next(&mut untouched()).is_ok());
        }

        #[test]
        fn test_next_from_last_step_submits() {
            let mut wizard = job_wizard(reefer_job());
            let mut submitter = accepting();
            for _ in 0..5 {
                wizard.next(&mut submitter).unwrap();
            }
            assert!(wizard.is_terminal_step());
            assert_eq!(
                wizard.next(&mut submitter).unwrap(),
                Transition::Submitted(receipt())
            );
            assert!(wizard.is_submitted());
            assert!(wizard.step_statuses().iter().all(|s| s.completed));
        }
    }

    mod back_and_go_to_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_back_from_first_step_is_noop() {
            let mut wizard = blank_wizard();
            assert!(!wizard.back());
            assert_eq!(wizard.active_step(), 0);
        }

        #[test]
        fn test_back_needs_no_validation() {
            let mut wizard = job_wizard(reefer_job());
            wizard.next(&mut untouched()).unwrap();
            wizard
                .set_value(JobField::PickupLocation, FieldValue::text(""))
                .unwrap();
            assert!(wizard.back());
            assert_eq!(wizard.active_step(), 0);
        }

        #[test]
        fn test_back_clears_errors() {
            let mut wizard = job_wizard(reefer_job());
            wizard.next(&mut untouched()).unwrap();
            wizard
                .set_value(JobField::PickupLocation, FieldValue::text(""))
                .unwrap();
            assert!(wizard.next(&mut untouched()).is_err());
            assert!(!wizard.errors().is_empty());
            wizard.back();
            assert!(wizard.errors().is_empty());
        }

        #[test]
        fn test_go_to_forward_is_rejected() {
            let mut wizard = job_wizard(reefer_job());
            assert!(!wizard.go_to(3));
            assert_eq!(wizard.active_step(), 0);
        }

        #[test]
        fn test_go_to_any_earlier_step() {
            let mut wizard = job_wizard(reefer_job());
            for _ in 0..4 {
                wizard.next(&mut untouched()).unwrap();
            }
            assert!(wizard.go_to(1));
            assert_eq!(wizard.active_step(), 1);
            // steps after the new position are no longer reachable directly
            assert!(!wizard.go_to(3));
            assert!(!wizard.step_statuses()[2].completed);
        }

        #[test]
        fn test_go_to_current_step_is_allowed() {
            let mut wizard = job_wizard(reefer_job());
            wizard.next(&mut untouched()).unwrap();
            assert!(wizard.go_to(1));
            assert_eq!(wizard.active_step(), 1);
        }
    }

    mod editing_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_correcting_field_clears_its_error_only() {
            let mut wizard = blank_wizard();
            assert!(wizard.next(&mut untouched()).is_err());
            assert_eq!(wizard.errors().len(), 3);

            wizard
                .set_value(JobField::Title, FieldValue::text("Need Reefer Truck"))
                .unwrap();
            assert_eq!(wizard.error(JobField::Title), None);
            assert!(wizard.error(JobField::Category).is_some());
            assert!(wizard.error(JobField::Description).is_some());
        }

        #[test]
        fn test_edit_does_not_flag_untouched_fields() {
            let mut wizard = blank_wizard();
            wizard
                .set_value(JobField::Title, FieldValue::text("short"))
                .unwrap();
            assert!(wizard.errors().is_empty());
        }

        #[test]
        fn test_wrong_value_kind_rejected() {
            let mut wizard = blank_wizard();
            let err = wizard
                .set_value(JobField::Title, FieldValue::Flag(true))
                .unwrap_err();
            assert!(matches!(err, WizardError::FieldType(_)));
        }

        #[test]
        fn test_visible_fields_follow_toggle() {
            let mut wizard = job_wizard(reefer_job());
            for _ in 0..3 {
                wizard.next(&mut untouched()).unwrap();
            }
            assert!(!wizard.visible_fields().contains(&JobField::InsuranceValue));
            wizard
                .set_value(JobField::NeedsInsurance, FieldValue::Flag(true))
                .unwrap();
            assert!(wizard.is_visible(JobField::InsuranceValue));
            assert_eq!(
                wizard.visible_fields(),
                vec![
                    JobField::NeedsInsurance,
                    JobField::InsuranceValue,
                    JobField::NeedsTracking,
                    JobField::NeedsCustoms,
                    JobField::AdditionalRequirements,
                ]
            );
        }
    }

    mod submit_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_forwards_form_unchanged() {
            let expected = reefer_job();
            let mut wizard = job_wizard(expected.clone());

            let mut submitter = MockSubmitter::new();
            let seen = expected.clone();
            submitter
                .expect_submit()
                .withf(move |form: &JobForm| *form == seen)
                .times(1)
                .returning(|_| Ok(receipt()));

            for _ in 0..5 {
                wizard.next(&mut submitter).unwrap();
            }
            let transition = wizard.next(&mut submitter).unwrap();
            assert_eq!(transition, Transition::Submitted(receipt()));
            assert_eq!(wizard.receipt(), Some(&receipt()));
            assert_eq!(wizard.into_form(), expected);
        }

        #[test]
        fn test_returns_to_first_invalid_step() {
            let mut form = reefer_job();
            form.cargo_info.volume.clear();
            form.contact_info.terms_accepted = false;
            let mut wizard = job_wizard(form);
            for _ in 0..2 {
                wizard.next(&mut untouched()).unwrap();
            }

            let err = wizard.submit(&mut untouched()).unwrap_err();
            assert!(matches!(err, WizardError::StepIncomplete { step: 2, .. }));
            assert_eq!(wizard.active_step(), 2);
            assert_eq!(wizard.errors().fields().collect::<Vec<_>>(), vec![JobField::Volume]);
        }

        #[test]
        fn test_revalidates_steps_already_passed() {
            let mut wizard = job_wizard(reefer_job());
            for _ in 0..5 {
                wizard.next(&mut untouched()).unwrap();
            }
            wizard
                .set_value(JobField::Title, FieldValue::text("Reefer"))
                .unwrap();

            let err = wizard.submit(&mut untouched()).unwrap_err();
            assert!(matches!(err, WizardError::StepIncomplete { step: 0, .. }));
            assert_eq!(wizard.active_step(), 0);
            assert_eq!(
                wizard.error(JobField::Title),
                Some("Job title must be at least 10 characters")
            );
        }

        #[test]
        fn test_refused_submission_keeps_wizard_open() {
            let mut wizard = job_wizard(reefer_job());
            let mut submitter = MockSubmitter::new();
            submitter
                .expect_submit()
                .times(1)
                .returning(|_| Err(SubmissionError("board offline".to_string())));

            let err = wizard.submit(&mut submitter).unwrap_err();
            assert_eq!(
                err,
                WizardError::SubmissionFailed(SubmissionError("board offline".to_string()))
            );
            assert!(!wizard.is_submitted());
        }

        #[test]
        fn test_nothing_leaves_submitted_state() {
            let mut wizard = job_wizard(reefer_job());
            wizard.submit(&mut accepting()).unwrap();
            let step = wizard.active_step();

            assert_eq!(
                wizard.next(&mut untouched()),
                Err(WizardError::AlreadySubmitted)
            );
            assert_eq!(
                wizard.submit(&mut untouched()),
                Err(WizardError::AlreadySubmitted)
            );
            assert_eq!(
                wizard.set_value(JobField::Title, FieldValue::text("Changed after submit")),
                Err(WizardError::AlreadySubmitted)
            );
            assert!(!wizard.back());
            assert!(!wizard.go_to(0));
            assert_eq!(wizard.active_step(), step);
        }
    }

    mod end_to_end_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_fill_all_six_steps_and_submit() {
            let today = date(2025, 5, 1);
            let mut wizard = job_wizard(JobForm::new(today));
            let mut submitter = MockSubmitter::new();
            submitter
                .expect_submit()
                .withf(|form: &JobForm| form.basic_info.title == "Need Reefer Truck for Seafood Delivery")
                .times(1)
                .returning(|_| Ok(receipt()));

            let steps: Vec<Vec<(JobField, FieldValue)>> = vec![
                vec![
                    (JobField::Title, FieldValue::text("Need Reefer Truck for Seafood Delivery")),
                    (JobField::Category, FieldValue::Choice(Some("trucking"))),
                    (
                        JobField::Description,
                        FieldValue::text("Two pallets of fresh salmon, kept at 0-4°C the whole way."),
                    ),
                    (JobField::Priority, FieldValue::Choice(Some("medium"))),
                ],
                vec![
                    (JobField::PickupLocation, FieldValue::text("Pier 9, Port of Oakland")),
                    (JobField::DeliveryLocation, FieldValue::text("Ferry Building, San Francisco")),
                    (JobField::PickupDate, FieldValue::Date(Some(date(2025, 5, 10)))),
                    (JobField::DeliveryDeadline, FieldValue::Date(Some(date(2025, 5, 10)))),
                ],
                vec![
                    (JobField::CargoType, FieldValue::Choice(Some("refrigerated"))),
                    (JobField::Weight, FieldValue::text("2,800 kg")),
                    (JobField::Volume, FieldValue::text("12 cubic meters")),
                ],
                vec![(JobField::NeedsInsurance, FieldValue::Flag(false))],
                vec![
                    (JobField::Budget, FieldValue::text("$1,500")),
                    (JobField::OpenToBidding, FieldValue::Flag(true)),
                    (JobField::BiddingDeadline, FieldValue::Date(Some(date(2025, 5, 7)))),
                    (JobField::PaymentTerms, FieldValue::Choice(Some("net15"))),
                ],
                vec![
                    (JobField::ContactName, FieldValue::text("Marisol Ortega")),
                    (JobField::ContactPhone, FieldValue::text("+1 415 555 0142")),
                    (JobField::ContactEmail, FieldValue::text("marisol@baysidefish.com")),
                    (JobField::TermsAccepted, FieldValue::Flag(true)),
                ],
            ];

            for (index, edits) in steps.into_iter().enumerate() {
                assert_eq!(wizard.active_step(), index);
                for (field, value) in edits {
                    wizard.set_value(field, value).unwrap();
                }
                wizard.next(&mut submitter).unwrap();
            }

            assert!(wizard.is_submitted());
            let form = wizard.into_form();
            assert_eq!(form.budget_info.payment_terms, Some(crate::state::PaymentTerms::Net15));
            assert_eq!(form.service_needs.insurance_value, "");
        }

        #[test]
        fn test_partner_profile_flow() {
            let mut wizard = WizardController::new(PartnerProfile::default(), ());
            let mut untouched = MockSubmitter::<PartnerProfile>::new();
            untouched.expect_submit().never();
            assert!(wizard.next(&mut untouched).is_err());

            let mut wizard = WizardController::new(harbor_freight(), ());
            let mut submitter = MockSubmitter::<PartnerProfile>::new();
            submitter
                .expect_submit()
                .times(1)
                .returning(|_| Ok(receipt()));
            for _ in 0..3 {
                wizard.next(&mut submitter).unwrap();
            }
            assert_eq!(wizard.current_step().label, "Contact & Verification");
            assert_eq!(
                wizard.next(&mut submitter).unwrap(),
                Transition::Submitted(receipt())
            );
        }
    }
}
