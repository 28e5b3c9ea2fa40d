//! Conditional visibility and per-step validation for the job form.
//!
//! [`is_field_visible`] is the single predicate consulted by rendering, focus
//! navigation and [`validate_step`], so a hidden field never fails validation.

use super::job_form::{JobField, JobForm, JOB_STEPS};
use super::validation::{has_min_chars, is_present, is_valid_email, ValidationResult};
use chrono::NaiveDate;

/// Tunable thresholds for job validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRules {
    pub title_min_chars: usize,
    pub description_min_chars: usize,
    /// When set, pickup date and bidding deadline may not precede this date
    pub earliest_date: Option<NaiveDate>,
}

impl Default for JobRules {
    fn default() -> Self {
        Self {
            title_min_chars: 10,
            description_min_chars: 30,
            earliest_date: None,
        }
    }
}

impl JobRules {
    pub fn not_before(mut self, date: NaiveDate) -> Self {
        self.earliest_date = Some(date);
        self
    }

    fn is_in_past(&self, date: NaiveDate) -> bool {
        self.earliest_date.is_some_and(|earliest| date < earliest)
    }
}

/// Whether a field is shown (and therefore required) given sibling values
pub fn is_field_visible(form: &JobForm, field: JobField) -> bool {
    match field {
        JobField::InsuranceValue => form.service_needs.needs_insurance,
        JobField::BiddingDeadline => form.budget_info.open_to_bidding,
        _ => true,
    }
}

/// Validate every visible field of one step. Out-of-range steps are empty.
pub fn validate_step(form: &JobForm, step: usize, rules: &JobRules) -> ValidationResult<JobField> {
    let mut result = ValidationResult::new();
    let Some(definition) = JOB_STEPS.get(step) else {
        return result;
    };

    for &field in definition.fields {
        if !is_field_visible(form, field) {
            continue;
        }
        if let Some(message) = check_field(form, field, rules) {
            result.add(field, message);
        }
    }
    result
}

fn required(value: &str, message: &str) -> Option<String> {
    (!is_present(value)).then(|| message.to_string())
}

fn check_field(form: &JobForm, field: JobField, rules: &JobRules) -> Option<String> {
    let basic = &form.basic_info;
    let route = &form.route_details;
    let cargo = &form.cargo_info;
    let budget = &form.budget_info;
    let contact = &form.contact_info;

    match field {
        JobField::Title => (!has_min_chars(&basic.title, rules.title_min_chars)).then(|| {
            format!(
                "Job title must be at least {} characters",
                rules.title_min_chars
            )
        }),
        JobField::Category => basic
            .category
            .is_none()
            .then(|| "Please select a category".to_string()),
        JobField::Description => (!has_min_chars(
            &basic.description,
            rules.description_min_chars,
        ))
        .then(|| {
            format!(
                "Job description must be at least {} characters",
                rules.description_min_chars
            )
        }),
        JobField::Priority => basic
            .priority
            .is_none()
            .then(|| "Please select a priority level".to_string()),
        JobField::PickupLocation => required(&route.pickup_location, "Pickup location is required"),
        JobField::DeliveryLocation => {
            required(&route.delivery_location, "Delivery location is required")
        }
        JobField::PickupDate => match route.pickup_date {
            None => Some("Pickup date is required".to_string()),
            Some(date) if rules.is_in_past(date) => {
                Some("Pickup date cannot be in the past".to_string())
            }
            Some(_) => None,
        },
        JobField::DeliveryDeadline => match (route.delivery_deadline, route.pickup_date) {
            (None, _) => Some("Delivery deadline is required".to_string()),
            (Some(deadline), Some(pickup)) if deadline < pickup => {
                Some("Delivery deadline cannot be before the pickup date".to_string())
            }
            _ => None,
        },
        JobField::CargoType => cargo
            .cargo_type
            .is_none()
            .then(|| "Please select a cargo type".to_string()),
        JobField::Weight => required(&cargo.weight, "Weight is required"),
        JobField::Volume => required(&cargo.volume, "Volume is required"),
        JobField::InsuranceValue => required(
            &form.service_needs.insurance_value,
            "Insurance value is required when insurance is needed",
        ),
        JobField::Budget => required(&budget.budget, "Budget estimate is required"),
        JobField::BiddingDeadline => match budget.bidding_deadline {
            None => Some("Bidding deadline is required when open for bidding".to_string()),
            Some(date) if rules.is_in_past(date) => {
                Some("Bidding deadline cannot be in the past".to_string())
            }
            Some(_) => None,
        },
        JobField::PaymentTerms => budget
            .payment_terms
            .is_none()
            .then(|| "Please select payment terms".to_string()),
        JobField::ContactName => required(&contact.contact_name, "Contact name is required"),
        JobField::ContactPhone => required(&contact.contact_phone, "Contact phone is required"),
        JobField::ContactEmail => {
            (!is_valid_email(&contact.contact_email)).then(|| "Invalid email address".to_string())
        }
        JobField::TermsAccepted => (!contact.terms_accepted)
            .then(|| "You must accept the terms and conditions".to_string()),
        JobField::SpecialHandling
        | JobField::NeedsInsurance
        | JobField::NeedsTracking
        | JobField::NeedsCustoms
        | JobField::AdditionalRequirements
        | JobField::OpenToBidding => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::job_form::fixtures::{date, reefer_job};
    use crate::state::forms::field::FieldId;
    use crate::state::forms::{FieldValue, WizardForm};

    fn errors_of(form: &JobForm, step: usize) -> Vec<JobField> {
        validate_step(form, step, &JobRules::default())
            .fields()
            .collect()
    }

    mod valid_inputs_tests {
        use super::*;

        #[test]
        fn test_every_step_passes_with_sample() {
            let form = reefer_job();
            for step in 0..JOB_STEPS.len() {
                assert!(errors_of(&form, step).is_empty(), "step {step}");
            }
        }

        #[test]
        fn test_out_of_range_step_is_empty() {
            assert!(errors_of(&JobForm::new(date(2025, 5, 1)), 42).is_empty());
        }
    }

    mod required_fields_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        /// Each required field with a value that should fail it
        fn blanks() -> Vec<(JobField, FieldValue)> {
            vec![
                (JobField::Title, FieldValue::text("")),
                (JobField::Category, FieldValue::Choice(None)),
                (JobField::Description, FieldValue::text("")),
                (JobField::Priority, FieldValue::Choice(None)),
                (JobField::PickupLocation, FieldValue::text("")),
                (JobField::DeliveryLocation, FieldValue::text("")),
                (JobField::PickupDate, FieldValue::Date(None)),
                (JobField::DeliveryDeadline, FieldValue::Date(None)),
                (JobField::CargoType, FieldValue::Choice(None)),
                (JobField::Weight, FieldValue::text("")),
                (JobField::Volume, FieldValue::text("")),
                (JobField::Budget, FieldValue::text("")),
                (JobField::BiddingDeadline, FieldValue::Date(None)),
                (JobField::PaymentTerms, FieldValue::Choice(None)),
                (JobField::ContactName, FieldValue::text("")),
                (JobField::ContactPhone, FieldValue::text("")),
                (JobField::ContactEmail, FieldValue::text("")),
                (JobField::TermsAccepted, FieldValue::Flag(false)),
            ]
        }

        #[test]
        fn test_omitting_one_field_yields_exactly_that_error() {
            for (field, blank) in blanks() {
                let mut form = reefer_job();
                form.set_value(field, blank).unwrap();
                let step = JobForm::step_of(field).unwrap();
                assert_eq!(errors_of(&form, step), vec![field], "{}", field.name());
            }
        }

        #[test]
        fn test_blank_form_reports_all_errors_of_step_at_once() {
            let form = JobForm::new(date(2025, 5, 1));
            assert_eq!(
                errors_of(&form, 0),
                vec![JobField::Title, JobField::Category, JobField::Description]
            );
        }

        #[test]
        fn test_optional_fields_never_fail() {
            let mut form = reefer_job();
            form.cargo_info.special_handling.clear();
            form.service_needs.additional_requirements.clear();
            assert!(errors_of(&form, 2).is_empty());
            assert!(errors_of(&form, 3).is_empty());
        }
    }

    mod lengths_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_title_minimum() {
            let mut form = reefer_job();
            form.basic_info.title = "Reefer 123".to_string();
            assert!(errors_of(&form, 0).is_empty());
            form.basic_info.title = "Reefer 12 ".to_string();
            assert!(errors_of(&form, 0).is_empty());
            form.basic_info.title = "Reefer 12".to_string();
            let result = validate_step(&form, 0, &JobRules::default());
            assert_eq!(
                result.get(JobField::Title),
                Some("Job title must be at least 10 characters")
            );
        }

        #[test]
        fn test_description_minimum_follows_rules() {
            let mut form = reefer_job();
            form.basic_info.description = "Short but fine".to_string();
            let rules = JobRules {
                description_min_chars: 5,
                ..JobRules::default()
            };
            assert!(validate_step(&form, 0, &rules).is_valid());
            assert_eq!(errors_of(&form, 0), vec![JobField::Description]);
        }
    }

    mod conditional_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_insurance_value_hidden_and_not_required_when_toggle_off() {
            let mut form = reefer_job();
            form.service_needs.needs_insurance = false;
            form.service_needs.insurance_value.clear();
            assert!(!is_field_visible(&form, JobField::InsuranceValue));
            assert!(errors_of(&form, 3).is_empty());
        }

        #[test]
        fn test_insurance_value_required_when_toggle_on() {
            let mut form = reefer_job();
            form.service_needs.needs_insurance = true;
            form.service_needs.insurance_value.clear();
            assert!(is_field_visible(&form, JobField::InsuranceValue));
            assert_eq!(errors_of(&form, 3), vec![JobField::InsuranceValue]);

            form.service_needs.insurance_value = "$50,000".to_string();
            assert!(errors_of(&form, 3).is_empty());
        }

        #[test]
        fn test_bidding_deadline_only_when_open_to_bidding() {
            let mut form = reefer_job();
            form.budget_info.bidding_deadline = None;
            assert_eq!(errors_of(&form, 4), vec![JobField::BiddingDeadline]);

            form.budget_info.open_to_bidding = false;
            assert!(!is_field_visible(&form, JobField::BiddingDeadline));
            assert!(errors_of(&form, 4).is_empty());
        }

        #[test]
        fn test_unconditional_fields_always_visible() {
            let form = JobForm::new(date(2025, 5, 1));
            assert!(is_field_visible(&form, JobField::NeedsInsurance));
            assert!(is_field_visible(&form, JobField::Budget));
        }
    }

    mod dates_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_deadline_before_pickup_fails_on_deadline() {
            let mut form = reefer_job();
            form.route_details.pickup_date = Some(date(2025, 5, 10));
            form.route_details.delivery_deadline = Some(date(2025, 5, 9));
            let result = validate_step(&form, 1, &JobRules::default());
            assert_eq!(result.fields().collect::<Vec<_>>(), vec![JobField::DeliveryDeadline]);
            assert_eq!(
                result.get(JobField::DeliveryDeadline),
                Some("Delivery deadline cannot be before the pickup date")
            );
        }

        #[test]
        fn test_deadline_on_or_after_pickup_passes() {
            let mut form = reefer_job();
            form.route_details.pickup_date = Some(date(2025, 5, 10));
            for day in [10, 11, 30] {
                form.route_details.delivery_deadline = Some(date(2025, 5, day));
                assert!(errors_of(&form, 1).is_empty(), "day {day}");
            }
        }

        #[test]
        fn test_earliest_date_applies_only_when_configured() {
            let mut form = reefer_job();
            form.route_details.pickup_date = Some(date(2025, 5, 10));
            form.route_details.delivery_deadline = Some(date(2025, 5, 12));
            assert!(errors_of(&form, 1).is_empty());

            let rules = JobRules::default().not_before(date(2025, 5, 11));
            let result = validate_step(&form, 1, &rules);
            assert_eq!(
                result.get(JobField::PickupDate),
                Some("Pickup date cannot be in the past")
            );
            assert!(result.get(JobField::DeliveryDeadline).is_none());
        }

        #[test]
        fn test_bidding_deadline_in_past_rejected() {
            let form = reefer_job();
            let rules = JobRules::default().not_before(date(2025, 5, 9));
            let result = validate_step(&form, 4, &rules);
            assert_eq!(
                result.get(JobField::BiddingDeadline),
                Some("Bidding deadline cannot be in the past")
            );
        }
    }

    mod contact_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_malformed_email() {
            let mut form = reefer_job();
            form.contact_info.contact_email = "marisol@".to_string();
            let result = validate_step(&form, 5, &JobRules::default());
            assert_eq!(result.get(JobField::ContactEmail), Some("Invalid email address"));
        }

        #[test]
        fn test_terms_must_be_accepted() {
            let mut form = reefer_job();
            form.contact_info.terms_accepted = false;
            let result = validate_step(&form, 5, &JobRules::default());
            assert_eq!(
                result.get(JobField::TermsAccepted),
                Some("You must accept the terms and conditions")
            );
        }
    }
}
