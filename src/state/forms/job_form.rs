//! Job posting form: sections, fields and the step table

use super::detail::{date_or_unspecified, or_unspecified, yes_no, DetailRow, ListingDetail};
use super::field::{choice_enum, FieldId, FieldSpec, FieldValue};
use super::form::{mismatch, parse_choice, FieldTypeMismatch, StepDefinition, WizardForm};
use super::job_rules::{self, JobRules};
use super::validation::ValidationResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

choice_enum! {
    /// Kind of logistics service a job asks for
    pub enum JobCategory {
        Trucking => ("trucking", "Trucking"),
        FreightForwarding => ("freight_forwarding", "Freight Forwarding"),
        AirFreight => ("air_freight", "Air Freight"),
        SeaFreight => ("sea_freight", "Sea Freight"),
        RailFreight => ("rail_freight", "Rail Freight"),
        Warehouse => ("warehouse", "Warehousing"),
        Customs => ("customs", "Customs Brokerage"),
        Other => ("other", "Other"),
    }
}

choice_enum! {
    pub enum Priority {
        High => ("high", "High"),
        Medium => ("medium", "Medium"),
        Low => ("low", "Low"),
    }
}

choice_enum! {
    pub enum CargoType {
        General => ("general", "General Cargo"),
        Refrigerated => ("refrigerated", "Refrigerated"),
        Hazardous => ("hazardous", "Hazardous Materials"),
        Oversized => ("oversized", "Oversized"),
        Fragile => ("fragile", "Fragile"),
        Perishable => ("perishable", "Perishable"),
        Electronics => ("electronics", "Electronics"),
        Vehicles => ("vehicles", "Vehicles"),
        Other => ("other", "Other"),
    }
}

choice_enum! {
    pub enum PaymentTerms {
        Net15 => ("net15", "Net 15"),
        Net30 => ("net30", "Net 30"),
        Net45 => ("net45", "Net 45"),
        Net60 => ("net60", "Net 60"),
        Cod => ("cod", "Cash on Delivery"),
        Advance => ("advance", "50% Advance, 50% on Completion"),
        Escrow => ("escrow", "Escrow"),
        Other => ("other", "Other (specify in notes)"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    pub title: String,
    pub category: Option<JobCategory>,
    pub description: String,
    pub priority: Option<Priority>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDetails {
    pub pickup_location: String,
    pub delivery_location: String,
    pub pickup_date: Option<NaiveDate>,
    pub delivery_deadline: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CargoInfo {
    pub cargo_type: Option<CargoType>,
    pub weight: String,
    pub volume: String,
    pub special_handling: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceNeeds {
    pub needs_insurance: bool,
    pub insurance_value: String,
    pub needs_tracking: bool,
    pub needs_customs: bool,
    pub additional_requirements: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetInfo {
    pub budget: String,
    pub open_to_bidding: bool,
    pub bidding_deadline: Option<NaiveDate>,
    pub payment_terms: Option<PaymentTerms>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub terms_accepted: bool,
}

/// The complete job posting being edited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobForm {
    pub basic_info: BasicInfo,
    pub route_details: RouteDetails,
    pub cargo_info: CargoInfo,
    pub service_needs: ServiceNeeds,
    pub budget_info: BudgetInfo,
    pub contact_info: ContactInfo,
}

impl JobForm {
    /// A blank posting. Pickup and delivery default to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            basic_info: BasicInfo {
                title: String::new(),
                category: None,
                description: String::new(),
                priority: Some(Priority::Medium),
            },
            route_details: RouteDetails {
                pickup_location: String::new(),
                delivery_location: String::new(),
                pickup_date: Some(today),
                delivery_deadline: Some(today),
            },
            cargo_info: CargoInfo {
                cargo_type: None,
                weight: String::new(),
                volume: String::new(),
                special_handling: String::new(),
            },
            service_needs: ServiceNeeds {
                needs_insurance: false,
                insurance_value: String::new(),
                needs_tracking: false,
                needs_customs: false,
                additional_requirements: String::new(),
            },
            budget_info: BudgetInfo {
                budget: String::new(),
                open_to_bidding: true,
                bidding_deadline: None,
                payment_terms: None,
            },
            contact_info: ContactInfo {
                contact_name: String::new(),
                contact_phone: String::new(),
                contact_email: String::new(),
                terms_accepted: false,
            },
        }
    }

    /// Review lines shown on the final step
    pub fn summary(&self) -> Vec<DetailRow> {
        let route = match (
            self.route_details.pickup_location.trim(),
            self.route_details.delivery_location.trim(),
        ) {
            ("", "") => String::new(),
            (from, to) => format!("{} → {}", or_unspecified(from), or_unspecified(to)),
        };

        vec![
            ("Job Title", or_unspecified(&self.basic_info.title)),
            (
                "Category",
                or_unspecified(self.basic_info.category.map_or("", JobCategory::label)),
            ),
            (
                "Priority",
                or_unspecified(self.basic_info.priority.map_or("", Priority::label)),
            ),
            ("Budget", or_unspecified(&self.budget_info.budget)),
            ("Route", or_unspecified(&route)),
            (
                "Cargo",
                or_unspecified(self.cargo_info.cargo_type.map_or("", CargoType::label)),
            ),
        ]
    }
}

impl ListingDetail for JobForm {
    const TABS: &'static [&'static str] =
        &["Description", "Route", "Cargo", "Requirements", "Budget"];

    fn heading(&self) -> String {
        self.basic_info.title.clone()
    }

    fn byline(&self) -> String {
        let category = self.basic_info.category.map_or("Uncategorized", JobCategory::label);
        let priority = self.basic_info.priority.map_or("-", Priority::label);
        format!(
            "{category} · {priority} priority · posted by {}",
            or_unspecified(&self.contact_info.contact_name)
        )
    }

    fn tab_rows(&self, tab: usize) -> Vec<DetailRow> {
        match tab {
            0 => vec![("Description", or_unspecified(&self.basic_info.description))],
            1 => vec![
                ("Pickup Location", or_unspecified(&self.route_details.pickup_location)),
                ("Pickup Date", date_or_unspecified(self.route_details.pickup_date)),
                (
                    "Delivery Location",
                    or_unspecified(&self.route_details.delivery_location),
                ),
                (
                    "Delivery Deadline",
                    date_or_unspecified(self.route_details.delivery_deadline),
                ),
            ],
            2 => vec![
                (
                    "Cargo Type",
                    or_unspecified(self.cargo_info.cargo_type.map_or("", CargoType::label)),
                ),
                ("Weight", or_unspecified(&self.cargo_info.weight)),
                ("Volume", or_unspecified(&self.cargo_info.volume)),
                (
                    "Handling Instructions",
                    or_unspecified(&self.cargo_info.special_handling),
                ),
            ],
            3 => {
                let needs = &self.service_needs;
                let insurance = if needs.needs_insurance {
                    format!("Required, value {}", or_unspecified(&needs.insurance_value))
                } else {
                    "Not required".to_string()
                };
                vec![
                    ("Insurance", insurance),
                    ("Tracking", yes_no(needs.needs_tracking)),
                    ("Customs Clearance", yes_no(needs.needs_customs)),
                    (
                        "Additional Requirements",
                        or_unspecified(&needs.additional_requirements),
                    ),
                ]
            }
            4 => {
                let budget = &self.budget_info;
                let mut rows = vec![
                    ("Budget", or_unspecified(&budget.budget)),
                    (
                        "Payment Terms",
                        or_unspecified(budget.payment_terms.map_or("", PaymentTerms::label)),
                    ),
                    ("Accepting Bids", yes_no(budget.open_to_bidding)),
                ];
                if budget.open_to_bidding {
                    rows.push(("Bid Deadline", date_or_unspecified(budget.bidding_deadline)));
                }
                rows
            }
            _ => Vec::new(),
        }
    }
}

/// Every field of the job form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JobField {
    Title,
    Category,
    Description,
    Priority,
    PickupLocation,
    DeliveryLocation,
    PickupDate,
    DeliveryDeadline,
    CargoType,
    Weight,
    Volume,
    SpecialHandling,
    NeedsInsurance,
    InsuranceValue,
    NeedsTracking,
    NeedsCustoms,
    AdditionalRequirements,
    Budget,
    OpenToBidding,
    BiddingDeadline,
    PaymentTerms,
    ContactName,
    ContactPhone,
    ContactEmail,
    TermsAccepted,
}

impl FieldId for JobField {
    fn name(self) -> &'static str {
        match self {
            JobField::Title => "title",
            JobField::Category => "category",
            JobField::Description => "description",
            JobField::Priority => "priority",
            JobField::PickupLocation => "pickupLocation",
            JobField::DeliveryLocation => "deliveryLocation",
            JobField::PickupDate => "pickupDate",
            JobField::DeliveryDeadline => "deliveryDeadline",
            JobField::CargoType => "cargoType",
            JobField::Weight => "weight",
            JobField::Volume => "volume",
            JobField::SpecialHandling => "specialHandling",
            JobField::NeedsInsurance => "needsInsurance",
            JobField::InsuranceValue => "insuranceValue",
            JobField::NeedsTracking => "needsTracking",
            JobField::NeedsCustoms => "needsCustoms",
            JobField::AdditionalRequirements => "additionalRequirements",
            JobField::Budget => "budget",
            JobField::OpenToBidding => "openToBidding",
            JobField::BiddingDeadline => "biddingDeadline",
            JobField::PaymentTerms => "paymentTerms",
            JobField::ContactName => "contactName",
            JobField::ContactPhone => "contactPhone",
            JobField::ContactEmail => "contactEmail",
            JobField::TermsAccepted => "termsAccepted",
        }
    }
}

pub const JOB_STEPS: &[StepDefinition<JobField>] = &[
    StepDefinition {
        id: "basicInfo",
        label: "Basic Info",
        fields: &[
            JobField::Title,
            JobField::Category,
            JobField::Description,
            JobField::Priority,
        ],
    },
    StepDefinition {
        id: "routeDetails",
        label: "Route Details",
        fields: &[
            JobField::PickupLocation,
            JobField::DeliveryLocation,
            JobField::PickupDate,
            JobField::DeliveryDeadline,
        ],
    },
    StepDefinition {
        id: "cargoInfo",
        label: "Cargo Info",
        fields: &[
            JobField::CargoType,
            JobField::Weight,
            JobField::Volume,
            JobField::SpecialHandling,
        ],
    },
    StepDefinition {
        id: "serviceNeeds",
        label: "Service Needs",
        fields: &[
            JobField::NeedsInsurance,
            JobField::InsuranceValue,
            JobField::NeedsTracking,
            JobField::NeedsCustoms,
            JobField::AdditionalRequirements,
        ],
    },
    StepDefinition {
        id: "budgetInfo",
        label: "Budget & Bidding",
        fields: &[
            JobField::Budget,
            JobField::OpenToBidding,
            JobField::BiddingDeadline,
            JobField::PaymentTerms,
        ],
    },
    StepDefinition {
        id: "contactInfo",
        label: "Contact & Submit",
        fields: &[
            JobField::ContactName,
            JobField::ContactPhone,
            JobField::ContactEmail,
            JobField::TermsAccepted,
        ],
    },
];

impl WizardForm for JobForm {
    type Field = JobField;
    type Rules = JobRules;

    fn steps() -> &'static [StepDefinition<JobField>] {
        JOB_STEPS
    }

    fn field_spec(field: JobField) -> FieldSpec {
        match field {
            JobField::Title => FieldSpec::text("Job Title", "e.g., Need Reefer Truck for Seafood Delivery"),
            JobField::Category => FieldSpec::choice("Category", JobCategory::OPTIONS),
            JobField::Description => {
                FieldSpec::multiline("Job Description", "Describe the job in detail")
            }
            JobField::Priority => FieldSpec::choice("Priority", Priority::OPTIONS),
            JobField::PickupLocation => FieldSpec::text("Pickup Location", "Enter full address"),
            JobField::DeliveryLocation => {
                FieldSpec::text("Delivery Location", "Enter full address")
            }
            JobField::PickupDate => FieldSpec::date("Pickup Date"),
            JobField::DeliveryDeadline => FieldSpec::date("Delivery Deadline"),
            JobField::CargoType => FieldSpec::choice("Cargo Type", CargoType::OPTIONS),
            JobField::Weight => FieldSpec::text("Weight", "e.g., 2,000 kg"),
            JobField::Volume => FieldSpec::text("Volume", "e.g., 10 cubic meters"),
            JobField::SpecialHandling => FieldSpec::multiline(
                "Special Handling Instructions",
                "Any specific handling requirements or precautions...",
            ),
            JobField::NeedsInsurance => FieldSpec::flag("Cargo Insurance"),
            JobField::InsuranceValue => {
                FieldSpec::text("Required Insurance Value", "e.g., $50,000")
            }
            JobField::NeedsTracking => FieldSpec::flag("Tracking Integration"),
            JobField::NeedsCustoms => FieldSpec::flag("Customs Handling"),
            JobField::AdditionalRequirements => FieldSpec::multiline(
                "Additional Service Requirements",
                "Any other service requirements or certifications needed...",
            ),
            JobField::Budget => FieldSpec::text("Budget Estimate", "Enter amount or range"),
            JobField::OpenToBidding => FieldSpec::flag("Open for Bidding"),
            JobField::BiddingDeadline => FieldSpec::date("Bidding Deadline"),
            JobField::PaymentTerms => FieldSpec::choice("Payment Terms", PaymentTerms::OPTIONS),
            JobField::ContactName => FieldSpec::text("Contact Name", "Your full name"),
            JobField::ContactPhone => FieldSpec::text("Contact Phone", "Your phone number"),
            JobField::ContactEmail => FieldSpec::text("Contact Email", "Your email address"),
            JobField::TermsAccepted => FieldSpec::flag("I agree to the terms and conditions"),
        }
    }

    fn value(&self, field: JobField) -> FieldValue {
        let basic = &self.basic_info;
        let route = &self.route_details;
        let cargo = &self.cargo_info;
        let service = &self.service_needs;
        let budget = &self.budget_info;
        let contact = &self.contact_info;

        match field {
            JobField::Title => FieldValue::text(&basic.title),
            JobField::Category => FieldValue::Choice(basic.category.map(JobCategory::as_str)),
            JobField::Description => FieldValue::text(&basic.description),
            JobField::Priority => FieldValue::Choice(basic.priority.map(Priority::as_str)),
            JobField::PickupLocation => FieldValue::text(&route.pickup_location),
            JobField::DeliveryLocation => FieldValue::text(&route.delivery_location),
            JobField::PickupDate => FieldValue::Date(route.pickup_date),
            JobField::DeliveryDeadline => FieldValue::Date(route.delivery_deadline),
            JobField::CargoType => FieldValue::Choice(cargo.cargo_type.map(CargoType::as_str)),
            JobField::Weight => FieldValue::text(&cargo.weight),
            JobField::Volume => FieldValue::text(&cargo.volume),
            JobField::SpecialHandling => FieldValue::text(&cargo.special_handling),
            JobField::NeedsInsurance => FieldValue::Flag(service.needs_insurance),
            JobField::InsuranceValue => FieldValue::text(&service.insurance_value),
            JobField::NeedsTracking => FieldValue::Flag(service.needs_tracking),
            JobField::NeedsCustoms => FieldValue::Flag(service.needs_customs),
            JobField::AdditionalRequirements => FieldValue::text(&service.additional_requirements),
            JobField::Budget => FieldValue::text(&budget.budget),
            JobField::OpenToBidding => FieldValue::Flag(budget.open_to_bidding),
            JobField::BiddingDeadline => FieldValue::Date(budget.bidding_deadline),
            JobField::PaymentTerms => {
                FieldValue::Choice(budget.payment_terms.map(PaymentTerms::as_str))
            }
            JobField::ContactName => FieldValue::text(&contact.contact_name),
            JobField::ContactPhone => FieldValue::text(&contact.contact_phone),
            JobField::ContactEmail => FieldValue::text(&contact.contact_email),
            JobField::TermsAccepted => FieldValue::Flag(contact.terms_accepted),
        }
    }

    fn set_value(&mut self, field: JobField, value: FieldValue) -> Result<(), FieldTypeMismatch> {
        match (field, value) {
            (JobField::Title, FieldValue::Text(s)) => self.basic_info.title = s,
            (JobField::Category, FieldValue::Choice(c)) => {
                self.basic_info.category = parse_choice(field, c, JobCategory::from_value)?
            }
            (JobField::Description, FieldValue::Text(s)) => self.basic_info.description = s,
            (JobField::Priority, FieldValue::Choice(c)) => {
                self.basic_info.priority = parse_choice(field, c, Priority::from_value)?
            }
            (JobField::PickupLocation, FieldValue::Text(s)) => {
                self.route_details.pickup_location = s
            }
            (JobField::DeliveryLocation, FieldValue::Text(s)) => {
                self.route_details.delivery_location = s
            }
            (JobField::PickupDate, FieldValue::Date(d)) => self.route_details.pickup_date = d,
            (JobField::DeliveryDeadline, FieldValue::Date(d)) => {
                self.route_details.delivery_deadline = d
            }
            (JobField::CargoType, FieldValue::Choice(c)) => {
                self.cargo_info.cargo_type = parse_choice(field, c, CargoType::from_value)?
            }
            (JobField::Weight, FieldValue::Text(s)) => self.cargo_info.weight = s,
            (JobField::Volume, FieldValue::Text(s)) => self.cargo_info.volume = s,
            (JobField::SpecialHandling, FieldValue::Text(s)) => {
                self.cargo_info.special_handling = s
            }
            (JobField::NeedsInsurance, FieldValue::Flag(b)) => {
                self.service_needs.needs_insurance = b
            }
            (JobField::InsuranceValue, FieldValue::Text(s)) => {
                self.service_needs.insurance_value = s
            }
            (JobField::NeedsTracking, FieldValue::Flag(b)) => self.service_needs.needs_tracking = b,
            (JobField::NeedsCustoms, FieldValue::Flag(b)) => self.service_needs.needs_customs = b,
            (JobField::AdditionalRequirements, FieldValue::Text(s)) => {
                self.service_needs.additional_requirements = s
            }
            (JobField::Budget, FieldValue::Text(s)) => self.budget_info.budget = s,
            (JobField::OpenToBidding, FieldValue::Flag(b)) => self.budget_info.open_to_bidding = b,
            (JobField::BiddingDeadline, FieldValue::Date(d)) => {
                self.budget_info.bidding_deadline = d
            }
            (JobField::PaymentTerms, FieldValue::Choice(c)) => {
                self.budget_info.payment_terms = parse_choice(field, c, PaymentTerms::from_value)?
            }
            (JobField::ContactName, FieldValue::Text(s)) => self.contact_info.contact_name = s,
            (JobField::ContactPhone, FieldValue::Text(s)) => self.contact_info.contact_phone = s,
            (JobField::ContactEmail, FieldValue::Text(s)) => self.contact_info.contact_email = s,
            (JobField::TermsAccepted, FieldValue::Flag(b)) => {
                self.contact_info.terms_accepted = b
            }
            (field, other) => return Err(mismatch(field, Self::field_spec(field), &other)),
        }
        Ok(())
    }

    fn is_visible(&self, field: JobField) -> bool {
        job_rules::is_field_visible(self, field)
    }

    fn validate_step(&self, step: usize, rules: &JobRules) -> ValidationResult<JobField> {
        job_rules::validate_step(self, step, rules)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// The reefer-truck posting used across the wizard tests, valid on every step
    pub fn reefer_job() -> JobForm {
        let mut form = JobForm::new(date(2025, 5, 1));
        form.basic_info = BasicInfo {
            title: "Need Reefer Truck for Seafood Delivery".to_string(),
            category: Some(JobCategory::Trucking),
            description: "Refrigerated transport of fresh seafood from the port to three restaurants."
                .to_string(),
            priority: Some(Priority::Medium),
        };
        form.route_details = RouteDetails {
            pickup_location: "Pier 9, Port of Oakland, CA".to_string(),
            delivery_location: "1200 Market St, San Francisco, CA".to_string(),
            pickup_date: Some(date(2025, 5, 10)),
            delivery_deadline: Some(date(2025, 5, 12)),
        };
        form.cargo_info = CargoInfo {
            cargo_type: Some(CargoType::Refrigerated),
            weight: "2,800 kg".to_string(),
            volume: "12 cubic meters".to_string(),
            special_handling: String::new(),
        };
        form.service_needs.needs_insurance = false;
        form.budget_info = BudgetInfo {
            budget: "$1,500".to_string(),
            open_to_bidding: true,
            bidding_deadline: Some(date(2025, 5, 8)),
            payment_terms: Some(PaymentTerms::Net15),
        };
        form.contact_info = ContactInfo {
            contact_name: "Marisol Ortega".to_string(),
            contact_phone: "+1 415 555 0142".to_string(),
            contact_email: "marisol@baysidefish.com".to_string(),
            terms_accepted: true,
        };
        form
    }
}
