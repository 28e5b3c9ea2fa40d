//! Logistics partner profile form

use super::detail::{or_unspecified, yes_no, DetailRow, ListingDetail};
use super::field::{choice_enum, FieldId, FieldSpec, FieldValue};
use super::form::{mismatch, parse_choice, FieldTypeMismatch, StepDefinition, WizardForm};
use super::validation::{is_present, is_valid_email, ValidationResult};
use serde::{Deserialize, Serialize};

choice_enum! {
    pub enum CompanyType {
        FreightForwarding => ("freight-forwarding", "Freight Forwarding"),
        Trucking => ("trucking", "Trucking"),
        SeaFreight => ("sea-freight", "Sea Freight"),
        AirFreight => ("air-freight", "Air Freight"),
        Warehousing => ("warehousing", "Warehousing"),
        Customs => ("customs", "Customs Broker"),
    }
}

choice_enum! {
    pub enum CompanySize {
        Micro => ("1-10", "1-10 employees"),
        Small => ("11-50", "11-50 employees"),
        Medium => ("51-200", "51-200 employees"),
        Large => ("201-500", "201-500 employees"),
        Enterprise => ("501+", "501+ employees"),
    }
}

choice_enum! {
    pub enum Membership {
        Free => ("free", "Free"),
        Premium => ("premium", "Premium"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyBasics {
    pub company_name: String,
    pub company_type: Option<CompanyType>,
    pub company_description: String,
    pub founded_year: String,
    pub company_size: Option<CompanySize>,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerServices {
    pub service_description: String,
    pub hazardous_materials: bool,
    pub certifications: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerLocations {
    pub headquarters: String,
    pub service_regions: String,
    pub branch_office: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerContact {
    pub contact_name: String,
    pub contact_title: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub membership: Option<Membership>,
}

impl Default for PartnerContact {
    fn default() -> Self {
        Self {
            contact_name: String::new(),
            contact_title: String::new(),
            contact_email: String::new(),
            contact_phone: String::new(),
            membership: Some(Membership::Free),
        }
    }
}

/// A logistics company profile
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerProfile {
    pub basic: CompanyBasics,
    pub services: PartnerServices,
    pub locations: PartnerLocations,
    pub contact: PartnerContact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartnerField {
    CompanyName,
    CompanyType,
    CompanyDescription,
    FoundedYear,
    CompanySize,
    Website,
    ServiceDescription,
    HazardousMaterials,
    Certifications,
    Headquarters,
    ServiceRegions,
    BranchOffice,
    ContactName,
    ContactTitle,
    ContactEmail,
    ContactPhone,
    Membership,
}

impl FieldId for PartnerField {
    fn name(self) -> &'static str {
        match self {
            PartnerField::CompanyName => "companyName",
            PartnerField::CompanyType => "companyType",
            PartnerField::CompanyDescription => "companyDescription",
            PartnerField::FoundedYear => "foundedYear",
            PartnerField::CompanySize => "companySize",
            PartnerField::Website => "website",
            PartnerField::ServiceDescription => "serviceDescription",
            PartnerField::HazardousMaterials => "hazardousMaterials",
            PartnerField::Certifications => "certifications",
            PartnerField::Headquarters => "headquarters",
            PartnerField::ServiceRegions => "serviceRegions",
            PartnerField::BranchOffice => "branchOffice",
            PartnerField::ContactName => "contactName",
            PartnerField::ContactTitle => "contactTitle",
            PartnerField::ContactEmail => "contactEmail",
            PartnerField::ContactPhone => "contactPhone",
            PartnerField::Membership => "membership",
        }
    }
}

pub const PARTNER_STEPS: &[StepDefinition<PartnerField>] = &[
    StepDefinition {
        id: "basic",
        label: "Basic Info",
        fields: &[
            PartnerField::CompanyName,
            PartnerField::CompanyType,
            PartnerField::CompanyDescription,
            PartnerField::FoundedYear,
            PartnerField::CompanySize,
            PartnerField::Website,
        ],
    },
    StepDefinition {
        id: "services",
        label: "Services",
        fields: &[
            PartnerField::ServiceDescription,
            PartnerField::HazardousMaterials,
            PartnerField::Certifications,
        ],
    },
    StepDefinition {
        id: "locations",
        label: "Locations",
        fields: &[
            PartnerField::Headquarters,
            PartnerField::ServiceRegions,
            PartnerField::BranchOffice,
        ],
    },
    StepDefinition {
        id: "contact",
        label: "Contact & Verification",
        fields: &[
            PartnerField::ContactName,
            PartnerField::ContactTitle,
            PartnerField::ContactEmail,
            PartnerField::ContactPhone,
            PartnerField::Membership,
        ],
    },
];

impl PartnerProfile {
    /// Only the fields the sign-up page marks as required are checked
    fn check_field(&self, field: PartnerField) -> Option<String> {
        match field {
            PartnerField::CompanyName => (!is_present(&self.basic.company_name))
                .then(|| "Company name is required".to_string()),
            PartnerField::CompanyType => self
                .basic
                .company_type
                .is_none()
                .then(|| "Please select a company type".to_string()),
            PartnerField::Headquarters => (!is_present(&self.locations.headquarters))
                .then(|| "Headquarters location is required".to_string()),
            PartnerField::ContactName => (!is_present(&self.contact.contact_name))
                .then(|| "Contact person is required".to_string()),
            PartnerField::ContactEmail => (!is_valid_email(&self.contact.contact_email))
                .then(|| "Invalid email address".to_string()),
            _ => None,
        }
    }
}

impl ListingDetail for PartnerProfile {
    const TABS: &'static [&'static str] = &["Company", "Services", "Locations", "Contact"];

    fn heading(&self) -> String {
        self.basic.company_name.clone()
    }

    fn byline(&self) -> String {
        let company_type = self.basic.company_type.map_or("Logistics", CompanyType::label);
        format!(
            "{company_type} · {}",
            or_unspecified(&self.locations.headquarters)
        )
    }

    fn tab_rows(&self, tab: usize) -> Vec<DetailRow> {
        match tab {
            0 => vec![
                (
                    "Company Type",
                    or_unspecified(self.basic.company_type.map_or("", CompanyType::label)),
                ),
                ("Year Founded", or_unspecified(&self.basic.founded_year)),
                (
                    "Company Size",
                    or_unspecified(self.basic.company_size.map_or("", CompanySize::label)),
                ),
                ("Website", or_unspecified(&self.basic.website)),
                ("About", or_unspecified(&self.basic.company_description)),
            ],
            1 => vec![
                ("Services", or_unspecified(&self.services.service_description)),
                ("Hazardous Materials", yes_no(self.services.hazardous_materials)),
                ("Certifications", or_unspecified(&self.services.certifications)),
            ],
            2 => vec![
                ("Headquarters", or_unspecified(&self.locations.headquarters)),
                ("Service Regions", or_unspecified(&self.locations.service_regions)),
                ("Branch Office", or_unspecified(&self.locations.branch_office)),
            ],
            3 => vec![
                ("Contact Person", or_unspecified(&self.contact.contact_name)),
                ("Job Title", or_unspecified(&self.contact.contact_title)),
                ("Email", or_unspecified(&self.contact.contact_email)),
                ("Phone", or_unspecified(&self.contact.contact_phone)),
                (
                    "Membership",
                    or_unspecified(self.contact.membership.map_or("", Membership::label)),
                ),
            ],
            _ => Vec::new(),
        }
    }
}

impl WizardForm for PartnerProfile {
    type Field = PartnerField;
    type Rules = ();

    fn steps() -> &'static [StepDefinition<PartnerField>] {
        PARTNER_STEPS
    }

    fn field_spec(field: PartnerField) -> FieldSpec {
        match field {
            PartnerField::CompanyName => {
                FieldSpec::text("Company Name", "Enter your logistics company name")
            }
            PartnerField::CompanyType => FieldSpec::choice("Company Type", CompanyType::OPTIONS),
            PartnerField::CompanyDescription => FieldSpec::multiline(
                "Company Description",
                "Describe your logistics services and specialties",
            ),
            PartnerField::FoundedYear => FieldSpec::text("Year Founded", "e.g. 2010"),
            PartnerField::CompanySize => FieldSpec::choice("Company Size", CompanySize::OPTIONS),
            PartnerField::Website => FieldSpec::text("Website", "https://yourlogistics.com"),
            PartnerField::ServiceDescription => FieldSpec::multiline(
                "Detailed Service Description",
                "Provide detailed information about your services and expertise",
            ),
            PartnerField::HazardousMaterials => FieldSpec::flag("Handles Hazardous Materials"),
            PartnerField::Certifications => {
                FieldSpec::text("Certifications & Compliance", "e.g. ISO 9001, CTPAT, IATA")
            }
            PartnerField::Headquarters => {
                FieldSpec::text("Headquarters Location", "City, Country")
            }
            PartnerField::ServiceRegions => {
                FieldSpec::text("Service Regions", "e.g. North America, Europe")
            }
            PartnerField::BranchOffice => FieldSpec::text("Branch Office", "Branch location"),
            PartnerField::ContactName => FieldSpec::text("Contact Person", "Full name"),
            PartnerField::ContactTitle => {
                FieldSpec::text("Job Title", "e.g. Logistics Manager")
            }
            PartnerField::ContactEmail => FieldSpec::text("Email", "contact@company.com"),
            PartnerField::ContactPhone => FieldSpec::text("Phone", "+1 234 567 8900"),
            PartnerField::Membership => FieldSpec::choice("Membership Type", Membership::OPTIONS),
        }
    }

    fn value(&self, field: PartnerField) -> FieldValue {
        match field {
            PartnerField::CompanyName => FieldValue::text(&self.basic.company_name),
            PartnerField::CompanyType => {
                FieldValue::Choice(self.basic.company_type.map(CompanyType::as_str))
            }
            PartnerField::CompanyDescription => FieldValue::text(&self.basic.company_description),
            PartnerField::FoundedYear => FieldValue::text(&self.basic.founded_year),
            PartnerField::CompanySize => {
                FieldValue::Choice(self.basic.company_size.map(CompanySize::as_str))
            }
            PartnerField::Website => FieldValue::text(&self.basic.website),
            PartnerField::ServiceDescription => {
                FieldValue::text(&self.services.service_description)
            }
            PartnerField::HazardousMaterials => FieldValue::Flag(self.services.hazardous_materials),
            PartnerField::Certifications => FieldValue::text(&self.services.certifications),
            PartnerField::Headquarters => FieldValue::text(&self.locations.headquarters),
            PartnerField::ServiceRegions => FieldValue::text(&self.locations.service_regions),
            PartnerField::BranchOffice => FieldValue::text(&self.locations.branch_office),
            PartnerField::ContactName => FieldValue::text(&self.contact.contact_name),
            PartnerField::ContactTitle => FieldValue::text(&self.contact.contact_title),
            PartnerField::ContactEmail => FieldValue::text(&self.contact.contact_email),
            PartnerField::ContactPhone => FieldValue::text(&self.contact.contact_phone),
            PartnerField::Membership => {
                FieldValue::Choice(self.contact.membership.map(Membership::as_str))
            }
        }
    }

    fn set_value(
        &mut self,
        field: PartnerField,
        value: FieldValue,
    ) -> Result<(), FieldTypeMismatch> {
        match (field, value) {
            (PartnerField::CompanyName, FieldValue::Text(s)) => self.basic.company_name = s,
            (PartnerField::CompanyType, FieldValue::Choice(c)) => {
                self.basic.company_type = parse_choice(field, c, CompanyType::from_value)?
            }
            (PartnerField::CompanyDescription, FieldValue::Text(s)) => {
                self.basic.company_description = s
            }
            (PartnerField::FoundedYear, FieldValue::Text(s)) => self.basic.founded_year = s,
            (PartnerField::CompanySize, FieldValue::Choice(c)) => {
                self.basic.company_size = parse_choice(field, c, CompanySize::from_value)?
            }
            (PartnerField::Website, FieldValue::Text(s)) => self.basic.website = s,
            (PartnerField::ServiceDescription, FieldValue::Text(s)) => {
                self.services.service_description = s
            }
            (PartnerField::HazardousMaterials, FieldValue::Flag(b)) => {
                self.services.hazardous_materials = b
            }
            (PartnerField::Certifications, FieldValue::Text(s)) => self.services.certifications = s,
            (PartnerField::Headquarters, FieldValue::Text(s)) => self.locations.headquarters = s,
            (PartnerField::ServiceRegions, FieldValue::Text(s)) => {
                self.locations.service_regions = s
            }
            (PartnerField::BranchOffice, FieldValue::Text(s)) => self.locations.branch_office = s,
            (PartnerField::ContactName, FieldValue::Text(s)) => self.contact.contact_name = s,
            (PartnerField::ContactTitle, FieldValue::Text(s)) => self.contact.contact_title = s,
            (PartnerField::ContactEmail, FieldValue::Text(s)) => self.contact.contact_email = s,
            (PartnerField::ContactPhone, FieldValue::Text(s)) => self.contact.contact_phone = s,
            (PartnerField::Membership, FieldValue::Choice(c)) => {
                self.contact.membership = parse_choice(field, c, Membership::from_value)?
            }
            (field, other) => return Err(mismatch(field, Self::field_spec(field), &other)),
        }
        Ok(())
    }

    fn validate_step(&self, step: usize, _rules: &()) -> ValidationResult<PartnerField> {
        let mut result = ValidationResult::new();
        if let Some(definition) = PARTNER_STEPS.get(step) {
            for &field in definition.fields {
                if let Some(message) = self.check_field(field) {
                    result.add(field, message);
                }
            }
        }
        result
    }
}
