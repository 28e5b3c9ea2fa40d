//! Validation results and the field rules shared by every form

use super::field::FieldId;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+'-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// A single invalid field and the message shown next to it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Field errors for one step, ordered by field declaration order.
/// A step is valid iff its result is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult<F: FieldId> {
    errors: BTreeMap<F, String>,
}

impl<F: FieldId> Default for ValidationResult<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: FieldId> ValidationResult<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record an error; the first message for a field wins
    pub fn add(&mut self, field: F, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.errors.keys().copied()
    }

    pub fn retain(&mut self, mut keep: impl FnMut(F) -> bool) {
        self.errors.retain(|f, _| keep(*f));
    }

    pub fn to_field_errors(&self) -> Vec<FieldError> {
        self.errors
            .iter()
            .map(|(field, message)| FieldError {
                field: field.name(),
                message: message.clone(),
            })
            .collect()
    }
}

/// Non-empty. Whitespace counts as input.
pub fn is_present(value: &str) -> bool {
    !value.is_empty()
}

/// At least `min` characters, counted as typed
pub fn has_min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
