//! Form field value objects

use chrono::{Days, NaiveDate};
use std::fmt::Debug;

/// Identifier of a field inside one form.
///
/// Implemented by the per-form field enums; ordering follows declaration
/// order so validation results list errors top to bottom.
pub trait FieldId: Copy + Eq + Ord + Debug + 'static {
    /// Stable camelCase name, as used in the submitted payload
    fn name(self) -> &'static str;
}

/// One selectable option of an enumerated field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// How a field is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text { multiline: bool },
    Choice(&'static [ChoiceOption]),
    Flag,
    Date,
}

impl FieldKind {
    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldKind::Text { multiline: true })
    }

    /// Name of the value variant this kind accepts
    pub fn value_kind(&self) -> &'static str {
        match self {
            FieldKind::Text { .. } => "text",
            FieldKind::Choice(_) => "choice",
            FieldKind::Flag => "flag",
            FieldKind::Date => "date",
        }
    }
}

/// Static description of a single form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub kind: FieldKind,
    /// Placeholder shown while the field is empty
    pub placeholder: &'static str,
}

impl FieldSpec {
    pub const fn text(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            kind: FieldKind::Text { multiline: false },
            placeholder,
        }
    }

    pub const fn multiline(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            kind: FieldKind::Text { multiline: true },
            placeholder,
        }
    }

    pub const fn choice(label: &'static str, options: &'static [ChoiceOption]) -> Self {
        Self {
            label,
            kind: FieldKind::Choice(options),
            placeholder: "Select an option",
        }
    }

    pub const fn flag(label: &'static str) -> Self {
        Self {
            label,
            kind: FieldKind::Flag,
            placeholder: "",
        }
    }

    pub const fn date(label: &'static str) -> Self {
        Self {
            label,
            kind: FieldKind::Date,
            placeholder: "Pick a date",
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Selected option value, `None` while nothing is selected
    Choice(Option<&'static str>),
    Flag(bool),
    Date(Option<NaiveDate>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Name of this value's variant, matching [`FieldKind::value_kind`]
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Choice(_) => "choice",
            FieldValue::Flag(_) => "flag",
            FieldValue::Date(_) => "date",
        }
    }

    /// Push a character to a text value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = self {
            s.push(c);
        }
    }

    /// Remove the last character, or clear a choice/date selection
    pub fn pop_char(&mut self) {
        match self {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Choice(c) => *c = None,
            FieldValue::Date(d) => *d = None,
            FieldValue::Flag(_) => {}
        }
    }

    pub fn toggle(&mut self) {
        if let FieldValue::Flag(b) = self {
            *b = !*b;
        }
    }

    /// Step through the options of a choice field, wrapping at both ends.
    /// An empty selection starts at the first (forward) or last (backward) option.
    pub fn cycle_choice(&mut self, options: &[ChoiceOption], forward: bool) {
        let FieldValue::Choice(current) = self else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let position = current.and_then(|v| options.iter().position(|o| o.value == v));
        let next = match (position, forward) {
            (None, true) => 0,
            (None, false) => options.len() - 1,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(0), false) => options.len() - 1,
            (Some(i), false) => i - 1,
        };
        *current = Some(options[next].value);
    }

    /// Move a date by whole days; an unset date starts from `today`
    pub fn shift_days(&mut self, days: i64, today: NaiveDate) {
        let FieldValue::Date(current) = self else {
            return;
        };
        let base = current.unwrap_or(today);
        let shifted = if days >= 0 {
            base.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            base.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        *current = Some(shifted.unwrap_or(base));
    }

    /// Get the display value for rendering
    pub fn display_value(&self, kind: &FieldKind) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(None) => String::new(),
            FieldValue::Choice(Some(v)) => match kind {
                FieldKind::Choice(options) => options
                    .iter()
                    .find(|o| o.value == *v)
                    .map(|o| o.label.to_string())
                    .unwrap_or_else(|| v.to_string()),
                _ => v.to_string(),
            },
            FieldValue::Flag(true) => "[x] Yes".to_string(),
            FieldValue::Flag(false) => "[ ] No".to_string(),
            FieldValue::Date(Some(d)) => d.format("%Y-%m-%d").to_string(),
            FieldValue::Date(None) => String::new(),
        }
    }
}

#[cfg(test)]
impl FieldValue {
    /// Get the text value (returns empty string for other kinds)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    pub fn as_flag(&self) -> bool {
        matches!(self, FieldValue::Flag(true))
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => *d,
            _ => None,
        }
    }
}

/// Declares a closed set of options for a choice field.
///
/// Generates the enum with serde names matching the option values, plus
/// `OPTIONS`, `as_str`, `label` and `from_value`.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => ($value:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(#[serde(rename = $value)] $variant),+
        }

        impl $name {
            pub const OPTIONS: &'static [$crate::state::forms::ChoiceOption] = &[
                $($crate::state::forms::ChoiceOption { value: $value, label: $label }),+
            ];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn from_value(value: &str) -> Option<Self> {
                match value {
                    $($value => Some($name::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

pub(crate) use choice_enum;
