//! Field rules for the intake form
//!
//! `validate` is a pure pass over a [`FormState`]; the returned
//! [`ValidationErrors`] has no entry for a field that passed.

use std::collections::BTreeMap;

use thiserror::Error;

use super::fields::{Field, FieldKind, FormState};

/// Closed bounds accepted for a patient's age
pub const AGE_RANGE: (f64, f64) = (0.0, 120.0);

/// Why a single field failed validation
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FieldError {
    /// A mandated field is empty or whitespace-only
    #[error("{label} is required")]
    RequiredField { label: &'static str },

    /// A numeric field is unparseable or outside its declared bounds
    #[error("{message}")]
    Range {
        min: f64,
        max: Option<f64>,
        message: String,
    },
}

impl FieldError {
    fn required(field: Field) -> Self {
        let label = match field {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            other => other.label(),
        };
        FieldError::RequiredField { label }
    }

    fn age_range() -> Self {
        let (min, max) = AGE_RANGE;
        FieldError::Range {
            min,
            max: Some(max),
            message: format!("Please enter a valid age between {} and {}", min, max),
        }
    }

    fn non_negative(field: Field) -> Self {
        FieldError::Range {
            min: 0.0,
            max: None,
            message: format!("{} must be a number of at least 0", field.label()),
        }
    }
}

/// Per-field error messages from one validation pass
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Message to render under the input, if the field failed
    pub fn message(&self, field: Field) -> Option<String> {
        self.errors.get(&field).map(ToString::to_string)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    /// Drop the entry for `field`, returning whether one existed
    pub fn clear(&mut self, field: Field) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }
}

/// Evaluate every field rule against `state`
pub fn validate(state: &FormState) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for field in Field::ALL {
        let result = match field.kind() {
            FieldKind::Text => check_text(state, field),
            FieldKind::Numeric if field == Field::Age => check_age(state),
            FieldKind::Numeric => check_lab_value(state, field),
            // Choice and flag values are constrained when written
            FieldKind::Choice(_) | FieldKind::Flag => Ok(()),
        };
        if let Err(e) = result {
            errors.insert(field, e);
        }
    }

    errors
}

fn check_text(state: &FormState, field: Field) -> Result<(), FieldError> {
    if field.is_required() && state.text(field).trim().is_empty() {
        return Err(FieldError::required(field));
    }
    Ok(())
}

fn check_age(state: &FormState) -> Result<(), FieldError> {
    let (min, max) = AGE_RANGE;
    match parse_number(state.text(Field::Age)) {
        Some(age) if (min..=max).contains(&age) => Ok(()),
        _ => Err(FieldError::age_range()),
    }
}

fn check_lab_value(state: &FormState, field: Field) -> Result<(), FieldError> {
    let raw = state.text(field);
    if raw.trim().is_empty() {
        return if field.is_required() {
            Err(FieldError::required(field))
        } else {
            Ok(())
        };
    }
    match parse_number(raw) {
        Some(value) if value >= 0.0 => Ok(()),
        _ => Err(FieldError::non_negative(field)),
    }
}

/// Parse a numeric input; NaN and infinities are not numbers here
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
