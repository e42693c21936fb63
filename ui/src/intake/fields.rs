//! Intake field declarations and the raw form state

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::IntakeError;

// ============================================================================
// Field Declarations
// ============================================================================

/// How a field's raw input is interpreted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text (names)
    Text,
    /// Number typed into a numeric input, kept raw until validation
    Numeric,
    /// One of a fixed set of options (select)
    Choice(&'static [&'static str]),
    /// Checkbox
    Flag,
}

/// Every input on the patient intake form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Age,
    Gender,
    Bilirubin,
    Albumin,
    Platelets,
    Copper,
    AlkalinePhosphatase,
    Sgot,
    Prothrombin,
    HistoryOfAlcohol,
    Hepatitis,
    Diabetes,
}

pub const GENDER_OPTIONS: &[&str] = &["male", "female"];

impl Field {
    pub const ALL: [Field; 14] = [
        Field::FirstName,
        Field::LastName,
        Field::Age,
        Field::Gender,
        Field::Bilirubin,
        Field::Albumin,
        Field::Platelets,
        Field::Copper,
        Field::AlkalinePhosphatase,
        Field::Sgot,
        Field::Prothrombin,
        Field::HistoryOfAlcohol,
        Field::Hepatitis,
        Field::Diabetes,
    ];

    /// Name used for the input element and the serialized payload
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::Bilirubin => "bilirubin",
            Field::Albumin => "albumin",
            Field::Platelets => "platelets",
            Field::Copper => "copper",
            Field::AlkalinePhosphatase => "alkaline_phosphatase",
            Field::Sgot => "sgot",
            Field::Prothrombin => "prothrombin",
            Field::HistoryOfAlcohol => "history_of_alcohol",
            Field::Hepatitis => "hepatitis",
            Field::Diabetes => "diabetes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::Bilirubin => "Bilirubin (mg/dL)",
            Field::Albumin => "Albumin (g/dL)",
            Field::Platelets => "Platelets (×10³/μL)",
            Field::Copper => "Copper (μg/dL)",
            Field::AlkalinePhosphatase => "Alkaline Phosphatase (U/L)",
            Field::Sgot => "SGOT/AST (U/L)",
            Field::Prothrombin => "Prothrombin Time (seconds)",
            Field::HistoryOfAlcohol => "History of Alcohol Use",
            Field::Hepatitis => "Hepatitis",
            Field::Diabetes => "Diabetes",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::FirstName | Field::LastName => FieldKind::Text,
            Field::Gender => FieldKind::Choice(GENDER_OPTIONS),
            Field::HistoryOfAlcohol | Field::Hepatitis | Field::Diabetes => FieldKind::Flag,
            _ => FieldKind::Numeric,
        }
    }

    /// Whether the form refuses to submit while this field is blank
    pub fn is_required(self) -> bool {
        matches!(
            self,
            Field::FirstName
                | Field::LastName
                | Field::Age
                | Field::Gender
                | Field::Bilirubin
                | Field::Albumin
                | Field::Platelets
        )
    }

    /// Placeholder shown in the empty input (normal clinical ranges for labs)
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::FirstName => "Enter first name",
            Field::LastName => "Enter last name",
            Field::Age => "Enter age",
            Field::Bilirubin => "Normal: 0.3-1.2 mg/dL",
            Field::Albumin => "Normal: 3.5-5.0 g/dL",
            Field::Platelets => "Normal: 150-450 ×10³/μL",
            Field::Copper => "Normal: 70-140 μg/dL",
            Field::AlkalinePhosphatase => "Normal: 44-147 U/L",
            Field::Sgot => "Normal: 10-40 U/L",
            Field::Prothrombin => "Normal: 11-13 seconds",
            _ => "",
        }
    }

    /// Input step attribute for numeric fields
    pub fn step(self) -> Option<&'static str> {
        match self {
            Field::Bilirubin | Field::Albumin | Field::Copper | Field::Prothrombin => Some("0.1"),
            _ => None,
        }
    }

    /// Lab values block on the form
    pub fn lab_panel() -> [Field; 7] {
        [
            Field::Bilirubin,
            Field::Albumin,
            Field::Platelets,
            Field::Copper,
            Field::AlkalinePhosphatase,
            Field::Sgot,
            Field::Prothrombin,
        ]
    }

    /// Medical history checkboxes
    pub fn history_flags() -> [Field; 3] {
        [Field::HistoryOfAlcohol, Field::Hepatitis, Field::Diabetes]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| IntakeError::UnknownField(s.to_string()))
    }
}

// ============================================================================
// Raw Values
// ============================================================================

/// Raw value as delivered by an input event
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Checked(value)
    }
}

// ============================================================================
// Form State
// ============================================================================

/// Current raw value of every intake field
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    values: HashMap<Field, FieldValue>,
}

impl Default for FormState {
    fn default() -> Self {
        let values = Field::ALL
            .into_iter()
            .map(|field| {
                let initial = match field.kind() {
                    FieldKind::Flag => FieldValue::Checked(false),
                    FieldKind::Choice(options) => FieldValue::Text(options[0].to_string()),
                    FieldKind::Text | FieldKind::Numeric => FieldValue::Text(String::new()),
                };
                (field, initial)
            })
            .collect();
        Self { values }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text of a text, numeric or choice field ("" for flags)
    pub fn text(&self, field: Field) -> &str {
        match self.values.get(&field) {
            Some(FieldValue::Text(text)) => text,
            _ => "",
        }
    }

    /// Checkbox state of a flag field (false for non-flags)
    pub fn checked(&self, field: Field) -> bool {
        matches!(self.values.get(&field), Some(FieldValue::Checked(true)))
    }

    /// Store a raw value, last write wins.
    ///
    /// Numeric fields coerce an empty input to `"0"`; whitespace is kept as
    /// typed. The value's shape must match the field kind.
    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<(), IntakeError> {
        let value = match (field.kind(), value) {
            (FieldKind::Flag, FieldValue::Checked(checked)) => FieldValue::Checked(checked),
            (FieldKind::Numeric, FieldValue::Text(text)) if text.is_empty() => {
                FieldValue::Text("0".to_string())
            }
            (FieldKind::Choice(options), FieldValue::Text(text)) => {
                if !options.contains(&text.as_str()) {
                    return Err(IntakeError::InvalidOption { field, value: text });
                }
                FieldValue::Text(text)
            }
            (FieldKind::Text | FieldKind::Numeric, FieldValue::Text(text)) => FieldValue::Text(text),
            (kind, _) => return Err(IntakeError::KindMismatch { field, kind }),
        };
        self.values.insert(field, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>().unwrap(), field);
        }
        assert!(matches!(
            "middleName".parse::<Field>(),
            Err(IntakeError::UnknownField(name)) if name == "middleName"
        ));
    }

    #[test]
    fn test_initial_state() {
        let state = FormState::new();
        assert_eq!(state.text(Field::FirstName), "");
        assert_eq!(state.text(Field::Age), "");
        assert_eq!(state.text(Field::Gender), "male");
        assert!(!state.checked(Field::Diabetes));
    }

    #[test]
    fn test_numeric_empty_coerces_to_zero() {
        let mut state = FormState::new();
        state.set(Field::Bilirubin, "1.4".into()).unwrap();
        state.set(Field::Bilirubin, "".into()).unwrap();
        assert_eq!(state.text(Field::Bilirubin), "0");

        // Text fields keep the blank
        state.set(Field::FirstName, "".into()).unwrap();
        assert_eq!(state.text(Field::FirstName), "");
    }

    #[test]
    fn test_numeric_whitespace_is_not_coerced() {
        let mut state = FormState::new();
        state.set(Field::Age, "   ".into()).unwrap();
        assert_eq!(state.text(Field::Age), "   ");
    }

    #[test]
    fn test_numeric_keeps_unparseable_raw_text() {
        let mut state = FormState::new();
        state.set(Field::Age, "forty".into()).unwrap();
        assert_eq!(state.text(Field::Age), "forty");
    }

    #[test]
    fn test_kind_mismatch_rejected() {
        let mut state = FormState::new();
        let err = state.set(Field::Hepatitis, "yes".into()).unwrap_err();
        assert!(matches!(err, IntakeError::KindMismatch { field: Field::Hepatitis, .. }));

        let err = state.set(Field::LastName, true.into()).unwrap_err();
        assert!(matches!(err, IntakeError::KindMismatch { field: Field::LastName, .. }));
        assert!(!state.checked(Field::Hepatitis));
    }

    #[test]
    fn test_choice_rejects_unknown_option() {
        let mut state = FormState::new();
        state.set(Field::Gender, "female".into()).unwrap();
        assert!(state.set(Field::Gender, "other".into()).is_err());
        assert_eq!(state.text(Field::Gender), "female");
    }
}
