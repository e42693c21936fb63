//! Typed payload handed to the prediction handler

use serde::{Deserialize, Serialize};

use super::fields::{Field, FormState};
use super::validation::{parse_number, validate, ValidationErrors};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Patient record with values coerced to their semantic types
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PatientData {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub age: f64,
    pub gender: Gender,
    pub bilirubin: f64,
    pub albumin: f64,
    pub platelets: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copper: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alkaline_phosphatase: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sgot: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prothrombin: Option<f64>,
    pub history_of_alcohol: bool,
    pub hepatitis: bool,
    pub diabetes: bool,
}

impl PatientData {
    /// Build the payload from a form state.
    ///
    /// Runs a validation pass first, so a payload only ever exists for a
    /// state that validates cleanly.
    pub fn from_state(state: &FormState) -> Result<Self, ValidationErrors> {
        let errors = validate(state);
        if !errors.is_empty() {
            return Err(errors);
        }

        // Validation guarantees required numbers parse
        let number = |field: Field| parse_number(state.text(field)).unwrap_or_default();
        let optional = |field: Field| parse_number(state.text(field));

        let gender = match state.text(Field::Gender) {
            "female" => Gender::Female,
            _ => Gender::Male,
        };

        Ok(Self {
            first_name: state.text(Field::FirstName).trim().to_string(),
            last_name: state.text(Field::LastName).trim().to_string(),
            age: number(Field::Age),
            gender,
            bilirubin: number(Field::Bilirubin),
            albumin: number(Field::Albumin),
            platelets: number(Field::Platelets),
            copper: optional(Field::Copper),
            alkaline_phosphatase: optional(Field::AlkalinePhosphatase),
            sgot: optional(Field::Sgot),
            prothrombin: optional(Field::Prothrombin),
            history_of_alcohol: state.checked(Field::HistoryOfAlcohol),
            hepatitis: state.checked(Field::Hepatitis),
            diabetes: state.checked(Field::Diabetes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled_state() -> FormState {
        let mut state = FormState::new();
        state.set(Field::FirstName, "  Jane ".into()).unwrap();
        state.set(Field::LastName, "Doe".into()).unwrap();
        state.set(Field::Age, "45".into()).unwrap();
        state.set(Field::Gender, "female".into()).unwrap();
        state.set(Field::Bilirubin, "1.2".into()).unwrap();
        state.set(Field::Albumin, "3.8".into()).unwrap();
        state.set(Field::Platelets, "180".into()).unwrap();
        state.set(Field::Sgot, "".into()).unwrap();
        state.set(Field::Hepatitis, true.into()).unwrap();
        state
    }

    #[test]
    fn test_payload_coerces_types() {
        let data = PatientData::from_state(&filled_state()).unwrap();

        assert_eq!(data.first_name, "Jane");
        assert_eq!(data.age, 45.0);
        assert_eq!(data.gender, Gender::Female);
        assert_eq!(data.bilirubin, 1.2);
        assert_eq!(data.platelets, 180.0);
        assert_eq!(data.copper, None);
        // Cleared numeric input was coerced to zero
        assert_eq!(data.sgot, Some(0.0));
        assert!(data.hepatitis);
        assert!(!data.diabetes);
    }

    #[test]
    fn test_payload_refused_for_invalid_state() {
        let mut state = filled_state();
        state.set(Field::Age, "200".into()).unwrap();

        let errors = PatientData::from_state(&state).unwrap_err();
        assert!(errors.contains(Field::Age));
    }

    #[test]
    fn test_payload_wire_names() {
        let data = PatientData::from_state(&filled_state()).unwrap();
        let value = serde_json::to_value(&data).unwrap();

        assert_eq!(value["firstName"], json!("Jane"));
        assert_eq!(value["gender"], json!("female"));
        assert_eq!(value["history_of_alcohol"], json!(false));
        assert!(value.get("copper").is_none());
    }
}
