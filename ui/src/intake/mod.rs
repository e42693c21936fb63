//! Patient intake: field state, validation and the single-flight submit guard
//!
//! Everything here is UI-framework agnostic. The Leptos form component owns
//! one [`IntakeForm`] per mounted instance and re-renders from its change
//! listener.

pub mod fields;
pub mod payload;
pub mod submission;
pub mod validation;

pub use fields::{Field, FieldKind, FieldValue, FormState};
pub use payload::{Gender, PatientData};
pub use submission::{HandlerFailure, IntakeForm, Notifier, SubmitOutcome, FAILURE_NOTICE};
pub use validation::{validate, FieldError, ValidationErrors};

use thiserror::Error;

/// Input events that cannot be applied to the form state
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IntakeError {
    #[error("Unknown intake field: {0}")]
    UnknownField(String),

    #[error("Value does not fit field {field} ({kind:?})")]
    KindMismatch { field: Field, kind: FieldKind },

    #[error("Invalid option '{value}' for field {field}")]
    InvalidOption { field: Field, value: String },
}
