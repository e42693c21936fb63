//! Form instance state and the submit state machine

use std::cell::{Cell, RefCell};
use std::future::Future;

use thiserror::Error;

use super::fields::{Field, FieldValue, FormState};
use super::payload::PatientData;
use super::validation::ValidationErrors;
use super::IntakeError;

/// Notice shown when the prediction handler fails
pub const FAILURE_NOTICE: &str = "Failed to generate prediction. Please try again.";

/// The external prediction handler failed; its cause is opaque here
#[derive(Debug, Clone, Error, PartialEq)]
#[error("prediction handler failed: {0}")]
pub struct HandlerFailure(pub String);

impl From<String> for HandlerFailure {
    fn from(message: String) -> Self {
        Self(message)
    }
}

impl From<&str> for HandlerFailure {
    fn from(message: &str) -> Self {
        Self(message.to_string())
    }
}

/// Blocking user-visible notice (a browser alert in the app)
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// What became of one submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Another submission was in flight; nothing happened
    Rejected,
    /// Validation failed on this many fields; handler not invoked
    Invalid(usize),
    /// Handler resolved
    Completed,
    /// Handler failed; the user was notified
    Failed(HandlerFailure),
}

/// State of one mounted intake form.
///
/// Single-threaded by construction: field updates, validation and submit all
/// run on the UI event loop, and only the handler call suspends.
pub struct IntakeForm {
    state: RefCell<FormState>,
    errors: RefCell<ValidationErrors>,
    submitting: Cell<bool>,
    listener: Option<Box<dyn Fn()>>,
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeForm {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(FormState::new()),
            errors: RefCell::new(ValidationErrors::new()),
            submitting: Cell::new(false),
            listener: None,
        }
    }

    /// Call `listener` after every change to state, errors or the guard
    pub fn with_listener(mut self, listener: impl Fn() + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    fn changed(&self) {
        if let Some(listener) = &self.listener {
            listener();
        }
    }

    pub fn text(&self, field: Field) -> String {
        self.state.borrow().text(field).to_string()
    }

    pub fn checked(&self, field: Field) -> bool {
        self.state.borrow().checked(field)
    }

    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn errors(&self) -> ValidationErrors {
        self.errors.borrow().clone()
    }

    pub fn error_message(&self, field: Field) -> Option<String> {
        self.errors.borrow().message(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    /// Apply one input event and clear that field's error, if any
    pub fn update_field(&self, field: Field, value: impl Into<FieldValue>) -> Result<(), IntakeError> {
        self.state.borrow_mut().set(field, value.into())?;
        self.errors.borrow_mut().clear(field);
        self.changed();
        Ok(())
    }

    /// Same as [`update_field`](Self::update_field), addressed by input name
    pub fn update_named(&self, name: &str, value: impl Into<FieldValue>) -> Result<(), IntakeError> {
        self.update_field(name.parse()?, value)
    }

    /// Run a validation pass and publish its errors, replacing the previous set
    pub fn validate(&self) -> bool {
        let errors = super::validate(&self.state.borrow());
        let valid = errors.is_empty();
        *self.errors.borrow_mut() = errors;
        self.changed();
        valid
    }

    /// Validate and hand the payload to `on_predict`, at most once in flight.
    ///
    /// Handler failures are reported through `notifier` and never propagate.
    pub async fn submit<F, Fut>(&self, on_predict: F, notifier: &dyn Notifier) -> SubmitOutcome
    where
        F: FnOnce(PatientData) -> Fut,
        Fut: Future<Output = Result<(), HandlerFailure>>,
    {
        if self.submitting.get() {
            log::debug!("Submission already in flight, dropping re-entrant submit");
            return SubmitOutcome::Rejected;
        }

        let prepared = PatientData::from_state(&self.state.borrow());
        let payload = match prepared {
            Ok(payload) => payload,
            Err(errors) => {
                let count = errors.len();
                log::debug!("Intake validation failed on {} field(s)", count);
                *self.errors.borrow_mut() = errors;
                self.changed();
                return SubmitOutcome::Invalid(count);
            }
        };
        *self.errors.borrow_mut() = ValidationErrors::new();

        let Some(_guard) = SubmissionGuard::acquire(self) else {
            return SubmitOutcome::Rejected;
        };

        match on_predict(payload).await {
            Ok(()) => {
                log::info!("Prediction completed");
                SubmitOutcome::Completed
            }
            Err(failure) => {
                log::warn!("Error during prediction: {}", failure);
                notifier.alert(FAILURE_NOTICE);
                SubmitOutcome::Failed(failure)
            }
        }
    }
}

/// Holds the in-flight flag; dropping it releases the form on every exit path
struct SubmissionGuard<'a> {
    form: &'a IntakeForm,
}

impl<'a> SubmissionGuard<'a> {
    fn acquire(form: &'a IntakeForm) -> Option<Self> {
        if form.submitting.replace(true) {
            return None;
        }
        form.changed();
        Some(Self { form })
    }
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.form.submitting.set(false);
        self.form.changed();
    }
}
