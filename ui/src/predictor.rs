//! Mock prediction host for the intake form
//!
//! Stands in for a real model: waits a moment, then returns a randomly
//! scored display result. No patient values influence the score.

use gloo_timers::future::TimeoutFuture;

use crate::intake::{HandlerFailure, Notifier, PatientData};
use crate::types::PredictionResult;

/// Simulated round-trip before a result appears
const SIMULATED_LATENCY_MS: u32 = 1_500;

pub async fn mock_predict(data: &PatientData) -> Result<PredictionResult, HandlerFailure> {
    log::debug!(
        "Generating mock prediction for {} {} (age {})",
        data.first_name,
        data.last_name,
        data.age
    );
    TimeoutFuture::new(SIMULATED_LATENCY_MS).await;

    let score = (js_sys::Math::random() * 100.0).round();
    if !score.is_finite() {
        return Err(HandlerFailure::from("random source unavailable"));
    }
    let timestamp = String::from(js_sys::Date::new_0().to_iso_string());

    Ok(PredictionResult::from_score(score as u8, timestamp))
}

/// Shows notices with `window.alert`
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn alert(&self, message: &str) {
        web_sys::window().and_then(|w| w.alert_with_message(message).ok());
    }
}
