pub mod patient_form;
pub mod prediction_results;
