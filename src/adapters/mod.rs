pub mod health_handler;
pub mod ui_handler;
