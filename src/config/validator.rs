use thiserror::Error;

use crate::config::{ServerSettings, Settings};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_server(&settings.server) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &ServerSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if server.host.trim().is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        } else if server.host.contains(char::is_whitespace) {
            errors.push(ValidationError::InvalidValue {
                field: "server.host".to_string(),
                reason: "Host must not contain whitespace".to_string(),
            });
        }

        if server.port == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(host: &str, port: u16) -> Settings {
        Settings {
            server: ServerSettings {
                host: host.to_string(),
                port,
            },
        }
    }

    #[test]
    fn test_valid_settings() {
        assert!(ConfigValidator::validate(&settings("127.0.0.1", 3000)).is_ok());
    }

    #[test]
    fn test_collects_every_problem() {
        let errors = ConfigValidator::validate(&settings("", 0)).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ValidationError::MissingField(_)));
        assert!(matches!(errors[1], ValidationError::InvalidValue { .. }));
    }

    #[test]
    fn test_host_with_whitespace() {
        let errors = ConfigValidator::validate(&settings("local host", 3000)).unwrap_err();
        assert_eq!(
            errors[0].to_string(),
            "Invalid value for server.host: Host must not contain whitespace"
        );
    }
}
