use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::num::ParseIntError;
use thiserror::Error;

use crate::domain::model::ErroResponse;

/// The only message a client ever sees for a rejected number.
pub const RANGE_ERROR_MESSAGE: &str = "O path deve ser um numero inteiro entre -99999 e 99999.";

#[derive(Error, Debug)]
pub enum ExtensoError {
    #[error("{msg}", msg = RANGE_ERROR_MESSAGE)]
    OutOfRange { value: i64 },

    #[error("{msg}", msg = RANGE_ERROR_MESSAGE)]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ExtensoError {
    /// Out-of-range numbers and unparsable input collapse into the same
    /// user-visible error.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            ExtensoError::OutOfRange { .. } | ExtensoError::InvalidNumber { .. }
        )
    }

    /// Diagnostic text for logs. Unlike `Display`, this keeps the underlying cause.
    pub fn detail(&self) -> String {
        match self {
            ExtensoError::OutOfRange { value } => {
                format!("{} is outside [-99999, 99999]", value)
            }
            ExtensoError::InvalidNumber { input, source } => {
                format!("cannot parse '{}' as an integer: {}", input, source)
            }
            other => other.to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ExtensoError::IoError(e) => format!("Could not start the server: {}", e),
            ExtensoError::TomlError(_) => {
                "The configuration file is not valid TOML".to_string()
            }
            ExtensoError::ConfigError { message } => message.clone(),
            ExtensoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            range => range.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        if self.is_range_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ExtensoError {
    fn into_response(self) -> Response {
        let body = ErroResponse {
            erro: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ExtensoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_errors_share_the_fixed_message() {
        let out_of_range = ExtensoError::OutOfRange { value: 100000 };
        let source = "abc".parse::<i64>().unwrap_err();
        let invalid = ExtensoError::InvalidNumber {
            input: "abc".to_string(),
            source,
        };

        assert_eq!(out_of_range.to_string(), RANGE_ERROR_MESSAGE);
        assert_eq!(invalid.to_string(), RANGE_ERROR_MESSAGE);
        assert!(out_of_range.is_range_error());
        assert!(invalid.is_range_error());
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_detail_keeps_the_cause() {
        let err = ExtensoError::OutOfRange { value: -100000 };
        assert_eq!(err.detail(), "-100000 is outside [-99999, 99999]");

        let source = "99.999".parse::<i64>().unwrap_err();
        let err = ExtensoError::InvalidNumber {
            input: "99.999".to_string(),
            source,
        };
        assert!(err.detail().starts_with("cannot parse '99.999'"));
    }

    #[test]
    fn test_config_errors_are_server_errors() {
        let err = ExtensoError::ConfigError {
            message: "bad".to_string(),
        };
        assert!(!err.is_range_error());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_friendly_message(), "bad");
    }
}
