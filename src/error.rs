use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use crate::validation::FieldErrors;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Cancelled,
    Unauthorized,
    Forbidden,
    NotFound,
    Validation,
    Server,
    Unclassified,
}

/// Failure of a single API call, classified by transport outcome or status code.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("network error or server is not responding: {0}")]
    Network(String),
    #[error("request was cancelled")]
    Aborted,
    #[error("unauthorized access")]
    Unauthorized,
    #[error("forbidden access")]
    Forbidden,
    #[error("resource not found")]
    NotFound,
    #[error("validation error on {} field(s)", .0.len())]
    Validation(FieldErrors),
    #[error("server error (status {0})")]
    Server(u16),
    #[error("request failed with status {status}: {body}")]
    Unclassified { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ValidationBody {
    #[serde(default)]
    errors: HashMap<String, Vec<String>>,
}

impl ApiError {
    /// Classifies a non-success response from its status and raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            422 => {
                let errors = serde_json::from_str::<ValidationBody>(body)
                    .map(|b| FieldErrors::from_server(b.errors))
                    .unwrap_or_default();
                Self::Validation(errors)
            }
            500..=599 => Self::Server(status),
            _ => Self::Unclassified {
                status,
                body: body.to_string(),
            },
        }
    }

    pub fn from_transport(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) if js.name == "AbortError" => Self::Aborted,
            gloo_net::Error::JsError(js) => Self::Network(js.message),
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            gloo_net::Error::GlooError(msg) => Self::Network(msg),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Network(_) => ErrorCategory::Network,
            Self::Aborted => ErrorCategory::Cancelled,
            Self::Unauthorized => ErrorCategory::Unauthorized,
            Self::Forbidden => ErrorCategory::Forbidden,
            Self::NotFound => ErrorCategory::NotFound,
            Self::Validation(_) => ErrorCategory::Validation,
            Self::Server(_) => ErrorCategory::Server,
            Self::Unclassified { .. } | Self::Decode(_) => ErrorCategory::Unclassified,
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }

    /// Emits the log event for this failure. Control flow is left to the caller.
    pub fn log(&self, method: &str, url: &str) {
        match self.category() {
            ErrorCategory::Cancelled => tracing::debug!(method, url, "request cancelled"),
            ErrorCategory::Validation => {
                tracing::warn!(method, url, error = %self, "validation error")
            }
            ErrorCategory::Unauthorized | ErrorCategory::Forbidden | ErrorCategory::NotFound => {
                tracing::warn!(method, url, error = %self, "request rejected")
            }
            ErrorCategory::Server | ErrorCategory::Network | ErrorCategory::Unclassified => {
                tracing::error!(method, url, error = %self, "request failed")
            }
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API base URL must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_to_categories() {
        assert_eq!(ApiError::from_status(401, "").category(), ErrorCategory::Unauthorized);
        assert_eq!(ApiError::from_status(403, "").category(), ErrorCategory::Forbidden);
        assert_eq!(ApiError::from_status(404, "").category(), ErrorCategory::NotFound);
        assert_eq!(ApiError::from_status(500, "").category(), ErrorCategory::Server);
        assert_eq!(ApiError::from_status(503, "").category(), ErrorCategory::Server);
        assert_eq!(
            ApiError::from_status(409, "conflict"),
            ApiError::Unclassified {
                status: 409,
                body: "conflict".to_string()
            }
        );
    }

    #[test]
    fn validation_body_becomes_field_errors() {
        let body = r#"{"message":"The given data was invalid.","errors":{"phone_number":["msg"]}}"#;

        let ApiError::Validation(errors) = ApiError::from_status(422, body) else {
            panic!("expected validation error");
        };

        assert_eq!(errors.get("phone_number"), Some("msg"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn malformed_validation_body_yields_empty_errors() {
        assert_eq!(
            ApiError::from_status(422, "<html>"),
            ApiError::Validation(FieldErrors::new())
        );
    }

    #[test]
    fn decode_failures_are_unclassified() {
        let err = ApiError::Decode("expected value".to_string());
        assert_eq!(err.category(), ErrorCategory::Unclassified);
        assert!(!err.is_aborted());
    }
}
