//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (status codes, timeouts, addresses)
//! - Check header names and values are representable on the wire
//! - Detect conflicting body settings
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: StubConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use axum::http::header::{HeaderName, HeaderValue};
use axum::http::StatusCode;
use thiserror::Error;

use crate::config::schema::StubConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("status {0} is not 0 or a valid HTTP status code")]
    InvalidStatus(u16),

    #[error("invalid header name {0:?}")]
    InvalidHeaderName(String),

    #[error("invalid value {value:?} for header {name:?}")]
    InvalidHeaderValue { name: String, value: String },

    #[error("invalid content type {0:?}")]
    InvalidContentType(String),

    #[error("invalid mirrored header name {0:?}")]
    InvalidMirrorHeader(String),

    #[error("response.body and response.json are mutually exclusive")]
    ConflictingBody,

    #[error("invalid bind address {0:?}")]
    InvalidBindAddress(String),

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &StubConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.server.bind_address.clone(),
        ));
    }
    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let response = &config.response;
    if response.status != 0 && StatusCode::from_u16(response.status).is_err() {
        errors.push(ValidationError::InvalidStatus(response.status));
    }
    if response.body.is_some() && response.json.is_some() {
        errors.push(ValidationError::ConflictingBody);
    }
    if let Some(content_type) = &response.content_type {
        if HeaderValue::from_str(content_type).is_err() {
            errors.push(ValidationError::InvalidContentType(content_type.clone()));
        }
    }

    for header in &response.headers {
        if HeaderName::from_bytes(header.name.as_bytes()).is_err() {
            errors.push(ValidationError::InvalidHeaderName(header.name.clone()));
        } else if HeaderValue::from_str(&header.value).is_err() {
            errors.push(ValidationError::InvalidHeaderValue {
                name: header.name.clone(),
                value: header.value.clone(),
            });
        }
    }

    for name in &config.mirror.headers {
        if HeaderName::from_bytes(name.to_lowercase().as_bytes()).is_err() {
            errors.push(ValidationError::InvalidMirrorHeader(name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
