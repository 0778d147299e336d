/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */
use serde::Serialize;
use thiserror::Error;

/// Top-level error type for the form library
#[derive(Error, Debug)]
pub enum FormError {
    #[error("Invalid pattern rule '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid form definition: {0}")]
    Definition(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type FormResult<T> = Result<T, FormError>;

/// Parse errors for YAML/JSON form definitions
///
/// This is a wrapper around the parser module's `ParseError` so the public
/// API does not leak the parser's internal module path.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid YAML: {0}")]
    InvalidYaml(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid field type: {0}")]
    InvalidFieldType(String),
}

impl From<crate::parser::error::ParseError> for ParseError {
    fn from(err: crate::parser::error::ParseError) -> Self {
        match err {
            crate::parser::error::ParseError::InvalidYaml(msg) => Self::InvalidYaml(msg),
            crate::parser::error::ParseError::InvalidJson(msg) => Self::InvalidJson(msg),
            crate::parser::error::ParseError::MissingField(msg) => Self::MissingField(msg),
            crate::parser::error::ParseError::InvalidFieldType(msg) => Self::InvalidFieldType(msg),
        }
    }
}

/// Why a control's last submitted value was rejected.
///
/// Field errors are recorded on the owning control and surface only through
/// re-rendering; they never abort handling or rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldError {
    LengthTooShort,
    LengthTooExceeded,
    RequiredMissing,
    FormatInvalid { rule: String },
    Custom { message: String },
}

impl FieldError {
    /// The short error type name: `min`, `max`, the failing rule's name,
    /// or `custom`.
    pub fn error_type(&self) -> &str {
        match self {
            Self::LengthTooShort => "min",
            Self::LengthTooExceeded => "max",
            Self::RequiredMissing => "not_empty",
            Self::FormatInvalid { rule } => rule,
            Self::Custom { .. } => "custom",
        }
    }
}
