//! Core error types for diagram generation
//!
//! This module defines the errors shared by the switch parser, the type
//! catalog and the diagram generator. Every error aborts the run.

use thiserror::Error;

/// Core error types for diagram generation
#[derive(Error, Debug)]
pub enum UmlError {
    #[error("{switch} did not have a value")]
    MissingValue { switch: String },

    #[error("{switch} must have an integer value.")]
    NotAnInteger { switch: String },

    #[error("Expected the parameter {switch}")]
    ExpectedParameter { switch: String },

    #[error("{switch} {message}")]
    InvalidValue { switch: String, message: String },

    #[error("Can not find type {name}")]
    UnresolvedType { name: String },

    #[error("Catalog error: {message}")]
    Catalog { message: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl UmlError {
    /// Create a new missing value error
    pub fn missing_value(switch: &str) -> Self {
        Self::MissingValue {
            switch: switch.to_string(),
        }
    }

    /// Create a new integer format error
    pub fn not_an_integer(switch: &str) -> Self {
        Self::NotAnInteger {
            switch: switch.to_string(),
        }
    }

    /// Create a new missing parameter error
    pub fn expected_parameter(switch: &str) -> Self {
        Self::ExpectedParameter {
            switch: switch.to_string(),
        }
    }

    /// Create a new out-of-range value error
    pub fn invalid_value(switch: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            switch: switch.to_string(),
            message: message.into(),
        }
    }

    /// Create a new unresolved type error
    pub fn unresolved_type(name: &str) -> Self {
        Self::UnresolvedType {
            name: name.to_string(),
        }
    }

    /// Create a new catalog error
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }
}
