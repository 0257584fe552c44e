// File: src/error.rs
// Purpose: Faults raised while feeding raw UI input into the form

use thiserror::Error;

use crate::field::Field;

/// Errors for input that cannot be applied to the form at all.
///
/// These are distinct from validation failures, which are ordinary data
/// carried in an [`ErrorMap`](crate::validator::ErrorMap).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("'{value}' is not a valid option for {field}")]
    UnknownOption { field: Field, value: String },

    #[error("{field} expects a {expected} value")]
    WrongKind { field: Field, expected: &'static str },
}

pub type Result<T> = std::result::Result<T, FormError>;
