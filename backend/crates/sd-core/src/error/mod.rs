use crate::FieldErrors;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {errors} {location}")]
    Validation {
        errors: FieldErrors,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Wrap collected field errors
    #[track_caller]
    pub fn validation(errors: FieldErrors) -> Self {
        CoreError::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Field errors carried by this error
    pub fn field_errors(&self) -> &FieldErrors {
        match self {
            CoreError::Validation { errors, .. } => errors,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
