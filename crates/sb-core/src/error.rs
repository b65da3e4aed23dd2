use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Missing field '{field}' {location}")]
    MissingField {
        field: String,
        location: ErrorLocation,
    },

    #[error("Invalid field '{field}': {message} {location}")]
    InvalidField {
        field: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Record decode failed: {source} {location}")]
    Decode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Wire encode failed: {source} {location}")]
    Encode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Record payload is not a JSON object {location}")]
    NotAnObject { location: ErrorLocation },
}

impl CoreError {
    #[track_caller]
    pub fn missing_field<S: Into<String>>(field: S) -> Self {
        Self::MissingField {
            field: field.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_field<S: Into<String>, M: Into<String>>(field: S, message: M) -> Self {
        Self::InvalidField {
            field: field.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
