use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur talking to the document store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{kind} not found: {id} {location}")]
    NotFound {
        kind: &'static str,
        id: String,
        location: ErrorLocation,
    },

    #[error("Store write failed during {op}: {message} (code: {code}) {location}")]
    Write {
        op: &'static str,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Store API error: {message} (code: {code}) {location}")]
    Api {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Response decode error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    /// Create a NotFound error with location
    #[track_caller]
    pub fn not_found(kind: &'static str, id: &str) -> Self {
        StoreError::NotFound {
            kind,
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a Write error with location
    #[track_caller]
    pub fn write(op: &'static str, code: String, message: String) -> Self {
        StoreError::Write {
            op,
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a Decode error with location
    #[track_caller]
    pub fn decode<S: Into<String>>(message: S) -> Self {
        StoreError::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for StoreError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        StoreError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
