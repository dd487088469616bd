use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur during authentication flows
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("User does not exist in the database. Please register first. {location}")]
    MissingProfile { location: ErrorLocation },

    #[error("Registration failed: {message} {location}")]
    Registration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Provider error: {message} (code: {code}) {location}")]
    Provider {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Profile lookup failed: {message} {location}")]
    Profile {
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

    #[error("Failed to read session snapshot at {path}: {source} {location}")]
    SnapshotRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to write session snapshot at {path}: {source} {location}")]
    SnapshotWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Create an InvalidCredentials error at caller location
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a MissingProfile error at caller location
    #[track_caller]
    pub fn missing_profile() -> Self {
        Self::MissingProfile {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a Registration error at caller location
    #[track_caller]
    pub fn registration<S: Into<String>>(message: S) -> Self {
        Self::Registration {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a Profile error at caller location
    #[track_caller]
    pub fn profile<S: Into<String>>(message: S) -> Self {
        Self::Profile {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a Decode error at caller location
    #[track_caller]
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a SnapshotWrite error at caller location
    #[track_caller]
    pub fn snapshot_write(path: PathBuf, source: std::io::Error) -> Self {
        Self::SnapshotWrite {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a SnapshotRead error at caller location
    #[track_caller]
    pub fn snapshot_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::SnapshotRead {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for AuthError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        AuthError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
