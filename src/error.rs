use std::collections::BTreeMap;
use std::fmt;
use std::io;

use serde::Serialize;

pub type Result<T> = std::result::Result<T, RegistrationError>;

/// Everything that can go wrong when registering for an event
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    // Client-correctable errors
    #[error("{0}")]
    Validation(ValidationErrors),
    #[error("This email is already registered for this event.")]
    Duplicate,
    // Storage errors
    #[error("Registration store failure")]
    Persistence(#[from] StoreError),
}

/// Failures reading or writing the registration store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read registration store")]
    Read(#[source] io::Error),
    #[error("Registration store is not a valid JSON array of registrations")]
    Malformed(#[source] serde_json::Error),
    #[error("Failed to encode registrations")]
    Encode(#[source] serde_json::Error),
    #[error("Failed to write registration store")]
    Write(#[source] io::Error),
}

/// Field name to message map for every field that failed validation
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors for a single failing field
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.0.insert(field, message.into());
        errors
    }

    /// Record the outcome of parsing a single field
    pub fn check<T>(
        &mut self,
        field: &'static str,
        result: std::result::Result<T, String>,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.0.insert(field, message);
                None
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Invalid data.")
    }
}
