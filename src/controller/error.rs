use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use serde::Serialize;

use thiserror::Error;

use crate::error::{RegistrationError, ValidationErrors};

pub type RestResult<T> = Result<T, RestError>;

#[derive(Debug, Error)]
pub enum RestError {
    #[error("Invalid data.")]
    Validation(ValidationErrors),

    #[error("Invalid data.")]
    BadPayload,

    #[error("This email is already registered for this event.")]
    Conflict,

    #[error("Failed to save registration.")]
    SaveFailed,

    #[error("Failed to load registrations.")]
    LoadFailed,
}

impl RestError {
    /// Maps errors from read-only operations, where a store failure is a load
    /// failure rather than a failed save
    pub fn from_lookup(e: RegistrationError) -> Self {
        match e {
            RegistrationError::Persistence(e) => {
                tracing::error!("Failed to load registrations: {:?}", e);
                Self::LoadFailed
            }
            e => e.into(),
        }
    }
}

impl From<RegistrationError> for RestError {
    fn from(e: RegistrationError) -> Self {
        match e {
            RegistrationError::Validation(errors) => Self::Validation(errors),
            RegistrationError::Duplicate => Self::Conflict,
            RegistrationError::Persistence(e) => {
                tracing::error!("Failed to save registration: {:?}", e);
                Self::SaveFailed
            }
        }
    }
}

/// JSON body sent with every error response
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<ValidationErrors>,
}

impl ResponseError for RestError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadPayload => StatusCode::BAD_REQUEST,
            Self::Conflict => StatusCode::CONFLICT,
            Self::SaveFailed | Self::LoadFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let errors = match self {
            Self::Validation(errors) => Some(errors.clone()),
            Self::BadPayload => Some(ValidationErrors::new()),
            Self::Conflict | Self::SaveFailed | Self::LoadFailed => None,
        };

        HttpResponse::build(self.status_code()).json(ErrorBody {
            success: false,
            message: self.to_string(),
            errors,
        })
    }
}
