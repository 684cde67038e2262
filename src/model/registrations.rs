use chrono::{DateTime, SubsecRound, Utc};

use serde::{Deserialize, Serialize};

use uuid::Uuid;

use crate::domain::{EmailAddress, EventId, PersonName};
use crate::error::ValidationErrors;

pub const REGISTERED_MESSAGE: &str = "You are registered successfully!";

/// Unvalidated booking request, as submitted by the booking form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub event_id: String,
}

impl RegistrationRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        event_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            event_id: event_id.into(),
        }
    }
}

/// Validated booking request
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub name: PersonName,
    pub email: EmailAddress,
    pub event_id: EventId,
}

impl TryFrom<RegistrationRequest> for NewRegistration {
    type Error = ValidationErrors;

    /// Parse every field, collecting all failures rather than stopping at the first
    fn try_from(request: RegistrationRequest) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::new();

        let name = errors.check("name", request.name.parse::<PersonName>());
        let email = errors.check("email", request.email.parse::<EmailAddress>());
        let event_id = errors.check("eventId", request.event_id.parse::<EventId>());

        match (name, email, event_id) {
            (Some(name), Some(email), Some(event_id)) => Ok(Self {
                name,
                email,
                event_id,
            }),
            _ => Err(errors),
        }
    }
}

/// Stored registration record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// ID of the registration
    pub id: Uuid,
    /// User supplied data, kept as stored so older records still load
    pub name: String,
    pub email: String,
    pub event_id: String,
    /// Creation timestamp, millisecond precision
    pub registration_date: DateTime<Utc>,
}

impl Registration {
    /// Whether this record already books `email` onto `event_id`.
    /// Emails compare case-insensitively.
    pub fn books(&self, email: &EmailAddress, event_id: &EventId) -> bool {
        self.event_id == event_id.as_ref()
            && self.email.to_lowercase() == email.as_ref().to_lowercase()
    }
}

impl From<NewRegistration> for Registration {
    fn from(new_registration: NewRegistration) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new_registration.name.to_string(),
            email: new_registration.email.to_string(),
            event_id: new_registration.event_id.to_string(),
            registration_date: Utc::now().trunc_subsecs(3),
        }
    }
}

/// Successful registration result
#[derive(Debug, Serialize)]
pub struct RegistrationConfirmation {
    pub success: bool,
    pub message: String,
    pub registration: Registration,
}

impl From<Registration> for RegistrationConfirmation {
    fn from(registration: Registration) -> Self {
        Self {
            success: true,
            message: REGISTERED_MESSAGE.into(),
            registration,
        }
    }
}
