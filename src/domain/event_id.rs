use std::fmt;
use std::str::FromStr;

const MAX_LEN: usize = 128;

pub const EVENT_ID_REQUIRED: &str = "Event id is required.";

/// Identifier of a catalog event.
///
/// Only the shape is checked here; whether the event exists is up to the caller.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct EventId(String);

impl FromStr for EventId {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(EVENT_ID_REQUIRED.into());
        }
        if value.chars().count() > MAX_LEN {
            return Err("Event id too long".into());
        }
        if value.chars().any(char::is_control) {
            return Err("Event id contains invalid characters".into());
        }
        Ok(Self(value.to_string()))
    }
}

impl AsRef<str> for EventId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
