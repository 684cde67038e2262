mod email_address;
mod event_id;
mod person_name;

pub use email_address::{EmailAddress, INVALID_EMAIL};
pub use event_id::{EventId, EVENT_ID_REQUIRED};
pub use person_name::{PersonName, NAME_TOO_SHORT};
