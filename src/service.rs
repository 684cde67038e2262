mod registrations;

pub use registrations::{register, registrations_for_event};
