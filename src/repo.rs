mod registrations;

pub use registrations::{RegistrationStore, WriterGuard};
