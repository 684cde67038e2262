/// REST error responses
pub mod error;
/// Event registration endpoints
pub mod registrations;
