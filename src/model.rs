mod registrations;

pub use registrations::{
    NewRegistration, Registration, RegistrationConfirmation, RegistrationRequest,
    REGISTERED_MESSAGE,
};
