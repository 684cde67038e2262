use crate::domain::EventId;
use crate::error::{RegistrationError, Result, ValidationErrors};
use crate::model::{NewRegistration, Registration, RegistrationConfirmation, RegistrationRequest};
use crate::repo::RegistrationStore;

/// Book `request.email` onto `request.event_id`.
///
/// Validation and the duplicate check never touch the file, so the store is
/// unchanged whenever they fail. The load, duplicate check and save all run
/// under the store's writer lock, which the save releases only once the file
/// is in place.
#[tracing::instrument(
    name = "Register for an event",
    skip(store, request),
    fields(event_id = %request.event_id)
)]
pub async fn register(
    store: &RegistrationStore,
    request: RegistrationRequest,
) -> Result<RegistrationConfirmation> {
    let new_registration: NewRegistration =
        request.try_into().map_err(RegistrationError::Validation)?;

    let writer = store.lock().await;

    let mut registrations = store.load().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to load registrations");
        e
    })?;

    if registrations
        .iter()
        .any(|r| r.books(&new_registration.email, &new_registration.event_id))
    {
        tracing::info!("Email already registered for event");
        return Err(RegistrationError::Duplicate);
    }

    let registration = Registration::from(new_registration);
    registrations.push(registration.clone());

    store.save(writer, &registrations).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to save registrations");
        e
    })?;

    tracing::info!(id = %registration.id, "Registration stored");

    Ok(registration.into())
}

/// All records stored for `event_id`, in store order
#[tracing::instrument(name = "List registrations for an event", skip(store))]
pub async fn registrations_for_event(
    store: &RegistrationStore,
    event_id: &str,
) -> Result<Vec<Registration>> {
    let event_id: EventId = event_id
        .parse()
        .map_err(|message| RegistrationError::Validation(ValidationErrors::single("eventId", message)))?;

    let registrations = store.load().await?;

    Ok(registrations
        .into_iter()
        .filter(|r| r.event_id == event_id.as_ref())
        .collect())
}
