use actix_web::dev::HttpServiceFactory;
use actix_web::{get, post, web, HttpResponse};

use crate::controller::error::{RestError, RestResult};
use crate::model::RegistrationRequest;
use crate::repo::RegistrationStore;
use crate::service;

/// Booking form submission endpoint
#[tracing::instrument(name = "Create a new registration", skip(store))]
#[post("")]
async fn create(
    store: web::Data<RegistrationStore>,
    form: web::Form<RegistrationRequest>,
) -> RestResult<HttpResponse> {
    let confirmation = service::register(store.get_ref(), form.into_inner()).await?;

    Ok(HttpResponse::Created().json(confirmation))
}

/// Registrations stored for a single event
#[tracing::instrument(name = "Fetch event registrations", skip(store))]
#[get("/{event_id}")]
async fn list(
    store: web::Data<RegistrationStore>,
    path: web::Path<(String,)>,
) -> RestResult<HttpResponse> {
    let (event_id,) = path.into_inner();

    let registrations = service::registrations_for_event(store.get_ref(), &event_id)
        .await
        .map_err(RestError::from_lookup)?;

    Ok(HttpResponse::Ok().json(registrations))
}

/// Registrations API endpoints
pub fn scope() -> impl HttpServiceFactory {
    let form_config = web::FormConfig::default()
        .error_handler(|err, _req| {
            tracing::warn!("Rejected registration payload: {}", err);
            RestError::BadPayload.into()
        });

    web::scope("/registrations")
        .app_data(form_config)
        .service(create)
        .service(list)
}
