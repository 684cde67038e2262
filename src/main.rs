use std::net::TcpListener;

use anyhow::Context;

use eventbook::app;
use eventbook::settings::Settings;
use eventbook::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = telemetry::create_subscriber("info".into(), std::io::stdout);
    telemetry::set_subscriber(subscriber)?;

    let settings = Settings::load().context("Failed to load settings")?;

    let store = settings.store.registration_store();
    tracing::info!("Using registration store at {}", settings.store.path().display());

    let listener = TcpListener::bind(settings.app.addr())
        .with_context(|| format!("Failed to bind {:?}", settings.app.addr()))?;

    app::run(listener, store)?.await.context("Failed to run app")
}
