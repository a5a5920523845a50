//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, Settings};

use std::time::Duration;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetricsBuilder;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::inbound::http::badges::validate_participant;
use backend::inbound::http::error::json_payload_error;
use backend::inbound::http::health::{live, ready, HealthState};
use backend::inbound::http::sessions::list_sessions;
use backend::inbound::http::state::HttpState;
use backend::Trace;

/// Generous upper bound on reading a client request.
///
/// Validation itself never blocks; the timeout is defensive hygiene at the
/// transport boundary only.
const CLIENT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Build and start the HTTP server.
///
/// Readiness flips once the listener is bound, so orchestrators only route
/// traffic to a server that can answer it.
pub fn run(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = web::Data::new(HttpState::new(config.catalog.clone()));
    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe remains accessible.
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        let api = web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_payload_error))
            .service(validate_participant)
            .service(list_sessions);

        let app = App::new()
            .app_data(http_state.clone())
            .app_data(server_health_state.clone())
            .wrap(Trace)
            .service(api)
            .service(ready)
            .service(live);

        #[cfg(feature = "metrics")]
        let app = app.wrap(make_metrics());

        #[cfg(debug_assertions)]
        let app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );

        app
    })
    .client_request_timeout(CLIENT_REQUEST_TIMEOUT)
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(feature = "metrics")]
fn make_metrics() -> actix_web_prom::PrometheusMetrics {
    PrometheusMetricsBuilder::new("badges")
        .endpoint("/metrics")
        .build()
        .expect("configure Prometheus metrics")
}
