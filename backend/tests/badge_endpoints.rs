//! In-process integration tests for the badge transport contract.
//!
//! Drives the assembled HTTP surface the way a client form would: submit the
//! validation request, read the verbatim error messages, list the sessions.

use std::sync::Arc;

use actix_web::{test, web, App};
use rstest::rstest;
use serde_json::{json, Value};

use backend::domain::StaticCatalog;
use backend::inbound::http::badges::validate_participant;
use backend::inbound::http::error::json_payload_error;
use backend::inbound::http::health::{live, ready, HealthState};
use backend::inbound::http::sessions::list_sessions;
use backend::inbound::http::state::HttpState;
use backend::Trace;

fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let http_state = web::Data::new(HttpState::new(Arc::new(StaticCatalog::builtin())));
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();

    App::new()
        .app_data(http_state)
        .app_data(health_state)
        .wrap(Trace)
        .service(
            web::scope("/api")
                .app_data(web::JsonConfig::default().error_handler(json_payload_error))
                .service(validate_participant)
                .service(list_sessions),
        )
        .service(ready)
        .service(live)
}

async fn post_validation(body: Value) -> (actix_web::http::StatusCode, Value) {
    let app = test::init_service(test_app()).await;
    let request = test::TestRequest::post()
        .uri("/api/validate-participant")
        .set_json(&body)
        .to_request();
    let response = test::call_service(&app, request).await;
    let status = response.status();
    let value: Value = test::read_body_json(response).await;
    (status, value)
}

#[actix_web::test]
async fn registered_participant_is_authorised() {
    let (status, body) = post_validation(json!({
        "name": "Jane Doe",
        "email": "participant1@keploy.io",
        "sessionId": 1
    }))
    .await;

    assert_eq!(status, actix_web::http::StatusCode::OK);
    assert_eq!(
        body,
        json!({ "authorized": true, "sessionTitle": "API Testing Basics" })
    );
}

#[actix_web::test]
async fn unregistered_email_answers_the_authorisation_message() {
    let (status, body) = post_validation(json!({
        "name": "Jane Doe",
        "email": "nobody@nowhere.com",
        "sessionId": 1
    }))
    .await;

    assert_eq!(status, actix_web::http::StatusCode::FORBIDDEN);
    assert_eq!(body.get("authorized"), Some(&json!(false)));
    assert_eq!(
        body.get("error"),
        Some(&json!(
            "You are not authorized to generate the badge. Please use your registered email."
        ))
    );
}

#[actix_web::test]
async fn out_of_catalog_session_answers_invalid_session_id() {
    let (status, body) = post_validation(json!({
        "name": "Jane Doe",
        "email": "participant1@keploy.io",
        "sessionId": 99
    }))
    .await;

    assert_eq!(status, actix_web::http::StatusCode::BAD_REQUEST);
    assert_eq!(body.get("error"), Some(&json!("Invalid session ID")));
}

#[rstest]
#[case(json!({ "name": "", "email": "participant1@keploy.io", "sessionId": 1 }))]
#[case(json!({ "name": "   ", "email": "participant1@keploy.io", "sessionId": 1 }))]
#[case(json!({ "name": "Jane Doe", "email": "not-an-email", "sessionId": 1 }))]
#[actix_web::test]
async fn malformed_submissions_answer_invalid_request_data(#[case] body: Value) {
    let (status, payload) = post_validation(body).await;

    assert_eq!(status, actix_web::http::StatusCode::BAD_REQUEST);
    assert_eq!(payload.get("authorized"), Some(&json!(false)));
    assert_eq!(payload.get("error"), Some(&json!("Invalid request data")));
}

// A body that does not even deserialise lands in the same contract envelope
// via the JsonConfig error handler.
#[rstest]
#[case(json!({ "name": "Jane Doe", "email": "participant1@keploy.io", "sessionId": "one" }))]
#[case(json!({ "name": "Jane Doe", "email": "participant1@keploy.io" }))]
#[actix_web::test]
async fn undeserialisable_bodies_answer_invalid_request_data(#[case] body: Value) {
    let (status, payload) = post_validation(body).await;

    assert_eq!(status, actix_web::http::StatusCode::BAD_REQUEST);
    assert_eq!(payload.get("error"), Some(&json!("Invalid request data")));
}

#[actix_web::test]
async fn validation_errors_carry_the_trace_header() {
    let app = test::init_service(test_app()).await;
    let request = test::TestRequest::post()
        .uri("/api/validate-participant")
        .set_json(&json!({
            "name": "Jane Doe",
            "email": "nobody@nowhere.com",
            "sessionId": 1
        }))
        .to_request();

    let response = test::call_service(&app, request).await;
    let header = response
        .headers()
        .get("trace-id")
        .expect("trace id header")
        .to_str()
        .expect("header is ascii")
        .to_owned();
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body.get("traceId"), Some(&json!(header)));
}

#[actix_web::test]
async fn session_listing_is_complete_and_ordered() {
    let app = test::init_service(test_app()).await;
    let request = test::TestRequest::get().uri("/api/sessions").to_request();
    let response = test::call_service(&app, request).await;
    assert!(response.status().is_success());

    let body: Value = test::read_body_json(response).await;
    let entries = body.as_array().expect("listing is an array");
    assert_eq!(entries.len(), 6);
    let ids: Vec<u64> = entries
        .iter()
        .filter_map(|entry| entry.get("id").and_then(Value::as_u64))
        .collect();
    assert_eq!(ids, [1, 2, 3, 4, 5, 6]);
    assert_eq!(
        entries.first().and_then(|entry| entry.get("title")),
        Some(&json!("API Testing Basics"))
    );
    // Listings never expose the allowlist.
    assert!(entries
        .iter()
        .all(|entry| entry.get("allowedEmails").is_none()));
}

#[actix_web::test]
async fn health_probes_answer_without_store_caching() {
    let app = test::init_service(test_app()).await;
    for path in ["/health/ready", "/health/live"] {
        let response =
            test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
        assert!(response.status().is_success(), "{path} should be healthy");
        assert_eq!(
            response
                .headers()
                .get(actix_web::http::header::CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
            Some("no-store"),
            "{path} should disable caching"
        );
    }
}
