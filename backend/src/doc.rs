//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the badge validation endpoint, the session listing, and the
//!   health probes
//! - **Schemas**: the request/response payloads and the error envelope
//!
//! The generated specification is served by Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::badges::{ValidateParticipantRequest, ValidateParticipantResponse};
use crate::inbound::http::error::ApiError;
use crate::inbound::http::sessions::SessionListingEntry;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fellowship badge backend API",
        description = "HTTP interface for badge validation, session listings, and health probes.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::badges::validate_participant,
        crate::inbound::http::sessions::list_sessions,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ValidateParticipantRequest,
        ValidateParticipantResponse,
        SessionListingEntry,
        ApiError
    )),
    tags(
        (name = "badges", description = "Badge validation for participants"),
        (name = "sessions", description = "Read-only session catalog listings"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
