//! Badge validation endpoint.
//!
//! ```text
//! POST /api/validate-participant {"name":"Jane Doe","email":"participant1@keploy.io","sessionId":1}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{BadgeSubmission, SessionId};
use crate::inbound::http::error::ApiError;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Request body for `POST /api/validate-participant`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateParticipantRequest {
    /// Participant name as typed into the form.
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// Participant email as typed into the form.
    #[schema(example = "participant1@keploy.io")]
    pub email: String,
    /// Selected session id.
    #[schema(example = 1)]
    pub session_id: u32,
}

impl From<ValidateParticipantRequest> for BadgeSubmission {
    fn from(value: ValidateParticipantRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            session_id: SessionId::new(value.session_id),
        }
    }
}

/// Success body: the participant may generate the badge.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateParticipantResponse {
    /// Always `true`; failures answer with the error envelope instead.
    #[schema(example = true)]
    pub authorized: bool,
    /// Catalog title of the completed session, displayed on the badge.
    #[schema(example = "API Testing Basics")]
    pub session_title: String,
}

/// Validate a participant email for badge generation.
///
/// Applies the ordered rule from
/// [`ValidationService`](crate::domain::ValidationService): structure, then
/// session existence, then allowlist membership. No record of the attempt is
/// kept; resubmission is always safe.
#[utoipa::path(
    post,
    path = "/api/validate-participant",
    request_body = ValidateParticipantRequest,
    responses(
        (status = 200, description = "Participant is authorised", body = ValidateParticipantResponse),
        (status = 400, description = "Malformed request or unknown session", body = ApiError),
        (status = 403, description = "Email not registered for the session", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["badges"],
    operation_id = "validateParticipant"
)]
#[post("/validate-participant")]
pub async fn validate_participant(
    state: web::Data<HttpState>,
    payload: web::Json<ValidateParticipantRequest>,
) -> ApiResult<web::Json<ValidateParticipantResponse>> {
    let submission = BadgeSubmission::from(payload.into_inner());
    let authorisation = state.validator.validate(&submission)?;
    Ok(web::Json(ValidateParticipantResponse {
        authorized: true,
        session_title: authorisation.session_title().as_str().to_owned(),
    }))
}
