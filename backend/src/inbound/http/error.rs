//! HTTP error payloads and mapping from domain errors.
//!
//! Keep the domain free of transport concerns by translating
//! [`crate::domain::Error`] into Actix responses here. The wire shape mirrors
//! the validation contract: callers always receive `authorized: false`, a
//! verbatim `error` message, and a stable `code`.

use actix_web::error::JsonPayloadError;
use actix_web::{http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, INTERNAL_ERROR_MESSAGE, INVALID_REQUEST_MESSAGE};
use crate::middleware::trace::{TraceId, TRACE_ID_HEADER};

/// Standard error envelope returned by the HTTP adapter.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Always `false`; the success payload carries `true`.
    #[schema(example = false)]
    authorized: bool,
    /// Human-readable message, displayed verbatim by the caller.
    #[schema(example = "Invalid session ID")]
    error: String,
    /// Stable machine-readable error code.
    #[schema(value_type = String, example = "unknown_session")]
    code: ErrorCode,
    /// Correlation identifier propagated into the response header.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary structured details for clients.
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl ApiError {
    /// Construct an API error from a domain failure, capturing any ambient
    /// trace identifier.
    pub fn from_domain(error: Error) -> Self {
        Self {
            authorized: false,
            code: error.code(),
            error: error.message().to_owned(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: error.details().cloned(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human readable message.
    pub fn message(&self) -> &str {
        self.error.as_str()
    }

    fn to_status_code(&self) -> StatusCode {
        match self.code {
            // Unknown sessions answer 400, not 404: the transport contract
            // treats a bad id as a bad request against a fixed catalog.
            ErrorCode::InvalidRequest | ErrorCode::UnknownSession => StatusCode::BAD_REQUEST,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ApiError {
    fn from(value: Error) -> Self {
        ApiError::from_domain(value)
    }
}

impl From<actix_web::Error> for ApiError {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to API error");
        ApiError::from_domain(Error::internal(INTERNAL_ERROR_MESSAGE))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.to_status_code()
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = &self.trace_id {
            builder.insert_header((TRACE_ID_HEADER, id.clone()));
        }
        if matches!(self.code, ErrorCode::InternalError) {
            let mut redacted = self.clone();
            redacted.error = INTERNAL_ERROR_MESSAGE.to_owned();
            redacted.details = None;
            return builder.json(redacted);
        }
        builder.json(self)
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Map JSON body rejections onto the invalid-request envelope.
///
/// Wired into `JsonConfig` so a truncated payload or a string where a number
/// belongs answers the same `"Invalid request data"` contract as a field
/// validation failure, instead of Actix's default error page.
pub fn json_payload_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::from_domain(
        Error::invalid_request(INVALID_REQUEST_MESSAGE)
            .with_details(json!({ "reason": err.to_string() })),
    )
    .into()
}
