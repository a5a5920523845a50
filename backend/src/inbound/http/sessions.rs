//! Session listing endpoint.
//!
//! ```text
//! GET /api/sessions
//! ```
//!
//! Read-only chrome feed: ids, titles, and descriptions only. Allowlists
//! never leave the catalog.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::SessionSummary;
use crate::inbound::http::state::HttpState;

/// One entry in the session listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionListingEntry {
    /// Session identifier.
    #[schema(example = 1)]
    pub id: u32,
    /// Session title.
    #[schema(example = "API Testing Basics")]
    pub title: String,
    /// Short description for navigation chrome.
    #[schema(example = "API Testing Basics")]
    pub description: String,
}

impl From<SessionSummary> for SessionListingEntry {
    fn from(summary: SessionSummary) -> Self {
        Self {
            id: summary.id.get(),
            title: summary.title,
            description: summary.description,
        }
    }
}

/// List every session in the catalog, in ascending id order.
#[utoipa::path(
    get,
    path = "/api/sessions",
    responses(
        (status = 200, description = "Session listing", body = [SessionListingEntry]),
        (status = 500, description = "Internal server error")
    ),
    tags = ["sessions"],
    operation_id = "listSessions"
)]
#[get("/sessions")]
pub async fn list_sessions(state: web::Data<HttpState>) -> web::Json<Vec<SessionListingEntry>> {
    let entries = state
        .catalog
        .summaries()
        .into_iter()
        .map(SessionListingEntry::from)
        .collect();
    web::Json(entries)
}
