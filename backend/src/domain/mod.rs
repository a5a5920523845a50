//! Domain primitives and the badge authorisation core.
//!
//! Purpose: Define the transport-agnostic rule coupling (name, email,
//! session) to a badge authorisation, and the read-only session catalog it
//! consults. Keep types immutable and document invariants and serialisation
//! contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: failure taxonomy adapters map onto transports.
//! - `Session` / `SessionId` / `SessionTitle`: the catalog's entities.
//! - `StaticCatalog`: immutable `SessionCatalog` implementation.
//! - `ValidationService`: the ordered authorisation rule.
//! - `BadgeData` / `BadgeArtifact`: what a badge shows and how it exports.

pub mod badge;
pub mod catalog;
pub mod error;
pub mod ports;
pub mod session;
pub mod validation;

pub use self::badge::{BadgeArtifact, BadgeData, BADGE_EDGE_PX, DEFAULT_BADGE_PREFIX};
pub use self::catalog::{CatalogError, StaticCatalog};
pub use self::error::{
    Error, ErrorCode, ErrorValidationError, INTERNAL_ERROR_MESSAGE, INVALID_REQUEST_MESSAGE,
    NOT_REGISTERED_MESSAGE, UNKNOWN_SESSION_MESSAGE,
};
pub use self::session::{Session, SessionId, SessionSummary, SessionTitle, SessionValidationError};
pub use self::validation::{BadgeAuthorisation, BadgeSubmission, ValidationService};
