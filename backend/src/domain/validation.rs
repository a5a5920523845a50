//! Badge validation service.
//!
//! The one rule this service owns, applied strictly in order:
//! structural validation, then session existence, then allowlist membership.
//! The ordering lets a caller tell a malformed submission from an unknown
//! session from a legitimate-but-unregistered attempt. Validation is pure:
//! no attempt is recorded on any path.

use std::str::FromStr;
use std::sync::Arc;

use email_address::EmailAddress;
use serde_json::json;

use super::error::{
    Error, INVALID_REQUEST_MESSAGE, NOT_REGISTERED_MESSAGE, UNKNOWN_SESSION_MESSAGE,
};
use super::ports::SessionCatalog;
use super::session::{SessionId, SessionTitle};

/// Raw badge submission as received from the transport.
///
/// Deliberately unvalidated; [`ValidationService::validate`] owns every check
/// so the rule lives in exactly one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeSubmission {
    /// Participant name as typed into the form.
    pub name: String,
    /// Participant email as typed into the form.
    pub email: String,
    /// Selected session id.
    pub session_id: SessionId,
}

/// Successful validation outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeAuthorisation {
    session_id: SessionId,
    session_title: SessionTitle,
}

impl BadgeAuthorisation {
    /// Pair a session id with its catalog title.
    #[must_use]
    pub const fn new(session_id: SessionId, session_title: SessionTitle) -> Self {
        Self {
            session_id,
            session_title,
        }
    }

    /// The authorised session id.
    #[must_use]
    pub const fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Catalog title to display on the badge.
    pub fn session_title(&self) -> &SessionTitle {
        &self.session_title
    }
}

/// Authorisation rule over a read-only session catalog.
pub struct ValidationService {
    catalog: Arc<dyn SessionCatalog>,
}

impl ValidationService {
    /// Build the service over a shared catalog.
    pub fn new(catalog: Arc<dyn SessionCatalog>) -> Self {
        Self { catalog }
    }

    /// Validate a badge submission.
    ///
    /// Checks run strictly in order:
    /// 1. structure: non-empty trimmed name and a syntactically valid email;
    ///    violations answer [`INVALID_REQUEST_MESSAGE`];
    /// 2. existence: the session id must resolve in the catalog; misses
    ///    answer [`UNKNOWN_SESSION_MESSAGE`], whatever the id;
    /// 3. membership: the email, compared case-insensitively, must be on the
    ///    session's allowlist; absences answer [`NOT_REGISTERED_MESSAGE`].
    ///
    /// The call is idempotent and side-effect free.
    pub fn validate(&self, submission: &BadgeSubmission) -> Result<BadgeAuthorisation, Error> {
        if submission.name.trim().is_empty() {
            return Err(structural_error("name", "empty_name"));
        }
        let email = submission.email.trim();
        if EmailAddress::from_str(email).is_err() {
            return Err(structural_error("email", "invalid_email"));
        }

        let session = self
            .catalog
            .lookup(submission.session_id)
            .ok_or_else(|| Error::unknown_session(UNKNOWN_SESSION_MESSAGE))?;

        if !session.authorises(email) {
            return Err(Error::forbidden(NOT_REGISTERED_MESSAGE));
        }

        Ok(BadgeAuthorisation::new(
            session.id(),
            session.title().clone(),
        ))
    }
}

fn structural_error(field: &str, code: &str) -> Error {
    Error::invalid_request(INVALID_REQUEST_MESSAGE).with_details(json!({
        "field": field,
        "code": code,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::StaticCatalog;
    use crate::domain::error::ErrorCode;
    use rstest::{fixture, rstest};

    #[fixture]
    fn service() -> ValidationService {
        ValidationService::new(Arc::new(StaticCatalog::builtin()))
    }

    fn submission(name: &str, email: &str, session_id: u32) -> BadgeSubmission {
        BadgeSubmission {
            name: name.to_owned(),
            email: email.to_owned(),
            session_id: SessionId::new(session_id),
        }
    }

    #[rstest]
    fn registered_email_is_authorised_with_the_catalog_title(service: ValidationService) {
        let outcome = service
            .validate(&submission("Jane Doe", "participant1@keploy.io", 1))
            .expect("authorised");
        assert_eq!(outcome.session_id(), SessionId::new(1));
        assert_eq!(outcome.session_title().as_str(), "API Testing Basics");
    }

    #[rstest]
    fn unregistered_email_is_forbidden(service: ValidationService) {
        let err = service
            .validate(&submission("Jane Doe", "nobody@nowhere.com", 1))
            .expect_err("not registered");
        assert_eq!(err.code(), ErrorCode::Forbidden);
        assert_eq!(err.message(), NOT_REGISTERED_MESSAGE);
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(99)]
    fn ids_outside_the_catalog_are_unknown_sessions(
        service: ValidationService,
        #[case] session_id: u32,
    ) {
        let err = service
            .validate(&submission("Jane Doe", "participant1@keploy.io", session_id))
            .expect_err("unknown session");
        assert_eq!(err.code(), ErrorCode::UnknownSession);
        assert_eq!(err.message(), UNKNOWN_SESSION_MESSAGE);
    }

    #[rstest]
    #[case("", "participant1@keploy.io", "name", "empty_name")]
    #[case("   ", "participant1@keploy.io", "name", "empty_name")]
    #[case("Jane Doe", "not-an-email", "email", "invalid_email")]
    #[case("Jane Doe", "jane@", "email", "invalid_email")]
    fn malformed_submissions_are_invalid_requests(
        service: ValidationService,
        #[case] name: &str,
        #[case] email: &str,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let err = service
            .validate(&submission(name, email, 1))
            .expect_err("structurally invalid");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), INVALID_REQUEST_MESSAGE);
        let details = err.details().expect("field details");
        assert_eq!(details.get("field"), Some(&serde_json::json!(field)));
        assert_eq!(details.get("code"), Some(&serde_json::json!(code)));
    }

    // Structure precedes existence: a bad email with an out-of-catalog id
    // still answers "Invalid request data".
    #[rstest]
    fn structural_checks_run_before_the_catalog_lookup(service: ValidationService) {
        let err = service
            .validate(&submission("Jane Doe", "not-an-email", 99))
            .expect_err("structurally invalid");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    // Existence precedes membership: an unregistered email with an unknown
    // id answers "Invalid session ID", never the authorisation message.
    #[rstest]
    fn existence_checks_run_before_membership(service: ValidationService) {
        let err = service
            .validate(&submission("Jane Doe", "nobody@nowhere.com", 99))
            .expect_err("unknown session");
        assert_eq!(err.code(), ErrorCode::UnknownSession);
    }

    #[rstest]
    #[case("PARTICIPANT1@KEPLOY.IO")]
    #[case("Participant1@Keploy.io")]
    #[case("  participant1@keploy.io  ")]
    fn membership_ignores_case_and_padding(service: ValidationService, #[case] email: &str) {
        let outcome = service.validate(&submission("Jane Doe", email, 1));
        assert!(outcome.is_ok());
    }

    #[rstest]
    fn validation_is_idempotent(service: ValidationService) {
        let request = submission("Jane Doe", "participant5@keploy.io", 5);
        let first = service.validate(&request);
        let second = service.validate(&request);
        assert_eq!(first, second);
    }
}
