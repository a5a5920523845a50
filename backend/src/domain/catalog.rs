//! Static session catalog.
//!
//! The catalog is the single source of truth for which sessions exist and who
//! is registered for each. It is built once at startup, either from the
//! builtin program or from an injected JSON document, and shared read-only
//! with every collaborator so the allowlists cannot silently diverge.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::ports::SessionCatalog;
use super::session::{Session, SessionId, SessionSummary, SessionTitle, SessionValidationError};

/// Errors raised while assembling a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog file {path:?}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The catalog file did not parse as a catalog document.
    #[error("catalog file {path:?} is not a valid catalog document: {source}")]
    Parse {
        /// Path that failed to parse.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
    /// A session record failed domain validation.
    #[error("catalog session {id} is invalid: {source}")]
    InvalidSession {
        /// Raw id of the offending record.
        id: u32,
        /// Underlying validation failure.
        #[source]
        source: SessionValidationError,
    },
    /// Two records share the same id.
    #[error("duplicate session id {id} in catalog")]
    DuplicateId {
        /// The duplicated id.
        id: u32,
    },
}

/// Immutable, in-memory [`SessionCatalog`] implementation.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    sessions: BTreeMap<SessionId, Session>,
}

impl StaticCatalog {
    /// Build a catalog from individual sessions, rejecting duplicate ids.
    pub fn new(sessions: impl IntoIterator<Item = Session>) -> Result<Self, CatalogError> {
        let mut map = BTreeMap::new();
        for session in sessions {
            let id = session.id();
            if map.insert(id, session).is_some() {
                return Err(CatalogError::DuplicateId { id: id.get() });
            }
        }
        Ok(Self { sessions: map })
    }

    /// The builtin six-session fellowship program.
    #[must_use]
    pub fn builtin() -> Self {
        let sessions = [
            builtin_session(
                1,
                "API Testing Basics",
                &[
                    "participant1@keploy.io",
                    "student1@example.com",
                    "test@keploy.io",
                ],
            ),
            builtin_session(
                2,
                "Mock Generation",
                &["participant2@keploy.io", "student2@example.com"],
            ),
            builtin_session(
                3,
                "Test Replay & Analysis",
                &["participant3@keploy.io", "student3@example.com"],
            ),
            builtin_session(
                4,
                "CI/CD Integration",
                &["participant4@keploy.io", "student4@example.com"],
            ),
            builtin_session(
                5,
                "Advanced Testing",
                &["participant5@keploy.io", "student5@example.com"],
            ),
            builtin_session(
                6,
                "Final Project",
                &["participant6@keploy.io", "student6@example.com"],
            ),
        ];
        match Self::new(sessions) {
            Ok(catalog) => catalog,
            Err(err) => panic!("builtin catalog must satisfy validation: {err}"),
        }
    }

    /// Load a catalog from a JSON document.
    ///
    /// Expected shape:
    /// ```json
    /// {
    ///   "sessions": [
    ///     {
    ///       "id": 1,
    ///       "title": "API Testing Basics",
    ///       "description": "Session 1",
    ///       "allowedEmails": ["participant1@keploy.io"]
    ///     }
    ///   ]
    /// }
    /// ```
    /// `description` is optional and mirrors the title when omitted.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_owned(),
            source,
        })?;
        let document: CatalogDocument =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.to_owned(),
                source,
            })?;
        let sessions = document
            .sessions
            .into_iter()
            .map(SessionRecord::into_session)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(sessions)
    }

    /// Number of sessions in the catalog.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Return `true` when the catalog carries no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionCatalog for StaticCatalog {
    fn lookup(&self, id: SessionId) -> Option<&Session> {
        self.sessions.get(&id)
    }

    fn summaries(&self) -> Vec<SessionSummary> {
        self.sessions.values().map(Session::summary).collect()
    }
}

fn builtin_session(id: u32, title: &str, emails: &[&str]) -> Session {
    let title = match SessionTitle::new(title) {
        Ok(value) => value,
        Err(err) => panic!("builtin session title must satisfy validation: {err}"),
    };
    let description = title.as_str().to_owned();
    match Session::new(SessionId::new(id), title, description, emails.iter()) {
        Ok(session) => session,
        Err(err) => panic!("builtin session {id} must satisfy validation: {err}"),
    }
}

/// On-disk catalog document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CatalogDocument {
    sessions: Vec<SessionRecord>,
}

/// One session record in a catalog document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SessionRecord {
    id: u32,
    title: String,
    #[serde(default)]
    description: Option<String>,
    allowed_emails: Vec<String>,
}

impl SessionRecord {
    fn into_session(self) -> Result<Session, CatalogError> {
        let id = self.id;
        let map_err = |source| CatalogError::InvalidSession { id, source };
        let title = SessionTitle::new(self.title).map_err(map_err)?;
        let description = self
            .description
            .unwrap_or_else(|| title.as_str().to_owned());
        Session::new(SessionId::new(id), title, description, self.allowed_emails)
            .map_err(map_err)
    }
}
