//! Training session model.
//!
//! A `Session` is one unit of the training program: a small integer id, a
//! human-readable title, and the allowlist of participant emails permitted to
//! generate its completion badge. Sessions are defined once at process start
//! and never mutate afterwards.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors returned by the session constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionValidationError {
    /// Title is empty after trimming whitespace.
    #[error("session title must not be empty")]
    EmptyTitle,
    /// Title carries leading or trailing whitespace.
    #[error("session title must not contain surrounding whitespace")]
    UntrimmedTitle,
    /// An allowlist entry is not a syntactically valid email address.
    #[error("allowlist entry {value:?} is not a valid email address")]
    InvalidAllowlistEntry {
        /// The rejected entry as it appeared in the source data.
        value: String,
    },
}

/// Session identifier: a small positive integer.
///
/// The id space is open-ended in type; whether an id resolves is decided by
/// the catalog, not here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SessionId(u32);

impl SessionId {
    /// Wrap a raw id.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Return the raw numeric id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SessionId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// Non-empty, trimmed session title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionTitle(String);

impl SessionTitle {
    /// Validate and construct a [`SessionTitle`].
    pub fn new(title: impl Into<String>) -> Result<Self, SessionValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(SessionValidationError::EmptyTitle);
        }
        if title.trim() != title {
            return Err(SessionValidationError::UntrimmedTitle);
        }
        Ok(Self(title))
    }

    /// Borrow the title as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SessionTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for SessionTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<SessionTitle> for String {
    fn from(value: SessionTitle) -> Self {
        value.0
    }
}

impl TryFrom<String> for SessionTitle {
    type Error = SessionValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// One training session with its badge allowlist.
///
/// Allowlist entries are normalised to ASCII lowercase at construction so
/// membership checks are case-insensitive. An empty allowlist is legal; it
/// simply authorises nobody.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    title: SessionTitle,
    description: String,
    allowed_emails: HashSet<String>,
}

impl Session {
    /// Build a session, validating every allowlist entry.
    pub fn new(
        id: SessionId,
        title: SessionTitle,
        description: impl Into<String>,
        allowed_emails: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, SessionValidationError> {
        let allowed_emails = allowed_emails
            .into_iter()
            .map(|entry| {
                let raw = entry.as_ref().trim();
                EmailAddress::from_str(raw)
                    .map(|_| raw.to_ascii_lowercase())
                    .map_err(|_| SessionValidationError::InvalidAllowlistEntry {
                        value: entry.as_ref().to_owned(),
                    })
            })
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(Self {
            id,
            title,
            description: description.into(),
            allowed_emails,
        })
    }

    /// Session identifier.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Session title shown on the badge.
    pub fn title(&self) -> &SessionTitle {
        &self.title
    }

    /// Short description used by listing chrome.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Return `true` when `email` is on the allowlist.
    ///
    /// The comparison is case-insensitive; callers may pass the submission
    /// email as received.
    pub fn authorises(&self, email: &str) -> bool {
        self.allowed_emails
            .contains(&email.trim().to_ascii_lowercase())
    }

    /// Number of registered participants.
    pub fn allowlist_len(&self) -> usize {
        self.allowed_emails.len()
    }

    /// Produce the read model used by the session listing.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            title: self.title.as_str().to_owned(),
            description: self.description.clone(),
        }
    }
}

/// Read model for the session listing: id, title, and description only.
///
/// Deliberately omits the allowlist; listings populate UI chrome and carry no
/// gating information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    /// Session identifier.
    pub id: SessionId,
    /// Session title.
    pub title: String,
    /// Short description.
    pub description: String,
}
