//! Badge data and export naming.
//!
//! The badge itself is rendered by the host UI; the domain only fixes what a
//! badge carries (name, session title, completion label, issue date) and how
//! the exported PNG must be named and sized, so every renderer produces the
//! same artifact.

use chrono::NaiveDate;

use super::session::SessionTitle;
use super::validation::BadgeAuthorisation;

/// Fixed label rendered under the participant name.
pub const COMPLETION_LABEL: &str = "Session Completed";

/// Stable element identifier hosts give the badge view so exporters can
/// locate it for snapshotting.
pub const BADGE_ELEMENT_ID: &str = "badge-display";

/// Edge length in pixels of the square PNG export target.
pub const BADGE_EDGE_PX: u32 = 280;

/// Default file-name prefix for exported badges.
pub const DEFAULT_BADGE_PREFIX: &str = "Keploy";

/// Data shown on a completion badge.
///
/// Built only from a successful [`BadgeAuthorisation`]; there is no way to
/// assemble badge data for an unauthorised submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeData {
    name: String,
    session_title: SessionTitle,
    issued_on: NaiveDate,
}

impl BadgeData {
    /// Assemble badge data from an authorisation and the caller's clock.
    ///
    /// `name` is the participant name as submitted; surrounding whitespace is
    /// trimmed so the rendered badge never shows stray padding.
    pub fn issue(name: &str, authorisation: &BadgeAuthorisation, issued_on: NaiveDate) -> Self {
        Self {
            name: name.trim().to_owned(),
            session_title: authorisation.session_title().clone(),
            issued_on,
        }
    }

    /// Participant name as rendered on the badge.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Title of the completed session.
    pub fn session_title(&self) -> &SessionTitle {
        &self.session_title
    }

    /// Calendar date the badge was issued.
    #[must_use]
    pub const fn issued_on(&self) -> NaiveDate {
        self.issued_on
    }

    /// Issue date rendered the way the badge displays it, `M/D/YYYY`.
    pub fn display_date(&self) -> String {
        self.issued_on.format("%-m/%-d/%Y").to_string()
    }

    /// Deterministic export file name, `<Prefix>_<Title>_Badge.png`.
    ///
    /// Runs of non-alphanumeric characters in the session title collapse to a
    /// single underscore, so "Test Replay & Analysis" exports as
    /// `Keploy_Test_Replay_Analysis_Badge.png`.
    pub fn file_name(&self, prefix: &str) -> String {
        format!(
            "{prefix}_{}_Badge.png",
            underscore_slug(self.session_title.as_str())
        )
    }
}

/// Collapse every run of non-alphanumeric characters to a single underscore.
///
/// Leading and trailing runs produce no underscore at all; the result never
/// starts or ends with one.
fn underscore_slug(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_gap = false;
    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_gap && !slug.is_empty() {
                slug.push('_');
            }
            pending_gap = false;
            slug.push(ch);
        } else {
            pending_gap = true;
        }
    }
    slug
}

/// Descriptor of an exported badge artifact.
///
/// Carries the deterministic file name and pixel dimensions; the raster bytes
/// stay with the renderer that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeArtifact {
    /// Download file name.
    pub file_name: String,
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
}
