//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain's ports and service, and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::SessionCatalog;
use crate::domain::ValidationService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read-only session directory backing the listing endpoint.
    pub catalog: Arc<dyn SessionCatalog>,
    /// The badge authorisation rule.
    pub validator: Arc<ValidationService>,
}

impl HttpState {
    /// Construct state over a shared catalog.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::StaticCatalog;
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(StaticCatalog::builtin()));
    /// let _catalog = state.catalog.clone();
    /// ```
    pub fn new(catalog: Arc<dyn SessionCatalog>) -> Self {
        let validator = Arc::new(ValidationService::new(catalog.clone()));
        Self { catalog, validator }
    }
}
