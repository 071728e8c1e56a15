use crate::config::Config;
use crate::db::DocumentStore;

/// Shared application state injected into all route handlers via Axum
/// extractors. The store is the only external collaborator; everything else
/// the handlers touch is immutable placeholder data.
#[derive(Clone)]
pub struct AppState {
    pub store: DocumentStore,
    pub config: Config,
}
