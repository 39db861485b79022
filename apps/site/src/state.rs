use std::sync::Arc;

use crate::config::Config;
use crate::loader::ResumeSource;
use crate::render::IconScanner;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Where each page render fetches its data document from.
    pub source: Arc<dyn ResumeSource>,
    /// Optional post-render icon hook. `None` when ICONIFY_SCAN is off.
    pub icon_scanner: Option<Arc<dyn IconScanner>>,
}
