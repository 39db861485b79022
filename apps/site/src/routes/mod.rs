pub mod health;
pub mod page;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.static_dir);
    Router::new()
        .route("/", get(page::handle_page))
        // The skeleton lives in the asset directory; never serve it unpopulated.
        .route("/index.html", get(page::handle_page))
        .route("/health", get(health::health_handler))
        // Assets and the data document itself
        .fallback_service(assets)
        .with_state(state)
}
