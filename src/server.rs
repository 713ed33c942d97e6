//! HTTP server and routes.

mod handlers;
mod state;

pub use state::AppState;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let book_routes = Router::new()
        .route("/", get(handlers::list_books))
        .route("/{id}", get(handlers::book_detail))
        .route("/{id}/chapters/{number}", get(handlers::chapter_content))
        .route("/{id}/search", get(handlers::book_search));

    Router::new()
        .route("/", get(handlers::index))
        .nest("/api/books", book_routes)
        .route("/api/stats", get(handlers::api_stats))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
