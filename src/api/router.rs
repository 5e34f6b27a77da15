use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AppState;

/// Explicit route table; CORS and request tracing applied once here.
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        // Lineups
        .route("/lineups/date/:date", get(handlers::lineups::by_date))
        // Player usage
        .route(
            "/players/:player_id/spotlight",
            get(handlers::spotlight::spotlight),
        )
        .route(
            "/players/:player_id/performance-breakdown",
            get(handlers::performance::breakdown),
        )
        // Transactions
        .route("/transactions", get(handlers::transactions::list))
        // Player search
        .route("/player-search/search", get(handlers::player_search::search));

    // Permissive CORS: the frontend is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
