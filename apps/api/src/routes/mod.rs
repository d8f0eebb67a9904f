pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::auth::require_api_key;
use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Only the generation endpoints sit behind the API-key gate; /health
    // stays open for monitoring.
    let generation = Router::new()
        .route("/optimize", post(handlers::handle_optimize))
        .route(
            "/generate-questions",
            post(handlers::handle_generate_questions),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    Router::new()
        .route("/health", get(health::health_handler))
        .merge(generation)
        .with_state(state)
}
