//! HTTP inbound adapter (axum). JSON API under `/api`.

pub mod error;
pub mod state;
pub mod users;

pub use error::ErrorBody;
pub use state::AppState;
pub use users::{UserPatch, UserRead, UserWrite};

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

/// Build the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/users", post(users::create_user))
        .route(
            "/users/{user_id}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
}

/// Full application: `/api` routes, request tracing, state attached.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
