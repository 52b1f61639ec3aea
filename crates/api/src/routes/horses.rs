//! Route definitions for the horse resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::horses;
use crate::state::AppState;

/// Horse routes — mounted at `/horses`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/horses/",
            get(horses::list_horses)
                .post(horses::add_new_horse)
                .put(horses::update_horse),
        )
        .route("/horses/{id}", delete(horses::delete_horse))
}
