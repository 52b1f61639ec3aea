//! Route definitions for the client resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::clients;
use crate::state::AppState;

/// Client routes — mounted at `/clients`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/clients/",
            get(clients::list_clients)
                .post(clients::add_new_client)
                .put(clients::update_client),
        )
        .route("/clients/{id}", delete(clients::delete_client))
}
