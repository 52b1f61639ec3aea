pub mod clients;
pub mod health;
pub mod horses;
pub mod stock;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /horses/                 list (GET), create (POST), replace (PUT)
/// /horses/{id}             delete
///
/// /clients/                list (GET), create (POST), replace (PUT)
/// /clients/{id}            delete
///
/// /stock/                  list (GET), create (POST), replace (PUT)
/// /stock/{id}              get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(horses::router())
        .merge(clients::router())
        .merge(stock::router())
}
