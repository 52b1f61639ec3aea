//! Route definitions for the stock resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::stock;
use crate::state::AppState;

/// Stock routes — mounted at `/stock`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/stock/",
            get(stock::list_stock_items)
                .post(stock::add_new_stock_item)
                .put(stock::update_stock_item),
        )
        .route(
            "/stock/{id}",
            get(stock::get_stock_item).delete(stock::delete_stock_item),
        )
}
