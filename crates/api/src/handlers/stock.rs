//! Handlers for the stock resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use paddock_core::error::CoreError;
use paddock_core::stock::{CreateStockItem, StockItem};
use paddock_core::types::{new_id, Id};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /stock/
pub async fn list_stock_items(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = state.store.stock.find_all().await?;
    Ok(Json(items))
}

/// GET /stock/{id}
pub async fn get_stock_item(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<impl IntoResponse> {
    let item = state
        .store
        .stock
        .find_by_id(&id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "StockItem",
            id,
        })?;
    Ok(Json(item))
}

/// POST /stock/ — stock-item names are unique across the collection.
pub async fn add_new_stock_item(
    State(state): State<AppState>,
    Json(input): Json<CreateStockItem>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::from_validation)?;

    let name_taken = state
        .store
        .stock
        .find_all()
        .await?
        .iter()
        .any(|item| item.name == input.name);
    if name_taken {
        return Err(CoreError::Conflict("The given name is already taken".into()).into());
    }

    let item = StockItem {
        id: new_id(),
        name: input.name,
        item_type: input.item_type,
        amount_in_stock: input.amount_in_stock,
        price_per_kilo: input.price_per_kilo,
    };
    state.store.stock.save(&item).await?;

    tracing::info!(id = %item.id, name = %item.name, "Stock item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /stock/ — full replace keyed by the embedded id.
///
/// 200 when the id existed before, 201 when the update created it.
pub async fn update_stock_item(
    State(state): State<AppState>,
    Json(updated): Json<StockItem>,
) -> AppResult<impl IntoResponse> {
    updated.validate().map_err(AppError::from_validation)?;

    let existed = state.store.stock.exists_by_id(&updated.id).await?;
    state.store.stock.save(&updated).await?;

    tracing::info!(id = %updated.id, existed, "Stock item updated");
    let status = if existed {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    Ok((status, Json(updated)))
}

/// DELETE /stock/{id}
pub async fn delete_stock_item(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<StatusCode> {
    if !state.store.stock.exists_by_id(&id).await? {
        return Err(CoreError::NotFound {
            entity: "StockItem",
            id,
        }
        .into());
    }
    state.store.stock.delete_by_id(&id).await?;

    tracing::info!(%id, "Stock item deleted");
    Ok(StatusCode::NO_CONTENT)
}
