//! Handlers for the horse resource.
//!
//! Create and replace both run the consumption validator: name checks first
//! (matching the original form-validation pass), then duplicate ids,
//! non-positive amounts, and stock references in one pass.

use std::collections::HashSet;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use paddock_core::error::CoreError;
use paddock_core::horse::{validate_consumption_list, CreateHorse, Horse};
use paddock_core::types::{new_id, Id};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Collect the ids of all stock items, for consumption-reference checks.
async fn stock_id_set(state: &AppState) -> AppResult<HashSet<Id>> {
    let stock = state.store.stock.find_all().await?;
    Ok(stock.into_iter().map(|item| item.id).collect())
}

/// GET /horses/
pub async fn list_horses(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let horses = state.store.horses.find_all().await?;
    Ok(Json(horses))
}

/// POST /horses/
pub async fn add_new_horse(
    State(state): State<AppState>,
    Json(input): Json<CreateHorse>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::from_validation)?;
    let stock_ids = stock_id_set(&state).await?;
    validate_consumption_list(&input.consumption_list, &stock_ids)?;

    let horse = Horse {
        id: new_id(),
        name: input.name,
        owner: input.owner,
        consumption_list: input.consumption_list,
    };
    state.store.horses.save(&horse).await?;

    tracing::info!(id = %horse.id, name = %horse.name, "Horse created");
    Ok((StatusCode::CREATED, Json(horse)))
}

/// PUT /horses/ — full replace keyed by the embedded id.
///
/// 200 when the id existed before, 201 when the update created it.
pub async fn update_horse(
    State(state): State<AppState>,
    Json(updated): Json<Horse>,
) -> AppResult<impl IntoResponse> {
    updated.validate().map_err(AppError::from_validation)?;
    let stock_ids = stock_id_set(&state).await?;
    validate_consumption_list(&updated.consumption_list, &stock_ids)?;

    let existed = state.store.horses.exists_by_id(&updated.id).await?;
    state.store.horses.save(&updated).await?;

    tracing::info!(id = %updated.id, existed, "Horse updated");
    let status = if existed {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    Ok((status, Json(updated)))
}

/// DELETE /horses/{id}
pub async fn delete_horse(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<StatusCode> {
    if !state.store.horses.exists_by_id(&id).await? {
        return Err(CoreError::NotFound {
            entity: "Horse",
            id,
        }
        .into());
    }
    state.store.horses.delete_by_id(&id).await?;

    tracing::info!(%id, "Horse deleted");
    Ok(StatusCode::NO_CONTENT)
}
