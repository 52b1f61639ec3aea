//! Handlers for the client resource.
//!
//! Replacing a client is where the ownership invariant is enforced: the
//! reconciler gets the incoming document plus a snapshot of every stored
//! client (the reverse "who embeds this horse value" lookup is a scan, since
//! ownership is by embedded value, not by reference).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use paddock_core::client::{reconcile_ownership, Client, CreateClient};
use paddock_core::error::CoreError;
use paddock_core::types::{new_id, Id};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /clients/
pub async fn list_clients(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let clients = state.store.clients.find_all().await?;
    Ok(Json(clients))
}

/// POST /clients/
pub async fn add_new_client(
    State(state): State<AppState>,
    Json(input): Json<CreateClient>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::from_validation)?;

    let client = Client {
        id: new_id(),
        name: input.name,
        owns_horse: input.owns_horse,
    };
    state.store.clients.save(&client).await?;

    tracing::info!(id = %client.id, name = %client.name, "Client created");
    Ok((StatusCode::CREATED, Json(client)))
}

/// PUT /clients/ — full replace keyed by the embedded id.
///
/// Runs the ownership reconciler before persisting; 200 when the id existed
/// before, 201 when the update created it.
pub async fn update_client(
    State(state): State<AppState>,
    Json(updated): Json<Client>,
) -> AppResult<impl IntoResponse> {
    updated.validate().map_err(AppError::from_validation)?;

    let existed = state.store.clients.exists_by_id(&updated.id).await?;
    let snapshot = state.store.clients.find_all().await?;
    reconcile_ownership(&updated, &snapshot)?;

    state.store.clients.save(&updated).await?;

    tracing::info!(id = %updated.id, existed, "Client updated");
    let status = if existed {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    Ok((status, Json(updated)))
}

/// DELETE /clients/{id}
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<StatusCode> {
    if !state.store.clients.exists_by_id(&id).await? {
        return Err(CoreError::NotFound {
            entity: "Client",
            id,
        }
        .into());
    }
    state.store.clients.delete_by_id(&id).await?;

    tracing::info!(%id, "Client deleted");
    Ok(StatusCode::NO_CONTENT)
}
