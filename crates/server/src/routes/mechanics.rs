use axum::extract::{Path, State};

use crate::{errors::ApiError, state::ServerState};

#[utoipa::path(
    delete, path = "/api/mechanic/{mid}", tag = "mechanic",
    params(("mid" = String, Path, description = "Mechanic id")),
    responses(
        (status = 200, description = "Deleted, confirmation as text"),
        (status = 500, description = "Unknown mechanic, still servicing vehicles, or store failure")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(mid): Path<String>) -> Result<String, ApiError> {
    state.mechanics.delete(&mid).await?;
    Ok(format!("Mechanic {mid} successfully deleted"))
}
