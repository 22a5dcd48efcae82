use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use service::garage::{domain::{Payload, Vehicle}, VehicleView};
use tracing::info;

use crate::{errors::ApiError, state::ServerState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MakeQuery {
    /// Exact, case-sensitive make.
    pub make: String,
}

#[utoipa::path(
    get, path = "/api/vehicle/all", tag = "vehicle",
    responses(
        (status = 200, description = "All vehicles", body = [crate::openapi::VehicleViewDoc]),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_all(State(state): State<ServerState>) -> Result<Json<Vec<VehicleView>>, ApiError> {
    let all = state.vehicles.list_all().await?;
    info!(count = all.len(), "list vehicles");
    Ok(Json(all))
}

#[utoipa::path(
    get, path = "/api/vehicle/raw", tag = "vehicle",
    responses(
        (status = 200, description = "Stored records, unprojected"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_raw(State(state): State<ServerState>) -> Result<Json<Vec<Vehicle>>, ApiError> {
    Ok(Json(state.vehicles.list_raw().await?))
}

#[utoipa::path(
    get, path = "/api/vehicle", tag = "vehicle",
    params(MakeQuery),
    responses(
        (status = 200, description = "Vehicles of this make", body = [crate::openapi::VehicleViewDoc]),
        (status = 400, description = "Missing make"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_by_make(
    State(state): State<ServerState>,
    Query(q): Query<MakeQuery>,
) -> Result<Json<Vec<VehicleView>>, ApiError> {
    Ok(Json(state.vehicles.list_by_make(&q.make).await?))
}

#[utoipa::path(
    post, path = "/api/vehicle", tag = "vehicle",
    request_body = crate::openapi::CreateVehicleDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::VehicleViewDoc),
        (status = 500, description = "Rule violation or store failure, message as text")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<Payload>,
) -> Result<Json<VehicleView>, ApiError> {
    Ok(Json(state.vehicles.create(&payload).await?))
}

#[utoipa::path(
    put, path = "/api/vehicle/{reg}", tag = "vehicle",
    params(("reg" = String, Path, description = "Vehicle registration")),
    request_body = crate::openapi::ReassignMechanicDoc,
    responses(
        (status = 200, description = "Mechanic reassigned", body = crate::openapi::VehicleViewDoc),
        (status = 500, description = "Rule violation or store failure, message as text")
    )
)]
pub async fn reassign_mechanic(
    State(state): State<ServerState>,
    Path(reg): Path<String>,
    Json(payload): Json<Payload>,
) -> Result<Json<VehicleView>, ApiError> {
    Ok(Json(state.vehicles.reassign_mechanic(&reg, &payload).await?))
}
