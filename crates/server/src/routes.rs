pub mod mechanics;
pub mod vehicles;

use axum::{
    routing::{delete, get, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the application router: health, garage API and the OpenAPI docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/vehicle/all", get(vehicles::list_all))
        .route("/api/vehicle/raw", get(vehicles::list_raw))
        .route("/api/vehicle", get(vehicles::list_by_make).post(vehicles::create))
        .route("/api/vehicle/:reg", put(vehicles::reassign_mechanic))
        .route("/api/mechanic/:mid", delete(mechanics::delete))
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx is logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
