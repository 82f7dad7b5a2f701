use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::Utc;
use himyatra::hotels::{hotel_router, HotelPricingService, HotelRepository};
use himyatra::occupancy::{OccupancyBoard, RoomType, RoomTypeSummary};
use himyatra::pricing::{PriceBreakdown, PricingInput};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct OccupancySummaryRequest {
    pub(crate) room_types: Vec<RoomType>,
}

#[derive(Debug, Serialize)]
pub(crate) struct OccupancySummaryResponse {
    pub(crate) room_types: Vec<RoomTypeSummary>,
}

pub(crate) fn with_service_routes<R>(service: Arc<HotelPricingService<R>>) -> axum::Router
where
    R: HotelRepository + 'static,
{
    hotel_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/pricing/quote",
            axum::routing::post(pricing_quote_endpoint),
        )
        .route(
            "/api/v1/occupancy/summary",
            axum::routing::post(occupancy_summary_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn pricing_quote_endpoint(Json(input): Json<PricingInput>) -> Json<PriceBreakdown> {
    Json(input.breakdown())
}

pub(crate) async fn occupancy_summary_endpoint(
    Json(payload): Json<OccupancySummaryRequest>,
) -> Json<OccupancySummaryResponse> {
    let board = OccupancyBoard::new(payload.room_types);
    Json(OccupancySummaryResponse {
        room_types: board.summaries(),
    })
}
