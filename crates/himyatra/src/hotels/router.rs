use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Router,
};
use serde_json::{json, Value};
use tokio::task::JoinError;
use tracing::error;

use super::domain::PriceUpdate;
use super::service::{HotelPricingService, HotelServiceError};
use super::store::HotelRepository;

/// Router builder exposing the hotel listing and price update endpoints.
pub fn hotel_router<R>(service: Arc<HotelPricingService<R>>) -> Router
where
    R: HotelRepository + 'static,
{
    Router::new()
        .route("/api/hotels", get(list_handler::<R>))
        .route("/api/hotels/update-prices", put(update_prices_handler::<R>))
        .with_state(service)
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<HotelPricingService<R>>>) -> Response
where
    R: HotelRepository + 'static,
{
    let loaded = match tokio::task::spawn_blocking(move || service.hotels()).await {
        Ok(loaded) => loaded,
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            return task_failed(err, payload);
        }
    };

    match loaded {
        Ok(hotels) => (StatusCode::OK, axum::Json(json!({ "hotels": hotels }))).into_response(),
        Err(err) => {
            error!(error = %err, "failed to read hotel data");
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn update_prices_handler<R>(
    State(service): State<Arc<HotelPricingService<R>>>,
    axum::Json(update): axum::Json<PriceUpdate>,
) -> Response
where
    R: HotelRepository + 'static,
{
    let outcome = match tokio::task::spawn_blocking(move || service.update_prices(&update)).await {
        Ok(outcome) => outcome,
        Err(err) => {
            let payload = json!({
                "error": "Error updating prices",
                "details": err.to_string(),
            });
            return task_failed(err, payload);
        }
    };

    match outcome {
        Ok(receipt) => (StatusCode::OK, axum::Json(receipt)).into_response(),
        Err(HotelServiceError::MissingPrices) => {
            let payload = json!({ "error": HotelServiceError::MissingPrices.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(HotelServiceError::Store(err)) => {
            error!(error = %err, "failed to update hotel prices");
            let payload = json!({
                "error": "Error updating prices",
                "details": err.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

// Store calls run on the blocking pool. A panicked or cancelled task becomes a 500.
fn task_failed(err: JoinError, payload: Value) -> Response {
    error!(error = %err, "hotel store task did not complete");
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
