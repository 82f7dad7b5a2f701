use crate::config::ConfigError;
use crate::hotels::{HotelServiceError, HotelStoreError};
use crate::occupancy::OccupancyError;
use crate::pricing::RateCardError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Hotels(HotelServiceError),
    Occupancy(OccupancyError),
    Pricing(RateCardError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Hotels(err) => write!(f, "hotel store error: {}", err),
            AppError::Occupancy(err) => write!(f, "occupancy error: {}", err),
            AppError::Pricing(err) => write!(f, "pricing error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Hotels(err) => Some(err),
            AppError::Occupancy(err) => Some(err),
            AppError::Pricing(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Occupancy(_)
            | AppError::Pricing(_)
            | AppError::Hotels(HotelServiceError::MissingPrices) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Hotels(HotelServiceError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<HotelServiceError> for AppError {
    fn from(value: HotelServiceError) -> Self {
        Self::Hotels(value)
    }
}

impl From<HotelStoreError> for AppError {
    fn from(value: HotelStoreError) -> Self {
        Self::Hotels(HotelServiceError::Store(value))
    }
}

impl From<OccupancyError> for AppError {
    fn from(value: OccupancyError) -> Self {
        Self::Occupancy(value)
    }
}

impl From<RateCardError> for AppError {
    fn from(value: RateCardError) -> Self {
        Self::Pricing(value)
    }
}
