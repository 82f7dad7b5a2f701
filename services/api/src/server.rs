use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use himyatra::config::AppConfig;
use himyatra::error::AppError;
use himyatra::hotels::{HotelPricingService, JsonFileHotelRepository};
use himyatra::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(data) = args.data.take() {
        config.storage.hotel_data_path = data;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let data_path = config.storage.hotel_data_path.clone();
    if !data_path.exists() {
        warn!(path = %data_path.display(), "hotel data file missing; hotel routes will report errors");
    }
    let repository = Arc::new(JsonFileHotelRepository::new(data_path.clone()));
    let hotel_service = Arc::new(HotelPricingService::new(repository));

    let app = with_service_routes(hotel_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, data = %data_path.display(), "hotel pricing service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
