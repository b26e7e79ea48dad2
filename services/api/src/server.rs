use crate::cli::ServeArgs;
use crate::infra::{in_memory_receipt_service, AppState};
use crate::routes::with_receipt_routes;
use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayer;
use receipt_points::config::AppConfig;
use receipt_points::error::AppError;
use receipt_points::receipts::{ReceiptRepository, ReceiptService};
use receipt_points::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

/// Receipt endpoints plus the operational routes sharing `state`.
pub(crate) fn build_app<R>(service: Arc<ReceiptService<R>>, state: AppState) -> Router
where
    R: ReceiptRepository + 'static,
{
    with_receipt_routes(service).layer(Extension(state))
}

pub(crate) async fn run(args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    config.server.override_with(args.host, args.port);

    telemetry::init(&config.telemetry)?;
    let addr = config.server.socket_addr()?;

    // The metric layer installs the global recorder, so it is built once here.
    let (metric_layer, metric_handle) = PrometheusMetricLayer::pair();
    let readiness = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: Arc::clone(&readiness),
        metrics: Arc::new(metric_handle),
    };
    let app = build_app(in_memory_receipt_service(), state).layer(metric_layer);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness.store(true, Ordering::Release);
    info!(environment = ?config.environment, %addr, "receipt points service listening");

    axum::serve(listener, app).await?;
    Ok(())
}
