use crate::cli::ServeArgs;
use crate::infra::{build_generator, AppState};
use crate::routes::screening_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use decision_pipeline::config::AppConfig;
use decision_pipeline::error::AppError;
use decision_pipeline::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        generator: build_generator(&config.generation, false),
    };

    let app = screening_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        model = %config.generation.model,
        "screening pipeline service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
