use crate::cli::ServeArgs;
use crate::infra::{in_memory_agency, AppState};
use crate::routes::with_agency_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use job_seeker::config::AppConfig;
use job_seeker::error::AppError;
use job_seeker::telemetry;
use std::sync::atomic::Ordering;
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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let agency = in_memory_agency(&config.agency);

    let app = with_agency_routes(agency)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        username_policy = ?config.agency.username_policy,
        %addr,
        "job seeker agency ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
