use crate::cli::ServeArgs;
use crate::infra::{AppState, FilePreferenceStore, PreferenceHandle, DEFAULT_PREFERENCES_FILE};
use crate::routes::with_checker_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use civic_eligibility::checker::CheckerState;
use civic_eligibility::config::AppConfig;
use civic_eligibility::error::AppError;
use civic_eligibility::telemetry;
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

    let preferences_path = config
        .preferences
        .path
        .clone()
        .unwrap_or_else(|| DEFAULT_PREFERENCES_FILE.to_string());
    let preferences = PreferenceHandle::bootstrap(Arc::new(FilePreferenceStore::new(
        preferences_path,
    )));

    let checker = Arc::new(CheckerState::standard());

    let app = with_checker_routes(checker)
        .layer(Extension(app_state))
        .layer(Extension(preferences))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "civic eligibility checker ready");

    axum::serve(listener, app).await?;
    Ok(())
}
