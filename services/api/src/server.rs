use crate::cli::ServeArgs;
use crate::infra::{AppState, ConfiguredNotifier};
use crate::routes::with_eligibility_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use placement_eligibility::config::AppConfig;
use placement_eligibility::eligibility::{CriteriaTable, EligibilityService};
use placement_eligibility::error::AppError;
use placement_eligibility::telemetry;
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
    };

    let notifier = Arc::new(ConfiguredNotifier::from_config(&config.notifier)?);
    let webhook_enabled = notifier.is_enabled();
    let table = CriteriaTable::standard();
    let companies = table.len();
    let service = Arc::new(EligibilityService::new(table, notifier));

    let app = with_eligibility_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        companies,
        webhook_enabled,
        "placement eligibility service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
