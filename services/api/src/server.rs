use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use roadrunner::config::AppConfig;
use roadrunner::error::AppError;
use roadrunner::telemetry;
use roadrunner::underwriting::{ApplicationServiceError, LoanApplicationService};
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{
    seed_repository, AppState, InMemoryApplicationRepository, LoggingNotificationPublisher,
};
use crate::routes::with_application_routes;

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

    let policy = config.scoring.load_policy()?;

    let repository = Arc::new(InMemoryApplicationRepository::default());
    let notices = Arc::new(LoggingNotificationPublisher);

    if args.seed_demo {
        let seeded = seed_repository(&repository, &policy)
            .map_err(ApplicationServiceError::Repository)?;
        info!(seeded, "preloaded sample applications");
    }

    let service = Arc::new(LoanApplicationService::new(repository, notices, policy));

    let app = with_application_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "underwriting service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
