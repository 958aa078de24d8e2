//! Progress report service binary.

use std::sync::Arc;

use http::{HeaderValue, Method};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use progress_reports::adapters::http::{api_router, ReportHandlers};
use progress_reports::adapters::{
    InMemoryReportRepository, LocalFileDocumentSink, RemoteReportService,
    RemoteReportServiceConfig, TemplateReportGenerator,
};
use progress_reports::config::{AppConfig, ServerConfig};
use progress_reports::ports::{ReportGenerator, ReportRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let (repository, generator): (Arc<dyn ReportRepository>, Arc<dyn ReportGenerator>) =
        match config.report_service.base_url.as_deref() {
            Some(base_url) if config.report_service.is_remote() => {
                let service = Arc::new(RemoteReportService::new(
                    RemoteReportServiceConfig::new(base_url)
                        .with_secret_api_key(config.report_service.api_key.clone())
                        .with_timeout(config.report_service.timeout()),
                )?);
                info!(base_url, "Using remote report service");
                let repository: Arc<dyn ReportRepository> = service.clone();
                let generator: Arc<dyn ReportGenerator> = service;
                (repository, generator)
            }
            _ => {
                warn!("No report service configured; using in-memory store and template generator");
                let repository: Arc<dyn ReportRepository> =
                    Arc::new(InMemoryReportRepository::new());
                let generator: Arc<dyn ReportGenerator> = Arc::new(TemplateReportGenerator::new());
                (repository, generator)
            }
        };
    let sink = Arc::new(LocalFileDocumentSink::new(config.export.output_dir.clone()));

    let handlers = ReportHandlers::from_ports(repository, generator, sink);
    let app = api_router(handlers)
        .layer(cors_layer(&config.server))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Progress report service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Progress report service stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
    }
}
