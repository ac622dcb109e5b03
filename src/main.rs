//! topsis-server - HTTP front end for TOPSIS ranking.
//!
//! Configuration comes from `TOPSIS__*` environment variables (see
//! [`topsis_ranker::config::AppConfig`]).

use std::process::ExitCode;
use std::sync::Arc;

use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use topsis_ranker::adapters::email::ResendMailer;
use topsis_ranker::adapters::http::{topsis_router, TopsisAppState};
use topsis_ranker::config::{AppConfig, ServerConfig};
use topsis_ranker::ports::ResultMailer;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.server);

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return ExitCode::FAILURE;
    }

    match serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Server terminated");
            ExitCode::FAILURE
        }
    }
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
        tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(filter)
            .init();
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

async fn serve(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mailer: Option<Arc<dyn ResultMailer>> = match &config.email {
        Some(email) => Some(Arc::new(ResendMailer::new(email)?)),
        None => {
            warn!("No e-mail configuration; result delivery disabled");
            None
        }
    };

    let state = TopsisAppState::new(mailer, config.analysis.validation_options());
    let app = topsis_router()
        .with_state(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "topsis-server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
