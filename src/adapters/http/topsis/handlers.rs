//! HTTP handlers for ranking endpoints.
//!
//! These handlers connect Axum routes to the ranking command handler.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{RunTopsisCommand, RunTopsisError, RunTopsisHandler};
use crate::domain::analysis::ValidationOptions;
use crate::ports::ResultMailer;

use super::dto::{ErrorResponse, HealthResponse, RunTopsisRequest, RunTopsisResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Ranking API error that implements IntoResponse.
#[derive(Debug)]
pub struct TopsisApiError(pub RunTopsisError);

impl TopsisApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            RunTopsisError::Dataset(_) | RunTopsisError::InvalidRecipient(_) => {
                StatusCode::BAD_REQUEST
            }
            RunTopsisError::Analysis(e) if e.is_degeneracy() => StatusCode::UNPROCESSABLE_ENTITY,
            RunTopsisError::Analysis(_) => StatusCode::BAD_REQUEST,
            RunTopsisError::DeliveryUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            RunTopsisError::Delivery(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for TopsisApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error = ErrorResponse::new(self.0.code(), self.0.to_string());
        (status, Json(error)).into_response()
    }
}

impl From<RunTopsisError> for TopsisApiError {
    fn from(error: RunTopsisError) -> Self {
        TopsisApiError(error)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for ranking endpoints.
#[derive(Clone)]
pub struct TopsisAppState {
    /// Absent when e-mail delivery is not configured.
    pub mailer: Option<Arc<dyn ResultMailer>>,
    pub options: ValidationOptions,
}

impl TopsisAppState {
    pub fn new(mailer: Option<Arc<dyn ResultMailer>>, options: ValidationOptions) -> Self {
        Self { mailer, options }
    }

    pub fn run_topsis_handler(&self) -> RunTopsisHandler {
        RunTopsisHandler::new(self.mailer.clone(), self.options)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// POST /api/topsis
///
/// Ranks the submitted dataset and optionally e-mails the result file.
pub async fn run_topsis(
    State(state): State<TopsisAppState>,
    Json(request): Json<RunTopsisRequest>,
) -> Result<impl IntoResponse, TopsisApiError> {
    let command = RunTopsisCommand::try_from(request).map_err(RunTopsisError::Dataset)?;
    let result = state.run_topsis_handler().handle(command).await?;

    Ok((StatusCode::OK, Json(RunTopsisResponse::from(result))))
}
