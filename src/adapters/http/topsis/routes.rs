//! Axum router configuration for ranking endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{health, run_topsis, TopsisAppState};

/// Create the ranking API router.
///
/// # Routes
/// - `GET /health` - Liveness check
/// - `POST /api/topsis` - Rank a dataset, optionally e-mailing the result
pub fn topsis_router() -> Router<TopsisAppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/topsis", post(run_topsis))
}
