//! HTTP handlers for the analysis API.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use crate::error::AnalysisError;
use crate::report;
use crate::state::AppState;
use crate::types::{AnalyzeParams, ErrorResponse, RepositoryReport};

pub async fn health() -> &'static str {
  "ok"
}

pub async fn analyze(
  State(state): State<Arc<AppState>>,
  Query(params): Query<AnalyzeParams>,
) -> Result<Json<RepositoryReport>, (StatusCode, Json<ErrorResponse>)> {
  match report::build(state.source.as_ref(), &params.repo_path, params.limit) {
    Ok(report) => Ok(Json(report)),
    Err(AnalysisError::NotADirectory { .. }) => Err((
      StatusCode::BAD_REQUEST,
      Json(ErrorResponse::new("The specified path is not a directory.")),
    )),
    Err(e) => {
      // Detail stays in the server log; the client only sees a generic message.
      tracing::error!("analyze: {}", e);
      Err((
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Internal server error during analysis.")),
      ))
    }
  }
}
