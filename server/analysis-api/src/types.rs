//! Core types for the analysis API (JSON contracts + internal models).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Internal models
// ---------------------------------------------------------------------------

/// One commit as extracted from the repository, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
  /// Full hex commit id.
  pub hash: String,
  /// Author display name.
  pub author: String,
  /// Commit message, trimmed of leading/trailing whitespace.
  pub message: String,
}

// ---------------------------------------------------------------------------
// Inbound types (query contract — what the caller sends)
// ---------------------------------------------------------------------------

/// Query parameters for the analyze endpoint.
#[derive(Debug, Deserialize)]
pub struct AnalyzeParams {
  #[serde(default = "default_repo_path")]
  pub repo_path: String,
  #[serde(default = "default_limit")]
  pub limit: usize,
}

fn default_repo_path() -> String {
  ".".to_string()
}

fn default_limit() -> usize {
  10
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// Per-commit output: the commit record merged with its score.
#[derive(Debug, Clone, Serialize)]
pub struct CommitAnalysis {
  pub hash: String,
  pub author: String,
  pub message: String,
  pub score: u8,
  pub feedback: String,
}

/// The aggregated report returned by the analyze endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryReport {
  /// Absolute path of the analyzed repository.
  pub repo_path: String,
  pub total_commits: usize,
  /// Mean of all scores rounded to 2 decimal places; 0 when no commits.
  pub average_score: f64,
  /// One entry per analyzed commit, newest first.
  pub analysis_results: Vec<CommitAnalysis>,
}

/// Structured error body for failed requests.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  pub error: bool,
  pub message: String,
}

impl ErrorResponse {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
    }
  }
}
