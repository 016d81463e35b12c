//! Structured error types for the analysis pipeline.

use thiserror::Error;

/// Failures raised at the commit source boundary.
#[derive(Debug, Error)]
pub enum SourceError {
  #[error("not a git repository")]
  NotARepository,

  #[error("history read failed: {0}")]
  Access(String),
}

/// Failures of one analysis request. All are terminal; no retries, no
/// partial reports.
#[derive(Debug, Error)]
pub enum AnalysisError {
  #[error("path '{path}' is not a directory")]
  NotADirectory { path: String },

  #[error("path '{path}' is not a valid git repository")]
  NotARepository { path: String },

  #[error("commit extraction failed for '{path}': {reason}")]
  Extraction { path: String, reason: String },
}

impl AnalysisError {
  pub fn not_a_directory(path: impl Into<String>) -> Self {
    Self::NotADirectory { path: path.into() }
  }

  pub fn not_a_repository(path: impl Into<String>) -> Self {
    Self::NotARepository { path: path.into() }
  }

  pub fn extraction(path: impl Into<String>, reason: impl Into<String>) -> Self {
    Self::Extraction {
      path: path.into(),
      reason: reason.into(),
    }
  }

  /// Wrap a source failure with the offending path.
  pub fn from_source(path: &str, err: SourceError) -> Self {
    match err {
      SourceError::NotARepository => Self::not_a_repository(path),
      SourceError::Access(reason) => Self::extraction(path, reason),
    }
  }
}
