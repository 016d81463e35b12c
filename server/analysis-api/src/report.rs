//! Report assembly: directory precondition, pipeline, mean, absolute path.

use std::path::Path;

use rand::Rng;

use crate::analyzer;
use crate::error::AnalysisError;
use crate::source::CommitSource;
use crate::types::{CommitAnalysis, RepositoryReport};

/// Build the full report for one request using the process RNG.
pub fn build(
  source: &dyn CommitSource,
  repo_path: &str,
  limit: usize,
) -> Result<RepositoryReport, AnalysisError> {
  build_with(source, repo_path, limit, &mut rand::thread_rng())
}

/// Like [`build`], drawing score magnitudes from `rng`.
///
/// Rejects a `repo_path` that is not an existing directory before any
/// history extraction runs.
pub fn build_with<R: Rng>(
  source: &dyn CommitSource,
  repo_path: &str,
  limit: usize,
  rng: &mut R,
) -> Result<RepositoryReport, AnalysisError> {
  let path = Path::new(repo_path);
  if !path.is_dir() {
    return Err(AnalysisError::not_a_directory(repo_path));
  }

  let analysis_results = analyzer::analyze_with(source, repo_path, limit, rng)?;

  Ok(RepositoryReport {
    repo_path: absolutize(path),
    total_commits: analysis_results.len(),
    average_score: rounded_mean(&analysis_results),
    analysis_results,
  })
}

/// Mean of all scores rounded to 2 decimal places; exactly 0 when empty.
fn rounded_mean(results: &[CommitAnalysis]) -> f64 {
  if results.is_empty() {
    return 0.0;
  }
  let sum: u32 = results.iter().map(|a| u32::from(a.score)).sum();
  let mean = f64::from(sum) / results.len() as f64;
  (mean * 100.0).round() / 100.0
}

/// Lexical absolutization against the current directory (no symlink
/// resolution).
fn absolutize(path: &Path) -> String {
  std::path::absolute(path)
    .unwrap_or_else(|_| path.to_path_buf())
    .display()
    .to_string()
}
