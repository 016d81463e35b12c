//! Analysis pipeline: fetch commits, score each message, merge in order.

use std::path::Path;

use rand::Rng;

use crate::error::AnalysisError;
use crate::source::CommitSource;
use crate::types::CommitAnalysis;

/// Analyze up to `limit` commits of the repository at `repo_path` using the
/// process RNG for score draws.
pub fn analyze(
  source: &dyn CommitSource,
  repo_path: &str,
  limit: usize,
) -> Result<Vec<CommitAnalysis>, AnalysisError> {
  analyze_with(source, repo_path, limit, &mut rand::thread_rng())
}

/// Like [`analyze`], drawing score magnitudes from `rng`.
///
/// Returns the scored commits in the source's emission order (newest first).
/// A source failure discards the whole request; no partial results.
pub fn analyze_with<R: Rng>(
  source: &dyn CommitSource,
  repo_path: &str,
  limit: usize,
  rng: &mut R,
) -> Result<Vec<CommitAnalysis>, AnalysisError> {
  let records = source
    .fetch(Path::new(repo_path), limit)
    .map_err(|e| AnalysisError::from_source(repo_path, e))?;

  Ok(
    records
      .into_iter()
      .map(|record| {
        let scored = score_engine::classify_with(&record.message, &mut *rng);
        CommitAnalysis {
          hash: record.hash,
          author: record.author,
          message: record.message,
          score: scored.score,
          feedback: scored.feedback,
        }
      })
      .collect(),
  )
}
