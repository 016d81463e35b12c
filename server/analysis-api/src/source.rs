//! Commit extraction behind a capability trait; git2-backed in production.

use std::path::Path;

use git2::{ErrorCode, Repository};

use crate::error::SourceError;
use crate::types::CommitRecord;

/// Fetch-commits-by-path-and-limit capability. Object safe so handlers and
/// tests can swap in an in-memory source.
pub trait CommitSource: Send + Sync {
  /// Return at most `limit` commits, newest first.
  fn fetch(&self, repo_path: &Path, limit: usize) -> Result<Vec<CommitRecord>, SourceError>;
}

/// Production source reading history via libgit2.
pub struct GitCommitSource;

impl CommitSource for GitCommitSource {
  fn fetch(&self, repo_path: &Path, limit: usize) -> Result<Vec<CommitRecord>, SourceError> {
    // Discover searches ancestor directories, like `git` itself.
    let repo = Repository::discover(repo_path).map_err(|e| {
      if e.code() == ErrorCode::NotFound {
        SourceError::NotARepository
      } else {
        access(e)
      }
    })?;

    let mut revwalk = repo.revwalk().map_err(access)?;
    revwalk.push_head().map_err(access)?;

    let mut commits = Vec::new();
    for oid_result in revwalk.take(limit) {
      let oid = oid_result.map_err(access)?;
      let commit = repo.find_commit(oid).map_err(access)?;
      let author = commit.author().name().unwrap_or("unknown").to_string();
      let message = commit.message().unwrap_or("").trim().to_string();
      commits.push(CommitRecord {
        hash: oid.to_string(),
        author,
        message,
      });
    }
    Ok(commits)
  }
}

fn access(e: git2::Error) -> SourceError {
  SourceError::Access(e.message().to_string())
}
