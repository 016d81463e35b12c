//! Commit Analysis API
//!
//! HTTP service that extracts the recent commit history of a local git
//! repository, scores each message through the score-engine heuristic, and
//! returns an aggregated quality report. Stateless across requests.
//! Bind to 127.0.0.1 by default (internal only).

pub mod analyzer;
pub mod error;
pub mod handlers;
pub mod report;
pub mod source;
pub mod state;
pub mod types;

pub use error::{AnalysisError, SourceError};
pub use handlers::{analyze, health};
pub use source::{CommitSource, GitCommitSource};
pub use state::AppState;
