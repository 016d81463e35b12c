//! Input/output types for the scoring engine (JSON contract with callers).

use serde::{Deserialize, Serialize};

/// Input: one JSON object from stdin.
#[derive(Debug, Deserialize)]
pub struct Input {
  pub commit_message: String,
}

/// Output: score and feedback for one commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
  /// Quality score, 1-10 inclusive.
  pub score: u8,
  /// Human-readable explanation of the score.
  pub feedback: String,
}
