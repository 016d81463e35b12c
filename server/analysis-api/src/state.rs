//! Shared application state.

use crate::source::CommitSource;

/// State shared across handlers. The commit source sits behind its
/// capability trait so tests can substitute an in-memory source.
pub struct AppState {
  pub source: Box<dyn CommitSource>,
}
