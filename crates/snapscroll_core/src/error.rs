//! Error types
//!
//! Structure-resolution failures never reach the embedder as errors; the
//! widget logs them and degrades (see the widget crate). The enum exists so
//! internal resolution code can use `?` and the log lines carry a reason.

use thiserror::Error;

/// Failure while resolving the scroller's document structure.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no element matched selector `{0}`")]
    NoMatch(String),

    #[error("selector `{0}` matched no section elements")]
    EmptySections(String),
}
