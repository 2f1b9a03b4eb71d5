//! Error types for the harvest pipeline.

use std::time::Duration;

use thiserror::Error;

use crate::harvest::Cursor;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("portal still busy after {waited:?}")]
    NavigationTimeout { waited: Duration },

    #[error("unknown header: {0}")]
    UnknownHeader(String),

    #[error("table does not contain 12 months (got {lines} lines)")]
    IncompleteTable { lines: usize },

    #[error("webdriver session: {0}")]
    Session(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A failed harvest run. Carries the cursor that was being attempted so the
/// caller can restart from it without re-walking completed pairs.
#[derive(Error, Debug)]
#[error("harvest aborted at {cursor}")]
pub struct HarvestFailure {
    pub cursor: Cursor,
    #[source]
    pub source: HarvestError,
}
