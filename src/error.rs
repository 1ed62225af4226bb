// File: error.rs
// Location: /src/error.rs

use thiserror::Error;

/// User cancellation is not an error; it is a normal `DialogOutcome`. The
/// only failure the dialog can report is that it could not be set up at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DialogError {
    #[error("Dialog resources unavailable: {0}")]
    ResourceExhausted(&'static str),
}
