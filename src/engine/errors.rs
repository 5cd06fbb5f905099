// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for configuring and driving a traversal.

use std::convert::Infallible;
use std::path::PathBuf;

/// Failure of one traversal step: the child source or the result sink
/// returned an error. The engine's position is left as it was, so the next
/// step repeats the failed lookup or report.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StepError<L, E> {
    #[error("child lookup failed: {0}")]
    Lookup(L),

    #[error("result sink failed: {0}")]
    Sink(E),
}

impl StepError<Infallible, Infallible> {
    /// Uninhabited when neither callback can fail.
    pub fn into_infallible(self) -> Infallible {
        match self {
            StepError::Lookup(never) | StepError::Sink(never) => never,
        }
    }
}

/// Errors raised outside the callbacks' own error types.
#[derive(thiserror::Error, Debug)]
pub enum DfsError {
    /// The builder was finished without a child source.
    #[error("traversal has no child source")]
    MissingChildSource,

    /// The builder was finished without a result sink.
    #[error("traversal has no result sink")]
    MissingResultSink,

    /// A caller driving the engine observed its cancellation flag.
    #[error("traversal cancelled after {results} results")]
    Cancelled { results: u64 },

    /// Two keys of a keypad were given the same digit.
    #[error("digit {digit:?} is defined twice")]
    DuplicateKey { digit: char },

    /// A dictionary or other input could not be read.
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PartialEq for DfsError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DfsError::MissingChildSource, DfsError::MissingChildSource) => true,
            (DfsError::MissingResultSink, DfsError::MissingResultSink) => true,
            (DfsError::Cancelled { results: a }, DfsError::Cancelled { results: b }) => a == b,
            (DfsError::DuplicateKey { digit: a }, DfsError::DuplicateKey { digit: b }) => a == b,
            (DfsError::Io { path: a, .. }, DfsError::Io { path: b, .. }) => a == b,
            _ => false,
        }
    }
}
