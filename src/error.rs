//! Error types for the solver

use std::fmt;

use thiserror::Error;

/// Why a search could not produce a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsolvable {
    /// The open frontier ran dry after `expanded` expansions.
    Exhausted { expanded: usize },
    /// Tile parity and blank displacement disagree, so no sequence of
    /// slides connects the two boards.
    ParityMismatch,
}

impl fmt::Display for Unsolvable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unsolvable::Exhausted { expanded } => {
                write!(f, "open frontier exhausted after {} expansions", expanded)
            }
            Unsolvable::ParityMismatch => write!(f, "boards have mismatched parity"),
        }
    }
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("no solution found: {reason}")]
    NoSolutionFound { reason: Unsolvable },

    #[error("expansion limit of {limit} reached before the goal")]
    ExpansionLimit { limit: usize },

    #[error("no direction leads back to the predecessor of path step {step}")]
    Reconstruction { step: usize },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput {
            message: message.into(),
        }
    }

    pub(crate) fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
