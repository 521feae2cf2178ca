use core::fmt;

/// Result alias for `cohort`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the partitioning engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A candidate subset handed to the solver was empty.
    EmptyCandidate {
        /// Position of the offending candidate in the pool.
        index: usize,
    },

    /// Matrix row length mismatch (usize).
    DimensionMismatch {
        /// Expected length.
        expected: usize,
        /// Found length.
        found: usize,
    },

    /// Invalid parameter value.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },

    /// The element collection was rejected by an indexer.
    InvalidInput(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyCandidate { index } => {
                write!(f, "candidate subset at position {index} is empty")
            }
            Error::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Error::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
            Error::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
