//! Errors raised while constructing networks and pattern sets, or while reading patterns.
//!
//! Only construction and input can fail. Weight computation, the update rule and both
//! convergence loops are total functions over validated data and never return an error.

use thiserror::Error;

/// Which collection a pattern belongs to, used to point at the offending vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternRole {
    Training,
    Test,
}

impl std::fmt::Display for PatternRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternRole::Training => write!(f, "training"),
            PatternRole::Test => write!(f, "test"),
        }
    }
}

#[derive(Error, Debug)]
pub enum HopfieldError {
    /// Width or height of the configured image is zero.
    #[error("image shape {width}x{height} has no neurons")]
    EmptyShape { width: usize, height: usize },

    /// A pattern does not have exactly one entry per neuron.
    #[error("{role} pattern {index} has length {found}, expected {expected}")]
    DimensionMismatch {
        role: PatternRole,
        index: usize,
        expected: usize,
        found: usize,
    },

    /// A pattern entry is neither +1 nor -1.
    #[error("activation {value} at position {position} is not bipolar (+1/-1)")]
    InvalidActivation { position: usize, value: i8 },

    /// The randomized convergence window `window_factor * num_neurons` is zero or overflows.
    #[error("convergence window of {window_factor} x {num_neurons} attempts is empty or too large")]
    InvalidWindow {
        window_factor: usize,
        num_neurons: usize,
    },

    #[error("threshold vector has length {found}, expected {expected}")]
    ThresholdLength { expected: usize, found: usize },

    #[error("line {line}, column {column}: unexpected character {character:?}")]
    UnexpectedCharacter {
        line: usize,
        column: usize,
        character: char,
    },

    #[error("line {line}: row has {found} cells, expected {expected}")]
    RowWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: pattern has {found} rows, expected {expected}")]
    PatternHeight {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The input never separated training patterns from test patterns.
    #[error("input has no test section (missing `---` separator)")]
    MissingTestSection,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HopfieldError>;
