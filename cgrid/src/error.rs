use thiserror::Error;

use crate::coord::Coord;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("invalid grid dimension {rows}x{columns}, both must be at least 1")]
    InvalidDimension { rows: usize, columns: usize },
    #[error("position {pos} is out of bounds for grid of size {size}")]
    IndexOutOfBounds { pos: Coord, size: Coord },
    #[error("start or end point is not set")]
    EndpointsNotSet,
    #[error("no open cell available for the {0}")]
    NoOpenCells(Endpoint),
    #[error("open probability must be within 0..=1, got {0}")]
    InvalidProbability(f64),
    #[error("unknown glyph {glyph:?} at {pos}")]
    InvalidGlyph { glyph: char, pos: Coord },
    #[error("row {row} has {found} glyphs, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl GridError {
    /// Errors caused by the current maze layout rather than by misuse, the caller can
    /// regenerate or reconfigure the grid and try again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GridError::EndpointsNotSet | GridError::NoOpenCells(_))
    }
}

/// Which of the two endpoints an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

pub type Result<T, E = GridError> = std::result::Result<T, E>;
