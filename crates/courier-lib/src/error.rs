use thiserror::Error;

use crate::geometry::Waypoint;

/// Convenient result alias for the courier library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A stream line could not be parsed as a case header or waypoint record.
    #[error("invalid record on line {line}: {content:?}")]
    InvalidRecord { line: u64, content: String },

    /// The stream ended before the zero terminator (or mid-case).
    #[error("unexpected end of input at line {line}")]
    UnexpectedEof { line: u64 },

    /// A parsed waypoint lies outside the field.
    #[error("waypoint {waypoint} outside the {edge}-unit field")]
    WaypointOutOfBounds { waypoint: Waypoint, edge: u32 },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
