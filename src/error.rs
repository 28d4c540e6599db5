//! Error types for maze parsing, routing, and persistence.
//!
//! All operations return structured errors rather than panicking.
//! Maze construction is all-or-nothing: every variant of [`MazeError`]
//! aborts parsing before a partially valid maze can escape.

use thiserror::Error;

use crate::maze::Coordinate;

/// Top-level error type for all operations in the crate.
///
/// Each variant corresponds to a failure domain:
/// - Maze: structural validation of the grid text
/// - NoRouteFound: the search exhausted every reachable tile
/// - Snapshot: decoding or validating persisted search state
/// - I/O: file system operations
#[derive(Debug, Error)]
pub enum Error {
    /// The maze text failed structural validation
    #[error("invalid maze: {0}")]
    Maze(#[from] MazeError),

    /// No unexplored navigable tile remains anywhere on the route;
    /// the maze has no path from entrance to exit
    #[error("no route from the entrance to the exit exists")]
    NoRouteFound,

    /// Persisted search state could not be decoded or is inconsistent
    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Structural maze-validation failures, raised during parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    /// A row's length differs from the first row's length
    #[error("row {row} is {actual} tiles wide, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A character outside `.`, `e`, `x`, `#` was encountered
    #[error("unrecognized symbol {symbol:?} at row {row}, column {column}")]
    UnknownSymbol {
        symbol: char,
        row: usize,
        column: usize,
    },

    /// The input contained no rows at all
    #[error("maze contains no rows")]
    Empty,

    /// No entrance tile was found after consuming the whole grid
    #[error("maze has no entrance")]
    NoEntrance,

    /// No exit tile was found after consuming the whole grid
    #[error("maze has no exit")]
    NoExit,

    /// A second entrance tile was encountered
    #[error("second entrance at row {row}, column {column}")]
    MultipleEntrances { row: usize, column: usize },

    /// A second exit tile was encountered
    #[error("second exit at row {row}, column {column}")]
    MultipleExits { row: usize, column: usize },
}

/// Failures while decoding or validating a persisted search snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The file content is not valid JSON for a snapshot
    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The flat tile array does not match the recorded dimensions
    #[error("tile array holds {actual} tiles, expected {expected} for a {width}x{height} grid")]
    GridSize {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    /// The recorded entrance or exit disagrees with the grid content
    #[error("recorded {endpoint} {recorded} does not match the grid position {derived}")]
    EndpointMismatch {
        endpoint: &'static str,
        recorded: Coordinate,
        derived: Coordinate,
    },

    /// A route or removed-tile coordinate does not resolve to a navigable tile
    #[error("{set} coordinate {coordinate} is not a navigable tile of the grid")]
    OffGrid {
        set: &'static str,
        coordinate: Coordinate,
    },

    /// A coordinate appears in both the route and the removed set
    #[error("coordinate {coordinate} appears in both the route and the removed set")]
    Overlap { coordinate: Coordinate },
}

/// Type alias for Result with the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
