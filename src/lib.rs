//! Step-wise maze routing library.
//!
//! Parses a line-oriented maze description into an immutable grid, then
//! discovers a route from the single entrance to the single exit using
//! depth-first search with explicit backtracking, one discrete step per
//! call, so a caller can observe every move of the search. The whole
//! search state can be persisted and resumed.
//!
//! The crate is organized around clear module boundaries:
//! - `maze`: grid types, text parsing, coordinate math, rendering
//! - `routing`: the incremental route finder
//! - `snapshot`: the persisted search format
//! - `error`: structured error taxonomy

pub mod error;
pub mod maze;
pub mod routing;
pub mod snapshot;

// Re-export main types
pub use error::{Error, MazeError, Result, SnapshotError};
pub use maze::{Coordinate, Direction, Maze, Tile};
pub use routing::RouteFinder;
pub use snapshot::RouteSnapshot;
