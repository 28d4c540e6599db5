//! The step-wise route finder: depth-first search with explicit
//! backtracking over a shared maze.
//!
//! One call to [`RouteFinder::step`] performs exactly one unit of work:
//! extend the route by one tile, or retract one dead-end tile. Callers
//! drive the search one tick at a time and poll the route state between
//! calls. The whole search, maze included, can be saved to a snapshot
//! file and resumed later.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::error::{Error, Result, SnapshotError};
use crate::maze::{Coordinate, Direction, Maze, Tile};
use crate::snapshot::RouteSnapshot;

/// Incremental depth-first search for a route from entrance to exit.
///
/// The maze is shared and never mutated; the finder owns only the route
/// stack and the set of tiles proven to be dead ends. Membership in both
/// is tracked by coordinate.
#[derive(Debug, Clone)]
pub struct RouteFinder {
    maze: Arc<Maze>,
    /// Current partial route from the entrance, used as a stack
    route: Vec<Coordinate>,
    /// Tiles popped off the route after running out of neighbors
    removed: HashSet<Coordinate>,
}

impl RouteFinder {
    /// Start a fresh search over `maze`. The route stays empty until the
    /// first [`step`](Self::step).
    pub fn new(maze: Arc<Maze>) -> RouteFinder {
        RouteFinder {
            maze,
            route: Vec::new(),
            removed: HashSet::new(),
        }
    }

    pub(crate) fn from_parts(
        maze: Arc<Maze>,
        route: Vec<Coordinate>,
        removed: HashSet<Coordinate>,
    ) -> RouteFinder {
        RouteFinder {
            maze,
            route,
            removed,
        }
    }

    /// The maze this finder searches.
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// The current route from the entrance, bottom of the stack first.
    pub fn route(&self) -> &[Coordinate] {
        &self.route
    }

    /// Tiles proven to be dead ends.
    pub fn removed_tiles(&self) -> &HashSet<Coordinate> {
        &self.removed
    }

    /// Whether the route currently connects entrance and exit.
    ///
    /// Recomputed on every call; nothing is cached across steps.
    pub fn is_finished(&self) -> bool {
        self.route.contains(&self.maze.entrance()) && self.route.contains(&self.maze.exit())
    }

    /// Advance the search by one unit: push the first unexplored
    /// navigable neighbor of the route's top tile (probing North, South,
    /// East, West in that order), or retract the top tile into the
    /// removed set if it has none left.
    ///
    /// Returns [`is_finished`](Self::is_finished) after the move. Once
    /// finished, further calls are no-ops. Fails with
    /// [`Error::NoRouteFound`] when no route tile anywhere has an
    /// unexplored neighbor; the route and removed set are left exactly
    /// as they were, so the caller can inspect the dead-end state.
    pub fn step(&mut self) -> Result<bool> {
        if self.is_finished() {
            return Ok(true);
        }
        if self.route.is_empty() {
            self.route.push(self.maze.entrance());
            return Ok(self.is_finished());
        }

        let top = *self.route.last().unwrap();
        if let Some(next) = self.first_open_neighbor(top) {
            self.route.push(next);
            return Ok(self.is_finished());
        }

        // The top tile is exhausted. Retracting it only makes sense if
        // some tile on the route still has an unexplored neighbor;
        // otherwise every reachable tile has been tried and the maze has
        // no solution.
        let any_open = self
            .route
            .iter()
            .any(|&coordinate| self.first_open_neighbor(coordinate).is_some());
        if !any_open {
            return Err(Error::NoRouteFound);
        }

        let dead_end = self.route.pop().unwrap();
        self.removed.insert(dead_end);
        Ok(self.is_finished())
    }

    /// The first neighbor of `from`, in fixed direction order, that is
    /// navigable, not on the route, and not removed.
    fn first_open_neighbor(&self, from: Coordinate) -> Option<Coordinate> {
        self.navigable_neighbors(from)
            .into_iter()
            .find(|neighbor| !self.route.contains(neighbor) && !self.removed.contains(neighbor))
    }

    fn navigable_neighbors(&self, from: Coordinate) -> SmallVec<[Coordinate; 4]> {
        let mut neighbors = SmallVec::new();
        for direction in Direction::ALL {
            let coordinate = from.step(direction);
            if self
                .maze
                .tile_at(coordinate)
                .map_or(false, Tile::is_navigable)
            {
                neighbors.push(coordinate);
            }
        }
        neighbors
    }

    /// The maze rendering with `*` overlaid on route tiles and `-` on
    /// removed tiles.
    pub fn render(&self) -> String {
        self.maze.render_with(|coordinate| {
            if self.route.contains(&coordinate) {
                Some('*')
            } else if self.removed.contains(&coordinate) {
                Some('-')
            } else {
                None
            }
        })
    }

    /// Write the whole search state, maze included, to `path` as a JSON
    /// snapshot. A failed save leaves the finder untouched.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let snapshot = RouteSnapshot::capture(self);
        let json = serde_json::to_string_pretty(&snapshot).map_err(SnapshotError::from)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Rebuild a finder from a snapshot file written by
    /// [`save`](Self::save). Fails with [`Error::Io`] when the file is
    /// missing and with a [`SnapshotError`] when the content is not a
    /// valid snapshot.
    pub fn load(path: impl AsRef<Path>) -> Result<RouteFinder> {
        let text = fs::read_to_string(path)?;
        let snapshot: RouteSnapshot =
            serde_json::from_str(&text).map_err(SnapshotError::from)?;
        snapshot.restore()
    }
}
