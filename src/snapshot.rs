//! Persisted form of a route search.
//!
//! A snapshot is an explicit struct, not a deep object graph: grid
//! dimensions, a flat tile array, the endpoint coordinates, the ordered
//! route, and the removed-tile set. Restoring re-runs the maze's
//! structural validation, so a snapshot can never resurrect a maze that
//! parsing would have rejected.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnapshotError};
use crate::maze::{Coordinate, Maze, Tile};
use crate::routing::RouteFinder;

/// Serialized state of a [`RouteFinder`], maze included.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major tile types, top text row first
    pub tiles: Vec<Tile>,
    pub entrance: Coordinate,
    pub exit: Coordinate,
    /// The route stack, bottom first
    pub route: Vec<Coordinate>,
    /// Dead-end tiles, kept sorted so equal states produce identical files
    pub removed_tiles: Vec<Coordinate>,
}

impl RouteSnapshot {
    /// Capture the full state of a finder.
    pub fn capture(finder: &RouteFinder) -> RouteSnapshot {
        let maze = finder.maze();
        let mut removed_tiles: Vec<Coordinate> = finder.removed_tiles().iter().copied().collect();
        removed_tiles.sort_unstable();
        RouteSnapshot {
            width: maze.width(),
            height: maze.height(),
            tiles: maze.tiles().iter().flatten().copied().collect(),
            entrance: maze.entrance(),
            exit: maze.exit(),
            route: finder.route().to_vec(),
            removed_tiles,
        }
    }

    /// Validate the snapshot and rebuild the finder it describes.
    pub fn restore(self) -> Result<RouteFinder> {
        let expected = self.width * self.height;
        if self.tiles.len() != expected {
            return Err(SnapshotError::GridSize {
                width: self.width,
                height: self.height,
                expected,
                actual: self.tiles.len(),
            }
            .into());
        }

        let rows: Vec<Vec<Tile>> = if self.width == 0 {
            Vec::new()
        } else {
            self.tiles.chunks(self.width).map(<[Tile]>::to_vec).collect()
        };
        let maze = Maze::from_grid(rows)?;

        if maze.entrance() != self.entrance {
            return Err(SnapshotError::EndpointMismatch {
                endpoint: "entrance",
                recorded: self.entrance,
                derived: maze.entrance(),
            }
            .into());
        }
        if maze.exit() != self.exit {
            return Err(SnapshotError::EndpointMismatch {
                endpoint: "exit",
                recorded: self.exit,
                derived: maze.exit(),
            }
            .into());
        }

        for &coordinate in &self.route {
            if !maze.tile_at(coordinate).map_or(false, Tile::is_navigable) {
                return Err(SnapshotError::OffGrid {
                    set: "route",
                    coordinate,
                }
                .into());
            }
        }
        for &coordinate in &self.removed_tiles {
            if !maze.tile_at(coordinate).map_or(false, Tile::is_navigable) {
                return Err(SnapshotError::OffGrid {
                    set: "removed",
                    coordinate,
                }
                .into());
            }
        }

        let removed: HashSet<Coordinate> = self.removed_tiles.iter().copied().collect();
        if let Some(&coordinate) = self.route.iter().find(|c| removed.contains(c)) {
            return Err(SnapshotError::Overlap { coordinate }.into());
        }

        Ok(RouteFinder::from_parts(Arc::new(maze), self.route, removed))
    }
}
