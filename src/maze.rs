//! Maze grid types and the line-oriented text parser.
//!
//! A maze is a rectangular grid of tiles with exactly one entrance and
//! exactly one exit. Parsing is all-or-nothing: the first structural
//! problem aborts with a [`MazeError`] and no partially valid maze is
//! ever returned.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, MazeError};

/// One grid cell's type.
///
/// The type is fixed at construction and never mutated; a tile is
/// identified by its grid position, not by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tile {
    Corridor,
    Entrance,
    Exit,
    Wall,
}

impl Tile {
    /// Build a tile from its text symbol.
    ///
    /// Unrecognized symbols map to [`Tile::Wall`]. [`Maze::parse`]
    /// rejects unknown symbols before classifying them, so the lenient
    /// fallback is only reachable when constructing tiles directly.
    pub fn from_symbol(symbol: char) -> Tile {
        match symbol {
            '.' => Tile::Corridor,
            'e' => Tile::Entrance,
            'x' => Tile::Exit,
            '#' => Tile::Wall,
            _ => Tile::Wall,
        }
    }

    /// The text symbol for this tile (`.`, `e`, `x`, `#`).
    pub fn to_symbol(self) -> char {
        match self {
            Tile::Corridor => '.',
            Tile::Entrance => 'e',
            Tile::Exit => 'x',
            Tile::Wall => '#',
        }
    }

    /// Whether the route may pass through this tile.
    pub fn is_navigable(self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

/// Compass direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions in the fixed order the search probes them.
    ///
    /// The order is a tie-break rule: the first qualifying neighbor is
    /// always taken, which makes the search deterministic but not
    /// shortest-path.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Cartesian offset of one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

/// Cartesian position on the grid.
///
/// `x` increases rightward and `y` increases upward: row 0 of the text
/// file is the topmost row and carries the maximum `y`. Coordinates
/// outside the grid (including negatives) are representable and resolve
/// to `None` through [`Maze::tile_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate one step away in `direction`.
    pub fn step(self, direction: Direction) -> Coordinate {
        let (dx, dy) = direction.delta();
        Coordinate::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An immutable rectangular grid of tiles with one entrance and one exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    /// Grid rows in text order: outer index 0 is the first line read
    tiles: Vec<Vec<Tile>>,
    entrance: Coordinate,
    exit: Coordinate,
}

impl Maze {
    /// Parse a maze from its line-oriented text form.
    ///
    /// One line per row, all rows the same length, symbols restricted to
    /// `.` (corridor), `e` (entrance, exactly one), `x` (exit, exactly
    /// one) and `#` (wall). Checks run per character, so the first
    /// offending character anywhere aborts parsing; the missing
    /// entrance/exit checks run only after the whole grid is consumed.
    pub fn parse(text: &str) -> Result<Maze, MazeError> {
        let mut rows: Vec<Vec<Tile>> = Vec::new();
        let mut entrance: Option<(usize, usize)> = None;
        let mut exit: Option<(usize, usize)> = None;
        let mut expected = 0;

        for (row, line) in text.lines().enumerate() {
            let actual = line.chars().count();
            if row == 0 {
                expected = actual;
            } else if actual != expected {
                return Err(MazeError::Ragged {
                    row,
                    expected,
                    actual,
                });
            }

            let mut tiles = Vec::with_capacity(actual);
            for (column, symbol) in line.chars().enumerate() {
                if !matches!(symbol, '.' | 'e' | 'x' | '#') {
                    return Err(MazeError::UnknownSymbol {
                        symbol,
                        row,
                        column,
                    });
                }

                let tile = Tile::from_symbol(symbol);
                match tile {
                    Tile::Entrance => {
                        if entrance.is_some() {
                            return Err(MazeError::MultipleEntrances { row, column });
                        }
                        entrance = Some((row, column));
                    }
                    Tile::Exit => {
                        if exit.is_some() {
                            return Err(MazeError::MultipleExits { row, column });
                        }
                        exit = Some((row, column));
                    }
                    _ => {}
                }
                tiles.push(tile);
            }
            rows.push(tiles);
        }

        if rows.is_empty() {
            return Err(MazeError::Empty);
        }
        let (entrance_row, entrance_column) = entrance.ok_or(MazeError::NoEntrance)?;
        let (exit_row, exit_column) = exit.ok_or(MazeError::NoExit)?;

        let height = rows.len();
        Ok(Maze {
            tiles: rows,
            entrance: cartesian(height, entrance_row, entrance_column),
            exit: cartesian(height, exit_row, exit_column),
        })
    }

    /// Read a maze from a text file and parse it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Maze, Error> {
        let text = fs::read_to_string(path)?;
        Ok(Maze::parse(&text)?)
    }

    /// Rebuild a maze from an already-typed grid, re-running the
    /// structural checks. Used when restoring persisted search state, so
    /// a snapshot cannot resurrect a maze that parsing would reject.
    pub(crate) fn from_grid(rows: Vec<Vec<Tile>>) -> Result<Maze, MazeError> {
        if rows.is_empty() {
            return Err(MazeError::Empty);
        }
        let expected = rows[0].len();
        let mut entrance: Option<(usize, usize)> = None;
        let mut exit: Option<(usize, usize)> = None;

        for (row, tiles) in rows.iter().enumerate() {
            if tiles.len() != expected {
                return Err(MazeError::Ragged {
                    row,
                    expected,
                    actual: tiles.len(),
                });
            }
            for (column, tile) in tiles.iter().enumerate() {
                match tile {
                    Tile::Entrance => {
                        if entrance.is_some() {
                            return Err(MazeError::MultipleEntrances { row, column });
                        }
                        entrance = Some((row, column));
                    }
                    Tile::Exit => {
                        if exit.is_some() {
                            return Err(MazeError::MultipleExits { row, column });
                        }
                        exit = Some((row, column));
                    }
                    _ => {}
                }
            }
        }

        let (entrance_row, entrance_column) = entrance.ok_or(MazeError::NoEntrance)?;
        let (exit_row, exit_column) = exit.ok_or(MazeError::NoExit)?;

        let height = rows.len();
        Ok(Maze {
            tiles: rows,
            entrance: cartesian(height, entrance_row, entrance_column),
            exit: cartesian(height, exit_row, exit_column),
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.tiles[0].len()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.tiles.len()
    }

    /// The grid rows, in text order (row 0 is the topmost).
    pub fn tiles(&self) -> &[Vec<Tile>] {
        &self.tiles
    }

    /// Cartesian position of the unique entrance tile.
    pub fn entrance(&self) -> Coordinate {
        self.entrance
    }

    /// Cartesian position of the unique exit tile.
    pub fn exit(&self) -> Coordinate {
        self.exit
    }

    /// The tile at a cartesian coordinate (bounds-checked).
    ///
    /// Returns `None` outside `[0, width) x [0, height)`; otherwise maps
    /// to the internal grid with `row = height - y - 1`, `col = x`.
    pub fn tile_at(&self, coordinate: Coordinate) -> Option<Tile> {
        if coordinate.x < 0 || coordinate.y < 0 {
            return None;
        }
        let (x, y) = (coordinate.x as usize, coordinate.y as usize);
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.tiles[self.height() - y - 1][x])
    }

    /// Cartesian coordinate of the tile at internal grid indices;
    /// inverse of the mapping used by [`Maze::tile_at`].
    pub fn coordinate_of(&self, row: usize, column: usize) -> Coordinate {
        cartesian(self.height(), row, column)
    }

    /// The neighboring tile one step away in `direction`, or `None` at
    /// a grid boundary.
    pub fn adjacent_tile(&self, from: Coordinate, direction: Direction) -> Option<Tile> {
        self.tile_at(from.step(direction))
    }

    /// Textual dump of the grid with cartesian row labels and column
    /// indices, for display and debugging.
    pub fn render(&self) -> String {
        self.render_with(|_| None)
    }

    /// Render the grid, letting `overlay` substitute the symbol at any
    /// coordinate. Used by the route finder to mark route and dead-end
    /// tiles.
    pub(crate) fn render_with(&self, overlay: impl Fn(Coordinate) -> Option<char>) -> String {
        let mut lines = Vec::with_capacity(self.height() + 2);
        for (row, tiles) in self.tiles.iter().enumerate() {
            let y = self.height() - row - 1;
            let cells: String = tiles
                .iter()
                .enumerate()
                .map(|(column, tile)| {
                    let coordinate = self.coordinate_of(row, column);
                    let symbol = overlay(coordinate).unwrap_or_else(|| tile.to_symbol());
                    format!("{} ", symbol)
                })
                .collect();
            lines.push(format!("{:>3}  {}", y, cells.trim_end()));
        }
        lines.push(String::new());
        let footer: String = (0..self.width()).map(|c| format!("{} ", c % 10)).collect();
        lines.push(format!("     {}", footer.trim_end()));
        lines.join("\n")
    }
}

/// Convert internal grid indices to a cartesian coordinate: text row 0
/// is the top of the grid and carries the maximum `y`.
fn cartesian(height: usize, row: usize, column: usize) -> Coordinate {
    Coordinate::new(column as i32, (height - row - 1) as i32)
}
