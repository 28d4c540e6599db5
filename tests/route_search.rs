//! Integration tests for the full routing pipeline: maze text -> parse ->
//! step-wise search -> snapshot -> resume, with verification that resumed
//! searches behave exactly like uninterrupted ones.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use maze_router::{Coordinate, Error, Maze, RouteFinder, SnapshotError};

/// A maze with a cycle and several branches; solvable.
const BRANCHING: &str = "\
#######
#e..#x#
#.#.#.#
#.....#
#######";

/// The exit is sealed off behind walls; unsolvable.
const SEALED_EXIT: &str = "\
x####
#####
#e...
#.#.#";

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("maze-router-{}-{}.json", std::process::id(), name))
}

fn run_to_completion(finder: &mut RouteFinder) -> usize {
    let mut steps = 0;
    loop {
        steps += 1;
        if finder.step().expect("maze is solvable") {
            return steps;
        }
    }
}

#[test]
fn test_search_finds_a_connected_route() {
    let maze = Arc::new(Maze::parse(BRANCHING).expect("maze parses"));
    let mut finder = RouteFinder::new(Arc::clone(&maze));
    run_to_completion(&mut finder);

    let route = finder.route();
    assert_eq!(route.first(), Some(&maze.entrance()));
    assert_eq!(route.last(), Some(&maze.exit()));

    // The route is a path: consecutive tiles are grid neighbors, every
    // tile is navigable, and none of them was ever marked removed.
    for pair in route.windows(2) {
        let distance = (pair[0].x - pair[1].x).abs() + (pair[0].y - pair[1].y).abs();
        assert_eq!(distance, 1, "route tiles {} and {} not adjacent", pair[0], pair[1]);
    }
    for coordinate in route {
        assert!(maze.tile_at(*coordinate).unwrap().is_navigable());
        assert!(!finder.removed_tiles().contains(coordinate));
    }
}

#[test]
fn test_resumed_search_matches_uninterrupted_search() {
    let maze = Arc::new(Maze::parse(BRANCHING).expect("maze parses"));
    let mut original = RouteFinder::new(maze);
    for _ in 0..5 {
        original.step().expect("search still in progress");
    }

    let path = temp_path("mid-search");
    original.save(&path).expect("save succeeds");
    let mut resumed = RouteFinder::load(&path).expect("load succeeds");
    fs::remove_file(&path).ok();

    assert_eq!(resumed.route(), original.route());
    assert_eq!(resumed.removed_tiles(), original.removed_tiles());
    assert_eq!(resumed.is_finished(), original.is_finished());
    assert_eq!(resumed.maze().tiles(), original.maze().tiles());

    // Both copies must converge on the identical route.
    run_to_completion(&mut original);
    run_to_completion(&mut resumed);
    assert_eq!(resumed.route(), original.route());
    assert_eq!(resumed.removed_tiles(), original.removed_tiles());
}

#[test]
fn test_round_trip_of_empty_and_finished_states() {
    let maze = Arc::new(Maze::parse(BRANCHING).expect("maze parses"));

    // Before the first step.
    let fresh = RouteFinder::new(Arc::clone(&maze));
    let path = temp_path("fresh");
    fresh.save(&path).expect("save succeeds");
    let loaded = RouteFinder::load(&path).expect("load succeeds");
    assert!(loaded.route().is_empty());
    assert!(loaded.removed_tiles().is_empty());
    assert!(!loaded.is_finished());

    // After completion.
    let mut solved = RouteFinder::new(maze);
    run_to_completion(&mut solved);
    solved.save(&path).expect("save succeeds");
    let loaded = RouteFinder::load(&path).expect("load succeeds");
    fs::remove_file(&path).ok();
    assert!(loaded.is_finished());
    assert_eq!(loaded.route(), solved.route());
}

#[test]
fn test_load_reports_missing_file_as_io() {
    let err = RouteFinder::load(temp_path("does-not-exist")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_load_rejects_malformed_content() {
    let path = temp_path("garbage");
    fs::write(&path, "not a snapshot").expect("write succeeds");
    let err = RouteFinder::load(&path).unwrap_err();
    fs::remove_file(&path).ok();
    assert!(matches!(err, Error::Snapshot(SnapshotError::Json(_))));
}

#[test]
fn test_unsolvable_search_terminates_within_the_tile_bound() {
    let maze = Arc::new(Maze::parse(SEALED_EXIT).expect("maze parses"));
    let total_tiles = maze.width() * maze.height();
    let mut finder = RouteFinder::new(maze);

    let mut steps = 0;
    let err = loop {
        steps += 1;
        match finder.step() {
            Ok(finished) => assert!(!finished, "sealed exit cannot be reached"),
            Err(e) => break e,
        }
        assert!(
            steps <= 2 * total_tiles + 1,
            "search did not terminate within the tile bound"
        );
    };
    assert!(matches!(err, Error::NoRouteFound));

    // The failure leaves the dead-end state inspectable: the entrance is
    // still on the route and nothing overlaps.
    assert!(finder.route().contains(&finder.maze().entrance()));
    for coordinate in finder.route() {
        assert!(!finder.removed_tiles().contains(coordinate));
    }
}

#[test]
fn test_three_by_three_scenario() {
    // Rows top to bottom: #e#, #.#, #x#, with the entrance at (1,2) and
    // the exit at (1,0).
    let maze = Arc::new(Maze::parse("#e#\n#.#\n#x#").expect("maze parses"));
    assert_eq!(maze.width(), 3);
    assert_eq!(maze.height(), 3);
    assert_eq!(maze.entrance(), Coordinate::new(1, 2));
    assert_eq!(maze.exit(), Coordinate::new(1, 0));

    let mut finder = RouteFinder::new(maze);
    for _ in 0..4 {
        finder.step().expect("corridor maze is solvable");
    }
    assert!(finder.is_finished());
    let expected = [
        Coordinate::new(1, 2),
        Coordinate::new(1, 1),
        Coordinate::new(1, 0),
    ];
    assert_eq!(finder.route(), &expected);
    assert!(finder.removed_tiles().is_empty());
}
