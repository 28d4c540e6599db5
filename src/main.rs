//! CLI entry point for the maze router.
//!
//! Usage:
//!   maze-router render <maze.txt>
//!   maze-router solve <maze.txt> [--trace] [--save <snapshot.json>]
//!   maze-router step <snapshot.json> [--count <n>]
//!
//! `solve` runs the search to completion; `step` advances a saved search
//! by a few ticks and writes it back, so a run can be driven and observed
//! incrementally across invocations.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use maze_router::{Maze, RouteFinder};

#[derive(Parser)]
#[command(name = "maze-router")]
#[command(about = "Step-wise depth-first maze route finder")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a maze file and print the grid
    Render {
        /// Path to the maze text file
        file: PathBuf,
    },
    /// Search for a route from entrance to exit
    Solve {
        /// Path to the maze text file
        file: PathBuf,

        /// Print the board after every step
        #[arg(long)]
        trace: bool,

        /// Write the final search state to this snapshot file
        #[arg(long, value_name = "SNAPSHOT")]
        save: Option<PathBuf>,
    },
    /// Advance a saved search by a number of steps and write it back
    Step {
        /// Path to a snapshot produced by `solve --save` or `step`
        snapshot: PathBuf,

        /// Number of steps to advance
        #[arg(long, default_value = "1")]
        count: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Render { file } => render(&file),
        Commands::Solve { file, trace, save } => solve(&file, trace, save.as_deref()),
        Commands::Step { snapshot, count } => advance(&snapshot, count),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn render(file: &Path) -> maze_router::Result<()> {
    let maze = Maze::from_file(file)?;
    println!("{}", maze.render());
    Ok(())
}

fn solve(file: &Path, trace: bool, save: Option<&Path>) -> maze_router::Result<()> {
    let maze = Arc::new(Maze::from_file(file)?);
    let mut finder = RouteFinder::new(maze);

    let mut steps = 0usize;
    loop {
        let finished = match finder.step() {
            Ok(finished) => finished,
            Err(e) => {
                // Show the dead-end state the search stopped in.
                eprintln!("{}", finder.render());
                return Err(e);
            }
        };
        steps += 1;
        if trace {
            println!("step {}", steps);
            println!("{}\n", finder.render());
        }
        if finished {
            break;
        }
    }

    println!("{}", finder.render());
    println!(
        "Route found in {} steps: {} tiles on the route, {} dead ends.",
        steps,
        finder.route().len(),
        finder.removed_tiles().len()
    );
    if let Some(path) = save {
        finder.save(path)?;
        println!("Search state written to {}", path.display());
    }
    Ok(())
}

fn advance(snapshot: &Path, count: usize) -> maze_router::Result<()> {
    let mut finder = RouteFinder::load(snapshot)?;

    for _ in 0..count {
        let finished = match finder.step() {
            Ok(finished) => finished,
            Err(e) => {
                eprintln!("{}", finder.render());
                return Err(e);
            }
        };
        if finished {
            break;
        }
    }
    finder.save(snapshot)?;

    println!("{}", finder.render());
    if finder.is_finished() {
        println!("Route complete: {} tiles.", finder.route().len());
    } else {
        println!(
            "Route in progress: {} tiles on the route, {} dead ends.",
            finder.route().len(),
            finder.removed_tiles().len()
        );
    }
    Ok(())
}
