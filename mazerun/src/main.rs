//! mazerun — solve a turning-cost maze from a text file.
//!
//! Usage: `mazerun <maze-file>`. Prints the lowest possible score and the
//! number of cells lying on at least one best path.

use std::env;
use std::fs;

use log::info;
use turnpike_core::Maze;
use turnpike_paths::solve;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = env::args().nth(1).ok_or("usage: mazerun <maze-file>")?;
    let text = fs::read_to_string(&path)?;
    let maze = Maze::parse(&text)?;
    info!("loaded {}: {} cells", path, maze.bounds().len());

    let best = solve(&maze)?;
    println!("lowest score: {}", best.cost);
    println!("best-path cells: {}", best.cell_count());
    Ok(())
}
