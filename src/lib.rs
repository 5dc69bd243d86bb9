//! **maze_carver** generates perfect mazes on odd sized grids with a randomized depth first
//! backtracker, producing the ordered list of coordinates a presentation layer lays out.

pub mod carving;
pub mod coordinates;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod units;
mod utils;
