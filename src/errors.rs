// Create the Error, ErrorKind, ResultExt, and Result types
// Result is a typedef of std `Result` with the error type our own `Error`
// Defines the From conversions that let ? work for our `Error`.
// ResultExt adds the `chain_err` trait method.
#![allow(deprecated)]

use error_chain::*;

use crate::coordinates::GridCoordinate;

error_chain! {

    errors {
        EvenDimension(axis: &'static str, length: usize) {
            description("grid dimension is even")
            display("grid {} count {} must be odd", axis, length)
        }
        DimensionTooSmall(axis: &'static str, length: usize) {
            description("grid dimension is too small")
            display("grid {} count {} must be at least 3", axis, length)
        }
        CoordinateOutOfBounds(coord: GridCoordinate) {
            description("coordinate lies outside the grid")
            display("coordinate {} lies outside the grid", coord)
        }
        NotARealCell(coord: GridCoordinate) {
            description("coordinate is not a real cell")
            display("coordinate {} is not a real cell, row and column must both be even", coord)
        }
        CoincidentEndpoints(coord: GridCoordinate) {
            description("start and end are the same cell")
            display("start and end are both {}", coord)
        }
        ImperfectMaze(cells: usize, passages: usize) {
            description("carved maze is not a spanning tree")
            display("carved maze with {} cells and {} passages is not a spanning tree", cells, passages)
        }
    }
}
