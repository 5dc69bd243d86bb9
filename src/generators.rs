use bit_set::BitSet;
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

pub use crate::carving::{Carving, EndpointTrimming};
use crate::coordinates::GridCoordinate;
use crate::errors::*;
use crate::grid::{CoordinateSmallVec, MazeGrid};

/// Carves perfect mazes with the recursive backtracker algorithm.
///
/// Starting from the start cell it walks to a random unvisited real cell two steps away,
/// opening the cell in between, and backs up along its own path whenever it reaches a dead
/// end. When it has backed all the way up to the start every reachable real cell has been
/// visited exactly once and the passages form a spanning tree.
///
/// The "recursion" is an explicit frontier stack so large grids do not grow the call stack.
#[derive(Debug, Clone)]
pub struct MazeGenerator<R: Rng = XorShiftRng> {
    rng: R,
    trimming: EndpointTrimming,
}

impl MazeGenerator<XorShiftRng> {
    /// Same seed, same grid, same endpoints: same maze.
    pub fn from_seed(seed: u64) -> MazeGenerator<XorShiftRng> {
        MazeGenerator::new(XorShiftRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> MazeGenerator<XorShiftRng> {
        MazeGenerator::new(XorShiftRng::from_entropy())
    }
}

impl<R: Rng> MazeGenerator<R> {
    pub fn new(rng: R) -> MazeGenerator<R> {
        MazeGenerator {
            rng: rng,
            trimming: EndpointTrimming::default(),
        }
    }

    pub fn with_trimming(mut self, trimming: EndpointTrimming) -> MazeGenerator<R> {
        self.trimming = trimming;
        self
    }

    #[inline]
    pub fn trimming(&self) -> EndpointTrimming {
        self.trimming
    }

    /// The maze layout as the ordered list of carved coordinates, trimmed according to this
    /// generator's `EndpointTrimming`.
    pub fn generate(&mut self,
                    grid: &MazeGrid,
                    start: GridCoordinate,
                    end: GridCoordinate)
                    -> Result<Vec<GridCoordinate>> {
        let carving = self.carve(grid, start, end)?;
        Ok(carving.walls(self.trimming))
    }

    /// Run the backtracker and keep the full record of what it did.
    pub fn carve(&mut self,
                 grid: &MazeGrid,
                 start: GridCoordinate,
                 end: GridCoordinate)
                 -> Result<Carving> {
        grid.check_endpoints(start, end)?;

        let mut carving = Carving::new(*grid, start, end);
        let mut visited = BitSet::with_capacity(grid.size().0);
        let mut frontier = vec![start];

        while let Some(&current) = frontier.last() {
            if mark_visited(grid, &mut visited, current) {
                carving.record_cell(current);
            }

            let mut candidates = unvisited_neighbours(grid, current, &visited);
            candidates.shuffle(&mut self.rng);

            match candidates.pop() {
                Some(next) => {
                    let passage = current.midpoint(next);
                    mark_visited(grid, &mut visited, passage);
                    carving.record_passage(current, next, passage);
                    frontier.push(next);
                }
                None => {
                    trace!("dead end at {}, backtracking", current);
                    frontier.pop();
                }
            }
        }

        debug!("carved {} cells and {} passages on a {}x{} grid from {}",
               carving.cells_count().0,
               carving.passages_count().0,
               grid.rows().0,
               grid.columns().0,
               start);

        Ok(carving)
    }
}

/// Generate one maze with a freshly seeded generator and the default trimming.
pub fn recursive_backtracker(grid: &MazeGrid,
                             start: GridCoordinate,
                             end: GridCoordinate)
                             -> Result<Vec<GridCoordinate>> {
    MazeGenerator::from_entropy().generate(grid, start, end)
}

fn unvisited_neighbours(grid: &MazeGrid,
                        coord: GridCoordinate,
                        visited: &BitSet)
                        -> CoordinateSmallVec {
    let mut neighbours = grid.double_step_neighbours(coord);
    neighbours.retain(|neighbour| {
        grid.row_major_index(*neighbour)
            .map_or(false, |index| !visited.contains(index))
    });
    neighbours
}

/// Returns true the first time a coordinate is marked.
#[inline]
fn mark_visited(grid: &MazeGrid, visited: &mut BitSet, coord: GridCoordinate) -> bool {
    grid.row_major_index(coord).map_or(false, |index| visited.insert(index))
}
