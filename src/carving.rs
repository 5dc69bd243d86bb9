use bit_set::BitSet;
use error_chain::bail;
use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::graph::{NodeIndex, UnGraph};

use crate::coordinates::GridCoordinate;
use crate::errors::*;
use crate::grid::MazeGrid;
use crate::units::{CellsCount, PassagesCount};
use crate::utils;

/// Which recorded coordinates are left out of the wall list handed back to the caller.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum EndpointTrimming {
    /// Drop the first and last coordinates the traversal recorded. The first is always the
    /// start cell, the last is whichever cell the traversal reached last, which is not
    /// necessarily the end cell.
    TraversalEnds,
    /// Drop exactly the start and end cells, wherever the traversal recorded them.
    StartAndEnd,
}

impl Default for EndpointTrimming {
    fn default() -> EndpointTrimming {
        EndpointTrimming::TraversalEnds
    }
}

/// A passage carved between two real cells.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Link {
    pub from: GridCoordinate,
    pub to: GridCoordinate,
    pub passage: GridCoordinate,
}

/// Everything a single depth first carve recorded, in the order it happened.
#[derive(Debug, Clone)]
pub struct Carving {
    grid: MazeGrid,
    start: GridCoordinate,
    end: GridCoordinate,
    trace: Vec<GridCoordinate>,
    links: Vec<Link>,
    carved: BitSet,
}

impl Carving {
    pub(crate) fn new(grid: MazeGrid, start: GridCoordinate, end: GridCoordinate) -> Carving {
        let real_cells = grid.real_cells_count().0;
        Carving {
            grid: grid,
            start: start,
            end: end,
            trace: Vec::with_capacity(2 * real_cells),
            links: Vec::with_capacity(real_cells),
            carved: BitSet::with_capacity(grid.size().0),
        }
    }

    pub(crate) fn record_cell(&mut self, cell: GridCoordinate) {
        self.mark_carved(cell);
        self.trace.push(cell);
    }

    pub(crate) fn record_passage(&mut self,
                                 from: GridCoordinate,
                                 to: GridCoordinate,
                                 passage: GridCoordinate) {
        self.mark_carved(passage);
        self.trace.push(passage);
        self.links.push(Link {
            from: from,
            to: to,
            passage: passage,
        });
    }

    fn mark_carved(&mut self, coord: GridCoordinate) {
        if let Some(index) = self.grid.row_major_index(coord) {
            self.carved.insert(index);
        }
    }

    #[inline]
    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> GridCoordinate {
        self.start
    }

    #[inline]
    pub fn end(&self) -> GridCoordinate {
        self.end
    }

    /// Every carved coordinate, real cells and passages, in carving order.
    #[inline]
    pub fn trace(&self) -> &[GridCoordinate] {
        &self.trace
    }

    #[inline]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// The cell the traversal recorded last before backtracking all the way out.
    pub fn last_visited(&self) -> Option<GridCoordinate> {
        self.trace.last().cloned()
    }

    /// Was this coordinate carved, as a cell or a passage. Always false off the grid.
    pub fn contains(&self, coord: GridCoordinate) -> bool {
        self.grid
            .row_major_index(coord)
            .map_or(false, |index| self.carved.contains(index))
    }

    pub fn cells_count(&self) -> CellsCount {
        if self.trace.is_empty() {
            CellsCount(0)
        } else {
            CellsCount(self.links.len() + 1)
        }
    }

    pub fn passages_count(&self) -> PassagesCount {
        PassagesCount(self.links.len())
    }

    pub fn walls(&self, trimming: EndpointTrimming) -> Vec<GridCoordinate> {
        match trimming {
            EndpointTrimming::TraversalEnds => {
                if self.trace.len() < 2 {
                    vec![]
                } else {
                    self.trace[1..self.trace.len() - 1].to_vec()
                }
            }
            EndpointTrimming::StartAndEnd => {
                self.trace
                    .iter()
                    .cloned()
                    .filter(|coord| *coord != self.start && *coord != self.end)
                    .collect()
            }
        }
    }

    /// Real cells as nodes, passages as edges weighted by the in-between coordinate.
    pub fn passage_graph(&self) -> UnGraph<GridCoordinate, GridCoordinate> {
        let cells = self.cells_count().0;
        let mut graph = UnGraph::with_capacity(cells, self.links.len());
        let mut node_indices = utils::coordinate_map::<NodeIndex>(cells);

        if !self.trace.is_empty() {
            node_indices.insert(self.start, graph.add_node(self.start));
        }
        for link in &self.links {
            let from = *node_indices.entry(link.from)
                .or_insert_with(|| graph.add_node(link.from));
            let to = *node_indices.entry(link.to)
                .or_insert_with(|| graph.add_node(link.to));
            graph.add_edge(from, to, link.passage);
        }

        graph
    }

    /// No coordinate was carved twice.
    pub fn has_unique_entries(&self) -> bool {
        let mut seen = utils::coordinate_set(self.trace.len());
        self.trace.iter().all(|coord| seen.insert(*coord))
    }

    /// A spanning tree over the carved cells: one component, no cycles and so
    /// exactly one fewer passage than cells.
    pub fn is_perfect(&self) -> bool {
        let graph = self.passage_graph();
        self.has_unique_entries() && graph.node_count() == graph.edge_count() + 1 &&
        connected_components(&graph) == 1 && !is_cyclic_undirected(&graph)
    }

    /// `is_perfect` as a `Result`, for callers that want to stop on a broken maze.
    pub fn verify(&self) -> Result<()> {
        if !self.is_perfect() {
            let graph = self.passage_graph();
            bail!(ErrorKind::ImperfectMaze(graph.node_count(), graph.edge_count()));
        }
        Ok(())
    }
}
