use error_chain::bail;
use smallvec::SmallVec;

use crate::coordinates::{GridCoordinate, CELL_STEP, NEIGHBOUR_ORDER};
use crate::errors::*;
use crate::units::{CellsCount, ColumnsCount, RowsCount};

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;

const MIN_DIMENSION: usize = 3;

/// The shape of a maze grid.
///
/// Both dimensions are odd so that real cells (even row, even column) line the grid edges
/// and every position between two real cells is a passage candidate. The grid holds no cell
/// contents; mazes are described by the coordinates carved out of it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MazeGrid {
    rows: RowsCount,
    columns: ColumnsCount,
}

impl MazeGrid {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<MazeGrid> {
        check_dimension("rows", rows.0)?;
        check_dimension("columns", columns.0)?;
        Ok(MazeGrid {
            rows: rows,
            columns: columns,
        })
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline(always)]
    pub fn size(&self) -> CellsCount {
        CellsCount(self.rows.0 * self.columns.0)
    }

    /// Number of even row, even column positions.
    pub fn real_cells_count(&self) -> CellsCount {
        CellsCount(((self.rows.0 + 1) / 2) * ((self.columns.0 + 1) / 2))
    }

    #[inline]
    pub fn contains(&self, coord: GridCoordinate) -> bool {
        (coord.row as usize) < self.rows.0 && (coord.column as usize) < self.columns.0
    }

    #[inline]
    pub fn is_real_cell(&self, coord: GridCoordinate) -> bool {
        self.contains(coord) && coord.is_real_cell()
    }

    #[inline]
    pub fn is_wall_lattice(&self, coord: GridCoordinate) -> bool {
        self.contains(coord) && coord.is_wall_lattice()
    }

    /// Row major index, e.g. for bit set keys. None if the coordinate is not on the grid.
    #[inline]
    pub fn row_major_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row as usize * self.columns.0 + coord.column as usize)
        } else {
            None
        }
    }

    /// The real cells two steps away from `coord` that lie on the grid, listed right, bottom,
    /// left, top.
    ///
    /// The outer edge is never stepped over, so the border of the grid stays closed.
    pub fn double_step_neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        NEIGHBOUR_ORDER.iter()
            .filter_map(|dir| coord.offset(*dir, CELL_STEP))
            .filter(|neighbour| self.contains(*neighbour))
            .collect()
    }

    /// Start and end must be distinct real cells on the grid.
    pub fn check_endpoints(&self, start: GridCoordinate, end: GridCoordinate) -> Result<()> {
        self.check_real_cell(start)?;
        self.check_real_cell(end)?;
        if start == end {
            bail!(ErrorKind::CoincidentEndpoints(start));
        }
        Ok(())
    }

    fn check_real_cell(&self, coord: GridCoordinate) -> Result<()> {
        if !self.contains(coord) {
            bail!(ErrorKind::CoordinateOutOfBounds(coord));
        }
        if !coord.is_real_cell() {
            bail!(ErrorKind::NotARealCell(coord));
        }
        Ok(())
    }
}

fn check_dimension(axis: &'static str, length: usize) -> Result<()> {
    if length < MIN_DIMENSION {
        bail!(ErrorKind::DimensionTooSmall(axis, length));
    }
    if length % 2 == 0 {
        bail!(ErrorKind::EvenDimension(axis, length));
    }
    Ok(())
}
