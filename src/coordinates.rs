use std::convert::From;
use std::fmt;

use crate::units::{ColumnIndex, RowIndex};

/// Distance between two real cells. The cell half way between them is the passage.
pub const CELL_STEP: u32 = 2;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: u32,
    pub column: u32,
}

impl GridCoordinate {
    pub fn new(row: u32, column: u32) -> GridCoordinate {
        GridCoordinate { row: row, column: column }
    }

    pub fn from_indices(row: RowIndex, column: ColumnIndex) -> GridCoordinate {
        GridCoordinate::new(row.0, column.0)
    }

    /// Real cells sit on even rows and even columns.
    #[inline]
    pub fn is_real_cell(&self) -> bool {
        self.row % 2 == 0 && self.column % 2 == 0
    }

    /// The fixed wall cells between passages: odd row and odd column.
    /// These can never be carved.
    #[inline]
    pub fn is_wall_lattice(&self) -> bool {
        self.row % 2 == 1 && self.column % 2 == 1
    }

    /// Move `steps` cells in a direction.
    /// Returns None if that would take either index below zero, or overflow.
    pub fn offset(&self, dir: CompassPrimary, steps: u32) -> Option<GridCoordinate> {
        let (row, column) = (self.row, self.column);
        match dir {
            CompassPrimary::East => column.checked_add(steps).map(|c| GridCoordinate::new(row, c)),
            CompassPrimary::South => row.checked_add(steps).map(|r| GridCoordinate::new(r, column)),
            CompassPrimary::West => column.checked_sub(steps).map(|c| GridCoordinate::new(row, c)),
            CompassPrimary::North => row.checked_sub(steps).map(|r| GridCoordinate::new(r, column)),
        }
    }

    /// The cell exactly half way between `self` and `other`.
    ///
    /// Only meaningful when the two coordinates differ by an even amount on each axis,
    /// as double step neighbours always do.
    pub fn midpoint(&self, other: GridCoordinate) -> GridCoordinate {
        // a + (b - a) / 2 without going through signed arithmetic
        let half_way = |a: u32, b: u32| if b >= a { a + (b - a) / 2 } else { a - (a - b) / 2 };
        GridCoordinate::new(half_way(self.row, other.row),
                            half_way(self.column, other.column))
    }
}

impl From<(u32, u32)> for GridCoordinate {
    fn from(row_column_pair: (u32, u32)) -> GridCoordinate {
        GridCoordinate::new(row_column_pair.0, row_column_pair.1)
    }
}

impl From<GridCoordinate> for (u32, u32) {
    fn from(coord: GridCoordinate) -> (u32, u32) {
        (coord.row, coord.column)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

/// The order candidate neighbours are listed in before any shuffling:
/// right, bottom, left, top.
pub const NEIGHBOUR_ORDER: [CompassPrimary; 4] = [CompassPrimary::East,
                                                  CompassPrimary::South,
                                                  CompassPrimary::West,
                                                  CompassPrimary::North];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_cells_and_wall_lattice() {
        assert!(GridCoordinate::new(0, 0).is_real_cell());
        assert!(GridCoordinate::new(4, 2).is_real_cell());
        assert!(!GridCoordinate::new(0, 1).is_real_cell());
        assert!(!GridCoordinate::new(0, 1).is_wall_lattice());
        assert!(GridCoordinate::new(1, 3).is_wall_lattice());
        assert!(!GridCoordinate::new(1, 3).is_real_cell());
    }

    #[test]
    fn offsets() {
        let c = GridCoordinate::new(2, 2);
        assert_eq!(c.offset(CompassPrimary::East, 2), Some(GridCoordinate::new(2, 4)));
        assert_eq!(c.offset(CompassPrimary::South, 2), Some(GridCoordinate::new(4, 2)));
        assert_eq!(c.offset(CompassPrimary::West, 2), Some(GridCoordinate::new(2, 0)));
        assert_eq!(c.offset(CompassPrimary::North, 2), Some(GridCoordinate::new(0, 2)));

        let origin = GridCoordinate::new(0, 0);
        assert_eq!(origin.offset(CompassPrimary::West, 2), None);
        assert_eq!(origin.offset(CompassPrimary::North, 2), None);
        assert_eq!(GridCoordinate::new(1, 1).offset(CompassPrimary::North, 2), None);
        assert_eq!(GridCoordinate::new(0, u32::MAX).offset(CompassPrimary::East, 2), None);
    }

    #[test]
    fn midpoint_in_every_direction() {
        let c = GridCoordinate::new(4, 4);
        let gc = |r, col| GridCoordinate::new(r, col);
        assert_eq!(c.midpoint(gc(4, 6)), gc(4, 5));
        assert_eq!(c.midpoint(gc(6, 4)), gc(5, 4));
        assert_eq!(c.midpoint(gc(4, 2)), gc(4, 3));
        assert_eq!(c.midpoint(gc(2, 4)), gc(3, 4));
        assert_eq!(gc(0, 0).midpoint(gc(0, 2)), gc(0, 1));
    }

    #[test]
    fn tuple_conversions() {
        let c = GridCoordinate::from((3, 7));
        assert_eq!(c, GridCoordinate::new(3, 7));
        let pair: (u32, u32) = c.into();
        assert_eq!(pair, (3, 7));
        assert_eq!(format!("{}", c), "(3, 7)");
    }
}
