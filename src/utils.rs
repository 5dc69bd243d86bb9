use fnv::FnvBuildHasher;
use std::collections::{HashMap, HashSet};

use crate::coordinates::GridCoordinate;

pub type CoordinateSet = HashSet<GridCoordinate, FnvBuildHasher>;
pub type CoordinateMap<V> = HashMap<GridCoordinate, V, FnvBuildHasher>;

/// An empty FNV-hashed coordinate set with room for `capacity` entries.
pub fn coordinate_set(capacity: usize) -> CoordinateSet {
    HashSet::with_capacity_and_hasher(capacity, FnvBuildHasher::default())
}

pub fn coordinate_map<V>(capacity: usize) -> CoordinateMap<V> {
    HashMap::with_capacity_and_hasher(capacity, FnvBuildHasher::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_set_distinguishes_row_from_column() {
        let mut set = coordinate_set(4);
        assert!(set.insert(GridCoordinate::new(1, 2)));
        assert!(set.insert(GridCoordinate::new(2, 1)));
        assert!(!set.insert(GridCoordinate::new(1, 2)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn coordinate_map_keys() {
        let mut map = coordinate_map(2);
        map.insert(GridCoordinate::new(0, 4), "corner");
        assert_eq!(map.get(&GridCoordinate::new(0, 4)), Some(&"corner"));
        assert_eq!(map.get(&GridCoordinate::new(4, 0)), None);
    }
}
