use std::collections::HashMap;

use super::{Bounds, CellState, Coord};

/// Sparse toroidal grid. Only touched positions are stored; a missing key
/// reads as `CellState::DEAD`.
#[derive(Clone, Debug)]
pub struct Grid {
    bounds: Bounds,
    cells: HashMap<Coord, CellState>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            cells: HashMap::new(),
        }
    }

    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Stored value at the wrapped position, or dead if it was never written
    pub fn get(&self, coord: Coord) -> CellState {
        let coord = self.bounds.wrap(coord.x as i64, coord.y as i64);
        self.cells.get(&coord).copied().unwrap_or_default()
    }

    /// Store a value at the wrapped position. Dead values are kept as
    /// explicit entries; use `prune` to drop them.
    pub fn set(&mut self, coord: Coord, state: CellState) {
        let coord = self.bounds.wrap(coord.x as i64, coord.y as i64);
        self.cells.insert(coord, state);
    }

    /// Mutable access to a counter, inserting a dead entry when absent
    pub(crate) fn entry(&mut self, coord: Coord) -> &mut CellState {
        self.cells.entry(coord).or_default()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Number of stored entries, dead ones included
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.values().filter(|s| s.is_alive()).count()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Drop every dead entry
    pub fn prune(&mut self) {
        self.cells.retain(|_, state| state.is_alive());
    }

    /// Iterate over live positions only
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .filter(|(_, state)| state.is_alive())
            .map(|(&c, _)| c)
    }

    pub(crate) fn cells(&self) -> &HashMap<Coord, CellState> {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut HashMap<Coord, CellState> {
        &mut self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_reads_dead() {
        let grid = Grid::new(Bounds::new(4, 4));
        assert_eq!(grid.get(Coord::new(2, 3)), CellState::DEAD);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_set_keeps_dead_entries_until_pruned() {
        let mut grid = Grid::new(Bounds::new(4, 4));
        grid.set(Coord::new(0, 0), CellState::ALIVE);
        grid.set(Coord::new(1, 0), CellState::DEAD);

        assert_eq!(grid.len(), 2);
        assert_eq!(grid.population(), 1);

        grid.prune();
        assert_eq!(grid.len(), 1);
        assert!(!grid.contains(Coord::new(1, 0)));
    }

    #[test]
    fn test_set_wraps_out_of_range_coordinates() {
        let mut grid = Grid::new(Bounds::new(4, 4));
        grid.set(Coord::new(5, 1), CellState::ALIVE);
        grid.set(Coord::new(2, 9), CellState::ALIVE);

        let mut keys: Vec<_> = grid.live_cells().collect();
        keys.sort();
        assert_eq!(keys, vec![Coord::new(1, 1), Coord::new(2, 1)]);
        assert!(grid.live_cells().all(|c| grid.bounds().contains(c)));
        assert_eq!(grid.get(Coord::new(9, 5)), CellState::ALIVE);
    }

    #[test]
    fn test_live_cells_skip_dead() {
        let mut grid = Grid::new(Bounds::new(4, 4));
        grid.set(Coord::new(3, 3), CellState::ALIVE);
        grid.set(Coord::new(2, 2), CellState::DEAD);

        let live: Vec<_> = grid.live_cells().collect();
        assert_eq!(live, vec![Coord::new(3, 3)]);
    }
}
