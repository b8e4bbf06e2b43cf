use std::collections::HashMap;

use super::{Coord, Grid};

/// Consecutive generations each live position has survived.
/// Only drives colouring; the simulation never reads it.
#[derive(Clone, Debug, Default)]
pub struct AgeMap {
    ages: HashMap<Coord, u32>,
}

impl AgeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Age of a position, 0 if it is not tracked
    pub fn get(&self, coord: Coord) -> u32 {
        self.ages.get(&coord).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.ages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ages.is_empty()
    }

    /// Forget positions that are no longer alive, then age every live one.
    /// Freshly born cells start at 1.
    pub fn advance(&mut self, grid: &Grid) {
        self.ages.retain(|&coord, _| grid.get(coord).is_alive());

        for coord in grid.live_cells() {
            *self.ages.entry(coord).or_insert(0) += 1;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, u32)> + '_ {
        self.ages.iter().map(|(&c, &a)| (c, a))
    }
}
