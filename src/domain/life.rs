//! Double-buffered sparse generation stepping.
//!
//! Each step swaps the buffers, tallies neighbours of every live cell of
//! the old generation into the fresh buffer and then settles the tallies.
//! Only positions next to a live cell are ever visited, so the cost scales
//! with population rather than with grid area.

use std::collections::HashMap;
use std::mem;

use rayon::prelude::*;

use super::{Bounds, CellState, Coord, Grid};

/// The current generation plus the buffer it was computed from.
#[derive(Clone, Debug)]
pub struct LifeBuffer {
    current: Grid,
    previous: Grid,
}

impl LifeBuffer {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            current: Grid::new(bounds),
            previous: Grid::new(bounds),
        }
    }

    pub const fn bounds(&self) -> Bounds {
        self.current.bounds()
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Write access for seeding; edits land in the next read source
    pub fn current_mut(&mut self) -> &mut Grid {
        &mut self.current
    }

    pub fn previous(&self) -> &Grid {
        &self.previous
    }

    /// Advance one generation (serial)
    pub fn advance(&mut self) {
        self.swap_and_clear();

        let bounds = self.previous.bounds();
        for coord in self.previous.live_cells() {
            for neighbour in bounds.neighbours(coord) {
                self.current.entry(neighbour).bump();
            }
        }

        self.settle();
    }

    /// Advance one generation, tallying neighbours on the rayon pool.
    /// Produces exactly the same grid as `advance`.
    pub fn advance_parallel(&mut self) {
        self.swap_and_clear();

        let bounds = self.previous.bounds();
        let tallies = self
            .previous
            .cells()
            .par_iter()
            .filter(|(_, state)| state.is_alive())
            .fold(HashMap::new, |mut acc: HashMap<Coord, CellState>, (&coord, _)| {
                for neighbour in bounds.neighbours(coord) {
                    acc.entry(neighbour).or_default().bump();
                }
                acc
            })
            .reduce(HashMap::new, merge_tallies);

        *self.current.cells_mut() = tallies;
        self.settle();
    }

    fn swap_and_clear(&mut self) {
        mem::swap(&mut self.current, &mut self.previous);
        self.current.clear();
    }

    /// Turn neighbour tallies into dead/alive and drop the dead entries
    fn settle(&mut self) {
        let previous = &self.previous;
        for (coord, state) in self.current.cells_mut().iter_mut() {
            *state = CellState::settle(*state, previous.get(*coord));
        }
        self.current.prune();
    }
}

fn merge_tallies(
    mut into: HashMap<Coord, CellState>,
    mut from: HashMap<Coord, CellState>,
) -> HashMap<Coord, CellState> {
    if into.len() < from.len() {
        mem::swap(&mut into, &mut from);
    }
    for (coord, tally) in from {
        into.entry(coord).or_default().0 += tally.0;
    }
    into
}
