/// Counter stored per grid position.
///
/// While neighbours are being tallied it holds the neighbour count (0-8);
/// once the generation is settled it is either `DEAD` (0) or `ALIVE` (1).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct CellState(pub u8);

impl CellState {
    pub const DEAD: Self = Self(0);
    pub const ALIVE: Self = Self(1);

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        self.0 != 0
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Self::ALIVE } else { Self::DEAD }
    }

    /// Add one neighbour to the tally
    #[inline]
    pub fn bump(&mut self) {
        self.0 += 1;
    }

    /// Resolve a neighbour tally into the next state:
    /// 1. Fewer than 2 neighbours starves
    /// 2. Exactly 3 neighbours expands
    /// 3. 4 or more overpopulates
    /// 4. Exactly 2 keeps whatever the cell was before
    pub const fn settle(tally: Self, prior: Self) -> Self {
        match tally.0 {
            0 | 1 => Self::DEAD,
            2 => Self::from_alive(prior.is_alive()),
            3 => Self::ALIVE,
            _ => Self::DEAD,
        }
    }
}
