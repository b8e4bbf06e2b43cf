use super::{CellState, Coord, Grid};

/// Character marking a live cell in pattern art
pub const LIVE_MARKER: char = 'X';

/// Axis mirroring applied when stamping a pattern.
/// Bit 0 mirrors columns, bit 1 mirrors rows. There is no 90° rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Orientation(u8);

impl Orientation {
    pub const IDENTITY: Self = Self(0);

    /// Build from any integer; only the low two bits are kept
    pub const fn from_bits(bits: u32) -> Self {
        Self((bits & 0b11) as u8)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn flips_columns(self) -> bool {
        self.0 & 0b01 != 0
    }

    pub const fn flips_rows(self) -> bool {
        self.0 & 0b10 != 0
    }

    /// All four mirror orientations
    pub fn all() -> [Orientation; 4] {
        [Self(0), Self(1), Self(2), Self(3)]
    }

    const fn step(flip: bool) -> i64 {
        if flip { -1 } else { 1 }
    }
}

/// ASCII-art seed shape. Rows are expected to share one width.
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    rows: &'static [&'static str],
}

impl Pattern {
    pub const fn new(name: &'static str, description: &'static str, rows: &'static [&'static str]) -> Self {
        Self { name, description, rows }
    }

    pub fn rows(&self) -> &[&'static str] {
        self.rows
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(|row| row.chars().count()).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// (column, row) of every live marker
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.chars()
                .enumerate()
                .filter(|&(_, ch)| ch == LIVE_MARKER)
                .map(move |(c, _)| (c, r))
        })
    }

    /// Write the pattern into the grid with its first character at `origin`.
    /// Every character is written, so blanks overwrite with explicit dead
    /// entries. Positions wrap around the torus.
    pub fn stamp(&self, grid: &mut Grid, origin: Coord, orientation: Orientation) {
        let bounds = grid.bounds();
        let step_x = Orientation::step(orientation.flips_columns());
        let step_y = Orientation::step(orientation.flips_rows());

        for (r, row) in self.rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let target = bounds.offset(origin, c as i64 * step_x, r as i64 * step_y);
                grid.set(target, CellState::from_alive(ch == LIVE_MARKER));
            }
        }
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            &[
                "                         X             ",
                "                       X X             ",
                "             XX      XX            XX  ",
                "            X   X    XX            XX  ",
                " XX        X     X   XX                ",
                " XX        X   X XX    X X             ",
                "           X     X       X             ",
                "            X   X                      ",
                "             XX                        ",
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            &[
                " X ",
                "  X",
                "XXX",
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", &["XXX"])
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", &["XX", "XX"])
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            &[
                "XX  ",
                "X   ",
                "   X",
                "  XX",
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            &[
                " X  X",
                "X    ",
                "X   X",
                "XXXX ",
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            &[
                " XX",
                "XX ",
                " X ",
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider_gun(),
            glider(),
            blinker(),
            block(),
            beacon(),
            lwss(),
            r_pentomino(),
        ]
    }
}
