mod coord;
mod cell;
mod grid;
mod patterns;
mod life;
mod age;

pub use coord::{Bounds, Coord};
pub use cell::CellState;
pub use grid::Grid;
pub use patterns::{Orientation, Pattern, presets, LIVE_MARKER};
pub use life::LifeBuffer;
pub use age::AgeMap;

/// Output resolution in pixels
pub const SCREEN_WIDTH: u32 = 1024;
pub const SCREEN_HEIGHT: u32 = 768;

/// Side length of the pixel block drawn for one cell
pub const PIXEL_PER_GRID: u32 = 2;

pub const GRID_WIDTH: u32 = SCREEN_WIDTH / PIXEL_PER_GRID;
pub const GRID_HEIGHT: u32 = SCREEN_HEIGHT / PIXEL_PER_GRID;

/// The compiled-in playfield
pub const GRID_BOUNDS: Bounds = Bounds::new(GRID_WIDTH, GRID_HEIGHT);
