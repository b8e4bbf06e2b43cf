// Domain layer - sparse toroidal Life engine
pub mod domain;

// Application layer - simulation state and configuration
pub mod application;

// Infrastructure layer - palette, surfaces, drawing
pub mod rendering;

// Re-exports for convenience
pub use domain::{AgeMap, Bounds, CellState, Coord, Grid, LifeBuffer, Orientation, Pattern, presets};
pub use application::{ConfigError, LifeConfig, Simulation};
pub use rendering::{FrameBuffer, Palette, Surface};
