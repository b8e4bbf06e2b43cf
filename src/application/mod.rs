mod config;
mod simulation;

pub use config::{ConfigError, LifeConfig, MAX_PALETTE_SIZE, SEED_COPIES};
pub use simulation::Simulation;
