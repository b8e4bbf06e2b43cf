use log::{debug, info, trace};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::domain::{AgeMap, Bounds, Coord, Grid, LifeBuffer, Orientation, Pattern, presets, GRID_BOUNDS};
use crate::rendering::{self, Palette, Surface};
use super::LifeConfig;

/// Simulation orchestrates one board: the double buffer, the age map used
/// for colouring and the palette. The host owns it and drives `tick`.
pub struct Simulation {
    life: LifeBuffer,
    ages: AgeMap,
    palette: Palette,
    config: LifeConfig,
    generation: u64,
}

impl Simulation {
    /// Empty board at the compiled-in resolution
    pub fn new(config: LifeConfig) -> Self {
        Self::with_bounds(config, GRID_BOUNDS)
    }

    /// Empty board of arbitrary size
    pub fn with_bounds(config: LifeConfig, bounds: Bounds) -> Self {
        Self {
            life: LifeBuffer::new(bounds),
            ages: AgeMap::new(),
            palette: Palette::new(config.palette_size),
            config,
            generation: 0,
        }
    }

    /// Board seeded with `seed_copies` glider guns at random positions and
    /// mirror orientations. A seed fixed in the config wins over `seed`.
    pub fn seeded(config: LifeConfig, seed: u64) -> Self {
        let seed = config.seed.unwrap_or(seed);
        let copies = config.seed_copies;
        let mut sim = Self::new(config);
        let mut rng = SmallRng::seed_from_u64(seed);

        info!("Seeding {} glider guns with seed {}", copies, seed);
        sim.scatter(&mut rng, &presets::glider_gun(), copies);
        sim
    }

    /// Stamp `copies` of a pattern at random wrapped origins
    pub fn scatter(&mut self, rng: &mut impl Rng, pattern: &Pattern, copies: usize) {
        let bounds = self.life.bounds();
        for _ in 0..copies {
            let origin = Coord::new(
                rng.random_range(0..bounds.width),
                rng.random_range(0..bounds.height),
            );
            let orientation = Orientation::from_bits(rng.random_range(0..4));
            self.stamp(pattern, origin, orientation);
        }
    }

    pub fn stamp(&mut self, pattern: &Pattern, origin: Coord, orientation: Orientation) {
        debug!(
            "Stamping {} at ({}, {}) orientation {}",
            pattern.name,
            origin.x,
            origin.y,
            orientation.bits()
        );
        pattern.stamp(self.life.current_mut(), origin, orientation);
    }

    /// Advance one generation and age the survivors
    pub fn step(&mut self) {
        if self.config.parallel {
            self.life.advance_parallel();
        } else {
            self.life.advance();
        }
        self.ages.advance(self.life.current());
        self.generation += 1;

        trace!(
            "Generation {}: {} live cells",
            self.generation,
            self.population()
        );
    }

    /// One host frame: advance the configured number of generations, then draw
    pub fn tick(&mut self, surface: &mut impl Surface) {
        for _ in 0..self.config.generations_per_frame {
            self.step();
        }
        self.render(surface);
    }

    pub fn render(&self, surface: &mut impl Surface) {
        rendering::draw_grid(
            surface,
            self.life.current(),
            &self.ages,
            &self.palette,
            self.config.age_rate,
        );
    }

    pub fn grid(&self) -> &Grid {
        self.life.current()
    }

    pub fn ages(&self) -> &AgeMap {
        &self.ages
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.life.current().population()
    }
}
