use std::collections::BTreeSet;

use life_wasm::{
    Bounds, Coord, FrameBuffer, LifeConfig, Orientation, Simulation, presets,
    domain::{GRID_HEIGHT, GRID_WIDTH, PIXEL_PER_GRID, SCREEN_HEIGHT, SCREEN_WIDTH},
};

#[test]
fn test_grid_matches_screen_resolution() {
    assert_eq!(GRID_WIDTH * PIXEL_PER_GRID, SCREEN_WIDTH);
    assert_eq!(GRID_HEIGHT * PIXEL_PER_GRID, SCREEN_HEIGHT);
}

#[test]
fn test_glider_gun_keeps_firing() {
    let mut sim = Simulation::with_bounds(LifeConfig::default(), Bounds::new(120, 120));
    sim.stamp(&presets::glider_gun(), Coord::new(10, 10), Orientation::IDENTITY);
    let initial = sim.population();

    for _ in 0..60 {
        sim.step();
    }
    // Two full periods later the gun is intact and has emitted gliders
    assert!(sim.population() > initial);
}

#[test]
fn test_mirrored_guns_are_mirror_images() {
    let bounds = Bounds::new(100, 100);
    let mut plain = Simulation::with_bounds(LifeConfig::default(), bounds);
    let mut mirrored = Simulation::with_bounds(LifeConfig::default(), bounds);
    plain.stamp(&presets::glider_gun(), Coord::new(10, 40), Orientation::IDENTITY);
    mirrored.stamp(&presets::glider_gun(), Coord::new(89, 40), Orientation::from_bits(1));

    for _ in 0..30 {
        plain.step();
        mirrored.step();
    }

    let reflected: BTreeSet<_> = plain
        .grid()
        .live_cells()
        .map(|c| Coord::new(99 - c.x, c.y))
        .collect();
    let actual: BTreeSet<_> = mirrored.grid().live_cells().collect();
    assert_eq!(reflected, actual);
}

#[test]
fn test_full_frame_renders_every_live_cell() {
    let mut sim = Simulation::seeded(LifeConfig::default(), 2024);
    let mut frame = FrameBuffer::new(SCREEN_WIDTH as usize, SCREEN_HEIGHT as usize);

    sim.tick(&mut frame);

    let lit = frame.pixels().iter().filter(|&&p| p != [0, 0, 0, 255]).count();
    let block = (PIXEL_PER_GRID * PIXEL_PER_GRID) as usize;
    assert_eq!(lit, sim.population() * block);
}

#[test]
fn test_ages_track_only_live_cells() {
    let mut sim = Simulation::seeded(LifeConfig::default(), 5);
    for _ in 0..25 {
        sim.step();
        assert_eq!(sim.ages().len(), sim.population());
        assert!(sim.ages().iter().all(|(coord, age)| age >= 1 && sim.grid().get(coord).is_alive()));
    }
}
