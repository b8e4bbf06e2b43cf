//! Performance benchmark comparing serial and rayon neighbour tallying

use std::time::Instant;
use life_wasm::{LifeBuffer, Orientation, presets, Bounds, Coord};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Board of the given size with `guns` glider guns scattered over it
fn seeded_board(size: u32, guns: usize) -> LifeBuffer {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    let mut life = LifeBuffer::new(Bounds::new(size, size));
    let gun = presets::glider_gun();
    for _ in 0..guns {
        let origin = Coord::new(rng.random_range(0..size), rng.random_range(0..size));
        gun.stamp(life.current_mut(), origin, Orientation::from_bits(rng.random_range(0..4)));
    }
    life
}

fn benchmark(mut life: LifeBuffer, iterations: u32, parallel: bool) -> f64 {
    let start = Instant::now();
    for _ in 0..iterations {
        if parallel {
            life.advance_parallel();
        } else {
            life.advance();
        }
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Sparse Life Benchmark ===\n");

    let boards = [(512, 10), (1024, 40), (2048, 160), (4096, 640)];
    let iterations = 50;

    println!("{:>10} {:>8} {:>10} {:>12} {:>12} {:>10}",
        "Size", "Guns", "Cells", "Serial", "Parallel", "Speedup");
    println!("{:-<68}", "");

    for (size, guns) in boards {
        let board = seeded_board(size, guns);
        let population = board.current().population();

        let serial_ms = benchmark(board.clone(), iterations, false);
        let parallel_ms = benchmark(board, iterations, true);

        println!(
            "{:>10} {:>8} {:>10} {:>10.2}ms {:>10.2}ms {:>9.1}x",
            format!("{}x{}", size, size),
            guns,
            population,
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
