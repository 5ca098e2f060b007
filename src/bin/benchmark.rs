//! Performance benchmark comparing serial and parallel steps

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;
use terminal_life::domain::{Algorithm, Grid, random_grid};

fn seeded_grid(size: usize) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(size as u64);
    // ~30% density
    random_grid(size, size, size * size * 3 / 10, &mut rng).expect("density below capacity")
}

fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> f64 {
    let mut grid = seeded_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = algorithm.evolve(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [15, 100, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(Algorithm::Serial, size, iterations);
        let parallel_ms = benchmark(Algorithm::Parallel, size, iterations);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms.max(f64::EPSILON)
        );
    }
}
