//! Performance benchmark comparing the serial and parallel transitions

use std::time::Instant;
use life_sim::{Algorithm, Grid};

fn benchmark(algorithm: Algorithm, rows: usize, cols: usize, iterations: u32) -> f64 {
    let mut grid = Grid::random(rows, cols, 0.5);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = algorithm.next_grid(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Transition Benchmark ===\n");

    let sizes = [(30, 50), (100, 100), (300, 500), (1000, 1000), (2000, 2000)];
    let iterations = 20;

    println!("{:>12} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<50}", "");

    for (rows, cols) in sizes {
        let serial_ms = benchmark(Algorithm::Serial, rows, cols, iterations);
        let parallel_ms = benchmark(Algorithm::Parallel, rows, cols, iterations);

        println!(
            "{:>12} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", rows, cols),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let cells = 1000 * 1000;
    let parallel_ms = benchmark(Algorithm::Parallel, 1000, 1000, iterations);
    println!(
        "\nParallel throughput at 1000x1000: {:.1}M cells/sec",
        (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
