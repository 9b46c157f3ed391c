//! Benchmark driver for the linked-list sorting algorithms.
//!
//! Runs the shape × algorithm matrix (or a selected slice of it) and prints
//! one timing report per combination.
//!
//! Run (example):
//!   cargo run --release --bin bench_sorts -- --trials=10 --size=1000 --shape=doubly --algo=quick

use chainsort::bench::{run_benchmark, Algorithm, Shape};

#[derive(Debug, Clone)]
struct Config {
    trials: usize,
    size: usize,
    seed: u64,
    shape: Option<Shape>,
    algorithm: Option<Algorithm>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trials: 10,
            size: 1000,
            seed: 42,
            shape: None,
            algorithm: None,
        }
    }
}

fn fail(message: String) -> ! {
    eprintln!("{}", message);
    std::process::exit(2);
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> T {
    match value.parse() {
        Ok(value) => value,
        Err(_) => fail(format!("invalid {}: {:?}", key, value)),
    }
}

fn parse_args() -> Config {
    let mut cfg = Config::default();
    for arg in std::env::args().skip(1) {
        let mut split = arg.splitn(2, '=');
        let key = split.next().unwrap_or("");
        let val = split.next();

        match (key, val) {
            ("--trials", Some(v)) => cfg.trials = parse_number("--trials", v),
            ("--size", Some(v)) => cfg.size = parse_number("--size", v),
            ("--seed", Some(v)) => cfg.seed = parse_number("--seed", v),
            ("--shape", Some(v)) => match v.parse() {
                Ok(shape) => cfg.shape = Some(shape),
                Err(err) => fail(err.to_string()),
            },
            ("--algo", Some(v)) => match v.parse() {
                Ok(algorithm) => cfg.algorithm = Some(algorithm),
                Err(err) => fail(err.to_string()),
            },
            ("--help", _) | ("-h", _) => {
                eprintln!(
                    "bench_sorts options:\n  \
--trials=N (default 10)\n  \
--size=N (elements per list, default 1000)\n  \
--seed=N (default 42)\n  \
--shape=singly|doubly|circular (default: all)\n  \
--algo=bubble|selection|insertion|merge|quick (default: all)"
                );
                std::process::exit(0);
            }
            _ => fail(format!("unknown arg: {} (use --help)", arg)),
        }
    }

    if cfg.trials == 0 {
        fail("--trials must be > 0".to_string());
    }
    if cfg.size == 0 {
        fail("--size must be > 0".to_string());
    }
    cfg
}

fn main() {
    let cfg = parse_args();

    let shapes: Vec<Shape> = match cfg.shape {
        Some(shape) => vec![shape],
        None => Shape::ALL.to_vec(),
    };
    let algorithms: Vec<Algorithm> = match cfg.algorithm {
        Some(algorithm) => vec![algorithm],
        None => Algorithm::ALL.to_vec(),
    };

    println!("chainsort benchmark suite");
    println!(
        "trials={} size={} seed={}",
        cfg.trials, cfg.size, cfg.seed
    );

    for &shape in &shapes {
        println!();
        println!("=== {} list ===", shape);
        println!("{:-<40}", "");
        for &algorithm in &algorithms {
            let report = run_benchmark(shape, algorithm, cfg.trials, cfg.size, cfg.seed);
            println!("{}", report);
            println!("{:-<40}", "");
        }
    }
}
