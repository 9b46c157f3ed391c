//! A small benchmarking harness for the sorting algorithms.
//!
//! A benchmark run picks a list shape and an algorithm, builds a fresh
//! seeded-random list per trial, times exactly one sort invocation, and
//! summarizes the collected samples in a [`Report`].

pub mod stats;

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::hint::black_box;
use std::str::FromStr;
use std::time::{Duration, Instant};

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::{CircularList, DoublyList, SinglyList};

/// The list shape a benchmark runs against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Singly,
    Doubly,
    Circular,
}

impl Shape {
    /// All shapes, in report order.
    pub const ALL: [Shape; 3] = [Shape::Singly, Shape::Doubly, Shape::Circular];

    pub fn name(self) -> &'static str {
        match self {
            Shape::Singly => "singly",
            Shape::Doubly => "doubly",
            Shape::Circular => "circular",
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "singly" => Ok(Shape::Singly),
            "doubly" => Ok(Shape::Doubly),
            "circular" => Ok(Shape::Circular),
            _ => Err(SelectorError::UnknownShape(s.to_string())),
        }
    }
}

/// The sorting algorithm a benchmark runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl Algorithm {
    /// All algorithms, in report order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bubble" => Ok(Algorithm::Bubble),
            "selection" => Ok(Algorithm::Selection),
            "insertion" => Ok(Algorithm::Insertion),
            "merge" => Ok(Algorithm::Merge),
            "quick" => Ok(Algorithm::Quick),
            _ => Err(SelectorError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// An unrecognized shape or algorithm name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorError {
    UnknownShape(String),
    UnknownAlgorithm(String),
}

impl Display for SelectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SelectorError::UnknownShape(name) => {
                write!(f, "unknown shape {:?} (expected one of", name)?;
                for shape in &Shape::ALL {
                    write!(f, " {}", shape)?;
                }
                f.write_str(")")
            }
            SelectorError::UnknownAlgorithm(name) => {
                write!(f, "unknown algorithm {:?} (expected one of", name)?;
                for algorithm in &Algorithm::ALL {
                    write!(f, " {}", algorithm)?;
                }
                f.write_str(")")
            }
        }
    }
}

impl Error for SelectorError {}

fn random_values(size: usize, rng: &mut ChaCha8Rng) -> Vec<i64> {
    (0..size).map(|_| rng.gen_range(0..1000)).collect()
}

/// Builds a list of the given shape from `values` and times exactly one
/// invocation of the given algorithm on it.
pub fn run_trial(shape: Shape, algorithm: Algorithm, values: &[i64]) -> Duration {
    match shape {
        Shape::Singly => trial_singly(algorithm, values),
        Shape::Doubly => trial_doubly(algorithm, values),
        Shape::Circular => trial_circular(algorithm, values),
    }
}

fn trial_singly(algorithm: Algorithm, values: &[i64]) -> Duration {
    let mut list: SinglyList<i64> = values.iter().copied().collect();
    let start = Instant::now();
    match algorithm {
        Algorithm::Bubble => list.bubble_sort_by(i64::cmp),
        Algorithm::Selection => list.selection_sort_by(i64::cmp),
        Algorithm::Insertion => list.insertion_sort_by(i64::cmp),
        Algorithm::Merge => {
            black_box(list.merge_sort_by(i64::cmp));
        }
        Algorithm::Quick => {
            black_box(list.quick_sort_by(i64::cmp));
        }
    }
    let elapsed = start.elapsed();
    black_box(&list);
    elapsed
}

fn trial_doubly(algorithm: Algorithm, values: &[i64]) -> Duration {
    let mut list: DoublyList<i64> = values.iter().copied().collect();
    let start = Instant::now();
    match algorithm {
        Algorithm::Bubble => list.bubble_sort_by(i64::cmp),
        Algorithm::Selection => list.selection_sort_by(i64::cmp),
        Algorithm::Insertion => list.insertion_sort_by(i64::cmp),
        Algorithm::Merge => {
            black_box(list.merge_sort_by(i64::cmp));
        }
        Algorithm::Quick => {
            black_box(list.quick_sort_by(i64::cmp));
        }
    }
    let elapsed = start.elapsed();
    black_box(&list);
    elapsed
}

fn trial_circular(algorithm: Algorithm, values: &[i64]) -> Duration {
    let mut list: CircularList<i64> = values.iter().copied().collect();
    let start = Instant::now();
    match algorithm {
        Algorithm::Bubble => list.bubble_sort_by(i64::cmp),
        Algorithm::Selection => list.selection_sort_by(i64::cmp),
        Algorithm::Insertion => list.insertion_sort_by(i64::cmp),
        Algorithm::Merge => {
            black_box(list.merge_sort_by(i64::cmp));
        }
        Algorithm::Quick => {
            black_box(list.quick_sort_by(i64::cmp));
        }
    }
    let elapsed = start.elapsed();
    black_box(&list);
    elapsed
}

/// Runs `trials` timed trials of `algorithm` over freshly generated random
/// lists of `size` elements in the given shape.
///
/// The element stream is drawn from a `ChaCha8Rng` seeded with `seed`, so a
/// run is reproducible input-wise (the timings, of course, are not).
pub fn run_benchmark(
    shape: Shape,
    algorithm: Algorithm,
    trials: usize,
    size: usize,
    seed: u64,
) -> Report {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut samples = Vec::with_capacity(trials);
    for _ in 0..trials {
        let values = random_values(size, &mut rng);
        samples.push(run_trial(shape, algorithm, &values).as_secs_f64());
    }
    Report::new(shape, algorithm, size, samples)
}

/// The timing summary of one benchmark run.
#[derive(Clone, Debug)]
pub struct Report {
    pub shape: Shape,
    pub algorithm: Algorithm,
    pub size: usize,
    pub trials: usize,
    pub total_secs: f64,
    pub arithmetic_mean: Option<f64>,
    pub geometric_mean: Option<f64>,
    pub harmonic_mean: Option<f64>,
    pub variance: Option<f64>,
    pub std_deviation: Option<f64>,
}

impl Report {
    fn new(shape: Shape, algorithm: Algorithm, size: usize, samples: Vec<f64>) -> Self {
        Self {
            shape,
            algorithm,
            size,
            trials: samples.len(),
            total_secs: samples.iter().sum(),
            arithmetic_mean: stats::arithmetic_mean(&samples),
            geometric_mean: stats::geometric_mean(&samples),
            harmonic_mean: stats::harmonic_mean(&samples),
            variance: stats::variance(&samples),
            std_deviation: stats::std_deviation(&samples),
        }
    }
}

struct Seconds(Option<f64>);

impl Display for Seconds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{:.9} s", value),
            None => f.write_str("n/a"),
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "test: {} sort on {} list", self.algorithm, self.shape)?;
        writeln!(f, "elements: {}, trials: {}", self.size, self.trials)?;
        writeln!(f, "total time:      {:.9} s", self.total_secs)?;
        writeln!(f, "arithmetic mean: {}", Seconds(self.arithmetic_mean))?;
        writeln!(f, "geometric mean:  {}", Seconds(self.geometric_mean))?;
        writeln!(f, "harmonic mean:   {}", Seconds(self.harmonic_mean))?;
        writeln!(f, "variance:        {}", Seconds(self.variance))?;
        write!(f, "std deviation:   {}", Seconds(self.std_deviation))
    }
}

#[cfg(test)]
mod tests {
    use super::{run_benchmark, Algorithm, SelectorError, Shape};

    #[test]
    fn selectors_round_trip() {
        for shape in Shape::ALL {
            assert_eq!(shape.name().parse::<Shape>(), Ok(shape));
        }
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn unknown_selectors_are_errors() {
        assert_eq!(
            "heap".parse::<Shape>(),
            Err(SelectorError::UnknownShape("heap".to_string()))
        );
        assert_eq!(
            "bogo".parse::<Algorithm>(),
            Err(SelectorError::UnknownAlgorithm("bogo".to_string()))
        );
        let message = "bogo".parse::<Algorithm>().unwrap_err().to_string();
        assert!(message.contains("bogo"));
        assert!(message.contains("quick"));
    }

    #[test]
    fn full_matrix_smoke() {
        for shape in Shape::ALL {
            for algorithm in Algorithm::ALL {
                let report = run_benchmark(shape, algorithm, 1, 40, 7);
                assert_eq!(report.trials, 1);
                assert_eq!(report.size, 40);
                assert!(report.total_secs >= 0.0);
                assert!(report.arithmetic_mean.is_some());
            }
        }
    }

    #[test]
    fn empty_run_reports_na() {
        let report = run_benchmark(Shape::Singly, Algorithm::Bubble, 0, 10, 1);
        assert_eq!(report.trials, 0);
        assert_eq!(report.arithmetic_mean, None);
        assert!(report.to_string().contains("n/a"));
    }

    #[test]
    fn report_renders_every_line() {
        let report = run_benchmark(Shape::Doubly, Algorithm::Merge, 3, 50, 42);
        let text = report.to_string();
        assert!(text.contains("merge sort on doubly list"));
        assert!(text.contains("elements: 50, trials: 3"));
        assert!(text.contains("std deviation:"));
    }
}
