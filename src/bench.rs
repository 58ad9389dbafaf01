//! # Bench — Sequential Benchmark Harness
//!
//! Drives every candidate in an inclusive range through the five testers,
//! timing each call and scoring every non-trial verdict against the
//! trial-division result for the same candidate. One `CandidateRecord` is
//! produced per iteration and folded into per-tester `Accumulator`s, so the
//! run carries no mutable state beyond the fold itself.
//!
//! The loop is deliberately single-threaded and strictly ordered: the trial
//! verdict is appended to the ground-truth history before any other tester
//! runs for that candidate, and accuracy comparisons read the history at
//! index `n - start`.
//!
//! Progress goes to stderr via `tracing` at most every 30 seconds; the
//! final report renders on stdout through `Display`.

use std::fmt;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::{aks, fermat, miller_rabin, trial, wilson};

/// Minimum spacing between progress log lines.
const PROGRESS_INTERVAL: Duration = Duration::from_secs(30);

/// Inclusive candidate range plus witness count for the probabilistic
/// testers.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub start: u64,
    pub end: u64,
    /// Witness rounds for Fermat and Miller-Rabin.
    pub rounds: u32,
    /// Seed for witness selection; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

/// One tester's outcome for one candidate.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub verdict: bool,
    pub elapsed: Duration,
}

/// All five samples for one candidate.
#[derive(Debug, Clone, Copy)]
pub struct CandidateRecord {
    pub n: u64,
    pub trial: Sample,
    pub wilson: Sample,
    pub fermat: Sample,
    pub miller_rabin: Sample,
    pub aks: Sample,
}

/// Per-tester running totals, built by folding candidate records.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accumulator {
    pub total_time: Duration,
    pub correct: u64,
}

impl Accumulator {
    fn absorb(&mut self, sample: Sample, truth: bool) {
        self.total_time += sample.elapsed;
        if sample.verdict == truth {
            self.correct += 1;
        }
    }
}

/// Final state of a benchmark run.
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub range_size: u64,
    /// Trial verdicts indexed by `n - start`.
    pub ground_truth: Vec<bool>,
    pub trial: Accumulator,
    pub wilson: Accumulator,
    pub fermat: Accumulator,
    pub miller_rabin: Accumulator,
    pub aks: Accumulator,
}

impl BenchReport {
    fn accuracy(&self, acc: &Accumulator) -> f64 {
        acc.correct as f64 * 100.0 / self.range_size as f64
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.fermat.correct)?;
        writeln!(f, "Finished benchmark")?;
        // Trial division is the baseline the others are scored against, so
        // its accuracy is the literal 100, not a computed ratio.
        writeln!(
            f,
            "Trial Primality Test. Accuracy: {:.3}\tTime total: {:.3}",
            100.0,
            self.trial.total_time.as_secs_f64()
        )?;
        writeln!(
            f,
            "Wilson Primality Test. Accuracy: {:.3}\tTime total: {:.3}",
            self.accuracy(&self.wilson),
            self.wilson.total_time.as_secs_f64()
        )?;
        writeln!(
            f,
            "Fermat Primality Test. Accuracy: {:.3}\tTime total: {:.3}",
            self.accuracy(&self.fermat),
            self.fermat.total_time.as_secs_f64()
        )?;
        writeln!(
            f,
            "Miller-Rabin Primality Test. Accuracy: {:.3}\tTime total: {:.3}",
            self.accuracy(&self.miller_rabin),
            self.miller_rabin.total_time.as_secs_f64()
        )?;
        writeln!(
            f,
            "AKS Primality Test. Accuracy: {:.3}\tTime total: {:.3}",
            self.accuracy(&self.aks),
            self.aks.total_time.as_secs_f64()
        )
    }
}

fn timed(test: impl FnOnce() -> bool) -> Sample {
    let t0 = Instant::now();
    let verdict = test();
    Sample {
        verdict,
        elapsed: t0.elapsed(),
    }
}

/// Run all five testers against one candidate. The trial verdict is pushed
/// to the ground-truth history before any other tester runs.
fn measure_candidate<R: Rng>(
    n: u64,
    rounds: u32,
    rng: &mut R,
    ground_truth: &mut Vec<bool>,
) -> CandidateRecord {
    let trial = timed(|| trial::is_prime(n));
    ground_truth.push(trial.verdict);

    let wilson = timed(|| wilson::is_prime(n));
    let fermat = timed(|| fermat::is_probable_prime(n, rounds, rng));
    let miller_rabin = timed(|| miller_rabin::is_probable_prime(n, rounds, rng));
    let aks = timed(|| aks::is_prime(n));

    CandidateRecord {
        n,
        trial,
        wilson,
        fermat,
        miller_rabin,
        aks,
    }
}

/// Run the benchmark over `[config.start, config.end]` inclusive.
///
/// Requires `start <= end`. Prints the "Benchmarking..." banner on stdout,
/// then grinds through the range candidate by candidate.
pub fn run(config: &BenchConfig) -> BenchReport {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let range_size = config.end - config.start + 1;
    let mut ground_truth = Vec::with_capacity(range_size as usize);
    let mut trial_acc = Accumulator::default();
    let mut wilson_acc = Accumulator::default();
    let mut fermat_acc = Accumulator::default();
    let mut miller_rabin_acc = Accumulator::default();
    let mut aks_acc = Accumulator::default();

    println!("Benchmarking...");
    let run_start = Instant::now();
    let mut last_report = Instant::now();
    let mut tested = 0u64;

    for n in config.start..=config.end {
        let record = measure_candidate(n, config.rounds, &mut rng, &mut ground_truth);
        let truth = ground_truth[(n - config.start) as usize];

        trial_acc.absorb(record.trial, truth);
        wilson_acc.absorb(record.wilson, truth);
        fermat_acc.absorb(record.fermat, truth);
        miller_rabin_acc.absorb(record.miller_rabin, truth);
        aks_acc.absorb(record.aks, truth);

        tested += 1;
        if last_report.elapsed() >= PROGRESS_INTERVAL {
            let rate = tested as f64 / run_start.elapsed().as_secs_f64();
            info!(
                candidate = n,
                tested,
                rate = format_args!("{:.2}", rate),
                "benchmark progress"
            );
            last_report = Instant::now();
        }
    }

    BenchReport {
        range_size,
        ground_truth,
        trial: trial_acc,
        wilson: wilson_acc,
        fermat: fermat_acc,
        miller_rabin: miller_rabin_acc,
        aks: aks_acc,
    }
}
