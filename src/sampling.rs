//! Monte-Carlo estimation of expected edit distances.
//!
//! For every length `n` up to the maximum, random pairs of length-`n`
//! sequences are aligned and their full distance tables are folded into a
//! running mean. Entry `(i, j)` of the result for length `n` estimates the
//! expected distance between random sequences of lengths `i` and `j`.
use instant::Instant;
use log::{debug, info};
use rand::{thread_rng, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::ControlFlow;

use crate::alphabet::{Alphabet, Symbol};
use crate::edit_distance::EditDistanceTable;
use crate::error::{Error, Result};
use crate::matrix::DistanceMatrix;
use crate::params::SamplingParams;
use crate::random_sequence::{fill_random_sequence, random_sequence};
use crate::running_mean::RunningMean;
use crate::stats::SamplingStats;

/// Number of samples folded by one parallel task.
#[cfg(feature = "parallel")]
const SAMPLES_PER_TASK: usize = 64;

/// Draws random sequence pairs and averages their distance tables.
#[derive(Debug, Clone)]
pub struct MonteCarloAverager<T> {
    alphabet: Alphabet<T>,
    params: SamplingParams,
}

impl<T: Symbol> MonteCarloAverager<T> {
    pub fn new(alphabet: Alphabet<T>, params: SamplingParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { alphabet, params })
    }

    pub fn alphabet(&self) -> &Alphabet<T> {
        &self.alphabet
    }

    pub fn params(&self) -> &SamplingParams {
        &self.params
    }

    fn rng(&self) -> ChaCha8Rng {
        let seed = self.params.seed.unwrap_or_else(|| {
            let seed = thread_rng().gen();
            debug!("Using random seed {seed}");
            seed
        });
        ChaCha8Rng::seed_from_u64(seed)
    }

    /// One averaged matrix per length `1..=max_length`.
    pub fn estimate(&self) -> Vec<DistanceMatrix> {
        self.estimate_with(|_| ControlFlow::Continue(()))
    }

    /// As `estimate`, calling `f` with the running totals after each length.
    ///
    /// When `f` breaks, no further lengths are sampled and only the lengths
    /// completed so far are returned.
    pub fn estimate_with(
        &self,
        mut f: impl FnMut(&SamplingStats) -> ControlFlow<()>,
    ) -> Vec<DistanceMatrix> {
        let mut rng = self.rng();
        let mut total = SamplingStats::default();
        let mut result = Vec::with_capacity(self.params.max_length);
        for n in 1..=self.params.max_length {
            let start = Instant::now();
            let mean = self.fold_length(n, &mut rng);
            let stats = SamplingStats::new(n, mean.count(), start.elapsed().as_secs_f64());
            let mean = mean.into_mean();
            debug!(
                "n {n:>4}: E[d] = {:>8.4} over {} samples",
                mean.bottom_right(),
                stats.samples
            );
            result.push(mean);
            total += stats;
            if f(&total).is_break() {
                info!("Stopped after length {n}: {}", total.to_line());
                return result;
            }
        }
        info!("{}", total.to_line());
        result
    }

    /// The averaged matrix for sequences of exactly length `n`.
    pub fn average_for_length(&self, n: usize) -> Result<DistanceMatrix> {
        if n == 0 {
            return Err(Error::InvalidLength(n));
        }
        Ok(self.fold_length(n, &mut self.rng()).into_mean())
    }

    /// Lazily yields the distance tables of `samples` random pairs of length `n`.
    pub fn samples(&self, n: usize) -> DistanceSamples<'_, T, ChaCha8Rng> {
        DistanceSamples::new(&self.alphabet, n, self.params.samples, self.rng())
    }

    fn fold_length(&self, n: usize, rng: &mut ChaCha8Rng) -> RunningMean {
        #[cfg(feature = "parallel")]
        if self.params.parallel {
            return fold_parallel(&self.alphabet, n, self.params.samples, rng.gen());
        }
        #[cfg(not(feature = "parallel"))]
        if self.params.parallel {
            debug!("Built without the `parallel` feature; sampling sequentially.");
        }
        fold_samples(&self.alphabet, n, self.params.samples, rng)
    }
}

/// Fold `samples` random pairs of length `n` into a fresh running mean.
fn fold_samples<T: Symbol, R: Rng + ?Sized>(
    alphabet: &Alphabet<T>,
    n: usize,
    samples: usize,
    rng: &mut R,
) -> RunningMean {
    let mut table = EditDistanceTable::with_capacity(n, n);
    let mut a = Vec::with_capacity(n);
    let mut b = Vec::with_capacity(n);
    let mut mean = RunningMean::for_length(n);
    for _ in 0..samples {
        fill_random_sequence(&mut a, n, alphabet, rng);
        fill_random_sequence(&mut b, n, alphabet, rng);
        mean.push(table.compute(&a, &b));
    }
    mean
}

/// Split the samples into fixed-size tasks, each with its own ChaCha stream,
/// and merge the partial means.
#[cfg(feature = "parallel")]
fn fold_parallel<T: Symbol>(
    alphabet: &Alphabet<T>,
    n: usize,
    samples: usize,
    seed: u64,
) -> RunningMean {
    use rayon::prelude::*;

    let tasks = samples.div_ceil(SAMPLES_PER_TASK);
    (0..tasks)
        .into_par_iter()
        .map(|task| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(task as u64);
            let cnt = SAMPLES_PER_TASK.min(samples - task * SAMPLES_PER_TASK);
            fold_samples(alphabet, n, cnt, &mut rng)
        })
        .reduce(
            || RunningMean::for_length(n),
            |mut a, b| {
                a.merge(b);
                a
            },
        )
}

/// A finite, non-restartable stream of sample distance tables.
///
/// Every item is a new allocation; the averaging loop itself reuses a single
/// table instead.
pub struct DistanceSamples<'a, T, R> {
    alphabet: &'a Alphabet<T>,
    n: usize,
    remaining: usize,
    rng: R,
    table: EditDistanceTable,
}

impl<'a, T: Symbol, R: Rng> DistanceSamples<'a, T, R> {
    pub fn new(alphabet: &'a Alphabet<T>, n: usize, samples: usize, rng: R) -> Self {
        Self {
            alphabet,
            n,
            remaining: samples,
            rng,
            table: EditDistanceTable::with_capacity(n, n),
        }
    }
}

impl<'a, T: Symbol, R: Rng> Iterator for DistanceSamples<'a, T, R> {
    type Item = DistanceMatrix;

    fn next(&mut self) -> Option<DistanceMatrix> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let a = random_sequence(self.n, self.alphabet, &mut self.rng);
        let b = random_sequence(self.n, self.alphabet, &mut self.rng);
        Some(self.table.compute(&a, &b).clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: Symbol, R: Rng> ExactSizeIterator for DistanceSamples<'a, T, R> {}

/// Validate the raw inputs in the order alphabet, samples, length.
fn averager<T: Symbol>(
    max_length: usize,
    n_samples: usize,
    alphabet: &[T],
) -> Result<MonteCarloAverager<T>> {
    let alphabet = Alphabet::new(alphabet.iter().copied())?;
    MonteCarloAverager::new(alphabet, SamplingParams::new(max_length, n_samples))
}

/// Expected distance tables for every length `1..=max_length`, each averaged
/// over `n_samples` random pairs over `alphabet`.
///
/// Element `n - 1` of the result is the `(n+1) x (n+1)` table for length `n`.
pub fn estimate<T: Symbol>(
    max_length: usize,
    n_samples: usize,
    alphabet: &[T],
) -> Result<Vec<DistanceMatrix>> {
    Ok(averager(max_length, n_samples, alphabet)?.estimate())
}

/// The `(n+1) x (n+1)` expected distance table for sequences of length `n`.
pub fn average_for_length<T: Symbol>(
    n: usize,
    n_samples: usize,
    alphabet: &[T],
) -> Result<DistanceMatrix> {
    averager(n, n_samples, alphabet)?.average_for_length(n)
}
