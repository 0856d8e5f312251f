use derive_more::AddAssign;
use serde::Serialize;

/// Counters for a sampling run. Per-length stats are summed with `+=`.
#[derive(Serialize, Default, Clone, Copy, AddAssign, Debug, PartialEq)]
pub struct SamplingStats {
    /// Number of completed length classes.
    pub lengths: usize,
    /// Sequence pairs aligned.
    pub samples: usize,
    /// DP cells filled.
    pub cells: usize,
    /// Wall time in seconds.
    pub duration: f64,
}

impl SamplingStats {
    /// Stats for one length class of `samples` pairs of length `n`.
    pub fn new(n: usize, samples: usize, duration: f64) -> Self {
        Self {
            lengths: 1,
            samples,
            cells: samples * (n + 1) * (n + 1),
            duration,
        }
    }

    /// Millions of DP cells per second.
    pub fn throughput(&self) -> f64 {
        if self.duration > 0. {
            self.cells as f64 / self.duration / 1e6
        } else {
            0.
        }
    }

    pub fn to_line(&self) -> String {
        format!(
            "lengths {:>5} samples {:>9} cells {:>12} time {:>8.3}s  {:>8.1} Mcell/s",
            self.lengths,
            self.samples,
            self.cells,
            self.duration,
            self.throughput()
        )
    }
}
