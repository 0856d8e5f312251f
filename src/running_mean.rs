use std::iter::zip;

use crate::matrix::DistanceMatrix;

/// Element-wise running mean of equally shaped distance matrices.
///
/// Samples are folded in one at a time with
/// `u <- ((k-1)/k) * u + s/k`, so no sample has to be retained and the mean
/// stays in the range of the samples instead of growing like a plain sum.
#[derive(Debug, Clone, PartialEq)]
pub struct RunningMean {
    mean: DistanceMatrix,
    count: usize,
}

impl RunningMean {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            mean: DistanceMatrix::zeros(rows, cols),
            count: 0,
        }
    }

    /// Accumulator for pairs of sequences of length `n`.
    pub fn for_length(n: usize) -> Self {
        Self::new(n + 1, n + 1)
    }

    /// Number of samples folded in so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> &DistanceMatrix {
        &self.mean
    }

    pub fn into_mean(self) -> DistanceMatrix {
        self.mean
    }

    pub fn push(&mut self, sample: &DistanceMatrix) {
        assert_eq!(
            self.mean.shape(),
            sample.shape(),
            "Sample shape does not match the accumulator."
        );
        assert_eq!(self.mean.as_slice().len(), sample.as_slice().len());
        self.count += 1;
        let n = self.count as f64;
        let keep = (n - 1.) / n;
        for (u, &s) in zip(self.mean.as_mut_slice(), sample.as_slice()) {
            *u = keep * *u + s / n;
        }
    }

    /// Fold in the mean of another accumulator, weighted by its sample count.
    pub fn merge(&mut self, other: RunningMean) {
        assert_eq!(
            self.mean.shape(),
            other.mean.shape(),
            "Cannot merge accumulators of different shapes."
        );
        assert_eq!(self.mean.as_slice().len(), other.mean.as_slice().len());
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = other;
            return;
        }
        let total = (self.count + other.count) as f64;
        let keep = self.count as f64 / total;
        let add = other.count as f64 / total;
        for (u, &v) in zip(self.mean.as_mut_slice(), other.mean.as_slice()) {
            *u = keep * *u + add * v;
        }
        self.count += other.count;
    }
}

impl<'a> Extend<&'a DistanceMatrix> for RunningMean {
    fn extend<I: IntoIterator<Item = &'a DistanceMatrix>>(&mut self, iter: I) {
        for sample in iter {
            self.push(sample);
        }
    }
}

impl Extend<DistanceMatrix> for RunningMean {
    fn extend<I: IntoIterator<Item = DistanceMatrix>>(&mut self, iter: I) {
        for sample in iter {
            self.push(&sample);
        }
    }
}
