//! Exact Levenshtein distance via the full Needleman-Wunsch table.
//!
//! The whole `(n+1) x (m+1)` table is kept, since the sampler averages every
//! prefix-pair distance and not only the final one.
use crate::matrix::DistanceMatrix;

/// Reusable DP table for unit-cost edit distance.
///
/// The buffer grows to the largest shape seen and is reused afterwards, so
/// repeated calls on same-length inputs do not allocate.
#[derive(Debug, Clone)]
pub struct EditDistanceTable {
    matrix: DistanceMatrix,
}

impl Default for EditDistanceTable {
    fn default() -> Self {
        Self::new()
    }
}

impl EditDistanceTable {
    pub fn new() -> Self {
        Self {
            matrix: DistanceMatrix::zeros(0, 0),
        }
    }

    /// Preallocate for inputs of the given lengths.
    pub fn with_capacity(len_a: usize, len_b: usize) -> Self {
        Self {
            matrix: DistanceMatrix::zeros(len_a.max(len_b) + 1, len_a.min(len_b) + 1),
        }
    }

    /// Fill the table for `a` and `b` and return it.
    ///
    /// When `a` is shorter than `b` the operands are swapped, so that rows
    /// always index the longer sequence. The final distance does not depend on
    /// the orientation.
    pub fn compute<T: PartialEq>(&mut self, a: &[T], b: &[T]) -> &DistanceMatrix {
        let (a, b) = if a.len() < b.len() { (b, a) } else { (a, b) };
        let cols = b.len() + 1;
        self.matrix.reshape(a.len() + 1, cols);
        let data = self.matrix.as_mut_slice();

        for (j, x) in data[..cols].iter_mut().enumerate() {
            *x = j as f64;
        }
        for (i, ca) in a.iter().enumerate() {
            // Split off the previous row so it can be read while writing the current one.
            let (done, todo) = data.split_at_mut((i + 1) * cols);
            let prev = &done[i * cols..];
            let cur = &mut todo[..cols];
            cur[0] = (i + 1) as f64;
            for (j, cb) in b.iter().enumerate() {
                let sub = prev[j] + (ca != cb) as u8 as f64;
                let del = prev[j + 1] + 1.0;
                let ins = cur[j] + 1.0;
                cur[j + 1] = sub.min(del).min(ins);
            }
        }
        &self.matrix
    }

    /// The table of the last `compute` call.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> DistanceMatrix {
        self.matrix
    }
}

/// The full distance table between `a` and `b`, in a fresh allocation.
pub fn distance_matrix<T: PartialEq>(a: &[T], b: &[T]) -> DistanceMatrix {
    let mut table = EditDistanceTable::with_capacity(a.len(), b.len());
    table.compute(a, b);
    table.into_matrix()
}

/// The edit distance between `a` and `b`.
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    distance_matrix(a, b).bottom_right() as usize
}
