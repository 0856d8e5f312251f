//! Expected Levenshtein distance between random sequences.
//!
//! [`estimate`] samples random sequence pairs over an alphabet and averages
//! their complete edit distance tables, producing one matrix of expected
//! distances per sequence length.
//!
//! ```
//! let tables = expected_levenshtein::estimate(2, 1000, &[0u8, 1]).unwrap();
//! assert_eq!(tables[1].bottom_right().round(), 1.);
//! ```

pub mod alphabet;
pub mod edit_distance;
pub mod error;
pub mod matrix;
pub mod params;
pub mod random_sequence;
pub mod running_mean;
pub mod sampling;
pub mod stats;

pub use alphabet::{Alphabet, Symbol};
pub use edit_distance::{distance_matrix, levenshtein, EditDistanceTable};
pub use error::{Error, Result};
pub use matrix::DistanceMatrix;
pub use params::SamplingParams;
pub use random_sequence::{fill_random_sequence, random_sequence};
pub use running_mean::RunningMean;
pub use sampling::{average_for_length, estimate, DistanceSamples, MonteCarloAverager};
pub use stats::SamplingStats;
