use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Parser, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SamplingParams {
    /// Largest sequence length to sample
    ///
    /// One averaged matrix is produced for every length from 1 up to and
    /// including this value.
    #[clap(short = 'n', long, default_value_t = 25, display_order = 1)]
    pub max_length: usize,

    /// Number of random sequence pairs per length
    #[clap(short = 'x', long, default_value_t = 1000, display_order = 2)]
    pub samples: usize,

    /// Seed to initialize RNG for reproducability
    #[clap(long, display_order = 3)]
    #[serde(default)]
    pub seed: Option<u64>,

    /// Fold samples on all cores
    ///
    /// Only has an effect when built with the `parallel` feature.
    #[clap(long, display_order = 4)]
    #[serde(default)]
    pub parallel: bool,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            max_length: 25,
            samples: 1000,
            seed: None,
            parallel: false,
        }
    }
}

impl SamplingParams {
    pub fn new(max_length: usize, samples: usize) -> Self {
        Self {
            max_length,
            samples,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(Error::InsufficientSamples(self.samples));
        }
        if self.max_length == 0 {
            return Err(Error::InvalidLength(self.max_length));
        }
        Ok(())
    }
}
