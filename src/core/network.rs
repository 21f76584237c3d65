//! The `HopfieldNetwork` stores bipolar patterns in a Hebbian weight matrix and reconstructs
//! distorted versions of them by letting the network relax into an energy minimum.
//!
//! Training:
//! - Every training pattern adds its outer product (diagonal excluded) to the weights.
//! - Thresholds start at zero and can be replaced per neuron.
//!
//! Update rule, for neuron `i`:
//! - `h = sum_j w[i][j] * s[j]`
//! - `h < threshold[i]` sets the neuron to -1, `h > threshold[i]` sets it to +1.
//! - `h == threshold[i]` leaves the neuron as it is.
//!
//! Relaxation updates one neuron at a time (asynchronous). With symmetric weights and a zero
//! diagonal no update can raise the energy, so the network always settles in a local minimum.
//! Which neuron is updated next depends on the `ConvergencePolicy`:
//! - `Randomized`: neurons are drawn uniformly with replacement, and the state counts as converged
//!   after `window_factor * N` draws in a row changed nothing.
//! - `FixedPoint`: neurons are swept in index order until a whole sweep changes nothing.
//!
//! Reconstruction copies each test pattern into its own `NetworkState`, relaxes it and copies the
//! result out. Test patterns are independent of each other and of the order they are processed in.

use super::{
    config::{ConvergencePolicy, NetworkConfig},
    pattern::{BinaryVector, PatternSet},
    state::NetworkState,
    weights::WeightMatrix,
};
use crate::error::{HopfieldError, PatternRole, Result};
use log::{debug, trace, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Stored patterns beyond this fraction of the neuron count are no longer reliably recalled.
const CAPACITY_RATIO: f64 = 0.15;

/// Bookkeeping of one relaxation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConvergenceReport {
    /// Number of single-neuron updates evaluated.
    pub attempts: usize,

    /// Number of those updates that changed a neuron.
    pub flips: usize,
}

/// A reconstructed pattern together with how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    pub pattern: BinaryVector,
    pub report: ConvergenceReport,
}

/// A discrete Hopfield network with integer weights and thresholds.
#[derive(Debug, Clone)]
pub struct HopfieldNetwork {
    config: NetworkConfig,
    weights: WeightMatrix,
    thresholds: Vec<i32>,

    /// Quiet attempts needed before a randomized relaxation stops. Zero under `FixedPoint`.
    window: usize,
}

impl HopfieldNetwork {
    /// Creates a network with no stored patterns, zero weights and zero thresholds.
    ///
    /// Fails if the shape is empty, or if a randomized policy has an empty or overflowing window.
    pub fn new(config: NetworkConfig) -> Result<Self> {
        if config.shape.is_empty() {
            return Err(HopfieldError::EmptyShape {
                width: config.shape.width,
                height: config.shape.height,
            });
        }

        let num_neurons = config.num_neurons();
        let window = match config.convergence {
            ConvergencePolicy::Randomized { window_factor } => window_factor
                .checked_mul(num_neurons)
                .filter(|&window| window > 0)
                .ok_or(HopfieldError::InvalidWindow {
                    window_factor,
                    num_neurons,
                })?,
            ConvergencePolicy::FixedPoint => 0,
        };

        Ok(Self {
            config,
            weights: WeightMatrix::new(num_neurons),
            thresholds: vec![0; num_neurons],
            window,
        })
    }

    /// Creates a network and stores every training pattern of `patterns`.
    ///
    /// Fails if the configured shape is empty or if any training or test pattern does not have
    /// one entry per neuron.
    pub fn train(config: NetworkConfig, patterns: &PatternSet) -> Result<Self> {
        let mut network = Self::new(config)?;
        network.check_length(PatternRole::Training, patterns.training())?;
        network.check_length(PatternRole::Test, patterns.test())?;

        network.weights = WeightMatrix::hebbian(network.num_neurons(), patterns.training());
        network.log_training();

        Ok(network)
    }

    /// Adds one more pattern to the weights.
    pub fn store(&mut self, pattern: &BinaryVector) -> Result<()> {
        self.check_length(PatternRole::Training, std::slice::from_ref(pattern))?;
        self.weights.store(pattern);
        self.log_training();
        Ok(())
    }

    /// Replaces the per-neuron thresholds.
    pub fn with_thresholds(mut self, thresholds: Vec<i32>) -> Result<Self> {
        if thresholds.len() != self.num_neurons() {
            return Err(HopfieldError::ThresholdLength {
                expected: self.num_neurons(),
                found: thresholds.len(),
            });
        }
        self.thresholds = thresholds;
        Ok(self)
    }

    fn check_length(&self, role: PatternRole, patterns: &[BinaryVector]) -> Result<()> {
        let expected = self.num_neurons();
        match patterns.iter().position(|p| p.len() != expected) {
            Some(index) => Err(HopfieldError::DimensionMismatch {
                role,
                index,
                expected,
                found: patterns[index].len(),
            }),
            None => Ok(()),
        }
    }

    fn log_training(&self) {
        let stored = self.weights.num_patterns();
        let capacity = (self.num_neurons() as f64 * CAPACITY_RATIO) as usize;
        debug!(
            "Weights hold {} patterns over {} neurons",
            stored,
            self.num_neurons()
        );
        if stored > capacity {
            warn!(
                "{} stored patterns exceed the recall capacity of about {} for {} neurons",
                stored,
                capacity,
                self.num_neurons()
            );
        }
    }

    #[inline]
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    #[inline]
    pub fn weights(&self) -> &WeightMatrix {
        &self.weights
    }

    #[inline]
    pub fn thresholds(&self) -> &[i32] {
        &self.thresholds
    }

    #[inline]
    pub fn num_neurons(&self) -> usize {
        self.weights.num_neurons()
    }

    /// Applies the update rule to `neuron` and returns whether its activation changed.
    #[inline]
    pub fn update_neuron(&self, state: &mut NetworkState, neuron: usize) -> bool {
        debug_assert_eq!(state.len(), self.num_neurons());
        let sum = self.weights.weighted_sum(neuron, state.as_slice());
        let threshold = self.thresholds[neuron] as i64;

        let activation = if sum < threshold {
            -1
        } else if sum > threshold {
            1
        } else {
            return false;
        };

        let changed = state.set(neuron, activation);
        if changed {
            trace!("Neuron {} flipped to {} (field {})", neuron, activation, sum);
        }
        changed
    }

    /// Relaxes `state` under the configured policy.
    /// `rng` is only drawn from by the randomized policy.
    pub fn converge<R: Rng + ?Sized>(
        &self,
        state: &mut NetworkState,
        rng: &mut R,
    ) -> ConvergenceReport {
        match self.config.convergence {
            ConvergencePolicy::Randomized { .. } => self.converge_randomized(state, rng),
            ConvergencePolicy::FixedPoint => self.converge_fixed_point(state),
        }
    }

    /// Updates uniformly random neurons until `window_factor * N` consecutive attempts
    /// changed nothing. The window was validated when the network was built.
    fn converge_randomized<R: Rng + ?Sized>(
        &self,
        state: &mut NetworkState,
        rng: &mut R,
    ) -> ConvergenceReport {
        let n = self.num_neurons();
        let window = self.window;
        let mut report = ConvergenceReport::default();
        let mut since_last_change = 0;

        while since_last_change < window {
            report.attempts += 1;
            if self.update_neuron(state, rng.random_range(0..n)) {
                report.flips += 1;
                since_last_change = 0;
            } else {
                since_last_change += 1;
            }
        }

        report
    }

    /// Sweeps all neurons in index order until a full sweep changes nothing.
    pub fn converge_fixed_point(&self, state: &mut NetworkState) -> ConvergenceReport {
        let mut report = ConvergenceReport::default();

        loop {
            let mut changed = false;
            for neuron in 0..self.num_neurons() {
                report.attempts += 1;
                if self.update_neuron(state, neuron) {
                    report.flips += 1;
                    changed = true;
                }
            }
            if !changed {
                return report;
            }
        }
    }

    /// Whether no single neuron of `state` would change under the update rule.
    pub fn is_stable(&self, state: &NetworkState) -> bool {
        debug_assert_eq!(state.len(), self.num_neurons());
        (0..self.num_neurons()).all(|neuron| {
            let sum = self.weights.weighted_sum(neuron, state.as_slice());
            let threshold = self.thresholds[neuron] as i64;
            let current = state.get(neuron);
            sum == threshold || (sum > threshold) == (current > 0)
        })
    }

    /// Energy of `state`: `-1/2 * sum_ij w[i][j] s[i] s[j] + sum_i threshold[i] s[i]`.
    ///
    /// The double sum counts every pair twice, so halving it stays an integer.
    pub fn energy(&self, state: &NetworkState) -> i64 {
        debug_assert_eq!(state.len(), self.num_neurons());
        let state = state.as_slice();
        let interaction: i64 = (0..self.num_neurons())
            .map(|i| state[i] as i64 * self.weights.weighted_sum(i, state))
            .sum();
        let bias: i64 = self
            .thresholds
            .iter()
            .zip(state)
            .map(|(&t, &s)| t as i64 * s as i64)
            .sum();
        -interaction / 2 + bias
    }

    /// Relaxes a copy of `pattern` and returns the resulting state.
    pub fn reconstruct<R: Rng + ?Sized>(
        &self,
        pattern: &BinaryVector,
        rng: &mut R,
    ) -> Result<Reconstruction> {
        self.check_length(PatternRole::Test, std::slice::from_ref(pattern))?;

        let mut state = NetworkState::from_pattern(pattern);
        let report = self.converge(&mut state, rng);

        Ok(Reconstruction {
            pattern: state.snapshot(),
            report,
        })
    }

    /// Reconstructs every test pattern of `patterns`, in index order.
    /// The pattern set is left untouched.
    pub fn restore<R: Rng + ?Sized>(
        &self,
        patterns: &PatternSet,
        rng: &mut R,
    ) -> Result<Vec<Reconstruction>> {
        self.check_length(PatternRole::Test, patterns.test())?;

        patterns
            .test()
            .iter()
            .enumerate()
            .map(|(index, pattern)| {
                let reconstruction = self.reconstruct(pattern, rng)?;
                debug!(
                    "Test pattern {}: {} flips in {} attempts",
                    index, reconstruction.report.flips, reconstruction.report.attempts
                );
                Ok(reconstruction)
            })
            .collect()
    }
}
