//! The `WeightMatrix` holds the connection strength between every pair of neurons.
//!
//! Weights are learned with the Hebbian outer-product rule: each stored pattern `p` adds
//! `p[i] * p[j]` to `w[i][j]` for every `i != j`. Contributions accumulate across patterns and
//! the diagonal is never touched, so the matrix is symmetric with a zero diagonal at all times.
//! Those two properties are what make asynchronous updates descend an energy function.
//!
//! All N×N entries live in one contiguous row-major `Vec`, so a neuron's incoming weights are a
//! single slice.

use super::pattern::BinaryVector;
use std::fmt;

/// A square, symmetric, zero-diagonal integer matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightMatrix {
    /// Row-major N×N weights.
    weights: Vec<i32>,

    /// N, the side length of the matrix.
    num_neurons: usize,

    /// How many patterns have been accumulated into the weights.
    num_patterns: usize,
}

impl WeightMatrix {
    /// Creates an all-zero matrix for `num_neurons` neurons.
    pub fn new(num_neurons: usize) -> Self {
        Self {
            weights: vec![0; num_neurons * num_neurons],
            num_neurons,
            num_patterns: 0,
        }
    }

    /// Builds the weights for a set of training patterns in one go.
    pub fn hebbian(num_neurons: usize, patterns: &[BinaryVector]) -> Self {
        let mut matrix = Self::new(num_neurons);
        for pattern in patterns {
            matrix.store(pattern);
        }
        matrix
    }

    /// Adds the outer product of `pattern` with itself, diagonal excluded, to the weights.
    ///
    /// Only the upper triangle is computed; each product is written to both `w[i][j]` and `w[j][i]`.
    pub fn store(&mut self, pattern: &BinaryVector) {
        debug_assert_eq!(pattern.len(), self.num_neurons);
        let n = self.num_neurons;
        let p = pattern.as_slice();

        for i in 0..n {
            for j in (i + 1)..n {
                let product = (p[i] * p[j]) as i32;
                self.weights[i * n + j] += product;
                self.weights[j * n + i] += product;
            }
        }

        self.num_patterns += 1;
    }

    #[inline]
    pub fn num_neurons(&self) -> usize {
        self.num_neurons
    }

    #[inline]
    pub fn num_patterns(&self) -> usize {
        self.num_patterns
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i32 {
        self.weights[i * self.num_neurons + j]
    }

    /// Incoming weights of neuron `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[i32] {
        let start = i * self.num_neurons;
        &self.weights[start..start + self.num_neurons]
    }

    /// Local field of neuron `i`: `sum_j w[i][j] * state[j]`.
    #[inline]
    pub fn weighted_sum(&self, i: usize, state: &[i8]) -> i64 {
        self.row(i)
            .iter()
            .zip(state)
            .map(|(&w, &s)| w as i64 * s as i64)
            .sum()
    }
}

impl fmt::Display for WeightMatrix {
    /// One matrix row per line, every entry followed by `", "`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.num_neurons {
            for w in self.row(i) {
                write!(f, "{}, ", w)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
