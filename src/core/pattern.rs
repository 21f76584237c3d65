//! Bipolar patterns and the training/test collections a network is built from.
//!
//! A `BinaryVector` holds one activation per neuron, each exactly +1 or -1. A `PatternSet`
//! groups the training patterns (which shape the weights) and the test patterns (which seed
//! the network state during reconstruction). Both are validated on construction and
//! read-only afterwards.

use crate::error::{HopfieldError, PatternRole, Result};
use rand::{seq::IteratorRandom, Rng};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered sequence of bipolar activations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BinaryVector(Vec<i8>);

impl BinaryVector {
    /// Wraps a vector of activations, rejecting any entry other than +1 or -1.
    pub fn from_bipolar(values: Vec<i8>) -> Result<Self> {
        if let Some(position) = values.iter().position(|&v| v != 1 && v != -1) {
            return Err(HopfieldError::InvalidActivation {
                position,
                value: values[position],
            });
        }
        Ok(Self(values))
    }

    /// Wraps activations that are bipolar by construction, e.g. a network state.
    #[inline]
    pub(crate) fn from_state(values: Vec<i8>) -> Self {
        debug_assert!(values.iter().all(|&v| v == 1 || v == -1));
        Self(values)
    }

    /// Maps `true` to +1 and `false` to -1.
    pub fn from_bools(bits: &[bool]) -> Self {
        Self(bits.iter().map(|&on| if on { 1 } else { -1 }).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[i8] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, i8> {
        self.0.iter()
    }

    /// Number of positions in which `self` and `other` disagree.
    /// Both vectors must have the same length.
    pub fn hamming(&self, other: &BinaryVector) -> usize {
        debug_assert_eq!(self.len(), other.len());
        self.0.iter().zip(&other.0).filter(|(a, b)| a != b).count()
    }

    /// Returns a copy with `flips` distinct positions, chosen at random, inverted.
    /// `flips` larger than the vector length inverts every position.
    pub fn distort<R: Rng + ?Sized>(&self, flips: usize, rng: &mut R) -> Self {
        let mut values = self.0.clone();
        for index in (0..values.len()).choose_multiple(rng, flips) {
            values[index] = -values[index];
        }
        Self(values)
    }
}

impl Index<usize> for BinaryVector {
    type Output = i8;

    #[inline]
    fn index(&self, index: usize) -> &i8 {
        &self.0[index]
    }
}

impl From<BinaryVector> for Vec<i8> {
    fn from(vector: BinaryVector) -> Self {
        vector.0
    }
}

/// Training and test patterns of equal length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSet {
    num_neurons: usize,
    training: Vec<BinaryVector>,
    test: Vec<BinaryVector>,
}

impl PatternSet {
    /// Creates a pattern set, failing if any pattern does not have exactly `num_neurons` entries.
    pub fn new(
        num_neurons: usize,
        training: Vec<BinaryVector>,
        test: Vec<BinaryVector>,
    ) -> Result<Self> {
        Self::check_lengths(num_neurons, PatternRole::Training, &training)?;
        Self::check_lengths(num_neurons, PatternRole::Test, &test)?;

        Ok(Self {
            num_neurons,
            training,
            test,
        })
    }

    fn check_lengths(
        expected: usize,
        role: PatternRole,
        patterns: &[BinaryVector],
    ) -> Result<()> {
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

    #[inline]
    pub fn num_neurons(&self) -> usize {
        self.num_neurons
    }

    #[inline]
    pub fn training(&self) -> &[BinaryVector] {
        &self.training
    }

    #[inline]
    pub fn test(&self) -> &[BinaryVector] {
        &self.test
    }
}
