//! Discrete Hopfield associative memory.
//!
//! Binary pictures are stored in a Hebbian weight matrix and recalled from distorted copies by
//! asynchronous relaxation. `core` holds the network model, `io` reads pattern files and
//! renders reconstructions.

pub mod core;
pub mod error;
pub mod io;

pub use crate::core::{
    config::{ConvergencePolicy, NetworkConfig},
    network::{ConvergenceReport, HopfieldNetwork, Reconstruction},
    pattern::{BinaryVector, PatternSet},
    shape::ImageShape,
    state::NetworkState,
    weights::WeightMatrix,
};
pub use crate::error::{HopfieldError, Result};
