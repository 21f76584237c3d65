//! The live activations of a network while it relaxes one test pattern.
//!
//! A `NetworkState` is always its own buffer: it is filled by copying a test pattern in and read
//! out by copying a snapshot, so relaxing a pattern never writes through to the `PatternSet`.

use super::pattern::BinaryVector;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkState {
    activations: Vec<i8>,
}

impl NetworkState {
    /// Copies `pattern` into a fresh state buffer.
    #[inline]
    pub fn from_pattern(pattern: &BinaryVector) -> Self {
        Self {
            activations: pattern.as_slice().to_vec(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.activations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.activations.is_empty()
    }

    #[inline]
    pub fn get(&self, neuron: usize) -> i8 {
        self.activations[neuron]
    }

    /// Sets the activation of `neuron`; returns whether it differs from the previous value.
    #[inline]
    pub fn set(&mut self, neuron: usize, activation: i8) -> bool {
        let changed = self.activations[neuron] != activation;
        self.activations[neuron] = activation;
        changed
    }

    #[inline]
    pub fn as_slice(&self) -> &[i8] {
        &self.activations
    }

    /// Copies the current activations out as a pattern.
    #[inline]
    pub fn snapshot(&self) -> BinaryVector {
        BinaryVector::from_state(self.activations.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_does_not_alias_pattern() {
        let pattern = BinaryVector::from_bipolar(vec![1, -1, 1]).unwrap();
        let mut state = NetworkState::from_pattern(&pattern);

        assert!(state.set(0, -1));
        assert!(!state.set(1, -1));

        assert_eq!(pattern.as_slice(), &[1, -1, 1]);
        assert_eq!(state.snapshot().as_slice(), &[-1, -1, 1]);
    }
}
