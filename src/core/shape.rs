//! `ImageShape` describes the two-dimensional picture a pattern is unrolled from.
//!
//! Patterns are stored row-major: the neuron for pixel (row, col) lives at index
//! `row * width + col`. The network itself only sees the flat length `width * height`,
//! the shape is needed to read patterns from text and to render them back.

use serde::{Deserialize, Serialize};

/// Width and height of the images stored in a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageShape {
    pub width: usize,
    pub height: usize,
}

impl ImageShape {
    /// Creates a new `ImageShape` from its dimensions.
    #[inline]
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// The number of neurons a network for this shape needs.
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts a linear index into `(row, col)`.
    #[inline]
    pub fn coordinates(&self, index: usize) -> (usize, usize) {
        (index / self.width, index % self.width)
    }

    /// Converts `(row, col)` into a linear index.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
}

impl Default for ImageShape {
    /// 20x10 pictures, 200 neurons.
    fn default() -> Self {
        Self::new(20, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_and_coordinates_agree() {
        let shape = ImageShape::new(20, 10);
        assert_eq!(shape.len(), 200);

        for index in 0..shape.len() {
            let (row, col) = shape.coordinates(index);
            assert!(row < shape.height && col < shape.width);
            assert_eq!(shape.index(row, col), index);
        }
    }

    #[test]
    fn test_row_major_layout() {
        let shape = ImageShape::new(3, 2);
        assert_eq!(shape.index(1, 0), 3);
        assert_eq!(shape.coordinates(5), (1, 2));
    }
}
