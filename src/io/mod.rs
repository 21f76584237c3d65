//! Reading patterns from text and turning reconstructions back into pictures.
//!
//! Pictures use one glyph per pixel: `*` for an active (+1) neuron and `.` for an inactive (-1) one.

pub mod render;
pub mod text;

/// Glyph of a +1 neuron.
pub const ON: char = '*';

/// Glyph of a -1 neuron.
pub const OFF: char = '.';
