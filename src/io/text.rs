//! Reads training and test pictures from the plain-text pattern format.
//!
//! ```text
//! *..*        <- one row of a picture, `width` glyphs
//! .**.
//! -           <- ends a picture
//! **..
//! ..**
//! ---         <- ends the last training picture, test pictures follow
//! *..*
//! .*..
//! -
//! ..**
//! ...*        <- the last test picture may end at end of input
//! ```
//!
//! Each picture must have exactly `height` rows. Blank lines and surrounding whitespace are ignored.

use super::{OFF, ON};
use crate::core::{
    pattern::{BinaryVector, PatternSet},
    shape::ImageShape,
};
use crate::error::{HopfieldError, Result};
use std::io::BufRead;

/// A line consisting only of at least this many dashes separates training from test pictures.
const SECTION_BREAK_DASHES: usize = 3;

/// Parses pattern files for pictures of a fixed shape.
#[derive(Debug, Clone, Copy)]
pub struct PatternReader {
    shape: ImageShape,
}

/// Rows of the picture currently being read.
struct PictureBuffer {
    cells: Vec<i8>,
    rows: usize,
}

impl PatternReader {
    #[inline]
    pub fn new(shape: ImageShape) -> Self {
        Self { shape }
    }

    /// Reads a complete pattern file from `reader`.
    pub fn read<R: BufRead>(&self, reader: R) -> Result<PatternSet> {
        let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
        self.parse_lines(lines.iter().map(String::as_str))
    }

    /// Parses a complete pattern file held in memory.
    pub fn parse(&self, text: &str) -> Result<PatternSet> {
        self.parse_lines(text.lines())
    }

    fn parse_lines<'a, I: Iterator<Item = &'a str>>(&self, lines: I) -> Result<PatternSet> {
        let mut training = Vec::new();
        let mut test = Vec::new();
        let mut in_test_section = false;
        let mut buffer = PictureBuffer {
            cells: Vec::with_capacity(self.shape.len()),
            rows: 0,
        };
        let mut line_number = 0;

        for (index, raw) in lines.enumerate() {
            line_number = index + 1;
            let line = raw.trim();

            if line.is_empty() {
                continue;
            }

            if line.chars().all(|c| c == '-') {
                let target = if in_test_section { &mut test } else { &mut training };
                self.finish_picture(&mut buffer, line_number, target)?;
                if line.len() >= SECTION_BREAK_DASHES {
                    in_test_section = true;
                }
                continue;
            }

            self.read_row(line, line_number, &mut buffer)?;
        }

        if !in_test_section {
            return Err(HopfieldError::MissingTestSection);
        }
        self.finish_picture(&mut buffer, line_number, &mut test)?;

        PatternSet::new(self.shape.len(), training, test)
    }

    fn read_row(&self, line: &str, line_number: usize, buffer: &mut PictureBuffer) -> Result<()> {
        let found = line.chars().count();
        if found != self.shape.width {
            return Err(HopfieldError::RowWidth {
                line: line_number,
                expected: self.shape.width,
                found,
            });
        }

        for (column, character) in line.chars().enumerate() {
            let activation = match character {
                ON => 1,
                OFF => -1,
                _ => {
                    return Err(HopfieldError::UnexpectedCharacter {
                        line: line_number,
                        column: column + 1,
                        character,
                    })
                }
            };
            buffer.cells.push(activation);
        }
        buffer.rows += 1;
        Ok(())
    }

    /// Moves a completed picture into `target`. An empty buffer (e.g. two separators in a row)
    /// produces no picture.
    fn finish_picture(
        &self,
        buffer: &mut PictureBuffer,
        line_number: usize,
        target: &mut Vec<BinaryVector>,
    ) -> Result<()> {
        if buffer.rows == 0 {
            return Ok(());
        }
        if buffer.rows != self.shape.height {
            return Err(HopfieldError::PatternHeight {
                line: line_number,
                expected: self.shape.height,
                found: buffer.rows,
            });
        }

        let cells = std::mem::replace(&mut buffer.cells, Vec::with_capacity(self.shape.len()));
        buffer.rows = 0;
        target.push(BinaryVector::from_bipolar(cells)?);
        Ok(())
    }
}
