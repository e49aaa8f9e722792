//! Line width measurement used by the line packer.

use unicode_width::UnicodeWidthStr;

pub trait LineMeasure {
    fn width(&self, line: &str) -> usize;
}

/// Counts Unicode scalar values. Identical to byte length for ASCII class names.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharCount;

impl LineMeasure for CharCount {
    fn width(&self, line: &str) -> usize {
        line.chars().count()
    }
}

/// Terminal display columns (wide CJK glyphs count as two, combining marks as zero).
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayWidth;

impl LineMeasure for DisplayWidth {
    fn width(&self, line: &str) -> usize {
        UnicodeWidthStr::width(line)
    }
}
