// WHY: Regex engines report byte offsets while every public span is a character index
// All byte <-> char conversion goes through CharOffsets so multi-byte Korean text is never split

use std::ops::Range;

/// 0-based byte position in source text
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct BytePos(pub usize);

/// 0-based character (Unicode scalar) position in source text
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct CharPos(pub usize);

/// Number of characters in `text`, the unit every span is measured in
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Boundary table mapping character indices to byte offsets for one text
#[derive(Debug, Clone)]
pub struct CharOffsets {
    /// Byte offset of every character start, plus a trailing entry for the text length
    boundaries: Vec<usize>,
}

impl CharOffsets {
    pub fn new(text: &str) -> Self {
        let mut boundaries = Vec::with_capacity(text.len() + 1);
        boundaries.extend(text.char_indices().map(|(byte, _)| byte));
        boundaries.push(text.len());
        Self { boundaries }
    }

    /// Length of the text in characters
    pub fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Convert a byte position to the index of the character starting there
    /// WHY: positions inside a multi-byte character round up to the next boundary
    pub fn to_char(&self, pos: BytePos) -> CharPos {
        match self.boundaries.binary_search(&pos.0) {
            Ok(idx) => CharPos(idx),
            Err(idx) => CharPos(idx.min(self.char_len())),
        }
    }

    /// Convert a character position to its byte offset, clamped to the end of the text
    pub fn to_byte(&self, pos: CharPos) -> BytePos {
        let idx = pos.0.min(self.char_len());
        BytePos(self.boundaries[idx])
    }

    /// Byte range covering characters `[start, end)`, clamped to the text
    pub fn byte_range(&self, start: CharPos, end: CharPos) -> Range<usize> {
        let start = self.to_byte(start).0;
        let end = self.to_byte(end).0.max(start);
        start..end
    }
}
