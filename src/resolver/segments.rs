// WHY: Renderers need an ordered plain/annotated partition that concatenates back to the input
// Slices borrow from the source text; offsets stay in characters, slicing goes through CharOffsets

use crate::span::{CorrectionSpan, Segment};
use crate::text::{CharOffsets, CharPos};

/// Partition `text` into plain and annotated segments
///
/// `spans` must already be normalized (ascending, non-overlapping, non-void). Any span that
/// still overlaps the cursor is skipped rather than duplicating characters.
pub fn build<'a>(text: &'a str, spans: &'a [CorrectionSpan]) -> Vec<Segment<'a>> {
    let offsets = CharOffsets::new(text);
    let text_len = offsets.char_len();
    let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0usize;

    for span in spans {
        let end = span.end.min(text_len);
        if span.start < cursor || span.start >= end {
            continue;
        }

        if span.start > cursor {
            segments.push(plain(text, &offsets, cursor, span.start));
        }

        let bytes = offsets.byte_range(CharPos(span.start), CharPos(end));
        segments.push(Segment::Annotated {
            text: &text[bytes],
            start: span.start,
            end,
            category: span.category,
            message: &span.message,
            suggestion: span.suggestion.as_deref(),
        });
        cursor = end;
    }

    if cursor < text_len {
        segments.push(plain(text, &offsets, cursor, text_len));
    }

    segments
}

fn plain<'a>(text: &'a str, offsets: &CharOffsets, start: usize, end: usize) -> Segment<'a> {
    let bytes = offsets.byte_range(CharPos(start), CharPos(end));
    Segment::Plain {
        text: &text[bytes],
        start,
        end,
    }
}

/// Concatenate segment texts in emission order
pub fn reconstruct(segments: &[Segment<'_>]) -> String {
    segments.iter().map(Segment::text).collect()
}
