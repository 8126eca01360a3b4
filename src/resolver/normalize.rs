// WHY: Independent correction sources nominate overlapping ranges
// Each character is shown at most once
// Clamp, drop void spans, stable-sort by start, then sweep with first-accepted-wins

use tracing::debug;

use crate::span::CorrectionSpan;
use crate::text::char_len;

/// Clamp, validate and overlap-resolve raw spans against `text`
///
/// The result is strictly ascending and non-overlapping. Spans that are empty after
/// clamping are dropped; a span starting before the end of an already accepted span
/// is discarded, so ties at the same start go to the earlier input.
pub fn normalize(text: &str, raw_spans: &[CorrectionSpan]) -> Vec<CorrectionSpan> {
    normalize_with_len(char_len(text), raw_spans.iter().cloned())
}

/// Owned variant of [`normalize`] for callers that already hold the raw spans
pub fn normalize_owned(text: &str, raw_spans: Vec<CorrectionSpan>) -> Vec<CorrectionSpan> {
    normalize_with_len(char_len(text), raw_spans)
}

pub(crate) fn normalize_with_len<I>(text_len: usize, raw_spans: I) -> Vec<CorrectionSpan>
where
    I: IntoIterator<Item = CorrectionSpan>,
{
    let mut candidates: Vec<CorrectionSpan> = Vec::new();
    let mut dropped_void = 0usize;

    for mut span in raw_spans {
        span.start = span.start.min(text_len);
        span.end = span.end.min(text_len);
        if span.is_void() {
            dropped_void += 1;
            continue;
        }
        candidates.push(span);
    }

    // WHY: sort_by_key is stable, input order breaks ties between equal starts
    candidates.sort_by_key(|span| span.start);

    let mut accepted = Vec::with_capacity(candidates.len());
    let mut cursor = 0usize;
    let mut dropped_overlap = 0usize;

    for span in candidates {
        if span.start < cursor {
            dropped_overlap += 1;
            continue;
        }
        cursor = span.end;
        accepted.push(span);
    }

    debug!(
        accepted = accepted.len(),
        dropped_void, dropped_overlap, "Normalized correction spans"
    );
    accepted
}
