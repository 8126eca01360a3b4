// WHY: Some correction sources only report "original -> corrected" pairs with no offsets
// A single leftmost-first literal automaton scans the text once; matches never overlap

use aho_corasick::{AhoCorasick, MatchKind};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::span::{Category, CorrectionSpan};
use crate::text::{BytePos, CharOffsets};

/// A correction known only by the literal text it replaces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstringCorrection {
    pub original: String,
    pub corrected: String,
    pub category: Category,
}

impl SubstringCorrection {
    pub fn new(
        original: impl Into<String>,
        corrected: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            original: original.into(),
            corrected: corrected.into(),
            category,
        }
    }

    fn to_span(&self, start: usize, end: usize) -> CorrectionSpan {
        CorrectionSpan::new(start, end, self.category, format!("제안: {}", self.corrected))
            .with_suggestion(self.corrected.clone())
    }
}

/// Locator for substring-keyed corrections
///
/// Entries sharing the same `original` form a group. Successive occurrences of that
/// original in the text take the group's entries in declaration order, and the last
/// entry of the group covers any further occurrences.
#[derive(Debug, Clone)]
pub struct SubstringMatcher {
    automaton: AhoCorasick,
    /// One group per distinct original, indexed by automaton pattern id
    groups: Vec<Vec<SubstringCorrection>>,
}

impl SubstringMatcher {
    pub fn new(entries: &[SubstringCorrection]) -> Result<Self> {
        let mut group_of: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<Vec<SubstringCorrection>> = Vec::new();

        for entry in entries {
            if entry.original.is_empty() {
                debug!(
                    corrected = %entry.corrected,
                    "Ignoring substring correction with empty original"
                );
                continue;
            }
            let idx = *group_of.entry(entry.original.as_str()).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[idx].push(entry.clone());
        }

        for group in &groups {
            let conflicting = group.windows(2).any(|pair| {
                pair[0].corrected != pair[1].corrected || pair[0].category != pair[1].category
            });
            if conflicting {
                warn!(
                    original = %group[0].original,
                    entries = group.len(),
                    "Conflicting corrections share one original; applying them by occurrence order"
                );
            }
        }

        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostFirst)
            .build(groups.iter().map(|group| group[0].original.as_str()))
            .context("Failed to build substring automaton")?;

        Ok(Self { automaton, groups })
    }

    /// Number of distinct originals the matcher searches for
    pub fn pattern_count(&self) -> usize {
        self.groups.len()
    }

    /// Raw spans for every match in `text`, in text order
    pub fn locate(&self, text: &str) -> Vec<CorrectionSpan> {
        if self.groups.is_empty() || text.is_empty() {
            return Vec::new();
        }

        let offsets = CharOffsets::new(text);
        let mut consumed = vec![0usize; self.groups.len()];
        let mut spans = Vec::new();

        for m in self.automaton.find_iter(text) {
            let group_idx = m.pattern().as_usize();
            let group = &self.groups[group_idx];
            let entry = &group[consumed[group_idx].min(group.len() - 1)];
            consumed[group_idx] += 1;

            let start = offsets.to_char(BytePos(m.start())).0;
            let end = offsets.to_char(BytePos(m.end())).0;
            spans.push(entry.to_span(start, end));
        }

        debug!(
            spans = spans.len(),
            patterns = self.groups.len(),
            "Located substring corrections"
        );
        spans
    }
}

/// Build a matcher for `entries` and locate them in `text`
pub fn locate(text: &str, entries: &[SubstringCorrection]) -> Result<Vec<CorrectionSpan>> {
    Ok(SubstringMatcher::new(entries)?.locate(text))
}
