// WHY: End-to-end flows handed to the rendering side: producer -> normalize -> build
// The report owns the text and accepted spans; segments are borrowed views over them

use anyhow::Result;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::generator::{self, RuleSet};
use crate::resolver::{build, normalize_owned};
use crate::source::CorrectionRecord;
use crate::span::{CorrectionSpan, Segment};

/// Everything a renderer needs for one checked text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionReport {
    pub original_text: String,
    pub corrected_text: String,
    /// Accepted spans: ascending, non-overlapping, non-void
    pub spans: Vec<CorrectionSpan>,
}

impl CorrectionReport {
    /// Normalize `raw_spans` against `original_text` and assemble a report
    pub fn new(
        original_text: String,
        corrected_text: String,
        raw_spans: Vec<CorrectionSpan>,
    ) -> Self {
        let spans = normalize_owned(&original_text, raw_spans);
        Self {
            original_text,
            corrected_text,
            spans,
        }
    }

    /// Plain/annotated partition of the original text
    pub fn segments(&self) -> Vec<Segment<'_>> {
        build(&self.original_text, &self.spans)
    }

    pub fn annotated_count(&self) -> usize {
        self.spans.len()
    }

    pub fn has_corrections(&self) -> bool {
        !self.spans.is_empty() || self.original_text != self.corrected_text
    }
}

impl Serialize for CorrectionReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CorrectionReport", 4)?;
        state.serialize_field("original_text", &self.original_text)?;
        state.serialize_field("corrected_text", &self.corrected_text)?;
        state.serialize_field("spans", &self.spans)?;
        state.serialize_field("segments", &self.segments())?;
        state.end()
    }
}

/// Run `rules` over `text` and resolve the spans they locate
pub fn check(text: &str, rules: &RuleSet) -> CorrectionReport {
    let generated = generator::generate(text, rules);
    let report = CorrectionReport::new(text.to_string(), generated.corrected_text, generated.spans);
    debug!(annotated = report.annotated_count(), "Checked text against rule set");
    report
}

/// Resolve the items of a correction-service record against its original text
pub fn render(record: &CorrectionRecord) -> Result<CorrectionReport> {
    let raw_spans = record.raw_spans()?;
    let report = CorrectionReport::new(
        record.original_text().to_string(),
        record.corrected_text().to_string(),
        raw_spans,
    );
    debug!(annotated = report.annotated_count(), "Rendered correction record");
    Ok(report)
}
