// WHY: Correction services answer in one of two shapes; both translate into raw
// CorrectionSpans so the normalizer and segment builder are shared between them

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::generator::substring::{SubstringCorrection, SubstringMatcher};
use crate::span::{Category, CorrectionSpan};

/// Offset-based error item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellError {
    /// Free-form category label, mapped with [`Category::from_label`]
    #[serde(rename = "type")]
    pub kind: String,
    /// Character offset into `original_text`
    pub offset: i64,
    /// Length in characters
    pub length: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl SpellError {
    /// Raw span for this item; negative offsets and lengths saturate to zero
    pub fn to_span(&self) -> CorrectionSpan {
        let start = clamp_non_negative(self.offset);
        let end = clamp_non_negative(self.offset.saturating_add(self.length));
        CorrectionSpan {
            start,
            end,
            category: Category::from_label(&self.kind),
            message: self.message.clone(),
            suggestion: self.suggestion.clone(),
        }
    }
}

fn clamp_non_negative(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

/// Offset-based service response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellResponse {
    pub original_text: String,
    pub corrected_text: String,
    /// `null` and a missing field both mean no errors
    #[serde(default)]
    pub errors: Option<Vec<SpellError>>,
}

/// Substring-based correction item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    pub original: String,
    pub corrected: String,
    /// Free-form category label such as "타이포/띄어쓰기"
    #[serde(rename = "type")]
    pub kind: String,
}

impl Correction {
    pub fn to_substring(&self) -> SubstringCorrection {
        SubstringCorrection::new(
            self.original.clone(),
            self.corrected.clone(),
            Category::from_label(&self.kind),
        )
    }
}

/// Intermediate texts reported by a multi-stage correction pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTexts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step1: Option<String>,
    #[serde(default, rename = "final", skip_serializing_if = "Option::is_none")]
    pub final_text: Option<String>,
}

/// Substring-based service response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResponse {
    pub original_text: String,
    pub corrected_text: String,
    /// Required: its presence is what tells this shape apart from [`SpellResponse`]
    pub corrections: Vec<Correction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_texts: Option<StageTexts>,
}

/// Either response shape a correction source may produce
///
/// Parse with [`CorrectionRecord::from_json`]; the shape is chosen by the
/// presence of `corrections`, never by trying one shape after the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CorrectionRecord {
    Pipeline(PipelineResponse),
    Spell(SpellResponse),
}

impl CorrectionRecord {
    /// Parse and validate a JSON response body
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).context("Correction response is not valid JSON")?;

        for field in ["original_text", "corrected_text"] {
            if !value.get(field).is_some_and(serde_json::Value::is_string) {
                bail!("Invalid correction response: `{field}` must be a string");
            }
        }

        // WHY: a malformed `corrections` item must fail, not fall through to the offset shape
        if value.get("corrections").is_some() {
            serde_json::from_value::<PipelineResponse>(value)
                .map(CorrectionRecord::Pipeline)
                .context("Invalid correction response: malformed `corrections`")
        } else {
            serde_json::from_value::<SpellResponse>(value)
                .map(CorrectionRecord::Spell)
                .context("Invalid correction response")
        }
    }

    pub fn original_text(&self) -> &str {
        match self {
            CorrectionRecord::Pipeline(r) => &r.original_text,
            CorrectionRecord::Spell(r) => &r.original_text,
        }
    }

    pub fn corrected_text(&self) -> &str {
        match self {
            CorrectionRecord::Pipeline(r) => &r.corrected_text,
            CorrectionRecord::Spell(r) => &r.corrected_text,
        }
    }

    /// Translate the record's items into raw spans over `original_text`
    pub fn raw_spans(&self) -> Result<Vec<CorrectionSpan>> {
        match self {
            CorrectionRecord::Spell(r) => Ok(r
                .errors
                .iter()
                .flatten()
                .map(SpellError::to_span)
                .collect()),
            CorrectionRecord::Pipeline(r) => {
                let entries: Vec<SubstringCorrection> =
                    r.corrections.iter().map(Correction::to_substring).collect();
                Ok(SubstringMatcher::new(&entries)?.locate(&r.original_text))
            }
        }
    }
}

impl From<SpellResponse> for CorrectionRecord {
    fn from(response: SpellResponse) -> Self {
        CorrectionRecord::Spell(response)
    }
}

impl From<PipelineResponse> for CorrectionRecord {
    fn from(response: PipelineResponse) -> Self {
        CorrectionRecord::Pipeline(response)
    }
}
