// WHY: Shared data model consumed by the normalizer, segment builder and both span producers
// Categories are a closed set; free-form labels from correction sources map onto it with a fallback

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use tracing::debug;

/// Closed classification of a correction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Spelling,
    Spacing,
    Grammar,
    Recommendation,
    OtherExpression,
    /// Fallback for labels that match nothing else
    Etc,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Spelling,
        Category::Spacing,
        Category::Grammar,
        Category::Recommendation,
        Category::OtherExpression,
        Category::Etc,
    ];

    /// Canonical snake_case name, as used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Spelling => "spelling",
            Category::Spacing => "spacing",
            Category::Grammar => "grammar",
            Category::Recommendation => "recommendation",
            Category::OtherExpression => "other_expression",
            Category::Etc => "etc",
        }
    }

    /// Map a free-form label (e.g. "타이포/띄어쓰기") onto a category
    /// WHY: keyword order matters, a label naming both typo and spacing is a spelling fix
    pub fn from_label(label: &str) -> Self {
        if let Ok(category) = label.trim().parse::<Category>() {
            return category;
        }

        let lowered = label.to_lowercase();
        let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lowered.contains(k));

        if contains_any(&["spelling", "typo", "맞춤법", "타이포", "오타"]) {
            Category::Spelling
        } else if contains_any(&["spacing", "띄어쓰기"]) {
            Category::Spacing
        } else if contains_any(&["grammar", "문법"]) {
            Category::Grammar
        } else if contains_any(&["recommend", "추천", "자연스러움"]) {
            Category::Recommendation
        } else if contains_any(&["other", "expression", "표현"]) {
            Category::OtherExpression
        } else {
            debug!(label, "Unrecognized correction label, using fallback category");
            Category::Etc
        }
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    /// Strict parse of canonical names; unknown labels are an error
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "spelling" => Ok(Category::Spelling),
            "spacing" => Ok(Category::Spacing),
            "grammar" => Ok(Category::Grammar),
            "recommendation" => Ok(Category::Recommendation),
            "other_expression" | "other" => Ok(Category::OtherExpression),
            "etc" => Ok(Category::Etc),
            _ => bail!("Unknown correction category: {s}"),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-open `[start, end)` character range over a text, plus correction metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionSpan {
    pub start: usize,
    pub end: usize,
    pub category: Category,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl CorrectionSpan {
    pub fn new(start: usize, end: usize, category: Category, message: impl Into<String>) -> Self {
        Self {
            start,
            end,
            category,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Spans with `start >= end` never reach the segment builder
    pub fn is_void(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.is_void()
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Output unit of the segment builder, borrowing from the text and accepted spans
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment<'a> {
    Plain {
        text: &'a str,
        start: usize,
        end: usize,
    },
    Annotated {
        text: &'a str,
        start: usize,
        end: usize,
        category: Category,
        message: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        suggestion: Option<&'a str>,
    },
}

impl<'a> Segment<'a> {
    /// Slice of the original text covered by this segment
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Plain { text, .. } | Segment::Annotated { text, .. } => *text,
        }
    }

    /// Character range covered by this segment
    pub fn range(&self) -> Range<usize> {
        match self {
            Segment::Plain { start, end, .. } | Segment::Annotated { start, end, .. } => {
                *start..*end
            }
        }
    }

    pub fn is_annotated(&self) -> bool {
        matches!(self, Segment::Annotated { .. })
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            Segment::Annotated { category, .. } => Some(*category),
            Segment::Plain { .. } => None,
        }
    }

    /// Tooltip text for annotated segments: the message, followed by the
    /// suggestion if it adds anything
    pub fn tooltip(&self) -> Option<String> {
        match self {
            Segment::Plain { .. } => None,
            Segment::Annotated { message, suggestion, .. } => Some(match suggestion {
                Some(s) if !message.contains(s) => format!("{message} (제안: {s})"),
                _ => (*message).to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_exact_names() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.as_str()), category);
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_category_from_free_form_labels() {
        let cases = [
            ("타이포/띄어쓰기", Category::Spelling),
            ("문법/자연스러움", Category::Grammar),
            ("Spacing issue", Category::Spacing),
            ("typo", Category::Spelling),
            ("자연스러움", Category::Recommendation),
            ("other-expression", Category::OtherExpression),
            ("표현 다듬기", Category::OtherExpression),
        ];
        for (label, expected) in cases {
            assert_eq!(Category::from_label(label), expected, "label: {label}");
        }
    }

    #[test]
    fn test_unknown_label_falls_back_to_etc() {
        assert_eq!(Category::from_label("외계어"), Category::Etc);
        assert_eq!(Category::from_label(""), Category::Etc);
        assert!("외계어".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde_names() {
        let json = serde_json::to_string(&Category::OtherExpression).unwrap();
        assert_eq!(json, "\"other_expression\"");
        let parsed: Category = serde_json::from_str("\"spacing\"").unwrap();
        assert_eq!(parsed, Category::Spacing);
    }

    #[test]
    fn test_void_span() {
        assert!(CorrectionSpan::new(3, 3, Category::Etc, "").is_void());
        assert!(CorrectionSpan::new(4, 2, Category::Etc, "").is_void());
        assert!(!CorrectionSpan::new(2, 4, Category::Etc, "").is_void());
        assert_eq!(CorrectionSpan::new(4, 2, Category::Etc, "").len(), 0);
    }

    #[test]
    fn test_segment_tooltip() {
        let annotated = Segment::Annotated {
            text: "하세오",
            start: 3,
            end: 6,
            category: Category::Spelling,
            message: "‘하세요’가 바른 표기예요.",
            suggestion: Some("하세요"),
        };
        assert_eq!(annotated.tooltip().unwrap(), "‘하세요’가 바른 표기예요.");

        let with_new_info = Segment::Annotated {
            text: "날씨가좋습니다",
            start: 0,
            end: 7,
            category: Category::Spacing,
            message: "띄어쓰기를 교정했어요.",
            suggestion: Some("날씨가 좋습니다"),
        };
        assert_eq!(
            with_new_info.tooltip().unwrap(),
            "띄어쓰기를 교정했어요. (제안: 날씨가 좋습니다)"
        );

        let plain = Segment::Plain { text: "안녕 ", start: 0, end: 3 };
        assert!(plain.tooltip().is_none());
        assert!(!plain.is_annotated());
        assert_eq!(plain.range(), 0..3);
    }
}
