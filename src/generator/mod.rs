// WHY: Two passes over one rule list that deliberately share no intermediate state
// Correction compounds rule by rule; location always scans the unmodified input
// so offsets stay valid

use serde::Serialize;
use tracing::debug;

pub mod rules;
pub mod substring;

pub use rules::{builtin_specs, Rule, RuleSet, RuleSpec};
pub use substring::{locate, SubstringCorrection, SubstringMatcher};

use crate::span::CorrectionSpan;
use crate::text::{BytePos, CharOffsets};

/// Output of [`generate`]: the corrected text and raw spans over the original text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generated {
    pub corrected_text: String,
    pub spans: Vec<CorrectionSpan>,
}

/// Apply `rules` to `text`, producing the corrected text and raw spans located in `text`
pub fn generate(text: &str, rules: &RuleSet) -> Generated {
    let corrected_text = correct(text, rules);
    let spans = scan(text, rules);
    debug!(
        rules = rules.len(),
        spans = spans.len(),
        changed = corrected_text != text,
        "Generated corrections"
    );
    Generated { corrected_text, spans }
}

/// Correction pass: each rule rewrites the output of the previous one
pub fn correct(text: &str, rules: &RuleSet) -> String {
    let mut corrected = text.to_string();
    for rule in rules {
        corrected = rule.replace_all(&corrected);
    }
    corrected
}

/// Location pass: every rule scans the original `text`, never the corrected one
///
/// Spans come out grouped by rule in declared order, then by position, which is the
/// input order the normalizer uses to break ties.
pub fn scan(text: &str, rules: &RuleSet) -> Vec<CorrectionSpan> {
    let offsets = CharOffsets::new(text);
    let mut spans = Vec::new();
    let mut suggestion = String::new();

    for rule in rules {
        for caps in rule.regex().captures_iter(text) {
            let Some(m) = caps.get_match() else {
                continue;
            };

            suggestion.clear();
            rule.expand_into(&caps, text, &mut suggestion);

            spans.push(CorrectionSpan {
                start: offsets.to_char(BytePos(m.start())).0,
                end: offsets.to_char(BytePos(m.end())).0,
                category: rule.category(),
                message: rule.message().to_string(),
                suggestion: Some(suggestion.clone()),
            });
        }
    }

    spans
}
