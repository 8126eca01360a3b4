// WHY: Rules are compiled once at configuration time so a malformed rule fails before any call
// Each rule drives both the correction pass and the location pass of the generator

use anyhow::{bail, Context, Result};
use regex_automata::meta::Regex;
use regex_automata::util::captures::Captures;
use regex_automata::util::{interpolate, syntax};
use regex_automata::PatternID;
use std::cell::RefCell;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::span::Category;

/// Declarative form of a substitution rule, as read from configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Regular expression searched for in the text
    pub pattern: String,
    /// Replacement text; `$1`, `${name}` expand capture groups and `$$` is a literal dollar.
    /// Every referenced group must exist in `pattern`.
    pub replacement: String,
    pub category: Category,
    #[serde(default)]
    pub message: String,
}

impl RuleSpec {
    pub fn new(
        pattern: impl Into<String>,
        replacement: impl Into<String>,
        category: Category,
        message: impl Into<String>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
            category,
            message: message.into(),
        }
    }
}

/// A compiled substitution rule
#[derive(Debug, Clone)]
pub struct Rule {
    spec: RuleSpec,
    regex: Regex,
    /// Replacement contains `$` references and must be expanded per match
    templated: bool,
}

impl Rule {
    /// Compile a rule, rejecting invalid patterns, patterns that can match
    /// the empty string and replacements naming groups the pattern lacks
    pub fn new(spec: RuleSpec) -> Result<Self> {
        if spec.pattern.is_empty() {
            bail!("Rule pattern must not be empty");
        }
        let regex = Regex::new(&spec.pattern)
            .with_context(|| format!("Invalid rule pattern: {:?}", spec.pattern))?;

        // Zero-width matches yield void spans and insertions the location pass can't report
        let hir = syntax::parse(&spec.pattern)
            .with_context(|| format!("Invalid rule pattern: {:?}", spec.pattern))?;
        if hir.properties().minimum_len() == Some(0) {
            bail!("Rule pattern {:?} can match the empty string", spec.pattern);
        }

        let templated = spec.replacement.contains('$');
        if templated {
            check_group_references(&regex, &spec.replacement)?;
        }
        Ok(Self { spec, regex, templated })
    }

    pub fn category(&self) -> Category {
        self.spec.category
    }

    pub fn message(&self) -> &str {
        &self.spec.message
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Append the replacement for one match of this rule in `haystack` to `dst`
    pub(crate) fn expand_into(&self, caps: &Captures, haystack: &str, dst: &mut String) {
        if self.templated {
            caps.interpolate_string_into(haystack, &self.spec.replacement, dst);
        } else {
            dst.push_str(&self.spec.replacement);
        }
    }

    /// Replace every non-overlapping match in `haystack`
    pub fn replace_all(&self, haystack: &str) -> String {
        let mut result = String::with_capacity(haystack.len());
        let mut last = 0usize;

        for caps in self.regex.captures_iter(haystack) {
            let Some(m) = caps.get_match() else {
                continue;
            };
            result.push_str(&haystack[last..m.start()]);
            self.expand_into(&caps, haystack, &mut result);
            last = m.end();
        }

        result.push_str(&haystack[last..]);
        result
    }
}

/// Ordered, fully compiled list of rules
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile every rule in declared order; the first malformed rule fails the whole set
    pub fn new<I>(specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = RuleSpec>,
    {
        let rules = specs
            .into_iter()
            .enumerate()
            .map(|(index, spec)| {
                let pattern = spec.pattern.clone();
                Rule::new(spec)
                    .with_context(|| format!("Rule #{index} ({pattern:?}) failed to compile"))
            })
            .collect::<Result<Vec<_>>>()?;

        info!("Compiled rule set with {} rules", rules.len());
        Ok(Self { rules })
    }

    /// Built-in stand-in rules used when no correction service or rule file is configured
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_specs())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Walk `replacement` with the same parser the expansion uses and fail on any
/// `$N` or `${name}` that `regex` does not define
fn check_group_references(regex: &Regex, replacement: &str) -> Result<()> {
    let groups = regex.group_info();
    let group_len = groups.group_len(PatternID::ZERO);
    let unknown = RefCell::new(Vec::new());

    let mut scratch = String::new();
    interpolate::string(
        replacement,
        |index, _| {
            if index >= group_len {
                unknown.borrow_mut().push(format!("${index}"));
            }
        },
        |name| {
            let index = groups.to_index(PatternID::ZERO, name);
            if index.is_none() {
                unknown.borrow_mut().push(format!("${{{name}}}"));
            }
            index
        },
        &mut scratch,
    );

    let unknown = unknown.into_inner();
    if !unknown.is_empty() {
        bail!(
            "Replacement {replacement:?} references unknown capture group(s): {}",
            unknown.join(", ")
        );
    }
    Ok(())
}

/// Declarative form of the built-in rules
pub fn builtin_specs() -> Vec<RuleSpec> {
    vec![
        RuleSpec::new(
            "하세오",
            "하세요",
            Category::Spelling,
            "‘하세요’가 바른 표기예요.",
        ),
        RuleSpec::new(
            r"날씨가\s*좋습니다",
            "날씨가 좋습니다",
            Category::Spacing,
            "띄어쓰기를 교정했어요.",
        ),
    ]
}
