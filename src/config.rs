// WHY: Rule sets live in configuration files so corrections can change without a rebuild
// TOML and JSON are both accepted; every pattern is compiled at load time

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::generator::rules::{RuleSet, RuleSpec};

/// On-disk rule set document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFile {
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

/// JSON documents may be a bare array of rules or a `{ "rules": [...] }` object
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonRuleFile {
    Bare(Vec<RuleSpec>),
    Wrapped(RuleFile),
}

/// Supported rule file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFormat {
    Toml,
    Json,
}

impl RuleFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(RuleFormat::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(RuleFormat::Json),
            _ => bail!(
                "Unsupported rule file extension (expected .toml or .json): {}",
                path.display()
            ),
        }
    }
}

impl RuleFile {
    pub fn parse(content: &str, format: RuleFormat) -> Result<Self> {
        match format {
            RuleFormat::Toml => toml::from_str(content).context("Failed to parse TOML rule file"),
            RuleFormat::Json => {
                let parsed: JsonRuleFile =
                    serde_json::from_str(content).context("Failed to parse JSON rule file")?;
                Ok(match parsed {
                    JsonRuleFile::Bare(rules) => RuleFile { rules },
                    JsonRuleFile::Wrapped(file) => file,
                })
            }
        }
    }

    pub fn compile(self) -> Result<RuleSet> {
        RuleSet::new(self.rules)
    }
}

/// Load and compile a rule file
pub fn load_rule_file(path: &Path) -> Result<RuleSet> {
    let format = RuleFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rule file: {}", path.display()))?;
    let rules = RuleFile::parse(&content, format)
        .and_then(RuleFile::compile)
        .with_context(|| format!("Invalid rule file: {}", path.display()))?;

    info!("Loaded {} rules from {}", rules.len(), path.display());
    Ok(rules)
}

/// Load the rule set at `path`, or the built-in rules when no path is given
pub fn load_rule_set(path: Option<&Path>) -> Result<RuleSet> {
    match path {
        Some(path) => load_rule_file(path),
        None => RuleSet::builtin(),
    }
}
