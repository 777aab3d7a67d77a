//! Rule catalog - Declarative remediation rules
//!
//! This module defines the data structures for detection rules and the catalog
//! that holds them.
//!
//! ## Overview
//!
//! - [`Severity`] - Issue severity levels (High, Medium, Low)
//! - [`RuleAction`] - The remediation action a rule prescribes
//! - [`RemediationRule`] - A single detection rule with patterns and replacements
//! - [`RuleCatalog`] - Ordered, immutable collection of rules
//!
//! The catalog is loaded once at startup and never mutated. Adding a rule only
//! means adding an entry to [`RuleCatalog::baseline`] and a pattern table in
//! [`patterns`]; the scanner and processor are driven entirely by rule data.

pub mod patterns;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Severity levels for detected issues.
///
/// Severity drives quality-score weighting and remediation priority:
///
/// - **High** - fabricated or unverifiable claims (weight 3)
/// - **Medium** - generic phrasing, implausible timelines (weight 2)
/// - **Low** - minor stylistic issues (weight 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Claims that misrepresent facts and must be verified or removed.
    High,
    /// Language that weakens credibility but does not fabricate facts.
    Medium,
    /// Minor issues, suggestions only.
    Low,
}

impl Severity {
    /// Parse a severity from its lowercase string form.
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "high" | "critical" => Some(Self::High),
            "medium" | "moderate" => Some(Self::Medium),
            "low" | "minor" => Some(Self::Low),
            _ => None,
        }
    }

    /// Weight used by the quality-score penalty.
    pub fn weight(self) -> u32 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

/// The remediation action a rule prescribes for its matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleAction {
    /// Verify the claim first; replace only if it cannot be verified.
    ReplaceVerified,
    /// Always replace with the rule's specific neutral wording, no verification.
    ReplaceSpecific,
    /// Verify the claim first; remove it entirely if it cannot be verified.
    RemoveOrVerify,
    /// Always replace with a neutral equivalent, no verification.
    ReplaceNeutral,
}

/// A single detection rule: pattern set, severity, action and replacement table.
///
/// Immutable after catalog load. The replacement table is an ordered list
/// scanned front-to-back; keys are declared longest-first so the longest
/// applicable key wins (see [`RemediationRule::suggest_replacement`]).
#[derive(Debug)]
pub struct RemediationRule {
    /// Unique rule identifier (e.g. "fabricated_metrics").
    pub id: &'static str,
    /// Compiled case-insensitive patterns this rule matches.
    pub patterns: &'static [Regex],
    /// Severity assigned to every match of this rule.
    pub severity: Severity,
    /// Remediation action for matches of this rule.
    pub action: RuleAction,
    /// Ordered (key, replacement) pairs; keys looked up as case-insensitive
    /// substrings of the matched text.
    pub replacements: &'static [(&'static str, &'static str)],
}

impl RemediationRule {
    /// Look up the replacement for a matched text fragment.
    ///
    /// Scans the replacement table front-to-back and returns the value of the
    /// first key that is a substring of `matched`, or `None` when no key
    /// applies. Lookup is case-insensitive and treats hyphens and whitespace
    /// runs as equivalent, so a key like "cutting-edge" serves every surface
    /// form its pattern can match ("cutting edge", "Cutting-Edge", ...).
    pub fn suggest_replacement(&self, matched: &str) -> Option<&'static str> {
        let normalized = normalize_phrase(matched);
        self.replacements
            .iter()
            .find(|(key, _)| normalized.contains(&normalize_phrase(key)))
            .map(|(_, value)| *value)
    }
}

/// Lowercase, turn hyphens into spaces, and collapse whitespace runs, so
/// separator variants of the same phrase compare equal.
fn normalize_phrase(s: &str) -> String {
    s.to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rule identifier for fabricated quantitative claims.
pub const RULE_FABRICATED_METRICS: &str = "fabricated_metrics";
/// Rule identifier for stock AI-generated phrasing.
pub const RULE_GENERIC_AI_LANGUAGE: &str = "generic_ai_language";
/// Rule identifier for unverifiable accolade language.
pub const RULE_UNVERIFIABLE_CLAIMS: &str = "unverifiable_claims";
/// Rule identifier for implausible delivery-speed claims.
pub const RULE_TIMELINE_INCONSISTENCIES: &str = "timeline_inconsistencies";

/// Ordered, immutable collection of remediation rules keyed by id.
///
/// Built once at process initialization and shared read-only between the
/// scanner, processor and clean-content generator.
#[derive(Debug)]
pub struct RuleCatalog {
    rules: Vec<RemediationRule>,
}

impl RuleCatalog {
    /// Build the baseline catalog with the four standard detection rules.
    pub fn baseline() -> Self {
        Self {
            rules: vec![
                RemediationRule {
                    id: RULE_FABRICATED_METRICS,
                    patterns: patterns::FABRICATED_METRIC_PATTERNS.as_slice(),
                    severity: Severity::High,
                    action: RuleAction::ReplaceVerified,
                    replacements: patterns::FABRICATED_METRIC_REPLACEMENTS,
                },
                RemediationRule {
                    id: RULE_GENERIC_AI_LANGUAGE,
                    patterns: patterns::GENERIC_LANGUAGE_PATTERNS.as_slice(),
                    severity: Severity::Medium,
                    action: RuleAction::ReplaceSpecific,
                    replacements: patterns::GENERIC_LANGUAGE_REPLACEMENTS,
                },
                RemediationRule {
                    id: RULE_UNVERIFIABLE_CLAIMS,
                    patterns: patterns::UNVERIFIABLE_CLAIM_PATTERNS.as_slice(),
                    severity: Severity::High,
                    action: RuleAction::RemoveOrVerify,
                    replacements: patterns::UNVERIFIABLE_CLAIM_REPLACEMENTS,
                },
                RemediationRule {
                    id: RULE_TIMELINE_INCONSISTENCIES,
                    patterns: patterns::TIMELINE_PATTERNS.as_slice(),
                    severity: Severity::Medium,
                    action: RuleAction::ReplaceNeutral,
                    replacements: patterns::TIMELINE_REPLACEMENTS,
                },
            ],
        }
    }

    /// All rules in catalog order.
    pub fn rules(&self) -> &[RemediationRule] {
        &self.rules
    }

    /// Look up a rule by id.
    pub fn rule(&self, id: &str) -> Option<&RemediationRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Number of rules in the catalog.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::baseline()
    }
}
