//! Scanner module - Rule-driven content scanning
//!
//! The scanner applies the rule catalog to a body of text and produces typed
//! [`Issue`]s. Scanning is pure and side-effect-free: the same text and catalog
//! always yield the same issue list, in the same order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{RuleAction, RuleCatalog, Severity, RULE_FABRICATED_METRICS};
use crate::content::ValidationReport;

/// Number of characters of surrounding text kept on each side of a match.
const CONTEXT_CHARS: usize = 50;

/// Section label assigned to issues converted from an external validation report.
const VALIDATION_SECTION: &str = "validation_report";

/// A single detected instance of problematic text, tied to one rule.
///
/// Created by the scanner for every pattern match; never mutated; consumed
/// exactly once by the processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Identifier of the rule that matched.
    pub rule_id: String,
    /// The exact text the pattern matched.
    pub matched_text: String,
    /// The match plus up to 50 characters of surrounding text on each side.
    pub context: String,
    /// Severity copied from the rule.
    pub severity: Severity,
    /// Label of the section the text came from.
    pub source_section: String,
    /// Remediation action copied from the rule.
    pub action: RuleAction,
    /// Replacement from the rule's table, when a key applies to the match.
    pub suggested_replacement: Option<String>,
}

/// Applies the rule catalog to text sections and validation reports.
pub struct ContentScanner<'a> {
    catalog: &'a RuleCatalog,
}

impl<'a> ContentScanner<'a> {
    /// Create a scanner over an immutable catalog.
    pub fn new(catalog: &'a RuleCatalog) -> Self {
        Self { catalog }
    }

    /// Scan a body of text, returning one issue per pattern match.
    ///
    /// For each rule in catalog order, every non-overlapping case-insensitive
    /// match of every pattern becomes an [`Issue`]. `section` labels where the
    /// text came from (e.g. "professional_summary").
    pub fn scan(&self, text: &str, section: &str) -> Vec<Issue> {
        let mut issues = Vec::new();

        for rule in self.catalog.rules() {
            for pattern in rule.patterns {
                for m in pattern.find_iter(text) {
                    issues.push(Issue {
                        rule_id: rule.id.to_string(),
                        matched_text: m.as_str().to_string(),
                        context: context_window(text, m.start(), m.end()),
                        severity: rule.severity,
                        source_section: section.to_string(),
                        action: rule.action,
                        suggested_replacement: rule
                            .suggest_replacement(m.as_str())
                            .map(str::to_string),
                    });
                }
            }
        }

        debug!(
            section,
            issue_count = issues.len(),
            "Section scan complete"
        );
        issues
    }

    /// Convert an external validation report into issues.
    ///
    /// Each flagged claim becomes one issue under the fabricated-metrics rule.
    /// Severity is remapped: high stays high, everything else (low, medium,
    /// unrecognized, absent) becomes medium.
    pub fn scan_validation_report(&self, report: &ValidationReport) -> Vec<Issue> {
        let rule = match self.catalog.rule(RULE_FABRICATED_METRICS) {
            Some(rule) => rule,
            None => return Vec::new(),
        };

        let mut issues = Vec::new();
        for block in &report.flagged_content {
            for flagged in &block.claims {
                let severity = match flagged.severity.as_deref().and_then(Severity::from_string) {
                    Some(Severity::High) => Severity::High,
                    _ => Severity::Medium,
                };
                issues.push(Issue {
                    rule_id: rule.id.to_string(),
                    matched_text: flagged.claim.clone(),
                    context: flagged.claim.clone(),
                    severity,
                    source_section: VALIDATION_SECTION.to_string(),
                    action: rule.action,
                    suggested_replacement: rule
                        .suggest_replacement(&flagged.claim)
                        .map(str::to_string),
                });
            }
        }

        debug!(issue_count = issues.len(), "Validation report converted");
        issues
    }
}

/// Extract the match plus up to [`CONTEXT_CHARS`] characters on each side,
/// clipped to the text bounds and to character boundaries.
fn context_window(text: &str, start: usize, end: usize) -> String {
    let from = text[..start]
        .char_indices()
        .rev()
        .nth(CONTEXT_CHARS - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    let to = text[end..]
        .char_indices()
        .nth(CONTEXT_CHARS)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());
    text[from..to].to_string()
}
