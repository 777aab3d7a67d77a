//! Report module - Remediation run aggregation
//!
//! Builds the write-once [`RemediationReport`] from the full issue and
//! remediation-result sets: severity counts, success rate, per-rule grouping,
//! a 0-100 quality score and rule-based recommendations.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::catalog::{Severity, RULE_FABRICATED_METRICS, RULE_GENERIC_AI_LANGUAGE};
use crate::processor::{ProcessOutcome, RemediationResult};
use crate::scanner::Issue;

/// Multiplier applied to the average severity weight of the issue set.
const SEVERITY_DENSITY_FACTOR: f64 = 20.0;
/// Maximum bonus for a fully remediated batch.
const REMEDIATION_BONUS: f64 = 10.0;
/// Success rate below which a process-improvement recommendation is emitted.
const SUCCESS_RATE_FLOOR: u32 = 80;
/// Generic-language issue count above which a quality recommendation is emitted.
const GENERIC_LANGUAGE_THRESHOLD: usize = 3;

/// Recommendation priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

/// A prioritized, rule-derived recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub priority: Priority,
    /// Stable category key ("content_accuracy", "content_quality",
    /// "process_improvement").
    pub category: &'static str,
    pub message: String,
}

/// Issue counts per severity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Headline numbers for one remediation run.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub total_issues: usize,
    pub by_severity: SeverityCounts,
    pub processed: usize,
    pub remediated: usize,
    /// `round(remediated / processed * 100)`; defined as 0 when nothing was
    /// processed.
    pub success_rate: u32,
}

/// The auditable artifact of one remediation run. Built once, never updated.
#[derive(Debug, Serialize)]
pub struct RemediationReport {
    pub generated_at: DateTime<Utc>,
    pub summary: ReportSummary,
    /// Issues grouped by rule id.
    pub issues_by_type: BTreeMap<String, Vec<Issue>>,
    /// Per-issue remediation results, in processing order.
    pub changes: Vec<RemediationResult>,
    /// 0-100 aggregate of severity density and remediation success.
    pub quality_score: f64,
    pub recommendations: Vec<Recommendation>,
}

/// Aggregates issues and remediation outcomes into a [`RemediationReport`].
pub struct ReportGenerator;

impl ReportGenerator {
    /// Build the report for one remediation run.
    pub fn build_report(issues: &[Issue], outcome: &ProcessOutcome) -> RemediationReport {
        let by_severity = count_by_severity(issues);
        let success_rate = success_rate(outcome.remediated, outcome.processed);
        let quality_score = quality_score(issues, outcome);

        let mut issues_by_type: BTreeMap<String, Vec<Issue>> = BTreeMap::new();
        for issue in issues {
            issues_by_type
                .entry(issue.rule_id.clone())
                .or_default()
                .push(issue.clone());
        }

        let recommendations = recommendations(&issues_by_type, success_rate, outcome.processed);

        info!(
            total_issues = issues.len(),
            remediated = outcome.remediated,
            success_rate,
            quality_score,
            "Remediation report generated"
        );

        RemediationReport {
            generated_at: Utc::now(),
            summary: ReportSummary {
                total_issues: issues.len(),
                by_severity,
                processed: outcome.processed,
                remediated: outcome.remediated,
                success_rate,
            },
            issues_by_type,
            changes: outcome.changes.clone(),
            quality_score,
            recommendations,
        }
    }
}

fn count_by_severity(issues: &[Issue]) -> SeverityCounts {
    let mut counts = SeverityCounts::default();
    for issue in issues {
        match issue.severity {
            Severity::High => counts.high += 1,
            Severity::Medium => counts.medium += 1,
            Severity::Low => counts.low += 1,
        }
    }
    counts
}

/// `round(remediated / processed * 100)`, special-cased to 0 when nothing was
/// processed.
fn success_rate(remediated: usize, processed: usize) -> u32 {
    if processed == 0 {
        return 0;
    }
    (remediated as f64 / processed as f64 * 100.0).round() as u32
}

/// Start at 100, subtract a weighted-issue-density penalty, add a remediation
/// bonus, clamp to [0, 100]. An empty issue list scores 100 regardless of
/// other inputs.
fn quality_score(issues: &[Issue], outcome: &ProcessOutcome) -> f64 {
    if issues.is_empty() {
        return 100.0;
    }

    let weight_sum: u32 = issues.iter().map(|i| i.severity.weight()).sum();
    let penalty = weight_sum as f64 / issues.len() as f64 * SEVERITY_DENSITY_FACTOR;

    let bonus = if outcome.processed == 0 {
        0.0
    } else {
        outcome.remediated as f64 / outcome.processed as f64 * REMEDIATION_BONUS
    };

    (100.0 - penalty + bonus).clamp(0.0, 100.0)
}

fn recommendations(
    issues_by_type: &BTreeMap<String, Vec<Issue>>,
    success_rate: u32,
    processed: usize,
) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if issues_by_type.contains_key(RULE_FABRICATED_METRICS) {
        out.push(Recommendation {
            priority: Priority::High,
            category: "content_accuracy",
            message: "Quantitative claims were flagged; verify metrics against source \
                      data before publishing."
                .to_string(),
        });
    }

    let generic_count = issues_by_type
        .get(RULE_GENERIC_AI_LANGUAGE)
        .map_or(0, Vec::len);
    if generic_count > GENERIC_LANGUAGE_THRESHOLD {
        out.push(Recommendation {
            priority: Priority::Medium,
            category: "content_quality",
            message: format!(
                "{} instances of generic AI phrasing detected; rewrite with specific, \
                 concrete language.",
                generic_count
            ),
        });
    }

    // Only meaningful once something was actually processed.
    if processed > 0 && success_rate < SUCCESS_RATE_FLOOR {
        out.push(Recommendation {
            priority: Priority::High,
            category: "process_improvement",
            message: format!(
                "Remediation success rate was {}%; review issues that could not be \
                 remediated automatically.",
                success_rate
            ),
        });
    }

    out
}
