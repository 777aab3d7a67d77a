//! Processor module - Per-issue remediation dispatch
//!
//! The processor consumes issues and dispatches each to its rule's action:
//! verify-then-replace, unconditional replace, verify-then-remove, or
//! neutralize. It never touches the original document; it produces a result
//! list the caller applies. Processing is partial-failure tolerant: a fault on
//! one issue is counted and the batch continues.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::RuleAction;
use crate::scanner::Issue;
use crate::verify::{StrategyRegistry, VerificationResult};

/// Fallback wording when an unverified claim has no table replacement.
const GENERIC_FALLBACK: &str = "contributed to improvements in this area";

/// The concrete action recorded for one processed issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionTaken {
    /// Claim could not be verified and was replaced with neutral wording.
    ReplacedUnverified,
    /// Generic phrasing replaced with its specific neutral equivalent.
    ReplacedGeneric,
    /// Claim could not be verified and was removed entirely.
    RemovedUnverified,
    /// Claim replaced with a neutral equivalent without verification.
    Neutralized,
    /// Claim was verified against a data source and left intact.
    VerifiedKept,
}

/// Outcome of remediating a single issue. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemediationResult {
    /// The issue this result answers.
    pub issue: Issue,
    /// Whether the content was changed.
    pub remediated: bool,
    /// What was done with the issue.
    pub action_taken: ActionTaken,
    /// The text as it was matched.
    pub original_content: String,
    /// The replacement text; `None` when the claim was left intact.
    pub remediated_content: Option<String>,
    /// The verification attempt, kept for auditability when one was made.
    pub verification: Option<VerificationResult>,
}

/// Batch outcome: counters plus one [`RemediationResult`] per processed issue,
/// in input order.
#[derive(Debug, Default, Serialize)]
pub struct ProcessOutcome {
    /// Issues processed, including those left intact.
    pub processed: usize,
    /// Issues whose content was changed.
    pub remediated: usize,
    /// Issues left intact because their claim was verified.
    pub skipped: usize,
    /// Issues that faulted and were dropped from `changes`.
    pub errors: usize,
    /// Per-issue results, preserving input order.
    pub changes: Vec<RemediationResult>,
}

/// Dispatches issues to remediation actions, verifying claims where the rule
/// requires it.
pub struct RemediationProcessor {
    registry: StrategyRegistry,
}

impl RemediationProcessor {
    /// Create a processor over an immutable strategy registry.
    pub fn new(registry: StrategyRegistry) -> Self {
        Self { registry }
    }

    /// Process a batch of issues.
    ///
    /// Iterates issues independently; a failure on one issue increments
    /// `errors` and does not abort the batch. `changes` preserves input order.
    pub async fn process(&self, issues: Vec<Issue>) -> ProcessOutcome {
        let mut outcome = ProcessOutcome::default();

        for issue in issues {
            outcome.processed += 1;
            match self.process_issue(issue).await {
                Ok(result) => {
                    if result.remediated {
                        outcome.remediated += 1;
                    } else {
                        outcome.skipped += 1;
                    }
                    outcome.changes.push(result);
                }
                Err(reason) => {
                    warn!(reason, "Issue processing failed, continuing batch");
                    outcome.errors += 1;
                }
            }
        }

        debug!(
            processed = outcome.processed,
            remediated = outcome.remediated,
            skipped = outcome.skipped,
            errors = outcome.errors,
            "Batch processed"
        );
        outcome
    }

    /// Dispatch one issue to its action.
    ///
    /// Returns `Err` with a reason for faults that should be counted rather
    /// than propagated (e.g. a mandatory-replace issue carrying no
    /// replacement).
    async fn process_issue(&self, issue: Issue) -> Result<RemediationResult, &'static str> {
        let original = issue.matched_text.clone();

        match issue.action {
            RuleAction::ReplaceVerified => {
                let verification = self.registry.verify(&issue.matched_text).await;
                if verification.verified {
                    Ok(kept(issue, original, verification))
                } else {
                    let replacement = issue
                        .suggested_replacement
                        .clone()
                        .unwrap_or_else(|| GENERIC_FALLBACK.to_string());
                    Ok(RemediationResult {
                        issue,
                        remediated: true,
                        action_taken: ActionTaken::ReplacedUnverified,
                        original_content: original,
                        remediated_content: Some(replacement),
                        verification: Some(verification),
                    })
                }
            }
            RuleAction::RemoveOrVerify => {
                let verification = self.registry.verify(&issue.matched_text).await;
                if verification.verified {
                    Ok(kept(issue, original, verification))
                } else {
                    Ok(RemediationResult {
                        issue,
                        remediated: true,
                        action_taken: ActionTaken::RemovedUnverified,
                        original_content: original,
                        remediated_content: Some(String::new()),
                        verification: Some(verification),
                    })
                }
            }
            RuleAction::ReplaceSpecific => {
                let replacement = issue
                    .suggested_replacement
                    .clone()
                    .ok_or("no replacement available for generic language issue")?;
                Ok(RemediationResult {
                    issue,
                    remediated: true,
                    action_taken: ActionTaken::ReplacedGeneric,
                    original_content: original,
                    remediated_content: Some(replacement),
                    verification: None,
                })
            }
            RuleAction::ReplaceNeutral => {
                let replacement = issue
                    .suggested_replacement
                    .clone()
                    .ok_or("no neutral replacement available for issue")?;
                Ok(RemediationResult {
                    issue,
                    remediated: true,
                    action_taken: ActionTaken::Neutralized,
                    original_content: original,
                    remediated_content: Some(replacement),
                    verification: None,
                })
            }
        }
    }
}

/// Result for a verified claim that is left intact.
fn kept(issue: Issue, original: String, verification: VerificationResult) -> RemediationResult {
    RemediationResult {
        issue,
        remediated: false,
        action_taken: ActionTaken::VerifiedKept,
        original_content: original,
        remediated_content: None,
        verification: Some(verification),
    }
}
