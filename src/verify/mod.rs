//! Verification module - Pluggable claim verification strategies
//!
//! A strategy attempts to confirm a flagged claim against one trusted data
//! source. Strategies never panic or propagate errors past their boundary:
//! a failed data-source load degrades to an unverified result with a
//! source-specific reason.
//!
//! The [`StrategyRegistry`] tries strategies in registration order and accepts
//! the first definitive answer (`Some(result)`). This first-match policy is a
//! deliberate design choice, not a defect: for ambiguous claims it privileges
//! whichever strategy is registered first. A strategy returns `None` when it
//! has nothing definitive to say about a claim.

pub mod activity;
pub mod employment;
pub mod projects;
pub mod sources;

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use activity::ActivityStrategy;
pub use employment::EmploymentStrategy;
pub use projects::ProjectsStrategy;

/// Default bound on a single verification call.
pub const DEFAULT_VERIFY_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of one verification attempt.
///
/// Transient: lives only as long as the remediation result that references it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Whether the claim was confirmed against the strategy's data source.
    pub verified: bool,
    /// Name of the strategy that produced this result.
    pub strategy_name: String,
    /// Human-readable explanation of the outcome.
    pub reason: String,
    /// Supporting evidence from the data source, when the claim was confirmed.
    pub evidence: Option<String>,
}

impl VerificationResult {
    /// A confirmed claim with supporting evidence.
    pub fn verified(strategy: &str, reason: impl Into<String>, evidence: impl Into<String>) -> Self {
        Self {
            verified: true,
            strategy_name: strategy.to_string(),
            reason: reason.into(),
            evidence: Some(evidence.into()),
        }
    }

    /// A definitive negative answer.
    pub fn unverified(strategy: &str, reason: impl Into<String>) -> Self {
        Self {
            verified: false,
            strategy_name: strategy.to_string(),
            reason: reason.into(),
            evidence: None,
        }
    }

    /// The fallback when no registered strategy had a definitive answer.
    pub fn unavailable() -> Self {
        Self {
            verified: false,
            strategy_name: "none".to_string(),
            reason: "no verification strategy available".to_string(),
            evidence: None,
        }
    }
}

/// A named check that attempts to confirm a claim against a trusted data source.
///
/// Implementations must be side-effect free across invocations: concurrent
/// calls share no mutable state.
#[async_trait]
pub trait VerificationStrategy: Send + Sync {
    /// Strategy name, used in results and logs.
    fn name(&self) -> &'static str;

    /// Attempt to verify a claim.
    ///
    /// Returns `Some` with a definitive answer, or `None` when this strategy
    /// cannot say anything about the claim. Internal failures must degrade to
    /// `Some(unverified)` rather than panicking.
    async fn verify(&self, claim: &str) -> Option<VerificationResult>;
}

/// Ordered registry of verification strategies.
///
/// Immutable after construction; shared read-only by the processor. Each
/// verification call is bounded by a per-call timeout, and a timed-out
/// strategy yields a definitive unverified result rather than hanging the
/// batch.
pub struct StrategyRegistry {
    strategies: Vec<Box<dyn VerificationStrategy>>,
    timeout: Duration,
}

impl StrategyRegistry {
    /// Build a registry from strategies in trial order.
    pub fn new(strategies: Vec<Box<dyn VerificationStrategy>>) -> Self {
        Self {
            strategies,
            timeout: DEFAULT_VERIFY_TIMEOUT,
        }
    }

    /// Override the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Number of registered strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Whether the registry has no strategies.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Verify a claim against the registered strategies.
    ///
    /// Strategies are tried in registration order; the first definitive answer
    /// wins. When none answers, the claim is treated as unverified with reason
    /// "no verification strategy available".
    pub async fn verify(&self, claim: &str) -> VerificationResult {
        for strategy in &self.strategies {
            match tokio::time::timeout(self.timeout, strategy.verify(claim)).await {
                Ok(Some(result)) => {
                    debug!(
                        strategy = strategy.name(),
                        verified = result.verified,
                        "Strategy produced a definitive answer"
                    );
                    return result;
                }
                Ok(None) => {
                    debug!(strategy = strategy.name(), "Strategy had no answer");
                }
                Err(_) => {
                    warn!(strategy = strategy.name(), "Verification timed out");
                    return VerificationResult::unverified(strategy.name(), "timeout");
                }
            }
        }
        VerificationResult::unavailable()
    }
}
