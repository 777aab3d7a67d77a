//! Verification against an employment-history dataset

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::sources::EmploymentData;
use super::{VerificationResult, VerificationStrategy};
use crate::content::load_json;

/// Verifies claims against recorded employment history.
///
/// A claim that matches a recorded achievement (substring in either direction,
/// case-insensitive) is confirmed with the achievement as evidence. A claim
/// naming a known employer without a matching achievement is definitively
/// unverified. Claims mentioning neither are outside this strategy's domain.
pub struct EmploymentStrategy {
    source: PathBuf,
}

impl EmploymentStrategy {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

#[async_trait]
impl VerificationStrategy for EmploymentStrategy {
    fn name(&self) -> &'static str {
        "employment_history"
    }

    async fn verify(&self, claim: &str) -> Option<VerificationResult> {
        let data: EmploymentData = match load_json(&self.source).await {
            Ok(data) => data,
            Err(err) => {
                debug!(error = %err, "Employment data source unavailable");
                return Some(VerificationResult::unverified(
                    self.name(),
                    format!("employment data source unavailable: {}", err),
                ));
            }
        };

        let lowered = claim.to_lowercase();

        for entry in &data.experience {
            for achievement in &entry.achievements {
                let recorded = achievement.to_lowercase();
                if recorded.contains(&lowered) || lowered.contains(&recorded) {
                    return Some(VerificationResult::verified(
                        self.name(),
                        "matching achievement in employment history",
                        format!("{}: {}", entry.company, achievement),
                    ));
                }
            }
        }

        if data
            .experience
            .iter()
            .any(|e| lowered.contains(&e.company.to_lowercase()))
        {
            return Some(VerificationResult::unverified(
                self.name(),
                "claim not found in employment history",
            ));
        }

        None
    }
}
