//! Verification against an activity/contribution summary

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::sources::ActivityData;
use super::{VerificationResult, VerificationStrategy};
use crate::content::load_json;

/// Keywords that mark a claim as being about contribution activity.
const ACTIVITY_KEYWORDS: &[&str] = &["commit", "contribution", "repositor", "open source"];

/// Verifies claims against an activity summary dataset.
///
/// A claim naming a known repository is confirmed; a claim that talks about
/// contribution activity without matching any repository is definitively
/// unverified; anything else is outside this strategy's domain.
pub struct ActivityStrategy {
    source: PathBuf,
}

impl ActivityStrategy {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

#[async_trait]
impl VerificationStrategy for ActivityStrategy {
    fn name(&self) -> &'static str {
        "activity_summary"
    }

    async fn verify(&self, claim: &str) -> Option<VerificationResult> {
        let data: ActivityData = match load_json(&self.source).await {
            Ok(data) => data,
            Err(err) => {
                debug!(error = %err, "Activity data source unavailable");
                return Some(VerificationResult::unverified(
                    self.name(),
                    format!("activity data source unavailable: {}", err),
                ));
            }
        };

        let lowered = claim.to_lowercase();

        if let Some(repo) = data
            .repositories
            .iter()
            .find(|r| lowered.contains(&r.name.to_lowercase()))
        {
            return Some(VerificationResult::verified(
                self.name(),
                "repository found in activity summary",
                format!("{} ({} commits)", repo.name, repo.commits),
            ));
        }

        if ACTIVITY_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            return Some(VerificationResult::unverified(
                self.name(),
                "claim not supported by activity summary",
            ));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_activity(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("activity.json");
        fs::write(
            &path,
            r#"{"total_commits": 2400, "total_repositories": 12,
                "repositories": [
                    {"name": "claim-parser", "commits": 310, "languages": ["Rust"]},
                    {"name": "etl-toolkit", "commits": 95}
                ]}"#,
        )
        .unwrap();
        path
    }

    #[tokio::test]
    async fn test_verifies_claim_naming_known_repository() {
        let dir = TempDir::new().unwrap();
        let strategy = ActivityStrategy::new(write_activity(&dir));

        let result = strategy
            .verify("Maintained the claim-parser library")
            .await
            .unwrap();
        assert!(result.verified);
        assert_eq!(result.evidence.as_deref(), Some("claim-parser (310 commits)"));
    }

    #[tokio::test]
    async fn test_unverified_activity_claim_without_repository() {
        let dir = TempDir::new().unwrap();
        let strategy = ActivityStrategy::new(write_activity(&dir));

        let result = strategy
            .verify("Authored 9000 commits across open source")
            .await
            .unwrap();
        assert!(!result.verified);
        assert_eq!(result.reason, "claim not supported by activity summary");
    }

    #[tokio::test]
    async fn test_no_answer_for_unrelated_claim() {
        let dir = TempDir::new().unwrap();
        let strategy = ActivityStrategy::new(write_activity(&dir));

        assert!(strategy
            .verify("increased operational efficiency by 45%")
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_missing_source_degrades_to_unverified() {
        let dir = TempDir::new().unwrap();
        let strategy = ActivityStrategy::new(dir.path().join("absent.json"));

        let result = strategy.verify("any claim").await.unwrap();
        assert!(!result.verified);
        assert!(result.reason.contains("activity data source unavailable"));
    }
}
