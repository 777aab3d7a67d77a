//! Verification against a project-metadata dataset

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::sources::ProjectData;
use super::{VerificationResult, VerificationStrategy};
use crate::content::{load_json, Project};

/// Verifies claims against project metadata.
///
/// Applicability is keyed on the project name: a claim that names no known
/// project is outside this strategy's domain. A named project confirms the
/// claim when the claim also overlaps the project's description or mentions
/// one of its technologies; otherwise the claim is definitively unverified.
pub struct ProjectsStrategy {
    source: PathBuf,
}

impl ProjectsStrategy {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Whether the claim is supported by the project's recorded metadata.
fn supports(claim: &str, project: &Project) -> bool {
    let description = project.description.to_lowercase();
    if !description.is_empty() && (claim.contains(&description) || description.contains(claim)) {
        return true;
    }
    if project
        .technologies
        .iter()
        .any(|t| claim.contains(&t.to_lowercase()))
    {
        return true;
    }
    // Word-level overlap with the description, ignoring short function words.
    claim
        .split_whitespace()
        .filter(|w| w.len() >= 5)
        .any(|w| description.contains(w))
}

#[async_trait]
impl VerificationStrategy for ProjectsStrategy {
    fn name(&self) -> &'static str {
        "project_metadata"
    }

    async fn verify(&self, claim: &str) -> Option<VerificationResult> {
        let data: ProjectData = match load_json(&self.source).await {
            Ok(data) => data,
            Err(err) => {
                debug!(error = %err, "Project data source unavailable");
                return Some(VerificationResult::unverified(
                    self.name(),
                    format!("project data source unavailable: {}", err),
                ));
            }
        };

        let lowered = claim.to_lowercase();

        let named = data
            .projects
            .iter()
            .find(|p| lowered.contains(&p.name.to_lowercase()))?;

        if supports(&lowered, named) {
            Some(VerificationResult::verified(
                self.name(),
                "claim consistent with project metadata",
                format!("{}: {}", named.name, named.description),
            ))
        } else {
            Some(VerificationResult::unverified(
                self.name(),
                "project metadata does not support this claim",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_projects(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("projects.json");
        fs::write(
            &path,
            r#"{"projects":[
                {"name": "ledgerd", "description": "double-entry accounting service",
                 "technologies": ["Rust", "PostgreSQL"]},
                {"name": "sitegen", "description": "static site generator"}
            ]}"#,
        )
        .unwrap();
        path
    }

    #[tokio::test]
    async fn test_verifies_claim_overlapping_description() {
        let dir = TempDir::new().unwrap();
        let strategy = ProjectsStrategy::new(write_projects(&dir));

        let result = strategy
            .verify("Designed the accounting core of ledgerd")
            .await
            .unwrap();
        assert!(result.verified);
        assert!(result.evidence.unwrap().starts_with("ledgerd:"));
    }

    #[tokio::test]
    async fn test_verifies_claim_mentioning_technology() {
        let dir = TempDir::new().unwrap();
        let strategy = ProjectsStrategy::new(write_projects(&dir));

        let result = strategy
            .verify("Wrote ledgerd in Rust with PostgreSQL")
            .await
            .unwrap();
        assert!(result.verified);
    }

    #[tokio::test]
    async fn test_named_project_with_unsupported_claim_is_unverified() {
        let dir = TempDir::new().unwrap();
        let strategy = ProjectsStrategy::new(write_projects(&dir));

        let result = strategy
            .verify("sitegen won three design awards")
            .await
            .unwrap();
        assert!(!result.verified);
        assert_eq!(result.reason, "project metadata does not support this claim");
    }

    #[tokio::test]
    async fn test_no_answer_when_no_project_is_named() {
        let dir = TempDir::new().unwrap();
        let strategy = ProjectsStrategy::new(write_projects(&dir));

        assert!(strategy
            .verify("increased conversion by 30%")
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_missing_source_degrades_to_unverified() {
        let dir = TempDir::new().unwrap();
        let strategy = ProjectsStrategy::new(dir.path().join("absent.json"));

        let result = strategy.verify("ledgerd handles billing").await.unwrap();
        assert!(!result.verified);
        assert!(result.reason.contains("project data source unavailable"));
    }
}
