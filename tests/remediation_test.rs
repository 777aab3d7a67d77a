//! End-to-end tests for the remediation pipeline

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use claimlens::content::{EnhancedContent, EnhancedSection, Profile, ValidationReport};
use claimlens::processor::ActionTaken;
use claimlens::verify::{
    ActivityStrategy, EmploymentStrategy, ProjectsStrategy, StrategyRegistry,
    VerificationStrategy,
};
use claimlens::RemediationEngine;

/// Install a test-writer subscriber so `RUST_LOG` surfaces pipeline tracing.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Write the three backing datasets and return their paths
/// (activity, employment, projects).
fn write_datasets(dir: &TempDir) -> (PathBuf, PathBuf, PathBuf) {
    let activity = dir.path().join("activity.json");
    fs::write(
        &activity,
        r#"{"total_commits": 1800, "total_repositories": 9,
            "repositories": [{"name": "claim-parser", "commits": 420, "languages": ["Rust"]}]}"#,
    )
    .unwrap();

    let employment = dir.path().join("employment.json");
    fs::write(
        &employment,
        r#"{"experience":[
            {"company": "Northwind", "period": "2019 - Present",
             "achievements": ["Increased customer satisfaction by 30%",
                              "Migrated billing to event-driven architecture"]}
        ]}"#,
    )
    .unwrap();

    let projects = dir.path().join("projects.json");
    fs::write(
        &projects,
        r#"{"projects":[{"name": "ledgerd",
            "description": "double-entry accounting service",
            "technologies": ["Rust"]}]}"#,
    )
    .unwrap();

    (activity, employment, projects)
}

fn full_registry(dir: &TempDir) -> StrategyRegistry {
    init_tracing();
    let (activity, employment, projects) = write_datasets(dir);
    StrategyRegistry::new(vec![
        Box::new(ActivityStrategy::new(activity)),
        Box::new(EmploymentStrategy::new(employment)),
        Box::new(ProjectsStrategy::new(projects)),
    ])
}

fn section(text: &str) -> Option<EnhancedSection> {
    Some(EnhancedSection {
        enhanced: text.to_string(),
    })
}

#[tokio::test]
async fn test_unverifiable_metric_is_replaced() {
    let dir = TempDir::new().unwrap();
    let engine = RemediationEngine::with_baseline_rules(full_registry(&dir));

    let content = EnhancedContent {
        professional_summary: section("We increased operational efficiency by 45% this quarter"),
        ..Default::default()
    };

    let report = engine.run(&content, None).await;

    assert_eq!(report.summary.total_issues, 1);
    assert_eq!(report.summary.remediated, 1);
    let change = &report.changes[0];
    assert_eq!(change.issue.rule_id, "fabricated_metrics");
    assert_eq!(change.action_taken, ActionTaken::ReplacedUnverified);
    assert!(change
        .remediated_content
        .as_deref()
        .unwrap()
        .contains("system integration and process optimization"));
}

#[tokio::test]
async fn test_claim_backed_by_employment_history_is_kept() {
    let dir = TempDir::new().unwrap();
    let engine = RemediationEngine::with_baseline_rules(full_registry(&dir));

    let content = EnhancedContent {
        experience_enhancement: section("Increased customer satisfaction by 30% at Northwind"),
        ..Default::default()
    };

    let report = engine.run(&content, None).await;

    assert_eq!(report.summary.total_issues, 1);
    assert_eq!(report.summary.remediated, 0);
    let change = &report.changes[0];
    assert_eq!(change.action_taken, ActionTaken::VerifiedKept);
    assert_eq!(change.remediated_content, None);
    let verification = change.verification.as_ref().unwrap();
    assert!(verification.verified);
    assert_eq!(verification.strategy_name, "employment_history");
}

#[tokio::test]
async fn test_generic_language_always_remediated() {
    let dir = TempDir::new().unwrap();
    let engine = RemediationEngine::with_baseline_rules(full_registry(&dir));

    let content = EnhancedContent {
        skills_enhancement: section("Our cutting-edge, seamlessly integrated platform"),
        ..Default::default()
    };

    let report = engine.run(&content, None).await;

    assert_eq!(report.summary.total_issues, 2);
    assert_eq!(report.summary.remediated, 2);
    assert_eq!(report.summary.success_rate, 100);
    for change in &report.changes {
        assert_eq!(change.action_taken, ActionTaken::ReplacedGeneric);
        assert!(change.verification.is_none());
    }
    let replaced: Vec<&str> = report
        .changes
        .iter()
        .filter_map(|c| c.remediated_content.as_deref())
        .collect();
    assert_eq!(replaced, vec!["integrated", "modern"]);
}

#[tokio::test]
async fn test_validation_report_flows_through_pipeline() {
    let dir = TempDir::new().unwrap();
    let engine = RemediationEngine::with_baseline_rules(full_registry(&dir));

    let validation: ValidationReport = serde_json::from_str(
        r#"{"flagged_content":[{"type":"impossible_claims","claims":[
            {"claim":"100% success rate","severity":"low","category":"metrics"}
        ]}]}"#,
    )
    .unwrap();

    let report = engine.run(&EnhancedContent::default(), Some(&validation)).await;

    assert_eq!(report.summary.total_issues, 1);
    assert_eq!(report.summary.by_severity.medium, 1); // low remapped to medium
    assert_eq!(report.summary.by_severity.high, 0);
    let change = &report.changes[0];
    assert_eq!(change.issue.source_section, "validation_report");
    assert_eq!(change.action_taken, ActionTaken::ReplacedUnverified);
}

#[tokio::test]
async fn test_missing_data_sources_do_not_abort_the_batch() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    // Paths that do not exist: every strategy degrades to unverified.
    let registry = StrategyRegistry::new(vec![
        Box::new(ActivityStrategy::new(dir.path().join("gone-a.json"))),
        Box::new(EmploymentStrategy::new(dir.path().join("gone-b.json"))),
        Box::new(ProjectsStrategy::new(dir.path().join("gone-c.json"))),
    ]);
    let engine = RemediationEngine::with_baseline_rules(registry);

    let content = EnhancedContent {
        professional_summary: section("An industry-leading platform"),
        ..Default::default()
    };

    let report = engine.run(&content, None).await;

    assert_eq!(report.summary.total_issues, 1);
    assert_eq!(report.summary.remediated, 1);
    let change = &report.changes[0];
    assert_eq!(change.action_taken, ActionTaken::RemovedUnverified);
    let verification = change.verification.as_ref().unwrap();
    assert!(!verification.verified);
    assert!(verification.reason.contains("data source unavailable"));
}

#[tokio::test]
async fn test_quality_score_and_recommendations_for_mixed_content() {
    let dir = TempDir::new().unwrap();
    let engine = RemediationEngine::with_baseline_rules(full_registry(&dir));

    let content = EnhancedContent {
        professional_summary: section(
            "A cutting-edge, revolutionary and groundbreaking state-of-the-art \
             platform that increased revenue by 200%",
        ),
        ..Default::default()
    };

    let report = engine.run(&content, None).await;

    // Four generic-language issues plus one fabricated metric.
    assert_eq!(report.summary.total_issues, 5);
    assert!(report.quality_score >= 0.0 && report.quality_score <= 100.0);
    let categories: Vec<&str> = report
        .recommendations
        .iter()
        .map(|r| r.category)
        .collect();
    assert!(categories.contains(&"content_accuracy"));
    assert!(categories.contains(&"content_quality"));
}

#[tokio::test]
async fn test_concurrent_runs_are_independent() {
    let dir = TempDir::new().unwrap();
    let engine = RemediationEngine::with_baseline_rules(full_registry(&dir));

    let content = EnhancedContent {
        professional_summary: section("Shipped ahead of schedule with cutting-edge tooling"),
        ..Default::default()
    };

    let reports = futures::future::join_all((0..4).map(|_| engine.run(&content, None))).await;

    let first = &reports[0];
    for report in &reports {
        assert_eq!(report.summary.total_issues, first.summary.total_issues);
        assert_eq!(report.summary.remediated, first.summary.remediated);
        assert_eq!(report.quality_score, first.quality_score);
    }
}

#[tokio::test]
async fn test_clean_profile_end_to_end() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("profile.json");
    fs::write(
        &path,
        r#"{
            "personal_info": {"name": "Ada Lovelace"},
            "experience": [
                {"company": "Analytical Engines", "period": "2019 - Present",
                 "achievements": ["Delivered the migration in record time",
                                  "Maintained the compute pipeline"]}
            ],
            "projects": [{"name": "bernoulli",
                          "description": "A groundbreaking number series tool"}],
            "achievements": []
        }"#,
    )?;

    let profile = Profile::load(&path).await?;
    let engine = RemediationEngine::with_baseline_rules(full_registry(&dir));
    let cleaned = engine.clean_profile(&profile);

    assert_eq!(
        cleaned.experience[0].achievements,
        vec![
            "Delivered the migration efficiently".to_string(),
            "Maintained the compute pipeline".to_string(),
        ]
    );
    assert_eq!(cleaned.projects[0].description, "A novel number series tool");
    Ok(())
}

/// A strategy that answers nothing, for pinning down the no-strategy fallback.
struct SilentStrategy;

#[async_trait::async_trait]
impl VerificationStrategy for SilentStrategy {
    fn name(&self) -> &'static str {
        "silent"
    }

    async fn verify(&self, _claim: &str) -> Option<claimlens::VerificationResult> {
        None
    }
}

#[tokio::test]
async fn test_no_definitive_strategy_treated_as_unverified() {
    init_tracing();
    let registry = StrategyRegistry::new(vec![Box::new(SilentStrategy)]);
    let engine = RemediationEngine::with_baseline_rules(registry);

    let content = EnhancedContent {
        professional_summary: section("An award-winning platform"),
        ..Default::default()
    };

    let report = engine.run(&content, None).await;
    let change = &report.changes[0];
    assert_eq!(change.action_taken, ActionTaken::RemovedUnverified);
    assert_eq!(
        change.verification.as_ref().unwrap().reason,
        "no verification strategy available"
    );
}
