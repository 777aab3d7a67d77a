//! Remediation engine - Pipeline orchestration
//!
//! Wires the catalog, scanner, processor and report generator together for a
//! full run over AI-enhanced content sections and an optional external
//! validation report. Orchestration only; all decision logic lives in the
//! component modules.

use tracing::info;

use crate::catalog::RuleCatalog;
use crate::cleaner;
use crate::content::{EnhancedContent, Profile, ValidationReport};
use crate::processor::RemediationProcessor;
use crate::report::{RemediationReport, ReportGenerator};
use crate::scanner::ContentScanner;
use crate::verify::StrategyRegistry;

/// One-stop remediation pipeline over enhanced content.
pub struct RemediationEngine {
    catalog: RuleCatalog,
    processor: RemediationProcessor,
}

impl RemediationEngine {
    /// Create an engine from an immutable catalog and strategy registry.
    pub fn new(catalog: RuleCatalog, registry: StrategyRegistry) -> Self {
        Self {
            catalog,
            processor: RemediationProcessor::new(registry),
        }
    }

    /// Engine with the baseline catalog.
    pub fn with_baseline_rules(registry: StrategyRegistry) -> Self {
        Self::new(RuleCatalog::baseline(), registry)
    }

    /// The catalog this engine scans with.
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Run the full pipeline: scan every present section (plus externally
    /// flagged claims), remediate, and build the report.
    pub async fn run(
        &self,
        content: &EnhancedContent,
        validation: Option<&ValidationReport>,
    ) -> RemediationReport {
        let scanner = ContentScanner::new(&self.catalog);

        let mut issues = Vec::new();
        for (label, text) in content.sections() {
            issues.extend(scanner.scan(text, label));
        }
        if let Some(report) = validation {
            issues.extend(scanner.scan_validation_report(report));
        }

        info!(issue_count = issues.len(), "Content scan complete");

        let outcome = self.processor.process(issues.clone()).await;
        ReportGenerator::build_report(&issues, &outcome)
    }

    /// Produce a verified-claims-only copy of a profile using this engine's
    /// rule data.
    pub fn clean_profile(&self, profile: &Profile) -> Profile {
        cleaner::clean_profile(&self.catalog, profile)
    }
}
