//! ClaimLens Library
//!
//! This crate provides the core functionality for detecting unverifiable or
//! fabricated claims in AI-generated text, verifying them against trusted
//! data sources, and rewriting or removing the offending text with an
//! auditable report and quality score.

pub mod catalog;
pub mod cleaner;
pub mod content;
pub mod engine;
pub mod error;
pub mod processor;
pub mod report;
pub mod scanner;
pub mod verify;

pub use catalog::{RuleAction, RuleCatalog, Severity};
pub use engine::RemediationEngine;
pub use error::ClaimLensError;
pub use processor::{RemediationProcessor, RemediationResult};
pub use report::{RemediationReport, ReportGenerator};
pub use scanner::{ContentScanner, Issue};
pub use verify::{StrategyRegistry, VerificationResult, VerificationStrategy};
