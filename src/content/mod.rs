//! Content module - Read-only JSON inputs to the remediation pipeline
//!
//! Three input shapes are consumed by the engine:
//!
//! - [`Profile`] - base profile data, used as verification evidence and as the
//!   source for clean-content generation
//! - [`EnhancedContent`] - AI-enhanced text blocks, scanned directly
//! - [`ValidationReport`] - externally-flagged claims fed into the scanner's
//!   second entry point
//!
//! All types deserialize from JSON with `serde`; loaders are async and map
//! failures into [`DataSourceError`](crate::error::DataSourceError).

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ClaimLensError, DataSourceError};

/// Read and parse a JSON file into `T`.
///
/// Shared by the content loaders and the verification strategies; both degrade
/// differently on failure, so this only maps errors, it never logs or retries.
pub async fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataSourceError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DataSourceError::Read {
            path: path.display().to_string(),
            source,
        })?;
    serde_json::from_str(&raw).map_err(|source| DataSourceError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Base profile data: personal info, experience, projects, achievements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Identity block; passed through untouched by the cleaner.
    pub personal_info: PersonalInfo,
    /// Employment history entries.
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    /// Project records.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Free-standing achievement statements.
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl Profile {
    /// Load a profile from a JSON file.
    pub async fn load(path: &Path) -> Result<Self, ClaimLensError> {
        Ok(load_json(path).await?)
    }
}

/// Identity fields of a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// A single employment-history entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    #[serde(default)]
    pub role: Option<String>,
    /// Format: "YYYY - YYYY" or "YYYY - Present".
    pub period: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// A single project record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// AI-enhanced content blocks, one optional `enhanced` text per named section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnhancedContent {
    #[serde(default)]
    pub professional_summary: Option<EnhancedSection>,
    #[serde(default)]
    pub skills_enhancement: Option<EnhancedSection>,
    #[serde(default)]
    pub experience_enhancement: Option<EnhancedSection>,
    #[serde(default)]
    pub projects_enhancement: Option<EnhancedSection>,
}

impl EnhancedContent {
    /// Load enhanced content blocks from a JSON file.
    pub async fn load(path: &Path) -> Result<Self, ClaimLensError> {
        Ok(load_json(path).await?)
    }

    /// Present sections as (label, text) pairs, in declaration order.
    pub fn sections(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();
        if let Some(s) = &self.professional_summary {
            out.push(("professional_summary", s.enhanced.as_str()));
        }
        if let Some(s) = &self.skills_enhancement {
            out.push(("skills_enhancement", s.enhanced.as_str()));
        }
        if let Some(s) = &self.experience_enhancement {
            out.push(("experience_enhancement", s.enhanced.as_str()));
        }
        if let Some(s) = &self.projects_enhancement {
            out.push(("projects_enhancement", s.enhanced.as_str()));
        }
        out
    }
}

/// One named enhanced-content block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedSection {
    pub enhanced: String,
}

/// External validation report with pre-flagged claims.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    #[serde(default)]
    pub flagged_content: Vec<FlaggedContent>,
}

impl ValidationReport {
    /// Load a validation report from a JSON file.
    pub async fn load(path: &Path) -> Result<Self, ClaimLensError> {
        Ok(load_json(path).await?)
    }
}

/// A block of flagged claims of one type (e.g. "impossible_claims").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlaggedContent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub claims: Vec<FlaggedClaim>,
}

/// A single externally-flagged claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlaggedClaim {
    pub claim: String,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}
