//! Backing dataset shapes for the verification strategies
//!
//! Each strategy loads its own JSON resource per verification call; a load or
//! parse failure degrades to an unverified result inside the strategy, so the
//! loaders here only surface [`DataSourceError`](crate::error::DataSourceError)
//! via [`load_json`](crate::content::load_json).

use serde::{Deserialize, Serialize};

use crate::content::{ExperienceEntry, Project};

/// Activity/contribution summary dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityData {
    #[serde(default)]
    pub total_commits: u64,
    #[serde(default)]
    pub total_repositories: u64,
    #[serde(default)]
    pub repositories: Vec<RepositoryActivity>,
}

/// Per-repository contribution record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryActivity {
    pub name: String,
    #[serde(default)]
    pub commits: u64,
    #[serde(default)]
    pub languages: Vec<String>,
}

/// Employment-history dataset; reuses the profile experience shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmploymentData {
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
}

/// Project-metadata dataset; reuses the profile project shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectData {
    #[serde(default)]
    pub projects: Vec<Project>,
}
