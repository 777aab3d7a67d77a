//! Cleaner module - Verified-claims-only profile generation
//!
//! A convenience batch transform that runs profile achievement and project
//! text through the same lexical replacement rules the scanner uses, applied
//! directly rather than through the issue pipeline. Matches with a
//! replacement-table entry are rewritten; matches without one are removed and
//! whitespace is normalized.

use tracing::debug;

use crate::catalog::RuleCatalog;
use crate::content::Profile;

/// Scrub one text fragment with every rule's patterns and replacements.
pub fn scrub_text(catalog: &RuleCatalog, text: &str) -> String {
    let mut current = text.to_string();

    for rule in catalog.rules() {
        for pattern in rule.patterns {
            if !pattern.is_match(&current) {
                continue;
            }
            current = pattern
                .replace_all(&current, |caps: &regex::Captures| {
                    let matched = caps.get(0).map_or("", |m| m.as_str());
                    rule.suggest_replacement(matched).unwrap_or("").to_string()
                })
                .into_owned();
        }
    }

    normalize_whitespace(&current)
}

/// Produce a copy of the profile with lexically-scrubbed text fields.
///
/// Experience achievements, project descriptions and free-standing
/// achievements are rewritten; identity fields pass through untouched.
/// Achievements scrubbed down to nothing are dropped.
pub fn clean_profile(catalog: &RuleCatalog, profile: &Profile) -> Profile {
    let mut cleaned = profile.clone();

    for entry in &mut cleaned.experience {
        entry.achievements = entry
            .achievements
            .iter()
            .map(|a| scrub_text(catalog, a))
            .filter(|a| !a.is_empty())
            .collect();
    }

    for project in &mut cleaned.projects {
        project.description = scrub_text(catalog, &project.description);
    }

    cleaned.achievements = cleaned
        .achievements
        .iter()
        .map(|a| scrub_text(catalog, a))
        .filter(|a| !a.is_empty())
        .collect();

    debug!(
        experience_entries = cleaned.experience.len(),
        projects = cleaned.projects.len(),
        "Profile cleaned"
    );
    cleaned
}

/// Collapse whitespace runs left behind by removals and trim the ends.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
