//! Claim detection patterns
//!
//! Pattern and replacement tables for the baseline remediation rules. The
//! tables are data, not code: adding a rule means adding an entry here, the
//! scanner and processor are untouched.

use lazy_static::lazy_static;
use regex::Regex;

/// Compile a case-insensitive pattern.
///
/// All claim detection is case-insensitive; the `(?i)` flag is applied here so
/// the raw tables below stay readable.
fn pattern(re: &str) -> Regex {
    Regex::new(&format!("(?i){}", re)).unwrap()
}

lazy_static! {
    /// Quantified superlative claims ("increased X by N%", "achieved N% success rate").
    pub static ref FABRICATED_METRIC_PATTERNS: Vec<Regex> = vec![
        pattern(r"(?:increased|improved|boosted|grew)\s+[\w\s]+?\s+by\s+\d+(?:\.\d+)?%"),
        pattern(r"(?:reduced|cut|decreased)\s+[\w\s]+?\s+by\s+\d+(?:\.\d+)?%"),
        pattern(r"(?:achieved|maintained|reached)\s+(?:a\s+)?\d+(?:\.\d+)?%\s+(?:success|accuracy|uptime|conversion)\s*(?:rate)?"),
        pattern(r"delivered\s+(?:a\s+)?\d+(?:\.\d+)?x\s+(?:improvement|increase|speedup)"),
    ];

    /// Stock AI-generated phrasing with direct one-to-one neutral replacements.
    pub static ref GENERIC_LANGUAGE_PATTERNS: Vec<Regex> = vec![
        pattern(r"seamlessly\s+integrat(?:ed|es|e|ing)"),
        pattern(r"cutting[-\s]edge"),
        pattern(r"state[-\s]of[-\s]the[-\s]art"),
        pattern(r"paradigm\s+shift"),
        pattern(r"revolutionary"),
        pattern(r"groundbreaking"),
    ];

    /// Unverifiable accolade language.
    pub static ref UNVERIFIABLE_CLAIM_PATTERNS: Vec<Regex> = vec![
        pattern(r"industry[-\s]leading"),
        pattern(r"award[-\s]winning"),
        pattern(r"internationally\s+(?:acclaimed|recognized)"),
        pattern(r"world[-\s]class"),
        pattern(r"best[-\s]in[-\s]class"),
    ];

    /// Implausible delivery-speed claims.
    pub static ref TIMELINE_PATTERNS: Vec<Regex> = vec![
        pattern(r"in\s+record\s+time"),
        pattern(r"(?:well\s+)?ahead\s+of\s+schedule"),
        pattern(r"faster\s+than\s+(?:expected|anticipated)"),
        pattern(r"in\s+(?:just\s+)?a\s+matter\s+of\s+(?:days|hours)"),
    ];
}

/// Replacement table for fabricated metrics.
///
/// Keys are topical phrases looked up as case-insensitive substrings of the
/// matched text, independent of the captured numeric value. Keys are ordered
/// longest-first so the longest applicable key wins.
pub const FABRICATED_METRIC_REPLACEMENTS: &[(&str, &str)] = &[
    (
        "operational efficiency",
        "improved system integration and process optimization",
    ),
    (
        "customer satisfaction",
        "supported initiatives to improve customer experience",
    ),
    ("success rate", "achieved consistent delivery across projects"),
    ("conversion", "contributed to customer acquisition work"),
    ("performance", "improved system performance through optimization work"),
    ("productivity", "streamlined team workflows"),
    ("revenue", "supported business growth initiatives"),
    ("uptime", "helped maintain service reliability"),
];

/// One-to-one replacements for generic AI phrasing, longest key first.
pub const GENERIC_LANGUAGE_REPLACEMENTS: &[(&str, &str)] = &[
    ("seamlessly integrating", "integrating"),
    ("seamlessly integrated", "integrated"),
    ("seamlessly integrates", "integrates"),
    ("seamlessly integrate", "integrate"),
    ("state-of-the-art", "established"),
    ("paradigm shift", "significant change"),
    ("cutting-edge", "modern"),
    ("groundbreaking", "novel"),
    ("revolutionary", "innovative"),
];

/// Fallback replacements for unverifiable accolades when removal is not selected.
pub const UNVERIFIABLE_CLAIM_REPLACEMENTS: &[(&str, &str)] = &[
    ("internationally acclaimed", "widely used"),
    ("internationally recognized", "widely used"),
    ("industry-leading", "established"),
    ("best-in-class", "competitive"),
    ("award-winning", "recognized"),
    ("world-class", "professional"),
];

/// Neutral equivalents for delivery-speed claims, longest key first.
pub const TIMELINE_REPLACEMENTS: &[(&str, &str)] = &[
    ("faster than anticipated", "within the planned timeline"),
    ("faster than expected", "within the planned timeline"),
    ("a matter of hours", "within the planned timeline"),
    ("a matter of days", "within the planned timeline"),
    ("ahead of schedule", "on schedule"),
    ("in record time", "efficiently"),
];
