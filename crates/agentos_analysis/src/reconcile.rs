//! Recovery of structured findings from raw model text.
//!
//! The model is asked for a bare JSON array. Anything else becomes a single
//! visible error finding carrying the raw reply, so a broken analysis is never
//! mistaken for a clean scene.

use crate::prompt::truncate_chars;
use agentos_core::{Finding, Severity};
use serde::Deserialize;
use serde_json::{Map, Value, json};

/// Title used when a finding comes back without one.
pub const FALLBACK_TITLE: &str = "Untitled finding";

/// Title of the finding produced when the reply cannot be parsed.
pub const PARSE_FAILURE_TITLE: &str = "Could not parse analysis response";

/// Character budget for the raw excerpt in a parse-failure finding.
pub const RAW_EXCERPT_LIMIT: usize = 500;

#[derive(Debug, Deserialize)]
struct RawFinding {
    #[serde(default)]
    severity: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default, alias = "explanation", alias = "description")]
    content: Option<String>,
    #[serde(default)]
    metadata: Option<Map<String, Value>>,
}

impl From<RawFinding> for Finding {
    fn from(raw: RawFinding) -> Self {
        let severity = match raw.severity.as_deref() {
            None => Severity::Info,
            Some(label) => Severity::from_label(label).unwrap_or_else(|| {
                tracing::warn!(label, "Unrecognized severity label, treating as INFO");
                Severity::Info
            }),
        };
        let title = raw
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_TITLE.to_string());

        Finding {
            severity,
            title,
            content: raw.content.unwrap_or_default(),
            metadata: raw.metadata,
        }
    }
}

/// Parse a model reply into findings.
///
/// An empty array means "no issues". A reply that is not a JSON array of
/// finding objects yields exactly one [`Severity::Error`] finding whose
/// metadata holds `rawResponse` and `parseError`.
///
/// # Examples
///
/// ```
/// use agentos_analysis::{PARSE_FAILURE_TITLE, reconcile};
/// use agentos_core::Severity;
///
/// let findings = reconcile(r#" [{"title": "Minor", "content": "Check the clock."}] "#);
/// assert_eq!(findings.len(), 1);
/// assert_eq!(findings[0].severity, Severity::Info);
///
/// let broken = reconcile("Sorry, I cannot help with that.");
/// assert_eq!(broken.len(), 1);
/// assert_eq!(broken[0].severity, Severity::Error);
/// assert_eq!(broken[0].title, PARSE_FAILURE_TITLE);
/// ```
pub fn reconcile(raw: &str) -> Vec<Finding> {
    match serde_json::from_str::<Vec<RawFinding>>(raw.trim()) {
        Ok(items) => items.into_iter().map(Finding::from).collect(),
        Err(e) => {
            tracing::warn!(error = %e, chars = raw.chars().count(), "Model reply is not a findings list");
            vec![parse_failure(raw, &e.to_string())]
        }
    }
}

fn parse_failure(raw: &str, parse_error: &str) -> Finding {
    let excerpt = truncate_chars(raw.trim(), RAW_EXCERPT_LIMIT);
    let content = if excerpt.is_empty() {
        "The model returned an empty response.".to_string()
    } else {
        format!("The model response was not a valid findings list. Response excerpt: {}", excerpt)
    };

    Finding::new(Severity::Error, PARSE_FAILURE_TITLE, content)
        .with_metadata_entry("rawResponse", json!(raw))
        .with_metadata_entry("parseError", json!(parse_error))
}
