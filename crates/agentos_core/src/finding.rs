//! Findings: the structured output unit of every analysis capability.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How serious a finding is.
///
/// # Examples
///
/// ```
/// use agentos_core::Severity;
///
/// assert_eq!(Severity::from_label("warn"), Some(Severity::Warning));
/// assert_eq!(Severity::from_label(" Error "), Some(Severity::Error));
/// assert_eq!(Severity::from_label("catastrophic"), None);
/// assert_eq!(serde_json::to_string(&Severity::Info).unwrap(), "\"INFO\"");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Severity {
    /// Informational note, nothing to fix
    #[default]
    Info,
    /// Probable inconsistency worth a look
    Warning,
    /// Clear contradiction, or the analysis itself failed
    Error,
}

impl Severity {
    /// Parse a severity label as a model tends to write it.
    ///
    /// Matching is case-insensitive and accepts common synonyms.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "info" | "informational" | "information" | "note" => Some(Self::Info),
            "warning" | "warn" => Some(Self::Warning),
            "error" | "critical" | "fatal" => Some(Self::Error),
            _ => None,
        }
    }
}

/// One structured piece of feedback about a scene.
///
/// # Examples
///
/// ```
/// use agentos_core::{Finding, Severity};
/// use serde_json::json;
///
/// let finding = Finding::new(Severity::Warning, "Knowledge leak", "Mara mentions the vault code.")
///     .with_metadata_entry("characterName", json!("Mara"));
///
/// assert_eq!(finding.severity, Severity::Warning);
/// assert_eq!(finding.metadata_value("characterName"), Some(&json!("Mara")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct Finding {
    /// How serious the finding is
    pub severity: Severity,
    /// Short headline
    pub title: String,
    /// Free-text explanation
    pub content: String,
    /// Open-ended structured metadata
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl Finding {
    /// Create a finding without metadata.
    pub fn new(severity: Severity, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            content: content.into(),
            metadata: None,
        }
    }

    /// Creates a new finding builder.
    pub fn builder() -> FindingBuilder {
        FindingBuilder::default()
    }

    /// Attach one metadata entry, creating the map if needed.
    pub fn with_metadata_entry(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata
            .get_or_insert_with(Map::new)
            .insert(key.into(), value);
        self
    }

    /// Look up a metadata entry.
    pub fn metadata_value(&self, key: &str) -> Option<&Value> {
        self.metadata.as_ref().and_then(|m| m.get(key))
    }
}
