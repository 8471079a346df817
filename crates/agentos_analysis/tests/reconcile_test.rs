//! Tests for recovering findings from model replies.

use agentos_analysis::{FALLBACK_TITLE, PARSE_FAILURE_TITLE, RAW_EXCERPT_LIMIT, reconcile};
use agentos_core::Severity;
use serde_json::json;

#[test]
fn empty_array_means_no_issues() {
    assert!(reconcile("[]").is_empty());
    assert!(reconcile("  \n [] \n").is_empty());
}

#[test]
fn findings_map_one_to_one_in_order() {
    let raw = json!([
        {"severity": "ERROR", "title": "Dead man walking", "content": "Jonah died in scene 2.", "metadata": {"characterName": "Jonah"}},
        {"title": "Clock drift", "content": "It was night a moment ago."},
        {"severity": "WARNING", "content": "The tower was destroyed."}
    ])
    .to_string();

    let findings = reconcile(&raw);

    assert_eq!(findings.len(), 3);
    assert_eq!(findings[0].severity, Severity::Error);
    assert_eq!(findings[0].title, "Dead man walking");
    assert_eq!(findings[0].metadata_value("characterName"), Some(&json!("Jonah")));
    assert_eq!(findings[1].severity, Severity::Info);
    assert_eq!(findings[1].metadata, None);
    assert_eq!(findings[2].title, FALLBACK_TITLE);
}

#[test]
fn absent_content_is_empty_string() {
    let findings = reconcile(r#"[{"severity": "INFO", "title": "Note"}]"#);
    assert_eq!(findings[0].content, "");
}

#[test]
fn severity_labels_and_content_aliases_are_lenient() {
    let findings = reconcile(
        r#"[
            {"severity": "warn", "title": "A", "explanation": "via explanation"},
            {"severity": "Critical", "title": "B", "description": "via description"},
            {"severity": "catastrophic", "title": "C", "content": "unknown label"},
            {"severity": null, "title": null, "metadata": null}
        ]"#,
    );

    assert_eq!(findings[0].severity, Severity::Warning);
    assert_eq!(findings[0].content, "via explanation");
    assert_eq!(findings[1].severity, Severity::Error);
    assert_eq!(findings[1].content, "via description");
    assert_eq!(findings[2].severity, Severity::Info);
    assert_eq!(findings[3].severity, Severity::Info);
    assert_eq!(findings[3].title, FALLBACK_TITLE);
    assert_eq!(findings[3].metadata, None);
}

#[test]
fn prose_reply_becomes_single_error_finding() {
    let raw = "Sorry, I cannot help with that.";
    let findings = reconcile(raw);

    assert_eq!(findings.len(), 1);
    let finding = &findings[0];
    assert_eq!(finding.severity, Severity::Error);
    assert_eq!(finding.title, PARSE_FAILURE_TITLE);
    assert!(finding.content.contains(raw));
    assert_eq!(finding.metadata_value("rawResponse"), Some(&json!(raw)));
    assert!(finding.metadata_value("parseError").is_some_and(|v| v.is_string()));
}

#[test]
fn fenced_reply_is_not_accepted() {
    let findings = reconcile("```json\n[]\n```");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].title, PARSE_FAILURE_TITLE);
}

#[test]
fn wrong_shapes_are_parse_failures() {
    for raw in [
        r#"{"issues": []}"#,
        r#"["just a string"]"#,
        r#"[{"title": "x", "metadata": ["not", "an", "object"]}]"#,
        "",
    ] {
        let findings = reconcile(raw);
        assert_eq!(findings.len(), 1, "input {:?}", raw);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(findings[0].metadata_value("rawResponse"), Some(&json!(raw)));
    }
}

#[test]
fn excerpt_is_bounded_but_raw_text_is_kept_whole() {
    let raw = "z".repeat(RAW_EXCERPT_LIMIT * 4);
    let finding = &reconcile(&raw)[0];

    assert!(finding.content.contains(&"z".repeat(RAW_EXCERPT_LIMIT)));
    assert!(!finding.content.contains(&"z".repeat(RAW_EXCERPT_LIMIT + 1)));
    assert_eq!(finding.metadata_value("rawResponse"), Some(&json!(raw)));
}
