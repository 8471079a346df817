//! Context serialization.
//!
//! Renders a [`NarrativeContext`] as the user half of an analysis prompt. The
//! output is a pure function of its input: the same context always renders to
//! the same text, independent of the host's ordering of characters in a scene.

use agentos_core::{Canon, CharacterFact, NarrativeContext, Scene};

/// Stands in for every absent optional field.
pub const PLACEHOLDER: &str = "Not specified";

/// Character budget for each prior scene summary.
pub const TIMELINE_SUMMARY_LIMIT: usize = 400;

/// Character budget for every other free-text field.
pub const FIELD_LIMIT: usize = 1000;

const SCENE_HEADER: &str = "## Current Scene";
const RULES_HEADER: &str = "## World Rules";
const FACTS_HEADER: &str = "## Character Facts";
const TIMELINE_HEADER: &str = "## Previous Scenes";

/// Render scene, world rules, character facts and timeline prefix, in that order.
///
/// # Examples
///
/// ```
/// use agentos_analysis::{PLACEHOLDER, serialize_context};
/// use agentos_core::{Canon, NarrativeContext, Scene, Timeline};
///
/// let scene: Scene = serde_json::from_str(r#"{"id": "s1", "title": "Opening"}"#).unwrap();
/// let context = NarrativeContext::new(scene.clone(), Canon::default(), Timeline::new(vec![scene]));
///
/// let text = serialize_context(&context);
/// assert!(text.starts_with("## Current Scene\nTitle: Opening\n"));
/// assert!(text.contains(&format!("Summary: {}", PLACEHOLDER)));
/// assert!(text.contains("None (this is the first scene)."));
/// ```
pub fn serialize_context(context: &NarrativeContext) -> String {
    [
        scene_section(context.scene()),
        rules_section(context.canon()),
        facts_section(context.canon()),
        timeline_section(context.prior_scenes()),
    ]
    .join("\n\n")
}

fn or_placeholder(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => PLACEHOLDER,
    }
}

fn field(value: Option<&str>) -> String {
    truncate_chars(or_placeholder(value), FIELD_LIMIT)
}

fn scene_section(scene: &Scene) -> String {
    let location = scene.location.as_ref().map(|loc| {
        match loc.description.as_deref().map(str::trim) {
            Some(desc) if !desc.is_empty() => format!("{} ({})", loc.name, desc),
            _ => loc.name.clone(),
        }
    });

    let mut names = scene.character_names();
    names.sort_unstable();
    names.dedup();
    let characters = if names.is_empty() {
        None
    } else {
        Some(names.join(", "))
    };

    [
        SCENE_HEADER.to_string(),
        format!("Title: {}", field(Some(scene.title.as_str()))),
        format!("Summary: {}", field(scene.summary.as_deref())),
        format!("Purpose: {}", field(scene.purpose.as_deref())),
        format!("Tone: {}", field(scene.tone.as_deref())),
        format!("Location: {}", field(location.as_deref())),
        format!("Characters present: {}", field(characters.as_deref())),
    ]
    .join("\n")
}

fn rules_section(canon: &Canon) -> String {
    let mut lines = vec![RULES_HEADER.to_string()];
    if canon.world_rules.is_empty() {
        lines.push("None established.".to_string());
    }
    for (i, rule) in canon.world_rules.iter().enumerate() {
        lines.push(format!(
            "{}. {}: {}",
            i + 1,
            field(Some(rule.title.as_str())),
            field(rule.description.as_deref())
        ));
    }
    lines.join("\n")
}

fn facts_section(canon: &Canon) -> String {
    let mut lines = vec![FACTS_HEADER.to_string()];
    let mut any = false;
    for character in canon.characters_with_facts() {
        any = true;
        lines.push(format!("### {}", character.name));
        for fact in &character.facts {
            let marker = if fact.is_secret { " [SECRET]" } else { "" };
            lines.push(format!(
                "- {}: {}{}{}",
                field(Some(fact.label.as_str())),
                field(Some(fact.value.as_str())),
                marker,
                known_by(canon, fact)
            ));
        }
    }
    if !any {
        lines.push("None recorded.".to_string());
    }
    lines.join("\n")
}

/// ` (known by: A, B)` for facts shared with other characters, else empty.
///
/// Ids missing from the canon are shown as-is.
fn known_by(canon: &Canon, fact: &CharacterFact) -> String {
    let mut names: Vec<&str> = fact
        .known_by_ids
        .iter()
        .map(String::as_str)
        .filter(|id| !id.trim().is_empty())
        .map(|id| canon.character_name(id).unwrap_or(id))
        .collect();
    if names.is_empty() {
        return String::new();
    }
    names.sort_unstable();
    names.dedup();
    format!(" (known by: {})", names.join(", "))
}

fn timeline_section(prior: &[Scene]) -> String {
    let mut lines = vec![TIMELINE_HEADER.to_string()];
    if prior.is_empty() {
        lines.push("None (this is the first scene).".to_string());
    }
    for (i, scene) in prior.iter().enumerate() {
        let summary = or_placeholder(scene.summary.as_deref());
        lines.push(format!(
            "{}. {}: {}",
            i + 1,
            field(Some(scene.title.as_str())),
            truncate_chars(summary, TIMELINE_SUMMARY_LIMIT)
        ));
    }
    lines.join("\n")
}

/// Cut `text` to at most `limit` chars, marking the cut with an ellipsis.
pub(crate) fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte, _)) => format!("{}…", &text[..byte]),
        None => text.to_string(),
    }
}
