use serde::Serialize;

use crate::model::task::ParsedTask;
use crate::parse::ActiveDirective;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct SuggestJson<'a> {
    /// Null when the cursor is not inside a directive
    pub directive: Option<&'a ActiveDirective>,
    pub suggestions: &'a [String],
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// One `label: value` line per field the text produced
pub fn format_parsed(parsed: &ParsedTask) -> Vec<String> {
    let mut lines = vec![format!("title:    {}", parsed.title)];
    if let Some(project) = &parsed.project_name {
        lines.push(format!("project:  {}", project));
    }
    if let Some(due) = &parsed.due_date {
        lines.push(format!("due:      {}", due.format("%Y-%m-%d %H:%M %:z")));
    }
    if let Some(priority) = parsed.priority {
        lines.push(format!("priority: {}", priority.as_str()));
    }
    lines
}

/// Directive header followed by one indented line per candidate
pub fn format_suggestions(active: Option<&ActiveDirective>, items: &[String]) -> Vec<String> {
    let Some(active) = active else {
        return vec!["no directive at cursor".to_string()];
    };
    let mut lines = vec![format!(
        "{} \"{}\" at {}",
        active.kind.as_str(),
        active.query,
        active.anchor
    )];
    if items.is_empty() {
        lines.push("  (no matches)".to_string());
    }
    lines.extend(items.iter().map(|s| format!("  {}", s)));
    lines
}
