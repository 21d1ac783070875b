use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Title used when nothing is left after directives are stripped
pub const DEFAULT_TITLE: &str = "Untitled Task";

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Parse a directive value (`h`, `high`, `m`, `medium`, `l`, `low`), case-insensitive
    pub fn from_directive_value(value: &str) -> Option<Priority> {
        match value.to_lowercase().as_str() {
            "h" | "high" => Some(Priority::High),
            "m" | "medium" => Some(Priority::Medium),
            "l" | "low" => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// Which inline directive a `trigger:value` token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectiveKind {
    Priority,
    Project,
    Due,
}

impl DirectiveKind {
    /// Trigger keywords for this kind, long form first
    pub fn triggers(self) -> &'static [&'static str] {
        match self {
            DirectiveKind::Priority => &["priority", "pr"],
            DirectiveKind::Project => &["project", "p"],
            DirectiveKind::Due => &["due", "d"],
        }
    }

    /// Look up the kind for a trigger keyword (case-insensitive)
    pub fn from_trigger(trigger: &str) -> Option<DirectiveKind> {
        match trigger.to_lowercase().as_str() {
            "p" | "project" => Some(DirectiveKind::Project),
            "pr" | "priority" => Some(DirectiveKind::Priority),
            "d" | "due" => Some(DirectiveKind::Due),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DirectiveKind::Priority => "priority",
            DirectiveKind::Project => "project",
            DirectiveKind::Due => "due",
        }
    }
}

/// The structured record extracted from free text.
///
/// Always recomputed from the full text; it holds no state of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
}

impl Default for ParsedTask {
    fn default() -> Self {
        ParsedTask {
            title: DEFAULT_TITLE.to_string(),
            priority: None,
            due_date: None,
            project_name: None,
        }
    }
}
