use std::sync::LazyLock;

use chrono::{DateTime, TimeZone};
use regex::Regex;
use tracing::debug;

use crate::model::project::ProjectDirectory;
use crate::model::task::{DEFAULT_TITLE, DirectiveKind, ParsedTask, Priority};
use crate::parse::date::resolve_due;

static PRIORITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| directive_regex(DirectiveKind::Priority.triggers()));
static PROJECT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| directive_regex(DirectiveKind::Project.triggers()));
static DUE_REGEX: LazyLock<Regex> = LazyLock::new(|| directive_regex(DirectiveKind::Due.triggers()));

/// Any directive token of any kind, for syntax highlighting
static ANY_DIRECTIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let triggers: Vec<&str> = [
        DirectiveKind::Priority,
        DirectiveKind::Project,
        DirectiveKind::Due,
    ]
    .iter()
    .flat_map(|k| k.triggers().iter().copied())
    .collect();
    directive_regex(&triggers)
});

/// `\b(<triggers>):(\S+)\b`, case-insensitive
fn directive_regex(triggers: &[&str]) -> Regex {
    Regex::new(&format!(r"(?i)\b({}):(\S+)\b", triggers.join("|"))).unwrap()
}

fn regex_for(kind: DirectiveKind) -> &'static Regex {
    match kind {
        DirectiveKind::Priority => &PRIORITY_REGEX,
        DirectiveKind::Project => &PROJECT_REGEX,
        DirectiveKind::Due => &DUE_REGEX,
    }
}

/// Regex matching every directive token, used to highlight them in the input
pub fn directive_highlight_regex() -> &'static Regex {
    &ANY_DIRECTIVE_REGEX
}

/// Extract the structured task from free text.
///
/// Directives are consumed in a fixed order (priority, project, due). Each
/// pass removes the first matching `trigger:value` span from a working copy
/// of the text before the next pass runs, whether or not the value was
/// understood. A second directive of the same kind stays in the title.
pub fn extract_task<Tz: TimeZone>(
    text: &str,
    directory: &ProjectDirectory,
    now: &DateTime<Tz>,
) -> ParsedTask {
    let mut working = text.to_string();

    let priority = take_directive(&mut working, DirectiveKind::Priority).and_then(|value| {
        let priority = Priority::from_directive_value(&value);
        if priority.is_none() {
            debug!(value = %value, "dropping unrecognized priority");
        }
        priority
    });

    let project_name = take_directive(&mut working, DirectiveKind::Project).map(|value| {
        match directory.find_containing(&value) {
            Some(entry) => entry.name.clone(),
            None => {
                debug!(value = %value, "no project matches, keeping literal name");
                value
            }
        }
    });

    let due_date = take_directive(&mut working, DirectiveKind::Due).and_then(|value| {
        let due = resolve_due(&value, now);
        if due.is_none() {
            debug!(value = %value, "dropping unrecognized due date");
        }
        due.map(|d| d.fixed_offset())
    });

    let title = collapse_whitespace(&working);

    ParsedTask {
        title: if title.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            title
        },
        priority,
        due_date,
        project_name,
    }
}

/// Remove the first directive of `kind` from `working`, returning its raw value
fn take_directive(working: &mut String, kind: DirectiveKind) -> Option<String> {
    let (span, value) = {
        let caps = regex_for(kind).captures(working)?;
        (caps.get(0)?.range(), caps[2].to_string())
    };
    debug!(kind = kind.as_str(), value = %value, "matched directive");
    working.replace_range(span, "");
    Some(value)
}

/// Collapse whitespace runs to a single space and trim both ends
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
