use std::io::Write;

use chrono::{DateTime, Days, FixedOffset};
use serde::Serialize;
use tracing::{info, warn};

use crate::model::config::{UserProfile, WorkspaceConfig};
use crate::model::task::{ParsedTask, Priority};

/// Status every new task starts in
pub const INITIAL_STATUS: &str = "todo";

/// Error returned by a task sink
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct SinkError(pub String);

/// Why a submission did not go through
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("nothing to submit")]
    EmptyInput,
    #[error("Please select a workspace")]
    NoWorkspace,
    #[error("User profile not loaded yet")]
    ProfileNotLoaded,
    #[error("Failed to create task: {0}")]
    Sink(#[from] SinkError),
}

/// How a submission failure should be surfaced to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    /// Fix something first (select a workspace, wait for the profile)
    Blocking,
    /// Transient; resubmitting the same input may work
    Retryable,
}

impl SubmitError {
    /// Notice class for this error, or None when it should pass silently
    pub fn notice_kind(&self) -> Option<NoticeKind> {
        match self {
            SubmitError::EmptyInput => None,
            SubmitError::NoWorkspace | SubmitError::ProfileNotLoaded => Some(NoticeKind::Blocking),
            SubmitError::Sink(_) => Some(NoticeKind::Retryable),
        }
    }
}

/// The fully-resolved record handed to a task sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub workspace: String,
    pub project: String,
    pub title: String,
    pub status: String,
    pub start_date: DateTime<FixedOffset>,
    pub due_date: DateTime<FixedOffset>,
    pub priority: Priority,
    pub assignees: Vec<String>,
}

/// Who is submitting, and where
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmitContext<'a> {
    pub workspace: Option<&'a WorkspaceConfig>,
    pub user: Option<&'a UserProfile>,
}

/// Destination for finished tasks
pub trait TaskSink {
    fn create(&mut self, draft: &TaskDraft) -> Result<(), SinkError>;
}

/// Keeps every created draft in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub drafts: Vec<TaskDraft>,
}

impl TaskSink for MemorySink {
    fn create(&mut self, draft: &TaskDraft) -> Result<(), SinkError> {
        self.drafts.push(draft.clone());
        Ok(())
    }
}

/// Writes each draft as one JSON object per line
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        JsonLinesSink { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TaskSink for JsonLinesSink<W> {
    fn create(&mut self, draft: &TaskDraft) -> Result<(), SinkError> {
        let line = serde_json::to_string(draft).map_err(|e| SinkError(e.to_string()))?;
        writeln!(self.out, "{}", line).map_err(|e| SinkError(e.to_string()))?;
        self.out.flush().map_err(|e| SinkError(e.to_string()))
    }
}

/// Check submission preconditions and fill in defaults.
///
/// The project is the workspace project whose name equals the parsed name
/// (ignoring case), else the workspace default. Missing priority becomes
/// medium and a missing due date becomes one day from `now`.
pub fn build_draft(
    raw_text: &str,
    parsed: &ParsedTask,
    ctx: SubmitContext<'_>,
    now: DateTime<FixedOffset>,
) -> Result<TaskDraft, SubmitError> {
    if raw_text.trim().is_empty() {
        return Err(SubmitError::EmptyInput);
    }
    let workspace = ctx.workspace.ok_or(SubmitError::NoWorkspace)?;
    let user = ctx.user.ok_or(SubmitError::ProfileNotLoaded)?;

    let project = parsed
        .project_name
        .as_deref()
        .and_then(|name| workspace.directory().find_exact(name).map(|e| e.name.clone()))
        .unwrap_or_else(|| workspace.default_project.clone());

    let due_date = match parsed.due_date {
        Some(due) => due,
        None => now.checked_add_days(Days::new(1)).unwrap_or(now),
    };

    Ok(TaskDraft {
        workspace: workspace.slug.clone(),
        project,
        title: parsed.title.clone(),
        status: INITIAL_STATUS.to_string(),
        start_date: now,
        due_date,
        priority: parsed.priority.unwrap_or(Priority::Medium),
        assignees: vec![user.id.clone()],
    })
}

/// Build a draft and hand it to `sink`
pub fn submit_task(
    raw_text: &str,
    parsed: &ParsedTask,
    ctx: SubmitContext<'_>,
    sink: &mut dyn TaskSink,
    now: DateTime<FixedOffset>,
) -> Result<TaskDraft, SubmitError> {
    let draft = match build_draft(raw_text, parsed, ctx, now) {
        Ok(draft) => draft,
        Err(e) => {
            if e.notice_kind().is_some() {
                warn!(error = %e, "submission blocked");
            }
            return Err(e);
        }
    };
    if let Err(e) = sink.create(&draft) {
        warn!(error = %e, title = %draft.title, "task sink failed");
        return Err(e.into());
    }
    info!(
        title = %draft.title,
        project = %draft.project,
        workspace = %draft.workspace,
        "task created"
    );
    Ok(draft)
}
