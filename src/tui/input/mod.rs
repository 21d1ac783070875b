use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::ParsedTask;
use crate::ops::submit::{NoticeKind, SubmitContext, submit_task};

use super::app::{App, Notice};
use super::smart_input::KeyAction;

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    match (key.modifiers, key.code) {
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        (m, KeyCode::Char('o')) if m.contains(KeyModifiers::CONTROL) => {
            app.cycle_workspace();
            return;
        }
        (_, KeyCode::Esc) if !app.input.is_suggesting() && app.input.text().is_empty() => {
            app.should_quit = true;
            return;
        }
        _ => {}
    }

    match app.input.handle_key(key) {
        KeyAction::Submit(parsed) => submit(app, &parsed),
        KeyAction::Edit | KeyAction::Commit => app.notice = None,
        KeyAction::Navigate | KeyAction::Dismiss | KeyAction::None => {}
    }
}

/// Handle a bracketed paste
pub fn handle_paste(app: &mut App, text: &str) {
    app.input.insert_str(text);
    app.notice = None;
}

fn submit(app: &mut App, parsed: &ParsedTask) {
    let raw = app.input.text().to_string();
    let now = app.input.now();
    let ctx = SubmitContext {
        workspace: app.workspace.and_then(|i| app.config.workspaces.get(i)),
        user: app.config.user.as_ref(),
    };
    let result = submit_task(&raw, parsed, ctx, &mut app.sink, now);

    app.notice = match &result {
        Ok(draft) => Some(Notice {
            kind: NoticeKind::Success,
            message: format!("Task created in {}", draft.project),
        }),
        Err(e) => e.notice_kind().map(|kind| Notice {
            kind,
            message: e.to_string(),
        }),
    };
    app.input.finish_submission(&result);
}
