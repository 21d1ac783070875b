//! Free-text task input with inline directive autocomplete.
//!
//! Owns the raw text and cursor. Every text change reruns trigger detection,
//! the suggestion provider, and the directive extractor; the suggestion panel
//! and the parsed preview are never edited directly.

use chrono::{DateTime, FixedOffset};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use crate::model::project::ProjectDirectory;
use crate::model::task::ParsedTask;
use crate::ops::submit::{SubmitError, TaskDraft};
use crate::ops::suggest::{SuggestionList, suggest};
use crate::parse::{ActiveDirective, Clock, clamp_cursor, detect_directive};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary, word_boundary_left};

/// Whether the suggestion panel is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Idle,
    Suggesting,
}

/// What a key press did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Moved the suggestion selection
    Navigate,
    /// Spliced the selected suggestion into the text
    Commit,
    /// Closed the suggestion panel
    Dismiss,
    /// The caller should hand this task to the sink, then report back
    /// through [`SmartInput::finish_submission`]
    Submit(ParsedTask),
    /// Ordinary text editing or cursor movement
    Edit,
    /// Key not handled
    None,
}

#[derive(Debug, Clone)]
pub struct SmartInput {
    text: String,
    /// Byte offset into `text`, always on a char boundary
    cursor: usize,
    active: Option<ActiveDirective>,
    suggestions: SuggestionList,
    panel: PanelState,
    preview: ParsedTask,
    directory: ProjectDirectory,
    submitting: bool,
    clock: Clock,
}

impl SmartInput {
    pub fn new(directory: ProjectDirectory) -> Self {
        SmartInput {
            text: String::new(),
            cursor: 0,
            active: None,
            suggestions: SuggestionList::default(),
            panel: PanelState::Idle,
            preview: ParsedTask::default(),
            directory,
            submitting: false,
            clock: Clock::System,
        }
    }

    /// Resolve due dates against `clock`, e.g. a fixed time instead of the
    /// wall clock
    pub fn with_clock(mut self, clock: impl Into<Clock>) -> Self {
        self.clock = clock.into();
        self.recompute();
        self
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        self.clock.now()
    }

    // ----- Getters -----

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn active(&self) -> Option<&ActiveDirective> {
        self.active.as_ref()
    }

    pub fn suggestions(&self) -> &SuggestionList {
        &self.suggestions
    }

    pub fn panel(&self) -> PanelState {
        self.panel
    }

    pub fn is_suggesting(&self) -> bool {
        self.panel == PanelState::Suggesting
    }

    pub fn preview(&self) -> &ParsedTask {
        &self.preview
    }

    pub fn directory(&self) -> &ProjectDirectory {
        &self.directory
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// True when Enter would submit (non-blank text, nothing in flight)
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.text.trim().is_empty()
    }

    // ----- Host-driven updates -----

    /// Replace the text and cursor wholesale (e.g. the host's text widget changed)
    pub fn on_text_change(&mut self, text: impl Into<String>, cursor: usize) {
        self.text = text.into();
        self.cursor = clamp_cursor(&self.text, cursor);
        self.recompute();
    }

    /// Swap in a refreshed project directory
    pub fn set_directory(&mut self, directory: ProjectDirectory) {
        self.directory = directory;
        self.preview = self.clock.extract(&self.text, &self.directory);
        if self.active.is_some() {
            self.suggestions
                .set_items(suggest(self.active.as_ref(), &self.directory));
            self.sync_panel();
        }
    }

    /// Report the outcome of a submission started by [`KeyAction::Submit`].
    ///
    /// Success clears the input; any failure leaves the text untouched so the
    /// user can retry.
    pub fn finish_submission(&mut self, result: &Result<TaskDraft, SubmitError>) {
        self.submitting = false;
        if result.is_ok() {
            self.text.clear();
            self.cursor = 0;
            self.recompute();
        }
    }

    // ----- Key handling -----

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        if self.is_suggesting() {
            match key.code {
                KeyCode::Down => {
                    self.suggestions.move_down();
                    return KeyAction::Navigate;
                }
                KeyCode::Up => {
                    self.suggestions.move_up();
                    return KeyAction::Navigate;
                }
                KeyCode::Esc => {
                    self.dismiss();
                    return KeyAction::Dismiss;
                }
                KeyCode::Enter | KeyCode::Tab => {
                    self.commit_selected();
                    return KeyAction::Commit;
                }
                _ => {}
            }
        }

        match (key.modifiers, key.code) {
            // Shift+Enter inserts a literal newline
            (m, KeyCode::Enter) if m.contains(KeyModifiers::SHIFT) => {
                self.insert_char('\n');
                KeyAction::Edit
            }
            (_, KeyCode::Enter) => self.request_submit(),
            // Delete word before cursor
            (m, KeyCode::Char('w')) if m.contains(KeyModifiers::CONTROL) => {
                self.delete_word_back();
                KeyAction::Edit
            }
            (m, KeyCode::Backspace) if m.contains(KeyModifiers::ALT) => {
                self.delete_word_back();
                KeyAction::Edit
            }
            // Kill to start of text
            (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
                self.text.drain(..self.cursor);
                self.cursor = 0;
                self.recompute();
                KeyAction::Edit
            }
            (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => {
                self.move_to(0);
                KeyAction::Edit
            }
            (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => {
                self.move_to(self.text.len());
                KeyAction::Edit
            }
            (m, KeyCode::Char(c))
                if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert_char(c);
                KeyAction::Edit
            }
            (_, KeyCode::Backspace) => {
                self.backspace();
                KeyAction::Edit
            }
            (_, KeyCode::Delete) => {
                self.delete_forward();
                KeyAction::Edit
            }
            (_, KeyCode::Left) => {
                if let Some(p) = prev_grapheme_boundary(&self.text, self.cursor) {
                    self.move_to(p);
                }
                KeyAction::Edit
            }
            (_, KeyCode::Right) => {
                if let Some(p) = next_grapheme_boundary(&self.text, self.cursor) {
                    self.move_to(p);
                }
                KeyAction::Edit
            }
            (_, KeyCode::Home) => {
                self.move_to(0);
                KeyAction::Edit
            }
            (_, KeyCode::End) => {
                self.move_to(self.text.len());
                KeyAction::Edit
            }
            _ => KeyAction::None,
        }
    }

    /// Insert pasted text at the cursor
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let clean = s.replace('\r', "");
        self.text.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
        self.recompute();
    }

    /// Replace `[anchor, cursor)` with the selected candidate plus one space.
    ///
    /// Whatever followed the cursor is re-appended with surrounding
    /// whitespace trimmed, and the cursor lands right after the space.
    pub fn commit_selected(&mut self) {
        let (Some(active), Some(candidate)) = (self.active.as_ref(), self.suggestions.selected())
        else {
            return;
        };
        let anchor = active.anchor.min(self.cursor);
        let after = self.text[self.cursor..].trim();
        let text = format!("{}{} {}", &self.text[..anchor], candidate, after);
        let cursor = anchor + candidate.len() + 1;
        info!(kind = active.kind.as_str(), value = %candidate, "committed suggestion");

        self.text = text;
        self.cursor = cursor;
        self.recompute();
    }

    /// Close the panel and forget the in-progress directive
    pub fn dismiss(&mut self) {
        self.active = None;
        self.suggestions.clear();
        self.panel = PanelState::Idle;
    }

    // ----- Internals -----

    fn request_submit(&mut self) -> KeyAction {
        if !self.can_submit() {
            debug!(submitting = self.submitting, "submit ignored");
            return KeyAction::None;
        }
        self.submitting = true;
        KeyAction::Submit(self.preview.clone())
    }

    fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.recompute();
    }

    fn backspace(&mut self) {
        if let Some(start) = prev_grapheme_boundary(&self.text, self.cursor) {
            self.text.drain(start..self.cursor);
            self.cursor = start;
            self.recompute();
        }
    }

    fn delete_forward(&mut self) {
        if let Some(end) = next_grapheme_boundary(&self.text, self.cursor) {
            self.text.drain(self.cursor..end);
            self.recompute();
        }
    }

    fn delete_word_back(&mut self) {
        let start = word_boundary_left(&self.text, self.cursor);
        if start < self.cursor {
            self.text.drain(start..self.cursor);
            self.cursor = start;
            self.recompute();
        }
    }

    /// Cursor-only move: the preview is unaffected, but the cursor may have
    /// entered or left a directive token.
    fn move_to(&mut self, cursor: usize) {
        self.cursor = clamp_cursor(&self.text, cursor);
        self.active = detect_directive(&self.text, self.cursor);
        self.suggestions
            .set_items(suggest(self.active.as_ref(), &self.directory));
        self.sync_panel();
    }

    /// Full pass after a text change: detect, suggest, extract
    fn recompute(&mut self) {
        self.active = detect_directive(&self.text, self.cursor);
        self.suggestions = SuggestionList::new(suggest(self.active.as_ref(), &self.directory));
        self.sync_panel();
        self.preview = self.clock.extract(&self.text, &self.directory);
        if let Some(active) = &self.active {
            debug!(
                kind = active.kind.as_str(),
                query = %active.query,
                candidates = self.suggestions.len(),
                "directive under cursor"
            );
        }
    }

    fn sync_panel(&mut self) {
        self.panel = if self.active.is_some() && !self.suggestions.is_empty() {
            PanelState::Suggesting
        } else {
            PanelState::Idle
        };
    }
}
