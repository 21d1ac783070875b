use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::model::{Config, WorkspaceConfig};
use crate::parse::Clock;
use crate::ops::submit::{MemorySink, NoticeKind, TaskDraft};

use super::input;
use super::render;
use super::smart_input::SmartInput;
use super::theme::Theme;

/// Message shown in the status row after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Main application state
pub struct App {
    pub input: SmartInput,
    pub config: Config,
    /// Index into `config.workspaces`
    pub workspace: Option<usize>,
    pub theme: Theme,
    pub notice: Option<Notice>,
    /// Tasks created this session, printed after the terminal is restored
    pub sink: MemorySink,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, workspace_slug: Option<&str>) -> Self {
        let workspace = config.select_workspace_index(workspace_slug);
        let directory = workspace
            .map(|i| config.workspaces[i].directory())
            .unwrap_or_default();
        App {
            input: SmartInput::new(directory),
            theme: Theme::from_config(&config.ui),
            config,
            workspace,
            notice: None,
            sink: MemorySink::default(),
            should_quit: false,
        }
    }

    /// Resolve due dates in the input against `clock`
    pub fn with_clock(mut self, clock: impl Into<Clock>) -> Self {
        self.input = self.input.with_clock(clock);
        self
    }

    pub fn current_workspace(&self) -> Option<&WorkspaceConfig> {
        self.workspace.and_then(|i| self.config.workspaces.get(i))
    }

    /// Switch to the next configured workspace and reload its projects
    pub fn cycle_workspace(&mut self) {
        let count = self.config.workspaces.len();
        if count == 0 {
            return;
        }
        let next = self.workspace.map_or(0, |i| (i + 1) % count);
        self.workspace = Some(next);
        let ws = &self.config.workspaces[next];
        info!(workspace = %ws.slug, "switched workspace");
        self.input.set_directory(ws.directory());
    }
}

/// Run the TUI until the user quits. Returns every task created.
pub fn run(
    config: Config,
    workspace: Option<&str>,
    clock: Clock,
) -> Result<Vec<TaskDraft>, Box<dyn std::error::Error>> {
    let mut app = App::new(config, workspace).with_clock(clock);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result.map(|()| app.sink.drafts)
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProjectEntry, UserProfile};
    use chrono::{FixedOffset, TimeZone};

    fn config() -> Config {
        Config {
            user: Some(UserProfile {
                id: "u-1".into(),
                name: None,
            }),
            workspaces: vec![
                WorkspaceConfig {
                    slug: "acme".into(),
                    name: "Acme".into(),
                    default_project: "General".into(),
                    projects: vec![ProjectEntry::new("Engineering")],
                },
                WorkspaceConfig {
                    slug: "home".into(),
                    name: "Home".into(),
                    default_project: "Chores".into(),
                    projects: vec![ProjectEntry::new("Garden")],
                },
            ],
            ui: Default::default(),
        }
    }

    #[test]
    fn test_new_selects_workspace_by_slug() {
        let app = App::new(config(), Some("home"));
        assert_eq!(app.current_workspace().unwrap().slug, "home");
        assert_eq!(app.input.directory().entries()[0].name, "Garden");

        // Unknown slug falls back to the first workspace
        let app = App::new(config(), Some("nope"));
        assert_eq!(app.current_workspace().unwrap().slug, "acme");
    }

    #[test]
    fn test_pinned_clock_reaches_the_preview() {
        let now = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2025, 6, 11, 9, 0, 0)
            .unwrap();
        let mut app = App::new(config(), None).with_clock(Clock::from(Some(now)));
        assert_eq!(app.input.now(), now);
        app.input.on_text_change("Ship d:fri", 10);
        let due = app.input.preview().due_date.unwrap();
        assert_eq!(due.to_rfc3339(), "2025-06-13T18:00:00+01:00");

        // Switching workspace keeps the pinned clock
        app.cycle_workspace();
        assert_eq!(app.input.now(), now);
        assert_eq!(app.input.preview().due_date, Some(due));
    }

    #[test]
    fn test_no_workspaces() {
        let mut app = App::new(Config::default(), None);
        assert!(app.current_workspace().is_none());
        assert!(app.input.directory().is_empty());
        app.cycle_workspace();
        assert!(app.workspace.is_none());
    }

    #[test]
    fn test_cycle_workspace_wraps_and_swaps_directory() {
        let mut app = App::new(config(), None);
        app.cycle_workspace();
        assert_eq!(app.current_workspace().unwrap().slug, "home");
        assert_eq!(app.input.directory().entries()[0].name, "Garden");
        app.cycle_workspace();
        assert_eq!(app.current_workspace().unwrap().slug, "acme");
    }
}
