use chrono::{DateTime, FixedOffset, TimeZone};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{Config, ProjectEntry, UserProfile, WorkspaceConfig};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Wednesday 2025-06-11, 09:00 +01:00
pub fn fixed_now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(3600)
        .unwrap()
        .with_ymd_and_hms(2025, 6, 11, 9, 0, 0)
        .unwrap()
}

/// One workspace with a handful of projects and a signed-in user.
pub fn sample_config() -> Config {
    Config {
        user: Some(UserProfile {
            id: "u-1".into(),
            name: Some("Sam".into()),
        }),
        workspaces: vec![WorkspaceConfig {
            slug: "acme".into(),
            name: "Acme".into(),
            default_project: "General".into(),
            projects: vec![
                ProjectEntry::new("Engineering"),
                ProjectEntry::new("Design"),
                ProjectEntry::new("Platform Eng"),
            ],
        }],
        ui: Default::default(),
    }
}

/// App over [`sample_config`] with the clock pinned to [`fixed_now`].
pub fn test_app() -> App {
    App::new(sample_config(), None).with_clock(fixed_now())
}

/// [`test_app`] with `text` typed in and the cursor at its end.
pub fn app_with_text(text: &str) -> App {
    let mut app = test_app();
    app.input.on_text_change(text, text.len());
    app
}
