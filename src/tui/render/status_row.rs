use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::submit::NoticeKind;
use crate::tui::app::App;

use super::helpers::push_right_hint;

const IDLE_HINT: &str = "Enter create  S-Enter newline  ^O workspace  ^C quit";
const PANEL_HINT: &str = "\u{2191}\u{2193} select  Tab pick  Esc close";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = Vec::new();
    if let Some(notice) = &app.notice {
        let color = match notice.kind {
            NoticeKind::Success => app.theme.green,
            NoticeKind::Blocking => app.theme.yellow,
            NoticeKind::Retryable => app.theme.red,
        };
        spans.push(Span::styled(
            format!(" {}", notice.message),
            Style::default().fg(color).bg(bg),
        ));
    }

    let hint = if app.input.is_suggesting() {
        PANEL_HINT
    } else {
        IDLE_HINT
    };
    push_right_hint(
        &mut spans,
        hint,
        width,
        Style::default().bg(bg),
        Style::default().fg(app.theme.dim).bg(bg),
    );

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::Notice;
    use crate::tui::render::test_helpers::*;

    fn render_row(app: &App) -> String {
        render_to_string(TERM_W, 1, |frame, area| render_status_row(frame, app, area))
    }

    #[test]
    fn test_idle_hints_right_aligned() {
        let app = test_app();
        let out = render_row(&app);
        assert!(out.ends_with(IDLE_HINT));
        assert!(out.starts_with(' '));
    }

    #[test]
    fn test_panel_hints_while_suggesting() {
        let app = app_with_text("x d:");
        assert!(render_row(&app).ends_with(PANEL_HINT));
    }

    #[test]
    fn test_notice_shown_on_the_left() {
        let mut app = test_app();
        app.notice = Some(Notice {
            kind: NoticeKind::Blocking,
            message: "Please select a workspace".into(),
        });
        let out = render_row(&app);
        assert!(out.starts_with(" Please select a workspace"));
        assert!(out.ends_with(IDLE_HINT));
    }
}
