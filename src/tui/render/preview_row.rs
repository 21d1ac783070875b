use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the chips summarizing what the current text will create:
/// workspace, then `#Project`, due date and priority when present.
pub fn render_preview_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let preview = app.input.preview();
    let chip = |fg: Color| Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD);

    let workspace = app
        .current_workspace()
        .map_or("Workspace", |w| w.name.as_str());
    let mut spans = vec![
        Span::styled(format!(" {} ", workspace), chip(app.theme.text)),
        Span::styled("\u{2502}", Style::default().fg(app.theme.dim).bg(bg)),
    ];

    if let Some(project) = &preview.project_name {
        spans.push(Span::styled(format!(" #{} ", project), chip(app.theme.blue)));
    }
    if let Some(due) = &preview.due_date {
        spans.push(Span::styled(
            format!(" {} ", due.format("%b %-d")),
            chip(app.theme.yellow),
        ));
    }
    if let Some(priority) = preview.priority {
        spans.push(Span::styled(
            format!(" {} ", priority.as_str()),
            chip(app.theme.priority_color(priority)),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Config;
    use crate::tui::render::test_helpers::*;

    fn render_row(app: &App) -> String {
        render_to_string(TERM_W, 1, |frame, area| render_preview_row(frame, app, area))
    }

    #[test]
    fn test_all_chips() {
        let app = app_with_text("Ship p:design d:fri pr:low");
        let out = render_row(&app);
        assert_eq!(out, " Acme \u{2502} #Design  Jun 13  low");
    }

    #[test]
    fn test_only_workspace_without_directives() {
        let app = app_with_text("Ship it");
        assert_eq!(render_row(&app), " Acme \u{2502}");
    }

    #[test]
    fn test_workspace_placeholder() {
        let app = App::new(Config::default(), None);
        assert_eq!(render_row(&app), " Workspace \u{2502}");
    }
}
