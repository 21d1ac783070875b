use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::parse::directive_highlight_regex;
use crate::tui::app::App;
use crate::util::unicode::cursor_line_col;

use super::push_highlighted_spans;

pub const PLACEHOLDER: &str = "I need to... (p:proj d:tom pr:high)";

/// Render the bordered multi-line input with directives highlighted, and
/// place the terminal cursor.
pub fn render_input_box(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let border_color = if app.input.is_suggesting() {
        app.theme.highlight
    } else {
        app.theme.dim
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);

    let text = app.input.text();
    let lines: Vec<Line> = if text.is_empty() {
        vec![Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(bg),
        ))]
    } else {
        let base = Style::default().fg(app.theme.text_bright).bg(bg);
        let directive = Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD);
        text.split('\n')
            .map(|line| {
                let mut spans = Vec::new();
                push_highlighted_spans(
                    &mut spans,
                    line,
                    base,
                    directive,
                    Some(directive_highlight_regex()),
                );
                Line::from(spans)
            })
            .collect()
    };

    // Keep the cursor row visible
    let (cursor_line, cursor_col) = cursor_line_col(text, app.input.cursor());
    let visible = inner.height.max(1) as usize;
    let scroll = cursor_line.saturating_sub(visible - 1);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll as u16, 0))
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);

    let x = inner.x + (cursor_col as u16).min(inner.width.saturating_sub(1));
    let y = inner.y + (cursor_line - scroll) as u16;
    frame.set_cursor_position((x, y));
}
