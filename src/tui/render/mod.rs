pub mod helpers;
pub mod input_box;
pub mod preview_row;
pub mod status_row;
pub mod suggestions;

#[cfg(test)]
pub(crate) mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use regex::Regex;

use super::app::App;

/// Fewest text rows the input box shows, even when empty
const MIN_INPUT_ROWS: u16 = 3;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let text_rows = app.input.text().split('\n').count() as u16;
    let input_height = text_rows
        .max(MIN_INPUT_ROWS)
        .saturating_add(2) // borders
        .min(area.height.saturating_sub(2).max(3));

    // Layout: free space (suggestions float here) | input box | preview | status
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(input_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    input_box::render_input_box(frame, app, chunks[1]);
    preview_row::render_preview_row(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Suggestion panel sits on top of the free space, directly above the input
    if app.input.is_suggesting() {
        suggestions::render_suggestions(frame, app, chunks[0], chunks[1]);
    }
}

/// Push spans for text with regex match highlighting. If no regex or no matches,
/// pushes a single span with `base_style`. Otherwise splits text at match boundaries.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    re: Option<&Regex>,
) {
    let re = match re {
        Some(r) => r,
        None => {
            spans.push(Span::styled(text.to_string(), base_style));
            return;
        }
    };

    let mut last_end = 0;
    for m in re.find_iter(text) {
        if m.start() > last_end {
            spans.push(Span::styled(
                text[last_end..m.start()].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(m.as_str().to_string(), highlight_style));
        last_end = m.end();
    }
    if last_end < text.len() || text.is_empty() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}
