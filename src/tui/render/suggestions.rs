use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

/// Maximum number of visible entries in the panel
const MAX_VISIBLE: usize = 8;

const PICK_HINT: &str = " TAB to pick ";

/// Render the suggestion panel floating just above the input box
pub fn render_suggestions(frame: &mut Frame, app: &App, free_area: Rect, input_area: Rect) {
    let (Some(active), list) = (app.input.active(), app.input.suggestions()) else {
        return;
    };
    if list.is_empty() {
        return;
    }

    let bg = app.theme.background;
    let text_color = app.theme.text;
    let bright = app.theme.text_bright;
    let dim = app.theme.dim;

    let header = format!(" {} ", active.kind.as_str().to_uppercase());
    let count = list.len().min(MAX_VISIBLE);

    // Determine the widest entry (+ padding), never narrower than the header
    let max_width = list
        .items()
        .iter()
        .take(MAX_VISIBLE)
        .map(|s| display_width(s))
        .max()
        .unwrap_or(10)
        + 5; // prefix + borders
    let header_width = display_width(&header) + display_width(PICK_HINT) + 2;

    let popup_w = (max_width.max(header_width) as u16)
        .max(24)
        .min(input_area.width);
    let popup_h = (count as u16 + 2).min(free_area.height);
    if popup_h < 3 {
        return;
    }

    // Bottom edge touches the top of the input box
    let y = input_area.y.saturating_sub(popup_h).max(free_area.y);
    let popup_area = Rect::new(input_area.x, y, popup_w, popup_h);
    let rows = (popup_h - 2) as usize;

    // Scroll window around selected item
    let selected = list.active_index();
    let scroll_start = if selected >= rows { selected - rows + 1 } else { 0 };

    let label_w = (popup_w as usize).saturating_sub(5);
    let mut lines: Vec<Line> = Vec::new();
    for (i, entry) in list.items().iter().skip(scroll_start).take(rows).enumerate() {
        let is_selected = scroll_start + i == selected;

        let style = if is_selected {
            Style::default()
                .fg(bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(text_color).bg(bg)
        };

        let prefix = if is_selected { " \u{25B8} " } else { "   " };
        let label = truncate_to_width(entry, label_w);
        let pad = label_w.saturating_sub(display_width(&label));
        lines.push(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(label, style),
            Span::styled(" ".repeat(pad), style),
        ]));
    }

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(dim).bg(bg))
        .title_top(Line::from(Span::styled(
            header,
            Style::default().fg(bright).add_modifier(Modifier::BOLD),
        )))
        .title_top(Line::from(Span::styled(PICK_HINT, Style::default().fg(dim))).right_aligned())
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines).block(block).style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup_area);
}
