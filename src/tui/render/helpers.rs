use ratatui::style::Style;
use ratatui::text::Span;

use crate::util::unicode;

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Pad `spans` so that `hint` ends flush with the right edge of `width`.
/// The hint is dropped when it would not fit.
pub(super) fn push_right_hint<'a>(
    spans: &mut Vec<Span<'a>>,
    hint: &'a str,
    width: usize,
    pad_style: Style,
    hint_style: Style,
) {
    let content_width = spans_width(spans);
    let hint_width = unicode::display_width(hint);
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), pad_style));
        spans.push(Span::styled(hint, hint_style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_right_hint_pads_to_width() {
        let mut spans = vec![Span::raw("ab")];
        push_right_hint(&mut spans, "hint", 10, Style::default(), Style::default());
        assert_eq!(spans_width(&spans), 10);
        assert_eq!(spans[1].content, "    ");
    }

    #[test]
    fn test_push_right_hint_drops_when_too_wide() {
        let mut spans = vec![Span::raw("abcdef")];
        push_right_hint(&mut spans, "hint", 10, Style::default(), Style::default());
        assert_eq!(spans.len(), 1);
    }
}
