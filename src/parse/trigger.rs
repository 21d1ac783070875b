use serde::Serialize;

use crate::model::task::DirectiveKind;

/// An in-progress directive under the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveDirective {
    pub kind: DirectiveKind,
    /// Partial value typed so far (from `anchor` to the cursor)
    pub query: String,
    /// Byte offset where the directive value begins
    pub anchor: usize,
}

/// Detect whether the cursor sits inside a `trigger:value` token.
///
/// Looks only at the whitespace-delimited word ending at the cursor; text
/// after the cursor is ignored. Stateless: every call starts from scratch.
pub fn detect_directive(text: &str, cursor: usize) -> Option<ActiveDirective> {
    let cursor = clamp_cursor(text, cursor);
    let before = &text[..cursor];
    let word = before.rsplit(char::is_whitespace).next().unwrap_or("");

    let (prefix, value) = word.split_once(':')?;
    let kind = DirectiveKind::from_trigger(prefix)?;

    Some(ActiveDirective {
        kind,
        query: value.to_string(),
        anchor: cursor - value.len(),
    })
}

/// Clamp a cursor into `[0, len]` and snap it back to a char boundary
pub fn clamp_cursor(text: &str, cursor: usize) -> usize {
    let mut cursor = cursor.min(text.len());
    while !text.is_char_boundary(cursor) {
        cursor -= 1;
    }
    cursor
}
