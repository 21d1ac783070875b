use crate::model::project::ProjectDirectory;
use crate::model::task::DirectiveKind;
use crate::parse::trigger::ActiveDirective;

/// Priority candidates, in display order
pub const PRIORITY_HINTS: &[&str] = &["high", "medium", "low"];

/// Due-date candidates, in display order.
///
/// Narrower than what the date resolver accepts (other weekdays and arbitrary
/// `Nm`/`Nh`/`Nd` offsets also parse); these are only hints.
pub const DUE_HINTS: &[&str] = &["today", "tomorrow", "mon", "fri", "1h", "1d"];

/// Candidate values for the directive under the cursor.
///
/// Priority and due hints are prefix-filtered; project names are matched by
/// substring. Order follows the hint table or the directory, never relevance.
pub fn suggest(active: Option<&ActiveDirective>, directory: &ProjectDirectory) -> Vec<String> {
    let Some(active) = active else {
        return Vec::new();
    };
    let q = active.query.to_lowercase();
    match active.kind {
        DirectiveKind::Priority => prefix_filter(PRIORITY_HINTS, &q),
        DirectiveKind::Project => directory
            .names_containing(&q)
            .map(str::to_string)
            .collect(),
        DirectiveKind::Due => prefix_filter(DUE_HINTS, &q),
    }
}

fn prefix_filter(hints: &[&str], q: &str) -> Vec<String> {
    hints
        .iter()
        .filter(|h| h.starts_with(q))
        .map(|h| h.to_string())
        .collect()
}

/// Ordered candidates plus a cyclic selection index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionList {
    items: Vec<String>,
    active: usize,
}

impl SuggestionList {
    pub fn new(items: Vec<String>) -> Self {
        SuggestionList { items, active: 0 }
    }

    /// Replace the candidates, resetting the selection if they changed
    pub fn set_items(&mut self, items: Vec<String>) {
        if items != self.items {
            self.items = items;
            self.active = 0;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.active = 0;
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn selected(&self) -> Option<&str> {
        self.items.get(self.active).map(|s| s.as_str())
    }

    pub fn move_down(&mut self) {
        if !self.items.is_empty() {
            self.active = (self.active + 1) % self.items.len();
        }
    }

    pub fn move_up(&mut self) {
        if !self.items.is_empty() {
            let len = self.items.len();
            self.active = (self.active + len - 1) % len;
        }
    }
}
