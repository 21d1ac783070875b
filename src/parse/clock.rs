use chrono::{DateTime, FixedOffset};

use crate::model::project::ProjectDirectory;
use crate::model::task::ParsedTask;

use super::directive::extract_task;

/// Source of "now" for due-date resolution.
///
/// The system clock resolves in the local zone itself rather than a fixed
/// offset snapshot, so a due date on the far side of a DST change still lands
/// at the intended wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    #[default]
    System,
    Pinned(DateTime<FixedOffset>),
}

impl Clock {
    pub fn now(&self) -> DateTime<FixedOffset> {
        match self {
            Clock::System => chrono::Local::now().fixed_offset(),
            Clock::Pinned(now) => *now,
        }
    }

    /// Extract a task preview with due dates resolved against this clock
    pub fn extract(&self, text: &str, directory: &ProjectDirectory) -> ParsedTask {
        match self {
            Clock::System => extract_task(text, directory, &chrono::Local::now()),
            Clock::Pinned(now) => extract_task(text, directory, now),
        }
    }
}

impl From<DateTime<FixedOffset>> for Clock {
    fn from(now: DateTime<FixedOffset>) -> Self {
        Clock::Pinned(now)
    }
}

impl From<Option<DateTime<FixedOffset>>> for Clock {
    fn from(now: Option<DateTime<FixedOffset>>) -> Self {
        now.map_or(Clock::System, Clock::Pinned)
    }
}
