pub mod clock;
pub mod date;
pub mod directive;
pub mod trigger;

pub use clock::Clock;
pub use date::resolve_due;
pub use directive::{directive_highlight_regex, extract_task};
pub use trigger::{ActiveDirective, clamp_cursor, detect_directive};
