pub mod submit;
pub mod suggest;

pub use submit::{
    JsonLinesSink, MemorySink, NoticeKind, SinkError, SubmitContext, SubmitError, TaskDraft,
    TaskSink, build_draft, submit_task,
};
pub use suggest::{DUE_HINTS, PRIORITY_HINTS, SuggestionList, suggest};
