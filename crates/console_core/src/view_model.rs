use crate::state::{FormField, Notice, StatusMessage};

/// Question shown before a clear is carried out.
pub const CONFIRM_CLEAR_PROMPT: &str =
    "Are you sure you want to clear the search index? This action cannot be undone.";

/// Snapshot of everything the renderer needs, detached from the live state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleViewModel {
    pub form: FormView,
    pub status: Option<StatusMessage>,
    pub document_count: Option<u64>,
    pub confirm_clear: bool,
    pub notice: Option<Notice>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub url: String,
    pub max_pages: String,
    pub max_depth: String,
    pub focus: FormField,
}
