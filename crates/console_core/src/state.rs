use crate::view_model::{ConsoleViewModel, FormView};

/// Monotonic token identifying one issued request. A completion is applied
/// only while its id is still the pending one for that action, so a response
/// that lost the race against a newer request is discarded.
pub type RequestId = u64;

/// Initial form value for the page budget, matching the service default.
pub const DEFAULT_MAX_PAGES: &str = "10";
/// Initial form value for the link depth, matching the service default.
pub const DEFAULT_MAX_DEPTH: &str = "2";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Url,
    MaxPages,
    MaxDepth,
}

impl FormField {
    pub(crate) fn next(self) -> Self {
        match self {
            FormField::Url => FormField::MaxPages,
            FormField::MaxPages => FormField::MaxDepth,
            FormField::MaxDepth => FormField::Url,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            FormField::Url => FormField::MaxDepth,
            FormField::MaxPages => FormField::Url,
            FormField::MaxDepth => FormField::MaxPages,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Success,
    Error,
}

/// The single replaceable message shown for the last triggered action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One-shot modal notice, dismissed explicitly by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

/// Successful crawl completion as the controller sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlDone {
    pub pages: usize,
}

/// Failed call as the controller sees it: an optional human-readable detail.
/// `None` means the caller should fall back to the per-action generic text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestFailure {
    pub detail: Option<String>,
}

impl RequestFailure {
    pub fn with_detail(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
        }
    }
}

/// Latest index statistics reported by the collaborator service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub document_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    url_input: String,
    max_pages_input: String,
    max_depth_input: String,
    focus: FormField,
    status: Option<StatusMessage>,
    document_count: Option<u64>,
    confirm_clear: bool,
    notice: Option<Notice>,
    next_request_id: RequestId,
    pending_crawl: Option<RequestId>,
    pending_stats: Option<RequestId>,
    pending_clear: Option<RequestId>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            url_input: String::new(),
            max_pages_input: DEFAULT_MAX_PAGES.to_string(),
            max_depth_input: DEFAULT_MAX_DEPTH.to_string(),
            focus: FormField::default(),
            status: None,
            document_count: None,
            confirm_clear: false,
            notice: None,
            next_request_id: 1,
            pending_crawl: None,
            pending_stats: None,
            pending_clear: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ConsoleViewModel {
        ConsoleViewModel {
            form: FormView {
                url: self.url_input.clone(),
                max_pages: self.max_pages_input.clone(),
                max_depth: self.max_depth_input.clone(),
                focus: self.focus,
            },
            status: self.status.clone(),
            document_count: self.document_count,
            confirm_clear: self.confirm_clear,
            notice: self.notice.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn url_input(&self) -> &str {
        &self.url_input
    }

    pub(crate) fn max_pages_input(&self) -> &str {
        &self.max_pages_input
    }

    pub(crate) fn max_depth_input(&self) -> &str {
        &self.max_depth_input
    }

    pub(crate) fn push_input(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        self.focused_input_mut().push(ch);
        self.dirty = true;
    }

    pub(crate) fn pop_input(&mut self) {
        if self.focused_input_mut().pop().is_some() {
            self.dirty = true;
        }
    }

    pub(crate) fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.dirty = true;
    }

    pub(crate) fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        self.dirty = true;
    }

    pub(crate) fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
        self.dirty = true;
    }

    pub(crate) fn set_document_count(&mut self, count: u64) {
        self.document_count = Some(count);
        self.dirty = true;
    }

    pub(crate) fn open_confirm(&mut self) {
        if !self.confirm_clear {
            self.confirm_clear = true;
            self.dirty = true;
        }
    }

    /// Closes the confirmation gate; returns whether it was open.
    pub(crate) fn close_confirm(&mut self) -> bool {
        if self.confirm_clear {
            self.confirm_clear = false;
            self.dirty = true;
            true
        } else {
            false
        }
    }

    pub(crate) fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.dirty = true;
    }

    pub(crate) fn dismiss_notice(&mut self) {
        if self.notice.take().is_some() {
            self.dirty = true;
        }
    }

    pub(crate) fn issue_crawl(&mut self) -> RequestId {
        let id = self.mint_request_id();
        self.pending_crawl = Some(id);
        id
    }

    pub(crate) fn issue_stats(&mut self) -> RequestId {
        let id = self.mint_request_id();
        self.pending_stats = Some(id);
        id
    }

    pub(crate) fn issue_clear(&mut self) -> RequestId {
        let id = self.mint_request_id();
        self.pending_clear = Some(id);
        id
    }

    pub(crate) fn settle_crawl(&mut self, id: RequestId) -> bool {
        settle(&mut self.pending_crawl, id)
    }

    pub(crate) fn settle_stats(&mut self, id: RequestId) -> bool {
        settle(&mut self.pending_stats, id)
    }

    pub(crate) fn settle_clear(&mut self, id: RequestId) -> bool {
        settle(&mut self.pending_clear, id)
    }

    fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Url => &mut self.url_input,
            FormField::MaxPages => &mut self.max_pages_input,
            FormField::MaxDepth => &mut self.max_depth_input,
        }
    }

    fn mint_request_id(&mut self) -> RequestId {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }
}

/// A completion settles only the request it belongs to.
fn settle(pending: &mut Option<RequestId>, id: RequestId) -> bool {
    if *pending == Some(id) {
        *pending = None;
        true
    } else {
        false
    }
}
