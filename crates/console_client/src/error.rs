use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Text worth showing to the user: the server-provided `detail` for
    /// application failures, the underlying error message otherwise. `None`
    /// means the caller should fall back to its own generic wording.
    pub fn detail(&self) -> Option<&str> {
        match &self.kind {
            ApiErrorKind::Status { detail, .. } => detail.as_deref(),
            ApiErrorKind::Timeout | ApiErrorKind::Network | ApiErrorKind::Decode => {
                Some(&self.message)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Non-success response; `detail` is the server's error field if the
    /// body carried one.
    Status { code: u16, detail: Option<String> },
    Timeout,
    Network,
    /// Success status whose body did not decode as the expected document.
    Decode,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Status { code, .. } => write!(f, "http status {code}"),
            ApiErrorKind::Timeout => write!(f, "timeout"),
            ApiErrorKind::Network => write!(f, "network error"),
            ApiErrorKind::Decode => write!(f, "decode error"),
        }
    }
}
