//! Error types for the form controller and its backend.

use std::path::PathBuf;

use thiserror::Error;

/// Shown when the page list cannot be loaded.
pub const FETCH_PAGES_FAILED: &str = "Error fetching Facebook pages. Please ensure you are logged in.";
/// Shown when submit is pressed with no page checked.
pub const NO_PAGES_SELECTED: &str = "Please select at least one page to post to.";
/// Shown when submit is pressed with an empty video URL.
pub const MISSING_VIDEO_URL: &str = "Please enter a video URL.";
/// Shown when a post fails and the backend gave no reason.
pub const POST_FAILED_FALLBACK: &str = "An error occurred while posting the video.";

/// Failure talking to the backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// Non-2xx answer. `error` is the backend's `error` field, when it sent one.
    #[error("backend returned {status}: {}", .error.as_deref().unwrap_or("no error message"))]
    Status { status: u16, error: Option<String> },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not what the endpoint promises.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl RemoteError {
    /// The backend-supplied reason, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RemoteError::Status { error: Some(msg), .. } if !msg.is_empty() => Some(msg),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RemoteError::Decode(err.to_string())
        } else {
            RemoteError::Transport(err.to_string())
        }
    }
}

/// Why a submission did not produce a receipt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{}", NO_PAGES_SELECTED)]
    NoPagesSelected,

    #[error("{}", MISSING_VIDEO_URL)]
    MissingVideoUrl,

    /// Another submission has not settled yet.
    #[error("a submission is already in flight")]
    AlreadyInFlight,

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl SubmitError {
    /// Text for the message banner.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::NoPagesSelected => NO_PAGES_SELECTED.to_string(),
            SubmitError::MissingVideoUrl => MISSING_VIDEO_URL.to_string(),
            SubmitError::AlreadyInFlight => self.to_string(),
            SubmitError::Remote(remote) => remote
                .server_message()
                .unwrap_or(POST_FAILED_FALLBACK)
                .to_string(),
        }
    }

    /// True for failures decided locally, before any request.
    pub fn is_local(&self) -> bool {
        !matches!(self, SubmitError::Remote(_))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown page id: {0}")]
    UnknownPage(String),
}

/// Invalid field input.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("unsupported logo file {path}: expected a .png, .jpg or .jpeg image")]
    UnsupportedLogo { path: PathBuf },

    #[error("invalid schedule time `{0}`: expected YYYY-MM-DDTHH:MM")]
    InvalidScheduleTime(String),

    #[error("failed to read logo {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_prefers_error_field() {
        let err = SubmitError::Remote(RemoteError::Status { status: 400, error: Some("X".into()) });
        assert_eq!(err.user_message(), "X");
    }

    #[test]
    fn fallback_when_backend_gave_no_reason() {
        let cases = [
            RemoteError::Status { status: 500, error: None },
            RemoteError::Status { status: 502, error: Some(String::new()) },
            RemoteError::Transport("connection refused".into()),
            RemoteError::Decode("expected value".into()),
        ];
        for remote in cases {
            assert_eq!(SubmitError::Remote(remote).user_message(), POST_FAILED_FALLBACK);
        }
    }

    #[test]
    fn local_errors_are_flagged() {
        assert!(SubmitError::NoPagesSelected.is_local());
        assert!(SubmitError::MissingVideoUrl.is_local());
        assert!(SubmitError::AlreadyInFlight.is_local());
        assert!(!SubmitError::Remote(RemoteError::Transport("x".into())).is_local());
        assert_eq!(SubmitError::NoPagesSelected.to_string(), NO_PAGES_SELECTED);
    }
}
