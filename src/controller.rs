//! Form controller: page list, selection, field state and the submission lifecycle.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::OnceCell;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::backend::PostingBackend;
use crate::error::{
    FormError, RemoteError, SelectionError, SubmitError, FETCH_PAGES_FAILED, POST_FAILED_FALLBACK,
};
use crate::form::{FormState, LogoFile, ScheduleTime};
use crate::payload::VideoPost;
use crate::selection::SelectionSet;
use crate::status::SubmissionStatus;
use crate::types::{PageOption, PostReceipt};

pub const LABEL_IN_FLIGHT: &str = "Processing...";
pub const LABEL_SCHEDULE: &str = "Schedule Video";
pub const LABEL_POST_NOW: &str = "Post Video Now";

#[derive(Debug, Default)]
struct Session {
    form: FormState,
    pages: Vec<PageOption>,
    selection: SelectionSet,
    status: SubmissionStatus,
}

impl Session {
    // A settled banner goes away once the user changes something.
    fn touch(&mut self) {
        if self.status.is_settled() {
            self.status = SubmissionStatus::Idle;
        }
    }
}

/// Shared, thread-safe controller. Clone the `Arc` to drive it from several tasks.
///
/// The session lock is never held across an await.
pub struct FormController {
    backend: Arc<dyn PostingBackend>,
    session: Mutex<Session>,
    loaded: OnceCell<Result<usize, RemoteError>>,
}

/// Settles a submission whose future was dropped before the backend answered.
struct InFlightGuard<'a> {
    ctrl: &'a FormController,
    armed: bool,
}

impl InFlightGuard<'_> {
    fn disarm(mut self) { self.armed = false; }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut s = self.ctrl.session();
        if s.status.is_in_flight() {
            warn!("submission dropped before the backend answered");
            s.status = SubmissionStatus::Failed(POST_FAILED_FALLBACK.to_string());
        }
    }
}

impl FormController {
    pub fn new(backend: Arc<dyn PostingBackend>) -> Self {
        Self { backend, session: Mutex::new(Session::default()), loaded: OnceCell::new() }
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetch the page list once. Later calls return the first outcome without a request.
    ///
    /// Calls made while the fetch is pending wait for it and get the same result.
    /// On failure the banner shows the fetch error and the list stays empty.
    pub async fn initialize(&self) -> Result<usize, RemoteError> {
        self.loaded.get_or_init(|| self.load_pages()).await.clone()
    }

    async fn load_pages(&self) -> Result<usize, RemoteError> {
        match self.backend.fetch_pages().await {
            Ok(pages) => {
                info!(count = pages.len(), "loaded page list");
                let count = pages.len();
                self.session().pages = pages;
                Ok(count)
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch page list");
                let mut s = self.session();
                s.pages.clear();
                s.status = SubmissionStatus::Failed(FETCH_PAGES_FAILED.to_string());
                Err(e)
            }
        }
    }

    /// Check or uncheck a page. Returns whether membership changed.
    pub fn toggle_selection(&self, page_id: &str, checked: bool) -> Result<bool, SelectionError> {
        let mut s = self.session();
        if !s.pages.iter().any(|p| p.id == page_id) {
            return Err(SelectionError::UnknownPage(page_id.to_string()));
        }
        let changed = s.selection.toggle(page_id, checked);
        if changed {
            s.touch();
        }
        Ok(changed)
    }

    fn edit(&self, apply: impl FnOnce(&mut FormState)) {
        let mut s = self.session();
        apply(&mut s.form);
        s.touch();
    }

    pub fn set_video_url(&self, url: impl Into<String>) {
        let url = url.into();
        self.edit(|f| f.video_url = url);
    }

    pub fn set_caption(&self, caption: impl Into<String>) {
        let caption = caption.into();
        self.edit(|f| f.caption = caption);
    }

    pub fn set_overlay_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.edit(|f| f.overlay_text = text);
    }

    pub fn set_logo(&self, logo: LogoFile) { self.edit(|f| f.logo = Some(logo)); }

    /// Read a PNG/JPEG from disk and attach it.
    pub async fn set_logo_path(&self, path: &Path) -> Result<(), FormError> {
        let logo = LogoFile::from_path(path).await?;
        self.set_logo(logo);
        Ok(())
    }

    pub fn clear_logo(&self) { self.edit(|f| f.logo = None); }

    pub fn set_schedule_time(&self, at: ScheduleTime) { self.edit(|f| f.schedule_time = Some(at)); }

    /// Parse a `datetime-local` value; an empty string clears the schedule.
    pub fn set_schedule_time_str(&self, raw: &str) -> Result<(), FormError> {
        if raw.trim().is_empty() {
            self.clear_schedule_time();
            return Ok(());
        }
        let at: ScheduleTime = raw.parse()?;
        self.set_schedule_time(at);
        Ok(())
    }

    pub fn clear_schedule_time(&self) { self.edit(|f| f.schedule_time = None); }

    /// Validate, send one post request and record the outcome in the status.
    ///
    /// A call made while another submission is pending is rejected with
    /// `AlreadyInFlight` and leaves the pending one untouched. Dropping the returned
    /// future before it completes settles the status as a failed post.
    pub async fn submit(&self) -> Result<PostReceipt, SubmitError> {
        let span = info_span!("submit", attempt = %Uuid::new_v4());
        async move {
            let post = self.begin_submit()?;
            let guard = InFlightGuard { ctrl: self, armed: true };
            let outcome = self.backend.post_video(&post).await;
            guard.disarm();
            self.finish_submit(outcome)
        }
        .instrument(span)
        .await
    }

    fn begin_submit(&self) -> Result<VideoPost, SubmitError> {
        let mut s = self.session();
        if s.status.is_in_flight() {
            return Err(SubmitError::AlreadyInFlight);
        }
        let invalid = if s.selection.is_empty() {
            Some(SubmitError::NoPagesSelected)
        } else if s.form.video_url.trim().is_empty() {
            Some(SubmitError::MissingVideoUrl)
        } else {
            None
        };
        if let Some(err) = invalid {
            debug!(error = %err, "submission rejected locally");
            s.status = SubmissionStatus::Failed(err.user_message());
            return Err(err);
        }
        s.status = SubmissionStatus::InFlight;
        let post = VideoPost::build(&s.form, &s.selection);
        debug!(pages = post.page_ids().len(), scheduled = post.is_scheduled(), logo = post.logo().is_some(), "submitting");
        Ok(post)
    }

    fn finish_submit(&self, outcome: Result<PostReceipt, RemoteError>) -> Result<PostReceipt, SubmitError> {
        let mut s = self.session();
        match outcome {
            Ok(receipt) => {
                info!(message = %receipt.message, "submission succeeded");
                s.status = SubmissionStatus::Succeeded(receipt.message.clone());
                Ok(receipt)
            }
            Err(remote) => {
                let err = SubmitError::Remote(remote);
                warn!(error = %err, "submission failed");
                s.status = SubmissionStatus::Failed(err.user_message());
                Err(err)
            }
        }
    }

    // --- Read-only views ---

    pub fn pages(&self) -> Vec<PageOption> { self.session().pages.clone() }

    pub fn selected_ids(&self) -> Vec<String> {
        self.session().selection.iter().map(str::to_string).collect()
    }

    pub fn is_selected(&self, page_id: &str) -> bool { self.session().selection.contains(page_id) }

    pub fn form(&self) -> FormState { self.session().form.clone() }

    pub fn status(&self) -> SubmissionStatus { self.session().status.clone() }

    pub fn is_initialized(&self) -> bool { self.loaded.initialized() }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool { !self.session().status.is_in_flight() }

    pub fn submit_label(&self) -> &'static str {
        let s = self.session();
        if s.status.is_in_flight() {
            LABEL_IN_FLIGHT
        } else if s.form.schedule_time.is_some() {
            LABEL_SCHEDULE
        } else {
            LABEL_POST_NOW
        }
    }
}
