//! Client for posting or scheduling a video to selected social-media pages.
//!
//! [`FormController`] holds the form fields, the page list fetched from the backend,
//! the user's page selection and the state of the current submission. The backend is
//! reached through [`PostingBackend`]; [`HttpBackend`] is the reqwest implementation.

pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod http;
pub mod payload;
pub mod selection;
pub mod status;
pub mod types;
pub mod view;

/// Convenience re-exports for embedders.
pub mod prelude {
    pub use crate::backend::PostingBackend;
    pub use crate::config::ClientConfig;
    pub use crate::controller::FormController;
    pub use crate::error::{FormError, RemoteError, SelectionError, SubmitError};
    pub use crate::form::{FormState, LogoFile, ScheduleTime};
    pub use crate::http::HttpBackend;
    pub use crate::payload::VideoPost;
    pub use crate::selection::SelectionSet;
    pub use crate::status::{BannerKind, SubmissionStatus};
    pub use crate::types::{PageOption, PostReceipt};
}

use std::sync::Arc;

use anyhow::Result;

pub use crate::backend::PostingBackend;
pub use crate::config::ClientConfig;
pub use crate::controller::FormController;
pub use crate::http::HttpBackend;

/// Build a controller talking HTTP to the configured backend. Does not fetch anything yet.
pub fn connect(config: &ClientConfig) -> Result<FormController> {
    let backend = HttpBackend::connect(config)?;
    Ok(FormController::new(Arc::new(backend)))
}
