//! Plain-text rendering of the form for terminal output.

use std::fmt::Write;

use crate::controller::FormController;
use crate::status::BannerKind;

pub const NO_PAGES_PLACEHOLDER: &str = "No pages found or still loading...";

/// Page checklist, one line per page, or the placeholder when there are none.
pub fn render_pages(ctrl: &FormController) -> String {
    let pages = ctrl.pages();
    if pages.is_empty() {
        return format!("{NO_PAGES_PLACEHOLDER}\n");
    }
    let mut out = String::new();
    for page in pages {
        let mark = if ctrl.is_selected(&page.id) { 'x' } else { ' ' };
        let _ = writeln!(out, "[{mark}] {} ({})", page.name, page.id);
    }
    out
}

/// Submit control as `<label>` or `<label> (disabled)`.
pub fn render_submit(ctrl: &FormController) -> String {
    let label = ctrl.submit_label();
    if ctrl.can_submit() { label.to_string() } else { format!("{label} (disabled)") }
}

/// Message banner, if the status carries one.
pub fn render_banner(ctrl: &FormController) -> Option<String> {
    let status = ctrl.status();
    let (kind, msg) = status.banner()?;
    let tag = match kind {
        BannerKind::Success => "ok",
        BannerKind::Error => "error",
    };
    Some(format!("[{tag}] {msg}"))
}
