//! Multipart body for `POST /api/post-video`.

use reqwest::multipart::{Form, Part};

use crate::form::{FormState, LogoFile};
use crate::selection::SelectionSet;

pub const VIDEO_URL: &str = "video_url";
pub const OVERLAY_TEXT: &str = "overlay_text";
pub const CAPTION: &str = "caption";
pub const PAGE_IDS: &str = "page_ids";
pub const LOGO: &str = "logo";
pub const SCHEDULE_TIME: &str = "schedule_time";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    File(LogoFile),
}

/// Ordered list of multipart fields. `page_ids` repeats once per selected page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoPost {
    fields: Vec<(&'static str, FieldValue)>,
}

impl VideoPost {
    /// Snapshot the form and selection. Empty optional text fields are left out so the
    /// backend can apply its own defaults.
    pub fn build(form: &FormState, selection: &SelectionSet) -> Self {
        let mut post = VideoPost::default();
        post.text(VIDEO_URL, form.video_url.trim());
        if !form.overlay_text.is_empty() {
            post.text(OVERLAY_TEXT, &form.overlay_text);
        }
        if !form.caption.is_empty() {
            post.text(CAPTION, &form.caption);
        }
        for id in selection.iter() {
            post.text(PAGE_IDS, id);
        }
        if let Some(logo) = &form.logo {
            post.fields.push((LOGO, FieldValue::File(logo.clone())));
        }
        if let Some(at) = &form.schedule_time {
            post.text(SCHEDULE_TIME, &at.to_wire());
        }
        post
    }

    fn text(&mut self, name: &'static str, value: &str) {
        self.fields.push((name, FieldValue::Text(value.to_string())));
    }

    pub fn fields(&self) -> &[(&'static str, FieldValue)] { &self.fields }

    /// First text value for `name`.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|(n, v)| match v {
            FieldValue::Text(t) if *n == name => Some(t.as_str()),
            _ => None,
        })
    }

    pub fn page_ids(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter_map(|(n, v)| match v {
                FieldValue::Text(t) if *n == PAGE_IDS => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn logo(&self) -> Option<&LogoFile> {
        self.fields.iter().find_map(|(_, v)| match v {
            FieldValue::File(logo) => Some(logo),
            FieldValue::Text(_) => None,
        })
    }

    pub fn is_scheduled(&self) -> bool { self.text_value(SCHEDULE_TIME).is_some() }

    /// Convert into a reqwest multipart form, preserving field order.
    pub fn to_form(&self) -> Result<Form, reqwest::Error> {
        let mut form = Form::new();
        for (name, value) in &self.fields {
            form = match value {
                FieldValue::Text(text) => form.text(*name, text.clone()),
                FieldValue::File(logo) => {
                    let part = Part::bytes(logo.bytes.clone())
                        .file_name(logo.file_name.clone())
                        .mime_str(logo.mime)?;
                    form.part(*name, part)
                }
            };
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ScheduleTime;

    fn selection(ids: &[&str]) -> SelectionSet {
        let mut set = SelectionSet::new();
        for id in ids {
            set.toggle(id, true);
        }
        set
    }

    #[test]
    fn minimal_post_has_url_and_pages() {
        let form = FormState { video_url: "https://x/y".into(), ..Default::default() };
        let post = VideoPost::build(&form, &selection(&["1"]));
        let names: Vec<_> = post.fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec![VIDEO_URL, PAGE_IDS]);
        assert_eq!(post.text_value(VIDEO_URL), Some("https://x/y"));
        assert_eq!(post.page_ids(), vec!["1"]);
        assert!(!post.is_scheduled());
        assert!(post.logo().is_none());
    }

    #[test]
    fn full_post_keeps_field_order() {
        let form = FormState {
            video_url: "  https://v.example/watch?v=1 ".into(),
            logo: Some(LogoFile::new("logo.png", vec![0x89, b'P']).unwrap()),
            overlay_text: "Follow us".into(),
            schedule_time: Some("2025-03-01T09:30".parse::<ScheduleTime>().unwrap()),
            caption: "Launch day".into(),
        };
        let post = VideoPost::build(&form, &selection(&["2", "1"]));
        let names: Vec<_> = post.fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec![VIDEO_URL, OVERLAY_TEXT, CAPTION, PAGE_IDS, PAGE_IDS, LOGO, SCHEDULE_TIME]);
        assert_eq!(post.text_value(VIDEO_URL), Some("https://v.example/watch?v=1"));
        assert_eq!(post.page_ids(), vec!["2", "1"]);
        assert_eq!(post.text_value(SCHEDULE_TIME), Some("2025-03-01T09:30:00"));
        assert_eq!(post.logo().map(|l| l.mime), Some("image/png"));
        assert!(post.to_form().is_ok());
    }
}
