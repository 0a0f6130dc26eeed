use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::error::FormError;

/// Field values of the post form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub video_url: String,
    pub logo: Option<LogoFile>,
    pub overlay_text: String,
    pub schedule_time: Option<ScheduleTime>,
    pub caption: String,
}

/// Image attached as the logo overlay. Only PNG and JPEG are accepted.
#[derive(Clone, PartialEq, Eq)]
pub struct LogoFile {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl LogoFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, FormError> {
        let file_name = file_name.into();
        let mime = logo_mime(Path::new(&file_name))
            .ok_or_else(|| FormError::UnsupportedLogo { path: file_name.clone().into() })?;
        Ok(Self { file_name, mime, bytes })
    }

    /// Read a logo from disk.
    pub async fn from_path(path: &Path) -> Result<Self, FormError> {
        if logo_mime(path).is_none() {
            return Err(FormError::UnsupportedLogo { path: path.to_path_buf() });
        }
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| FormError::Io { path: path.to_path_buf(), source })?;
        let file_name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "logo".to_string());
        Self::new(file_name, bytes)
    }
}

impl fmt::Debug for LogoFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogoFile")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

fn logo_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        _ => None,
    }
}

/// Local date-time for a scheduled post, as entered in a `datetime-local` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScheduleTime(NaiveDateTime);

impl ScheduleTime {
    const INPUT_FORMATS: [&'static str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

    pub fn new(at: NaiveDateTime) -> Self { Self(at) }

    pub fn as_naive(&self) -> NaiveDateTime { self.0 }

    /// Value sent in the `schedule_time` field.
    pub fn to_wire(&self) -> String { self.0.format("%Y-%m-%dT%H:%M:%S").to_string() }
}

impl FromStr for ScheduleTime {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::INPUT_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
            .map(ScheduleTime)
            .ok_or_else(|| FormError::InvalidScheduleTime(s.to_string()))
    }
}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_wire()) }
}
