use serde::Deserialize;

/// A page the user can post to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageOption {
    pub id: String,
    pub name: String,
}

/// Body of `GET /api/facebook-pages`.
///
/// The documented shape is `{"pages": [...]}`; some backends answer with the bare array.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum PagesResponse {
    Bare(Vec<PageOption>),
    Wrapped {
        #[serde(default)]
        pages: Option<Vec<PageOption>>,
    },
}

impl PagesResponse {
    pub(crate) fn into_pages(self) -> Vec<PageOption> {
        match self {
            PagesResponse::Bare(pages) => pages,
            PagesResponse::Wrapped { pages } => pages.unwrap_or_default(),
        }
    }
}

/// Successful answer to a post submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostReceipt {
    pub message: String,
    /// Echoed back when the post was scheduled rather than published.
    #[serde(default)]
    pub scheduled_time: Option<String>,
    #[serde(default)]
    pub post_to_pages: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(id: &str, name: &str) -> PageOption {
        PageOption { id: id.to_string(), name: name.to_string() }
    }

    #[test]
    fn pages_wrapped_in_object() {
        let body = r#"{"pages":[{"id":"1","name":"Acme"},{"id":"2","name":"Beta"}]}"#;
        let parsed: PagesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.into_pages(), vec![page("1", "Acme"), page("2", "Beta")]);
    }

    #[test]
    fn missing_pages_field_is_empty() {
        let parsed: PagesResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.into_pages().is_empty());
        let parsed: PagesResponse = serde_json::from_str(r#"{"pages":null}"#).unwrap();
        assert!(parsed.into_pages().is_empty());
    }

    #[test]
    fn bare_array_is_accepted() {
        let parsed: PagesResponse = serde_json::from_str(r#"[{"id":"9","name":"Nine"}]"#).unwrap();
        assert_eq!(parsed.into_pages(), vec![page("9", "Nine")]);
    }

    #[test]
    fn receipt_with_schedule_echo() {
        let body = r#"{"message":"Video post scheduled successfully!","scheduled_time":"2025-03-01T09:30:00","post_to_pages":["1","2"]}"#;
        let receipt: PostReceipt = serde_json::from_str(body).unwrap();
        assert_eq!(receipt.message, "Video post scheduled successfully!");
        assert_eq!(receipt.scheduled_time.as_deref(), Some("2025-03-01T09:30:00"));
        assert_eq!(receipt.post_to_pages, Some(vec!["1".to_string(), "2".to_string()]));
    }

    #[test]
    fn error_body_without_error_field() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"nope"}"#).unwrap();
        assert!(body.error.is_none());
    }
}
