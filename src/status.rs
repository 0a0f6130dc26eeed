/// Lifecycle of the current submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded(String),
    Failed(String),
}

/// How the message banner should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_in_flight(&self) -> bool { matches!(self, SubmissionStatus::InFlight) }

    /// Terminal states carry a message and fall back to `Idle` on the next edit.
    pub fn is_settled(&self) -> bool {
        matches!(self, SubmissionStatus::Succeeded(_) | SubmissionStatus::Failed(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Succeeded(msg) | SubmissionStatus::Failed(msg) => Some(msg),
            SubmissionStatus::Idle | SubmissionStatus::InFlight => None,
        }
    }

    /// Banner to render, if any. Empty messages render nothing.
    pub fn banner(&self) -> Option<(BannerKind, &str)> {
        match self {
            SubmissionStatus::Succeeded(msg) if !msg.is_empty() => Some((BannerKind::Success, msg)),
            SubmissionStatus::Failed(msg) if !msg.is_empty() => Some((BannerKind::Error, msg)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_follows_status() {
        assert_eq!(SubmissionStatus::Idle.banner(), None);
        assert_eq!(SubmissionStatus::InFlight.banner(), None);
        assert_eq!(
            SubmissionStatus::Succeeded("Posted!".into()).banner(),
            Some((BannerKind::Success, "Posted!"))
        );
        assert_eq!(
            SubmissionStatus::Failed("X".into()).banner(),
            Some((BannerKind::Error, "X"))
        );
        assert_eq!(SubmissionStatus::Succeeded(String::new()).banner(), None);
    }

    #[test]
    fn only_terminal_states_are_settled() {
        assert!(!SubmissionStatus::Idle.is_settled());
        assert!(!SubmissionStatus::InFlight.is_settled());
        assert!(SubmissionStatus::Failed("x".into()).is_settled());
        assert!(SubmissionStatus::InFlight.is_in_flight());
    }
}
