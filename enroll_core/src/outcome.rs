/// What to show the user about their latest submit attempt. Exactly one
/// message is ever visible: a fresh attempt clears the previous outcome,
/// and error and success never coexist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Outcome {
    /// No attempt yet (or one is in flight).
    #[default]
    Idle,

    /// The attempt failed; show why.
    Error(String),

    /// The attempt succeeded.
    Success(String),
}

impl Outcome {
    /// Whether this outcome means registration went through.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The message to display, if there is one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Error(message) | Self::Success(message) => Some(message),
        }
    }
}
