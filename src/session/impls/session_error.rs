use crate::session::enums::session_error::SessionError;

impl SessionError {
    /// Whether the process should give up. Failing to reach one peer never is.
    pub fn is_fatal(&self) -> bool {
        match self {
            SessionError::Tracker(error) => error.is_fatal(),
            SessionError::Negotiation(_) | SessionError::Transport(_) => false,
        }
    }
}
