use std::fmt;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::share_id::ShareId;

impl ShareId {
    /// Builds a ShareID from tracker or user input, rejecting blank values.
    pub fn parse(value: &str) -> Result<ShareId, TrackerError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TrackerError::Protocol(String::from("share id is empty")));
        }
        Ok(ShareId(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ShareId {
    fn from(value: &str) -> Self {
        ShareId(value.to_string())
    }
}

impl From<String> for ShareId {
    fn from(value: String) -> Self {
        ShareId(value)
    }
}

impl fmt::Display for ShareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
