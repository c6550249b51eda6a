use async_trait::async_trait;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::share_id::ShareId;

/// Fire-and-forget sends used by the keepalive loop and the connect negotiator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrackerSender: Send + Sync {
    async fn send_pulse(&self, override_flag: bool) -> Result<(), TrackerError>;

    async fn send_push(&self, target: &ShareId) -> Result<(), TrackerError>;
}
