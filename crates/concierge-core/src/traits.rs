use crate::{error::ConciergeError, transcript::TranscriptEntry};
use async_trait::async_trait;

/// Output surface trait — where the conversation is shown.
///
/// Every front end (terminal, web shim, test capture) implements this trait
/// so the widget session never touches rendering state directly.
#[async_trait]
pub trait Surface: Send + Sync {
    /// Human-readable surface name.
    fn name(&self) -> &str;

    /// Show a transcript entry to the user.
    async fn deliver(&self, entry: &TranscriptEntry) -> Result<(), ConciergeError>;

    /// Show a typing indicator while a reply is pending.
    async fn typing_started(&self) -> Result<(), ConciergeError> {
        Ok(())
    }

    /// Remove the typing indicator.
    async fn typing_stopped(&self) -> Result<(), ConciergeError> {
        Ok(())
    }
}
