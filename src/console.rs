use async_trait::async_trait;
use concierge_core::error::ConciergeError;
use concierge_core::traits::Surface;
use concierge_core::transcript::{Speaker, TranscriptEntry};

/// Surface that prints the conversation to stdout.
///
/// User entries are skipped — the user just typed them on the same terminal.
pub struct ConsoleSurface;

impl ConsoleSurface {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Surface for ConsoleSurface {
    fn name(&self) -> &str {
        "console"
    }

    async fn deliver(&self, entry: &TranscriptEntry) -> Result<(), ConciergeError> {
        if entry.speaker == Speaker::Bot {
            println!("\n{}", entry.text);
        }
        Ok(())
    }

    async fn typing_started(&self) -> Result<(), ConciergeError> {
        println!("\n…");
        Ok(())
    }
}
