use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use concierge_core::engine::{delivery_delay, select_reply};
use concierge_core::error::ConciergeError;
use concierge_core::persona::Persona;
use concierge_core::traits::Surface;
use concierge_core::transcript::TranscriptEntry;

/// How the widget is mounted on the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mount {
    /// Floating launcher button in a page corner.
    Floating,
    /// Rendered inside an existing host element.
    Embedded { container_id: String },
}

impl Mount {
    /// Delay before the automatic greeting once the widget is opened.
    /// The floating launcher waits a beat longer so the greeting lands
    /// after the open animation.
    pub fn greeting_delay(&self) -> Duration {
        match self {
            Mount::Floating => Duration::from_millis(1500),
            Mount::Embedded { .. } => Duration::from_millis(800),
        }
    }
}

/// One live chat session bound to a persona and an output surface.
///
/// The session is the sole mutator of its transcript and open flag; the
/// engine it calls is a pure function of the persona's table. Delivery
/// timers are independent one-shots — a second rapid [`submit`] may overlap
/// a still-pending earlier delivery, which is accepted behavior.
///
/// [`submit`]: ChatWidget::submit
pub struct ChatWidget {
    persona: Arc<Persona>,
    surface: Arc<dyn Surface>,
    mount: Mount,
    transcript: Arc<Mutex<Vec<TranscriptEntry>>>,
    rng: Mutex<StdRng>,
    is_open: AtomicBool,
    greeted: AtomicBool,
}

impl ChatWidget {
    pub fn new(persona: Persona, surface: Arc<dyn Surface>, mount: Mount) -> Self {
        Self::with_rng_seed(persona, surface, mount, rand::random())
    }

    /// Like [`new`], but with a fixed RNG seed so multi-candidate reply
    /// selection is deterministic. Used by tests.
    ///
    /// [`new`]: ChatWidget::new
    pub fn with_rng_seed(
        persona: Persona,
        surface: Arc<dyn Surface>,
        mount: Mount,
        seed: u64,
    ) -> Self {
        Self {
            persona: Arc::new(persona),
            surface,
            mount,
            transcript: Arc::new(Mutex::new(Vec::new())),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            is_open: AtomicBool::new(false),
            greeted: AtomicBool::new(false),
        }
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    pub fn mount(&self) -> &Mount {
        &self.mount
    }

    pub fn is_open(&self) -> bool {
        self.is_open.load(Ordering::Relaxed)
    }

    /// Open the panel. The first open schedules the persona greeting after
    /// the mount's greeting delay; reopening never greets again.
    pub fn open(&self) {
        self.is_open.store(true, Ordering::Relaxed);
        if !self.greeted.swap(true, Ordering::Relaxed) {
            self.schedule(
                self.persona.greeting.clone(),
                self.mount.greeting_delay(),
                false,
            );
        }
    }

    pub fn close(&self) {
        self.is_open.store(false, Ordering::Relaxed);
    }

    /// Snapshot of the append-only transcript.
    pub async fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.lock().await.clone()
    }

    /// Handle one user-submitted message.
    ///
    /// The user entry is appended and shown immediately; the bot reply is
    /// appended only after its typing delay elapses. Blank input is ignored,
    /// matching the send button's behavior.
    pub async fn submit(&self, text: &str) -> Result<(), ConciergeError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }

        let user_entry = TranscriptEntry::user(text);
        self.transcript.lock().await.push(user_entry.clone());
        self.surface.deliver(&user_entry).await?;

        let selection = {
            let mut rng = self.rng.lock().await;
            select_reply(text, &self.persona.table, &self.persona.fallback, &mut *rng)
        };
        debug!(score = selection.score, "selected reply");

        self.surface.typing_started().await?;
        let delay = delivery_delay(&selection.text);
        self.schedule(selection.text, delay, true);
        Ok(())
    }

    /// Spawn a one-shot delivery timer. Timers are never coalesced or
    /// cancelled; each pending reply lands on its own schedule.
    fn schedule(&self, text: String, delay: Duration, clear_typing: bool) {
        let surface = Arc::clone(&self.surface);
        let transcript = Arc::clone(&self.transcript);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if clear_typing {
                if let Err(e) = surface.typing_stopped().await {
                    warn!("surface error while clearing typing indicator: {e}");
                }
            }
            let entry = TranscriptEntry::bot(text);
            transcript.lock().await.push(entry.clone());
            if let Err(e) = surface.deliver(&entry).await {
                warn!("surface error while delivering reply: {e}");
            }
        });
    }
}
