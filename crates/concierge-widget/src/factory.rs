//! Pre-configured chatbot factories, one per business.

use std::sync::Arc;

use concierge_core::config::Overrides;
use concierge_core::error::ConciergeError;
use concierge_core::persona::Persona;
use concierge_core::traits::Surface;

use crate::session::{ChatWidget, Mount};

/// Alex's Family Pharmacy assistant.
pub fn pharmacy_chatbot(
    surface: Arc<dyn Surface>,
    overrides: &Overrides,
) -> Result<ChatWidget, ConciergeError> {
    from_base(concierge_personas::pharmacy()?, surface, overrides)
}

/// ChiroMotion booking assistant.
pub fn chiro_motion_chatbot(
    surface: Arc<dyn Surface>,
    overrides: &Overrides,
) -> Result<ChatWidget, ConciergeError> {
    from_base(concierge_personas::chiro_motion()?, surface, overrides)
}

/// Cornerstone Chiropractic assistant.
pub fn cornerstone_chatbot(
    surface: Arc<dyn Surface>,
    overrides: &Overrides,
) -> Result<ChatWidget, ConciergeError> {
    from_base(concierge_personas::cornerstone()?, surface, overrides)
}

/// Build a widget for any built-in persona by short name.
pub fn chatbot(
    name: &str,
    surface: Arc<dyn Surface>,
    overrides: &Overrides,
) -> Result<ChatWidget, ConciergeError> {
    let base = concierge_personas::builtin(name)
        .ok_or_else(|| ConciergeError::Config(format!("unknown persona '{name}'")))??;
    from_base(base, surface, overrides)
}

fn from_base(
    base: Persona,
    surface: Arc<dyn Surface>,
    overrides: &Overrides,
) -> Result<ChatWidget, ConciergeError> {
    let persona = concierge_personas::build(base, overrides)?;
    let mount = mount_from(overrides)?;
    Ok(ChatWidget::new(persona, surface, mount))
}

/// Floating unless explicitly turned off, matching the original widget's
/// `isFloating !== false` default. A non-floating widget needs somewhere
/// to live, so the embedded mount requires a container id.
fn mount_from(overrides: &Overrides) -> Result<Mount, ConciergeError> {
    if overrides.is_floating.unwrap_or(true) {
        return Ok(Mount::Floating);
    }
    match &overrides.container_id {
        Some(id) => Ok(Mount::Embedded {
            container_id: id.clone(),
        }),
        None => Err(ConciergeError::Config(
            "embedded widget requires container_id".into(),
        )),
    }
}
