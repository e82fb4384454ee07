use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::ConciergeError;
use crate::rule::ResponseRule;

/// Caller-supplied overrides for a built-in persona.
///
/// Shallow merge semantics: a field that is present replaces the base
/// persona's field entirely. `responses` in particular is wholesale — it is
/// never deep-merged with the built-in table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Overrides {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub greeting: Option<String>,
    /// Replacement rule list; validated when the persona is rebuilt.
    pub responses: Option<Vec<ResponseRule>>,
    pub fallback: Option<String>,
    pub accent_color: Option<String>,
    /// Host element to embed into. `None` with `is_floating` unset or true
    /// means the floating launcher-button layout.
    pub container_id: Option<String>,
    pub is_floating: Option<bool>,
}

/// Load persona overrides from a TOML file.
///
/// A missing file is not an error — the built-in persona is used as-is.
pub fn load(path: &str) -> Result<Overrides, ConciergeError> {
    let path = Path::new(path);
    if !path.exists() {
        info!(
            "override file not found at {}, using built-in persona",
            path.display()
        );
        return Ok(Overrides::default());
    }

    let content = std::fs::read_to_string(path)?;
    let overrides: Overrides = toml::from_str(&content)?;
    info!("loaded persona overrides from {}", path.display());
    Ok(overrides)
}
