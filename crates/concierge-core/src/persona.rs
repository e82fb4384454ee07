use serde::Serialize;

use crate::error::ConciergeError;
use crate::rule::ResponseTable;

/// One business's complete chatbot configuration.
///
/// Built once at startup and immutable for the life of the process; every
/// session holding it shares the same table.
#[derive(Debug, Clone, Serialize)]
pub struct Persona {
    pub name: String,
    pub avatar: String,
    pub greeting: String,
    /// Reply used when no rule scores above zero. Never empty.
    pub fallback: String,
    pub accent_color: String,
    pub table: ResponseTable,
}

impl Persona {
    /// Assemble a persona, failing fast on an empty fallback.
    ///
    /// Table-level invariants are enforced by [`ResponseTable::new`], so a
    /// `Persona` in hand is always safe to match against.
    pub fn new(
        name: impl Into<String>,
        avatar: impl Into<String>,
        greeting: impl Into<String>,
        fallback: impl Into<String>,
        accent_color: impl Into<String>,
        table: ResponseTable,
    ) -> Result<Self, ConciergeError> {
        let fallback = fallback.into();
        if fallback.trim().is_empty() {
            return Err(ConciergeError::Config(
                "fallback reply must not be empty".into(),
            ));
        }
        Ok(Self {
            name: name.into(),
            avatar: avatar.into(),
            greeting: greeting.into(),
            fallback,
            accent_color: accent_color.into(),
            table,
        })
    }
}
