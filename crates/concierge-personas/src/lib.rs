//! # concierge-personas
//!
//! Built-in persona catalogs for the businesses Concierge ships with, plus
//! the builder that merges caller overrides into a base persona.
//!
//! Rule order inside each table is deliberate: when two rules tie on score
//! the earlier one wins, so higher-priority topics are listed first.

mod chiro_motion;
mod cornerstone;
mod pharmacy;

pub use chiro_motion::chiro_motion;
pub use cornerstone::cornerstone;
pub use pharmacy::pharmacy;

use concierge_core::config::Overrides;
use concierge_core::error::ConciergeError;
use concierge_core::persona::Persona;
use concierge_core::rule::{Reply, ResponseRule, ResponseTable};

/// Accent used by every built-in persona unless overridden.
pub const DEFAULT_ACCENT: &str = "#7c3aed";

/// Names accepted by [`builtin`], in display order.
pub const BUILTIN_NAMES: &[&str] = &["pharmacy", "chiromotion", "cornerstone"];

/// Look up a built-in persona by its short name.
pub fn builtin(name: &str) -> Option<Result<Persona, ConciergeError>> {
    match name {
        "pharmacy" => Some(pharmacy()),
        "chiromotion" => Some(chiro_motion()),
        "cornerstone" => Some(cornerstone()),
        _ => None,
    }
}

/// Merge `overrides` into `base`, shallowly.
///
/// A present override field replaces the base field entirely; `responses`
/// swaps out the whole table (re-validated here) rather than merging rule
/// by rule. Presentation-only fields (`container_id`, `is_floating`) are
/// not persona state and are left for the widget to consume.
pub fn build(base: Persona, overrides: &Overrides) -> Result<Persona, ConciergeError> {
    let table = match &overrides.responses {
        Some(rules) => ResponseTable::new(rules.clone())?,
        None => base.table,
    };
    Persona::new(
        overrides.name.clone().unwrap_or(base.name),
        overrides.avatar.clone().unwrap_or(base.avatar),
        overrides.greeting.clone().unwrap_or(base.greeting),
        overrides.fallback.clone().unwrap_or(base.fallback),
        overrides.accent_color.clone().unwrap_or(base.accent_color),
        table,
    )
}

/// Rule with a single reply; keywords given in the compact `a|b|c` form.
pub(crate) fn rule(keywords: &str, reply: &str) -> ResponseRule {
    ResponseRule::new(split_keywords(keywords), Reply::Single(reply.to_string()))
}

/// Rule with a pool of candidate replies, one drawn at random per match.
pub(crate) fn rule_any(keywords: &str, replies: &[&str]) -> ResponseRule {
    ResponseRule::new(
        split_keywords(keywords),
        Reply::OneOf(replies.iter().map(|r| r.to_string()).collect()),
    )
}

fn split_keywords(keywords: &str) -> Vec<String> {
    keywords.split('|').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_core::engine::select_reply;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    #[test]
    fn test_all_builtins_construct() {
        for name in BUILTIN_NAMES {
            let persona = builtin(name).unwrap().unwrap();
            assert!(!persona.table.is_empty(), "{name} table is empty");
            assert!(!persona.fallback.is_empty());
        }
    }

    #[test]
    fn test_unknown_builtin_is_none() {
        assert!(builtin("bakery").is_none());
    }

    #[test]
    fn test_pharmacy_insurance_outranks_hours_on_tie() {
        // Both rules score 1; insurance is listed first, so it wins.
        let p = pharmacy().unwrap();
        let sel = select_reply(
            "Do you take insurance and what are your hours?",
            &p.table,
            &p.fallback,
            &mut rng(),
        );
        assert_eq!(sel.score, 1);
        assert!(sel.text.contains("insurance plans"), "got: {}", sel.text);
    }

    #[test]
    fn test_pharmacy_greeting_outranks_thanks_on_tie() {
        let p = pharmacy().unwrap();
        let sel = select_reply("hi there, thanks!", &p.table, &p.fallback, &mut rng());
        assert_eq!(sel.score, 1);
        // The greeting rule is listed before the thanks rule; any of its
        // candidate variants is acceptable, the thanks reply is not.
        let greeting_rule = &p.table.rules()[8];
        assert!(greeting_rule.keywords.contains(&"hello".to_string()));
        assert!(greeting_rule
            .reply
            .candidates()
            .contains(&sel.text));
    }

    #[test]
    fn test_no_overlap_returns_fallback_verbatim() {
        let p = cornerstone().unwrap();
        let sel = select_reply("xyzzy plugh", &p.table, &p.fallback, &mut rng());
        assert_eq!(sel.score, 0);
        assert_eq!(sel.text, p.fallback);
    }

    #[test]
    fn test_override_replaces_fields_shallowly() {
        let base = chiro_motion().unwrap();
        let overrides = Overrides {
            name: Some("After-hours Bot".into()),
            fallback: Some("Leave a message!".into()),
            ..Overrides::default()
        };
        let merged = build(base, &overrides).unwrap();
        assert_eq!(merged.name, "After-hours Bot");
        assert_eq!(merged.fallback, "Leave a message!");
        // Untouched fields keep the base values.
        assert_eq!(merged.avatar, "🦴");
    }

    #[test]
    fn test_override_table_is_wholesale_not_merged() {
        let base = pharmacy().unwrap();
        let overrides = Overrides {
            responses: Some(vec![rule("parking", "Lot is behind the building.")]),
            ..Overrides::default()
        };
        let merged = build(base, &overrides).unwrap();
        assert_eq!(merged.table.len(), 1);
    }

    #[test]
    fn test_override_with_empty_table_fails() {
        let base = pharmacy().unwrap();
        let overrides = Overrides {
            responses: Some(Vec::new()),
            ..Overrides::default()
        };
        assert!(build(base, &overrides).is_err());
    }
}
