//! Keyword-overlap matching engine.
//!
//! Pure with respect to the table: scoring never mutates anything, so the
//! same `ResponseTable` can back any number of concurrent sessions. The only
//! side effect is drawing from the caller's RNG when a winning rule has more
//! than one candidate reply.

use std::time::Duration;

use rand::Rng;

use crate::rule::{Reply, ResponseTable};

/// Floor of the simulated typing delay.
pub const MIN_DELAY_MS: u64 = 800;
/// Ceiling of the simulated typing delay.
pub const MAX_DELAY_MS: u64 = 2500;
/// Added latency per character of reply text.
pub const MS_PER_CHAR: u64 = 15;

/// Result of matching one user message against a response table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The resolved reply text (a rule's reply, or the fallback).
    pub text: String,
    /// How many of the winning rule's phrases the input contained.
    /// Zero means no rule matched and `text` is the fallback.
    pub score: usize,
}

/// Pick the best reply for `input` from `table`, or `fallback` if nothing
/// scores above zero.
///
/// A rule's score is the number of its phrases contained in the lowercased
/// input as substrings. Ties go to the earlier rule: only a strictly greater
/// score displaces the current best. When the winning rule carries several
/// candidate replies, one is drawn uniformly from `rng`, re-rolled on every
/// call.
pub fn select_reply<R: Rng + ?Sized>(
    input: &str,
    table: &ResponseTable,
    fallback: &str,
    rng: &mut R,
) -> Selection {
    let normalized = input.to_lowercase();

    let mut best_score = 0;
    let mut best_reply: Option<&Reply> = None;

    for rule in table.rules() {
        let score = rule
            .keywords
            .iter()
            .filter(|phrase| normalized.contains(phrase.as_str()))
            .count();
        if score > best_score {
            best_score = score;
            best_reply = Some(&rule.reply);
        }
    }

    match best_reply {
        Some(reply) => Selection {
            text: resolve(reply, rng),
            score: best_score,
        },
        None => Selection {
            text: fallback.to_string(),
            score: 0,
        },
    }
}

/// How long to pretend to type before delivering `reply`.
///
/// `800ms + 15ms` per character, clamped to `[800, 2500]`. Length counts
/// Unicode scalar values, not bytes, so emoji don't inflate the delay.
pub fn delivery_delay(reply: &str) -> Duration {
    let ms = MIN_DELAY_MS + MS_PER_CHAR * reply.chars().count() as u64;
    Duration::from_millis(ms.clamp(MIN_DELAY_MS, MAX_DELAY_MS))
}

fn resolve<R: Rng + ?Sized>(reply: &Reply, rng: &mut R) -> String {
    match reply {
        Reply::Single(text) => text.clone(),
        // Pools are validated non-empty at table construction.
        Reply::OneOf(pool) => pool[rng.gen_range(0..pool.len())].clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::ResponseRule;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rule(keywords: &[&str], reply: &str) -> ResponseRule {
        ResponseRule::new(
            keywords.iter().map(|k| k.to_string()).collect(),
            Reply::Single(reply.to_string()),
        )
    }

    fn table(rules: Vec<ResponseRule>) -> ResponseTable {
        ResponseTable::new(rules).unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_no_overlap_returns_fallback_verbatim() {
        let t = table(vec![rule(&["hours", "open"], "9 to 5")]);
        let sel = select_reply("xyzzy plugh", &t, "call us!", &mut rng());
        assert_eq!(sel.text, "call us!");
        assert_eq!(sel.score, 0);
    }

    #[test]
    fn test_empty_input_returns_fallback() {
        let t = table(vec![rule(&["hours"], "9 to 5")]);
        let sel = select_reply("", &t, "call us!", &mut rng());
        assert_eq!(sel.score, 0);
        assert_eq!(sel.text, "call us!");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let t = table(vec![rule(&["refill"], "sure thing")]);
        let sel = select_reply("REFILL please", &t, "?", &mut rng());
        assert_eq!(sel.text, "sure thing");
        assert_eq!(sel.score, 1);
    }

    #[test]
    fn test_substring_containment_not_word_boundary() {
        // "open" matches inside "reopening" — phrases are substring patterns.
        let t = table(vec![rule(&["open"], "we're open")]);
        let sel = select_reply("when are you reopening?", &t, "?", &mut rng());
        assert_eq!(sel.text, "we're open");
    }

    #[test]
    fn test_equal_scores_earlier_rule_wins() {
        let t = table(vec![
            rule(&["insurance", "coverage", "copay"], "we take insurance"),
            rule(&["hours", "open", "close", "time"], "9 to 5"),
        ]);
        let sel = select_reply(
            "Do you take insurance and what are your hours?",
            &t,
            "?",
            &mut rng(),
        );
        assert_eq!(sel.text, "we take insurance");
        assert_eq!(sel.score, 1);
    }

    #[test]
    fn test_strictly_higher_later_score_wins() {
        let t = table(vec![
            rule(&["pain"], "generic pain reply"),
            rule(&["back", "neck"], "spine reply"),
        ]);
        // Second rule scores 2, first scores 0.
        let sel = select_reply("my back and neck", &t, "?", &mut rng());
        assert_eq!(sel.text, "spine reply");
        assert_eq!(sel.score, 2);
    }

    #[test]
    fn test_later_equal_score_never_displaces() {
        let t = table(vec![
            rule(&["hello", "hi"], "greeting reply"),
            rule(&["thanks", "thank you"], "thanks reply"),
        ]);
        let sel = select_reply("hi there, thanks!", &t, "?", &mut rng());
        assert_eq!(sel.score, 1);
        assert_eq!(sel.text, "greeting reply");
    }

    #[test]
    fn test_multi_candidate_reply_membership() {
        let pool = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        let t = table(vec![ResponseRule::new(
            vec!["hi".into()],
            Reply::OneOf(pool.clone()),
        )]);
        let mut rng = rng();
        for _ in 0..50 {
            let sel = select_reply("hi", &t, "?", &mut rng);
            assert!(pool.contains(&sel.text));
        }
    }

    #[test]
    fn test_seeded_rng_makes_selection_deterministic() {
        let t = table(vec![ResponseRule::new(
            vec!["hi".into()],
            Reply::OneOf(vec!["a".into(), "b".into(), "c".into()]),
        )]);
        let a = select_reply("hi", &t, "?", &mut StdRng::seed_from_u64(7));
        let b = select_reply("hi", &t, "?", &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_delay_bounds() {
        assert_eq!(delivery_delay(""), Duration::from_millis(800));
        assert_eq!(delivery_delay("abcd"), Duration::from_millis(860));
        let long = "x".repeat(500);
        assert_eq!(delivery_delay(&long), Duration::from_millis(2500));
    }

    #[test]
    fn test_delay_monotone_in_length() {
        let mut prev = Duration::ZERO;
        for n in 0..300 {
            let d = delivery_delay(&"y".repeat(n));
            assert!(d >= prev);
            assert!(d >= Duration::from_millis(800));
            assert!(d <= Duration::from_millis(2500));
            prev = d;
        }
    }
}
