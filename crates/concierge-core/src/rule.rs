use serde::{Deserialize, Serialize};

use crate::error::ConciergeError;

/// The reply side of a rule: a fixed string, or a pool of candidates from
/// which one is drawn uniformly at random each time the rule wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reply {
    Single(String),
    OneOf(Vec<String>),
}

impl Reply {
    /// All candidate strings this reply can resolve to.
    pub fn candidates(&self) -> &[String] {
        match self {
            Reply::Single(s) => std::slice::from_ref(s),
            Reply::OneOf(pool) => pool,
        }
    }
}

/// One keyword-group-to-reply mapping entry.
///
/// Keywords are OR'd trigger phrases matched as plain substrings of the
/// normalized input — no word-boundary logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseRule {
    pub keywords: Vec<String>,
    pub reply: Reply,
}

impl ResponseRule {
    pub fn new(keywords: Vec<String>, reply: Reply) -> Self {
        Self { keywords, reply }
    }
}

/// An ordered sequence of rules.
///
/// Order is load-bearing: when two rules score the same, the earlier one
/// wins, so table order encodes priority.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ResponseTable(Vec<ResponseRule>);

impl ResponseTable {
    /// Validate and normalize a rule list into a table.
    ///
    /// Phrases are lowercased and trimmed here, once, so the match loop can
    /// do plain substring containment. Fails fast on an empty table, an
    /// empty keyword group, a phrase that is empty after trimming, or a
    /// reply with no candidates.
    pub fn new(rules: Vec<ResponseRule>) -> Result<Self, ConciergeError> {
        if rules.is_empty() {
            return Err(ConciergeError::Config(
                "response table must contain at least one rule".into(),
            ));
        }

        let mut normalized = Vec::with_capacity(rules.len());
        for (i, rule) in rules.into_iter().enumerate() {
            if rule.keywords.is_empty() {
                return Err(ConciergeError::Config(format!(
                    "rule #{i} has an empty keyword group"
                )));
            }
            let mut keywords = Vec::with_capacity(rule.keywords.len());
            for phrase in &rule.keywords {
                let phrase = phrase.trim().to_lowercase();
                if phrase.is_empty() {
                    return Err(ConciergeError::Config(format!(
                        "rule #{i} contains an empty keyword phrase"
                    )));
                }
                keywords.push(phrase);
            }
            if rule.reply.candidates().is_empty() {
                return Err(ConciergeError::Config(format!(
                    "rule #{i} has no reply candidates"
                )));
            }
            normalized.push(ResponseRule {
                keywords,
                reply: rule.reply,
            });
        }

        Ok(Self(normalized))
    }

    pub fn rules(&self) -> &[ResponseRule] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
