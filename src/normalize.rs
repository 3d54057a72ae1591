//! Stateless text normalizers.
//!
//! Normalizers rewrite raw text before feature extraction so that noise
//! like digits, hashtags or stretched laughter does not fragment the
//! feature space. They hold no mutable state: every normalizer is a plain
//! value the caller constructs and owns, and all of them are `Send + Sync`
//! so one instance can serve concurrent feature extraction.

use fancy_regex::Regex as FancyRegex;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NUMBER: Regex = Regex::new(r"\d+").unwrap();
    static ref HASH_USER: Regex = Regex::new(r"[#@]\S+").unwrap();
    static ref RETWEET: Regex = Regex::new(r"(?i)\b(rt[ :])+").unwrap();
    static ref FACE: Regex = Regex::new(r"(?i)[:;x]-?[()dop]").unwrap();
    // Backreferences are outside the regex crate's grammar, so this one
    // pattern goes through fancy-regex.
    static ref LAUGH: FancyRegex = FancyRegex::new(r"(?i)([hj])+([aieou])+(\1+\2+)+").unwrap();
}

/// Rewrites text into a canonical form prior to feature extraction.
pub trait TextNormalizer: Send + Sync {
    /// The normalized form of `text`.
    fn normalize(&self, text: &str) -> String;

    /// A short stable identifier for logs and diagnostics.
    fn name(&self) -> &str;
}

/// Replaces every run of digits with a single space.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberNormalizer;

impl TextNormalizer for NumberNormalizer {
    fn normalize(&self, text: &str) -> String {
        NUMBER.replace_all(text, " ").into_owned()
    }

    fn name(&self) -> &str {
        "number"
    }
}

/// Strips Twitter-specific noise: hashtags, user mentions, retweet
/// markers and emoticon faces become spaces, and stretched laughter like
/// `hahahahah` collapses to its two-syllable core.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwitterNormalizer;

impl TextNormalizer for TwitterNormalizer {
    fn normalize(&self, text: &str) -> String {
        let text = HASH_USER.replace_all(text, " ");
        let text = RETWEET.replace_all(&text, " ");
        let text = FACE.replace_all(&text, " ");
        LAUGH.replace_all(&text, "${1}${2}${1}${2}").into_owned()
    }

    fn name(&self) -> &str {
        "twitter"
    }
}

/// Applies a chain of normalizers in order.
///
/// # Examples
///
/// ```
/// use tanager::normalize::{AggregateNormalizer, NumberNormalizer, TextNormalizer,
///     TwitterNormalizer};
///
/// let chain = AggregateNormalizer::new(vec![
///     Box::new(TwitterNormalizer),
///     Box::new(NumberNormalizer),
/// ]);
/// assert_eq!(chain.normalize("@user wins 42"), "  wins  ");
/// ```
#[derive(Default)]
pub struct AggregateNormalizer {
    normalizers: Vec<Box<dyn TextNormalizer>>,
}

impl AggregateNormalizer {
    /// Chain `normalizers`, applied first to last.
    pub fn new(normalizers: Vec<Box<dyn TextNormalizer>>) -> Self {
        AggregateNormalizer { normalizers }
    }

    /// Append a normalizer to the end of the chain.
    pub fn push(&mut self, normalizer: Box<dyn TextNormalizer>) {
        self.normalizers.push(normalizer);
    }

    /// Number of normalizers in the chain.
    pub fn len(&self) -> usize {
        self.normalizers.len()
    }

    /// Check whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.normalizers.is_empty()
    }
}

impl TextNormalizer for AggregateNormalizer {
    fn normalize(&self, text: &str) -> String {
        self.normalizers
            .iter()
            .fold(text.to_string(), |text, normalizer| {
                normalizer.normalize(&text)
            })
    }

    fn name(&self) -> &str {
        "aggregate"
    }
}
