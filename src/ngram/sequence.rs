//! Ordered token sequences.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An immutable ordered sequence of string tokens.
///
/// Equality and hashing are by content, never by identity, so sequences can
/// be used directly as frequency-table keys. A sentence, an n-gram window
/// and a prediction context are all `TokenSequence`s.
///
/// # Examples
///
/// ```
/// use tanager::ngram::sequence::TokenSequence;
///
/// let sentence = TokenSequence::new(["I", "saw", "the", "fox"]);
/// assert_eq!(sentence.len(), 4);
/// assert_eq!(sentence.first(), Some("I"));
/// assert_eq!(sentence.last(), Some("fox"));
/// assert_eq!(sentence.to_string(), "I saw the fox");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenSequence {
    tokens: Vec<String>,
}

impl TokenSequence {
    /// Create a sequence from anything yielding string-like tokens.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TokenSequence {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of tokens in the sequence.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check whether the sequence has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// The first token, if any.
    pub fn first(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    /// The last token, if any.
    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    /// The tokens as a slice.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Iterate over the tokens as string slices.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// The sequence without its last token. An empty sequence stays empty.
    pub fn prefix(&self) -> TokenSequence {
        let end = self.tokens.len().saturating_sub(1);
        TokenSequence {
            tokens: self.tokens[..end].to_vec(),
        }
    }

    /// The last `n` tokens (the whole sequence when it is shorter).
    pub fn tail(&self, n: usize) -> TokenSequence {
        let start = self.tokens.len().saturating_sub(n);
        TokenSequence {
            tokens: self.tokens[start..].to_vec(),
        }
    }

    /// Check whether the sequence ends with the tokens of `suffix`.
    pub fn ends_with(&self, suffix: &TokenSequence) -> bool {
        self.tokens
            .len()
            .checked_sub(suffix.tokens.len())
            .is_some_and(|start| self.tokens[start..] == suffix.tokens[..])
    }
}

impl From<Vec<String>> for TokenSequence {
    fn from(tokens: Vec<String>) -> Self {
        TokenSequence { tokens }
    }
}

impl From<&[String]> for TokenSequence {
    fn from(tokens: &[String]) -> Self {
        TokenSequence {
            tokens: tokens.to_vec(),
        }
    }
}

impl FromIterator<String> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        TokenSequence {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_content_equality_and_hashing() {
        let a = TokenSequence::new(["the", "fox"]);
        let b = TokenSequence::new(["the".to_string(), "fox".to_string()]);
        assert_eq!(a, b);

        let mut counts = HashMap::new();
        counts.insert(a, 1u32);
        *counts.entry(b).or_insert(0) += 1;
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[&TokenSequence::new(["the", "fox"])], 2);
    }

    #[test]
    fn test_prefix_and_tail() {
        let seq = TokenSequence::new(["a", "b", "c"]);
        assert_eq!(seq.prefix(), TokenSequence::new(["a", "b"]));
        assert_eq!(seq.tail(2), TokenSequence::new(["b", "c"]));
        assert_eq!(seq.tail(9), seq);
        assert!(TokenSequence::default().prefix().is_empty());
    }

    #[test]
    fn test_ends_with() {
        let seq = TokenSequence::new(["a", "b", "c"]);
        assert!(seq.ends_with(&TokenSequence::new(["b", "c"])));
        assert!(seq.ends_with(&TokenSequence::default()));
        assert!(!seq.ends_with(&TokenSequence::new(["a", "c"])));
        assert!(!TokenSequence::default().ends_with(&seq));
    }

    #[test]
    fn test_display_joins_with_spaces() {
        let seq = TokenSequence::new(["green", "eggs", "and", "ham"]);
        assert_eq!(format!("{seq}"), "green eggs and ham");
    }
}
