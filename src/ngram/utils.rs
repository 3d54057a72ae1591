//! Stateless maximum-likelihood probability functions over a corpus.
//!
//! These functions count directly over a corpus (a slice of sentences) on
//! every call; nothing is cached. They are the reference semantics that
//! [`NGramLanguageModel`](crate::ngram::language_model::NGramLanguageModel)
//! reproduces over its pre-counted frequency table.
//!
//! Division-by-zero cases resolve deterministically to `0.0` — an unseen
//! prefix is evidence, not an error.

use crate::ngram::sequence::TokenSequence;

/// All contiguous windows of length `n` from `sequence`.
///
/// Yields exactly `max(0, sequence.len() - n + 1)` windows; a sequence
/// shorter than `n` (or `n == 0`) yields none.
///
/// # Examples
///
/// ```
/// use tanager::ngram::sequence::TokenSequence;
/// use tanager::ngram::utils::ngrams;
///
/// let sentence = TokenSequence::new(["I", "saw", "brown", "fox"]);
/// assert_eq!(ngrams(&sentence, 2).len(), 3);
/// assert_eq!(ngrams(&sentence, 3).len(), 2);
/// assert_eq!(ngrams(&sentence, 5).len(), 0);
/// ```
pub fn ngrams(sequence: &TokenSequence, n: usize) -> Vec<TokenSequence> {
    if n == 0 {
        return Vec::new();
    }
    sequence
        .tokens()
        .windows(n)
        .map(TokenSequence::from)
        .collect()
}

/// Count the contiguous occurrences of `tokens` anywhere in the corpus.
fn count_occurrences(tokens: &[String], corpus: &[TokenSequence]) -> usize {
    if tokens.is_empty() {
        return 0;
    }
    corpus
        .iter()
        .filter(|sentence| sentence.len() >= tokens.len())
        .map(|sentence| {
            sentence
                .tokens()
                .windows(tokens.len())
                .filter(|window| *window == tokens)
                .count()
        })
        .sum()
}

/// Maximum-likelihood unigram probability: `count(word) / total tokens`.
pub fn unigram_ml_probability(word: &str, corpus: &[TokenSequence]) -> f64 {
    let total: usize = corpus.iter().map(TokenSequence::len).sum();
    if total == 0 {
        return 0.0;
    }
    let count = corpus
        .iter()
        .flat_map(TokenSequence::iter)
        .filter(|token| *token == word)
        .count();
    count as f64 / total as f64
}

/// Maximum-likelihood bigram probability of `w2` following `w1`.
///
/// The denominator counts the occurrences of `w1` that have any successor;
/// the result is `0.0` when `w1` never precedes another token.
pub fn bigram_ml_probability(w1: &str, w2: &str, corpus: &[TokenSequence]) -> f64 {
    let mut followed = 0usize;
    let mut joint = 0usize;
    for sentence in corpus {
        let tokens = sentence.tokens();
        for pair in tokens.windows(2) {
            if pair[0] == w1 {
                followed += 1;
                if pair[1] == w2 {
                    joint += 1;
                }
            }
        }
    }
    if followed == 0 {
        0.0
    } else {
        joint as f64 / followed as f64
    }
}

/// Maximum-likelihood probability of the full `ngram` given its prefix:
/// `occurrences(ngram) / occurrences(ngram minus its last token)`.
///
/// Returns `0.0` (never an error) when the prefix does not occur. A
/// single-token sequence falls back to [`unigram_ml_probability`].
pub fn ngram_ml_probability(ngram: &TokenSequence, corpus: &[TokenSequence]) -> f64 {
    match ngram.len() {
        0 => 0.0,
        1 => unigram_ml_probability(ngram.first().unwrap_or_default(), corpus),
        _ => {
            let prefix = ngram.prefix();
            let prefix_count = count_occurrences(prefix.tokens(), corpus);
            if prefix_count == 0 {
                return 0.0;
            }
            count_occurrences(ngram.tokens(), corpus) as f64 / prefix_count as f64
        }
    }
}

/// Trigram specialization of [`ngram_ml_probability`].
pub fn trigram_ml_probability(w1: &str, w2: &str, w3: &str, corpus: &[TokenSequence]) -> f64 {
    ngram_ml_probability(&TokenSequence::new([w1, w2, w3]), corpus)
}

/// Linear interpolation of unigram, bigram and trigram ML estimates:
/// `l1*P(w3) + l2*P(w3|w2) + l3*P(w3|w1,w2)`.
///
/// The weights are caller-supplied and are deliberately not checked for
/// summing to 1.
pub fn trigram_linear_interpolation_probability(
    w1: &str,
    w2: &str,
    w3: &str,
    corpus: &[TokenSequence],
    l1: f64,
    l2: f64,
    l3: f64,
) -> f64 {
    l1 * unigram_ml_probability(w3, corpus)
        + l2 * bigram_ml_probability(w2, w3, corpus)
        + l3 * trigram_ml_probability(w1, w2, w3, corpus)
}
