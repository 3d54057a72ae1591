//! Mutable n-gram frequency tables.

use ahash::AHashMap;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{Result, TanagerError};
use crate::ngram::sequence::TokenSequence;

/// A frequency table mapping n-grams to occurrence counts.
///
/// Counts only grow: [`add`](NGramModel::add) inserts at 1 and increments
/// thereafter, and no entry is ever removed. Adding the same sentence twice
/// therefore doubles every count derived from it.
///
/// The table holds n-grams of any length side by side; per-length running
/// totals are kept so that unigram denominators do not require a scan.
///
/// # Examples
///
/// ```
/// use tanager::ngram::model::NGramModel;
/// use tanager::ngram::sequence::TokenSequence;
///
/// let mut model = NGramModel::new();
/// model
///     .add_windows(&TokenSequence::new(["the", "red", "house"]), 1, 2)
///     .unwrap();
///
/// assert_eq!(model.count(&TokenSequence::new(["the", "red"])), 1);
/// assert_eq!(model.count(&TokenSequence::new(["red", "blue"])), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NGramModel {
    counts: AHashMap<TokenSequence, u32>,
    length_totals: AHashMap<usize, u64>,
}

impl NGramModel {
    /// Create a new empty model.
    pub fn new() -> Self {
        NGramModel::default()
    }

    /// Record one occurrence of `ngram`, inserting it at count 1 if new.
    pub fn add(&mut self, ngram: TokenSequence) {
        *self.length_totals.entry(ngram.len()).or_insert(0) += 1;
        *self.counts.entry(ngram).or_insert(0) += 1;
    }

    /// Record every contiguous window of `sentence` for each window length
    /// in `[min_length, max_length]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_length` is 0 or greater than `max_length`.
    pub fn add_windows(
        &mut self,
        sentence: &TokenSequence,
        min_length: usize,
        max_length: usize,
    ) -> Result<()> {
        validate_length_range(min_length, max_length)?;
        for n in min_length..=max_length {
            for window in sentence.tokens().windows(n) {
                self.add(TokenSequence::from(window));
            }
        }
        Ok(())
    }

    /// Record character (grapheme cluster) n-grams of `text` for each length
    /// in `[min_length, max_length]`. Every gram is stored as a single-token
    /// sequence, ready to serve as a classifier feature label.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_length` is 0 or greater than `max_length`.
    pub fn add_text(&mut self, text: &str, min_length: usize, max_length: usize) -> Result<()> {
        validate_length_range(min_length, max_length)?;
        let graphemes: Vec<&str> = text.graphemes(true).collect();
        for n in min_length..=max_length {
            for window in graphemes.windows(n) {
                self.add(TokenSequence::new([window.concat()]));
            }
        }
        Ok(())
    }

    /// The occurrence count of `ngram`, 0 when absent.
    pub fn count(&self, ngram: &TokenSequence) -> u32 {
        self.counts.get(ngram).copied().unwrap_or(0)
    }

    /// Check whether `ngram` has been recorded at least once.
    pub fn contains(&self, ngram: &TokenSequence) -> bool {
        self.counts.contains_key(ngram)
    }

    /// Number of distinct stored n-grams.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether the model holds no n-grams.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of the counts of all stored n-grams of the given window length.
    pub fn total_count(&self, length: usize) -> u64 {
        self.length_totals.get(&length).copied().unwrap_or(0)
    }

    /// Iterate over each distinct stored n-gram exactly once with its count.
    /// Iteration order carries no meaning.
    pub fn iter(&self) -> impl Iterator<Item = (&TokenSequence, u32)> {
        self.counts.iter().map(|(ngram, count)| (ngram, *count))
    }
}

fn validate_length_range(min_length: usize, max_length: usize) -> Result<()> {
    if min_length == 0 {
        return Err(TanagerError::invalid_argument(
            "min_length must be at least 1",
        ));
    }
    if min_length > max_length {
        return Err(TanagerError::invalid_argument(format!(
            "min_length ({min_length}) must not be greater than max_length ({max_length})"
        )));
    }
    Ok(())
}
