//! N-gram language models.

use ahash::AHashMap;

use crate::error::{Result, TanagerError};
use crate::ngram::model::NGramModel;
use crate::ngram::sequence::TokenSequence;
use crate::ngram::utils;

/// Default maximum n-gram order.
pub const DEFAULT_NGRAM_SIZE: usize = 3;

/// A language model over one or more n-gram orders.
///
/// The model layers conditional-probability computation, optional Lidstone
/// smoothing and next-token prediction on top of an [`NGramModel`] frequency
/// table. It is built once through repeated [`add`](NGramLanguageModel::add)
/// calls and then queried read-only; a trained model is immutable and can be
/// shared freely across threads behind an `Arc`.
///
/// # Examples
///
/// ```
/// use tanager::ngram::language_model::NGramLanguageModel;
/// use tanager::ngram::sequence::TokenSequence;
///
/// let mut model = NGramLanguageModel::new(2).unwrap();
/// model.add(&TokenSequence::new(["I", "see", "the", "fox"]), 1, 2).unwrap();
/// model.add(&TokenSequence::new(["the", "red", "house"]), 1, 2).unwrap();
/// model.add(&TokenSequence::new(["I", "saw", "something", "nice"]), 1, 2).unwrap();
///
/// let p = model.calculate_probability(&TokenSequence::new(["I", "saw", "the", "red", "house"]));
/// assert!((0.0..=1.0).contains(&p));
///
/// let next = model.predict_next_tokens(&TokenSequence::new(["I", "saw"])).unwrap();
/// assert_eq!(next, TokenSequence::new(["something"]));
/// ```
#[derive(Debug, Clone)]
pub struct NGramLanguageModel {
    model: NGramModel,
    ngram_size: usize,
    smoothing: f64,
}

impl NGramLanguageModel {
    /// Create an unsmoothed (maximum-likelihood) model of the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if `ngram_size` is 0.
    pub fn new(ngram_size: usize) -> Result<Self> {
        NGramLanguageModel::with_smoothing(ngram_size, 0.0)
    }

    /// Create a model with additive (Lidstone) smoothing constant `k`.
    /// `k = 0` is plain maximum-likelihood estimation.
    ///
    /// # Errors
    ///
    /// Returns an error if `ngram_size` is 0 or `k` is negative or not
    /// finite.
    pub fn with_smoothing(ngram_size: usize, k: f64) -> Result<Self> {
        if ngram_size == 0 {
            return Err(TanagerError::invalid_argument(
                "ngram_size must be at least 1",
            ));
        }
        if !k.is_finite() || k < 0.0 {
            return Err(TanagerError::invalid_argument(format!(
                "smoothing constant must be finite and non-negative, got {k}"
            )));
        }
        Ok(NGramLanguageModel {
            model: NGramModel::new(),
            ngram_size,
            smoothing: k,
        })
    }

    /// The configured maximum n-gram order.
    pub fn ngram_size(&self) -> usize {
        self.ngram_size
    }

    /// The underlying frequency table.
    pub fn model(&self) -> &NGramModel {
        &self.model
    }

    /// Count every window of `sentence` for each length in
    /// `[min_length, max_length]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_length` is 0 or greater than `max_length`.
    pub fn add(
        &mut self,
        sentence: &TokenSequence,
        min_length: usize,
        max_length: usize,
    ) -> Result<()> {
        self.model.add_windows(sentence, min_length, max_length)
    }

    /// Probability of `sample` under the model.
    ///
    /// The sample is scored as the chain-rule product of conditional window
    /// probabilities: each sliding window of size `min(ngram_size,
    /// sample.len())` contributes `count(window) / count(window prefix)`.
    /// For a sample no longer than the model order this reduces to the
    /// conditional probability of the final token given the preceding ones.
    ///
    /// Returns exactly `0.0` — never an error, never NaN — when the model is
    /// empty, the sample is empty, or any window or prefix was never
    /// observed. The result always lies in `[0, 1]`.
    pub fn calculate_probability(&self, sample: &TokenSequence) -> f64 {
        if self.model.is_empty() || sample.is_empty() {
            return 0.0;
        }
        let window_size = self.ngram_size.min(sample.len());
        let mut log_probability = 0.0;
        for window in utils::ngrams(sample, window_size) {
            let p = self.window_probability(&window);
            if p <= 0.0 {
                return 0.0;
            }
            log_probability += p.ln();
        }
        let probability = log_probability.exp();
        if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        }
    }

    /// Conditional probability of the last token of `window` given the
    /// preceding ones, over the stored counts.
    fn window_probability(&self, window: &TokenSequence) -> f64 {
        let count = f64::from(self.model.count(window));
        let prefix_count = if window.len() == 1 {
            self.model.total_count(1) as f64
        } else {
            f64::from(self.model.count(&window.prefix()))
        };

        if self.smoothing > 0.0 {
            let vocabulary = self.model.len() as f64;
            let denominator = prefix_count + self.smoothing * vocabulary;
            if denominator <= 0.0 {
                return 0.0;
            }
            ((count + self.smoothing) / denominator).min(1.0)
        } else if prefix_count <= 0.0 {
            0.0
        } else {
            (count / prefix_count).min(1.0)
        }
    }

    /// Predict the most likely continuation of `context`.
    ///
    /// Among the stored n-grams of the model's configured order whose
    /// `ngram_size - 1` prefix ends with `context` (a context longer than
    /// that is truncated from the left), the final tokens with the highest
    /// continuation frequency are selected. Tied continuations are returned
    /// together, sorted, as one multi-token sequence — ties are never broken
    /// arbitrarily. Returns `None` when no stored n-gram matches.
    pub fn predict_next_tokens(&self, context: &TokenSequence) -> Option<TokenSequence> {
        let window = context.tail(self.ngram_size - 1);

        let mut continuations: AHashMap<&str, u64> = AHashMap::new();
        for (ngram, count) in self.model.iter() {
            if ngram.len() != self.ngram_size {
                continue;
            }
            if !ngram.prefix().ends_with(&window) {
                continue;
            }
            if let Some(last) = ngram.last() {
                *continuations.entry(last).or_insert(0) += u64::from(count);
            }
        }

        let best = continuations.values().copied().max()?;
        let mut tokens: Vec<&str> = continuations
            .iter()
            .filter(|(_, count)| **count == best)
            .map(|(token, _)| *token)
            .collect();
        tokens.sort_unstable();
        Some(TokenSequence::new(tokens))
    }
}

impl Default for NGramLanguageModel {
    fn default() -> Self {
        NGramLanguageModel {
            model: NGramModel::new(),
            ngram_size: DEFAULT_NGRAM_SIZE,
            smoothing: 0.0,
        }
    }
}
