//! Character n-gram feature extraction for language detection.

use crate::classify::ContextGenerator;
use crate::ngram::NGramModel;
use crate::normalize::{AggregateNormalizer, NumberNormalizer, TextNormalizer, TwitterNormalizer};

const DEFAULT_MIN_LENGTH: usize = 1;
const DEFAULT_MAX_LENGTH: usize = 3;

/// Turns a document into its distinct character n-grams.
///
/// The document first passes through a normalizer chain, then every
/// grapheme-cluster n-gram with a length in `[min_length, max_length]`
/// becomes one feature. Features are deduplicated and sorted so the same
/// document always yields the same context, whatever hashing happened
/// underneath.
///
/// # Examples
///
/// ```
/// use tanager::classify::ContextGenerator;
/// use tanager::langdetect::context::CharNgramContextGenerator;
///
/// let generator = CharNgramContextGenerator::default();
/// let context = generator.context("aa");
/// assert_eq!(context, vec!["a".to_string(), "aa".to_string()]);
/// ```
pub struct CharNgramContextGenerator {
    min_length: usize,
    max_length: usize,
    normalizer: AggregateNormalizer,
}

impl CharNgramContextGenerator {
    /// Extract n-grams of lengths `[min_length, max_length]` after running
    /// `normalizer` over the document.
    pub fn new(min_length: usize, max_length: usize, normalizer: AggregateNormalizer) -> Self {
        CharNgramContextGenerator {
            min_length,
            max_length,
            normalizer,
        }
    }
}

impl Default for CharNgramContextGenerator {
    /// Unigrams through trigrams over Twitter- and digit-normalized text.
    fn default() -> Self {
        CharNgramContextGenerator::new(
            DEFAULT_MIN_LENGTH,
            DEFAULT_MAX_LENGTH,
            AggregateNormalizer::new(vec![
                Box::new(TwitterNormalizer),
                Box::new(NumberNormalizer),
            ]),
        )
    }
}

impl ContextGenerator for CharNgramContextGenerator {
    fn context(&self, input: &str) -> Vec<String> {
        let normalized = self.normalizer.normalize(input);
        let mut model = NGramModel::new();
        // min > max cannot happen for a constructed generator with sane
        // lengths; a degenerate range just yields no features.
        if model
            .add_text(&normalized, self.min_length, self.max_length)
            .is_err()
        {
            return Vec::new();
        }
        let mut features: Vec<String> = model
            .iter()
            .filter_map(|(ngram, _)| ngram.first().map(str::to_string))
            .collect();
        features.sort_unstable();
        features
    }
}
