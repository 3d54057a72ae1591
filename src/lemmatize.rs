//! Lemmatization samples and evaluation.
//!
//! A second consumer of the evaluation framework, scoring at the word
//! level where [`langdetect`](crate::langdetect) scores whole documents.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TanagerError};
use crate::eval::{FMeasure, Mean, SampleProcessor};

/// One sentence with its part-of-speech tags and gold lemmas.
///
/// The three sequences are parallel: token `i` carries tag `i` and lemma
/// `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmaSample {
    tokens: Vec<String>,
    tags: Vec<String>,
    lemmas: Vec<String>,
}

impl LemmaSample {
    /// Create a sample from parallel token, tag and lemma sequences.
    ///
    /// # Errors
    ///
    /// Returns an error when the three sequences differ in length.
    pub fn new<I, S>(tokens: I, tags: I, lemmas: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        let lemmas: Vec<String> = lemmas.into_iter().map(Into::into).collect();
        if tokens.len() != tags.len() || tokens.len() != lemmas.len() {
            return Err(TanagerError::invalid_argument(format!(
                "tokens ({}), tags ({}) and lemmas ({}) must have the same length",
                tokens.len(),
                tags.len(),
                lemmas.len()
            )));
        }
        Ok(LemmaSample {
            tokens,
            tags,
            lemmas,
        })
    }

    /// The sentence tokens.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The part-of-speech tag of each token.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The gold lemma of each token.
    pub fn lemmas(&self) -> &[String] {
        &self.lemmas
    }

    /// Number of words in the sentence.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check whether the sentence is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for LemmaSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.tokens.len() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}\t{}\t{}", self.tokens[i], self.tags[i], self.lemmas[i])?;
        }
        Ok(())
    }
}

/// Maps tokens and their part-of-speech tags to lemmas.
pub trait Lemmatizer: Send + Sync {
    /// The lemma of each token, parallel to the input.
    fn lemmatize(&self, tokens: &[String], tags: &[String]) -> Vec<String>;
}

/// Measures a [`Lemmatizer`] against gold samples, word by word.
///
/// Plug it into [`Evaluator`](crate::eval::evaluator::Evaluator) as its
/// processor; word accuracy accumulates into a [`Mean`] and the predicted
/// lemma sequences into an [`FMeasure`].
pub struct LemmatizerEvaluator<'a> {
    lemmatizer: &'a dyn Lemmatizer,
    fmeasure: FMeasure,
    word_accuracy: Mean,
}

impl<'a> LemmatizerEvaluator<'a> {
    /// Evaluate `lemmatizer`.
    pub fn new(lemmatizer: &'a dyn Lemmatizer) -> Self {
        LemmatizerEvaluator {
            lemmatizer,
            fmeasure: FMeasure::new(),
            word_accuracy: Mean::new(),
        }
    }

    /// Precision/recall scores accumulated so far.
    pub fn fmeasure(&self) -> &FMeasure {
        &self.fmeasure
    }

    /// Fraction of words lemmatized correctly.
    pub fn word_accuracy(&self) -> f64 {
        self.word_accuracy.value()
    }

    /// Number of words evaluated.
    pub fn word_count(&self) -> u64 {
        self.word_accuracy.count()
    }
}

impl SampleProcessor<LemmaSample> for LemmatizerEvaluator<'_> {
    fn process_sample(&mut self, reference: &LemmaSample) -> Result<LemmaSample> {
        let predicted = self
            .lemmatizer
            .lemmatize(reference.tokens(), reference.tags());

        for (gold, lemma) in reference.lemmas().iter().zip(&predicted) {
            self.word_accuracy.add(if gold == lemma { 1.0 } else { 0.0 });
        }
        self.fmeasure.update_scores(reference.lemmas(), &predicted);

        LemmaSample::new(
            reference.tokens().to_vec(),
            reference.tags().to_vec(),
            predicted,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Evaluator;
    use crate::stream::object_stream;

    struct IdentityLemmatizer;

    impl Lemmatizer for IdentityLemmatizer {
        fn lemmatize(&self, tokens: &[String], _tags: &[String]) -> Vec<String> {
            tokens.to_vec()
        }
    }

    fn sample() -> LemmaSample {
        LemmaSample::new(
            vec!["Rockwell", "said", "agreements"],
            vec!["NNP", "VBD", "NNS"],
            vec!["rockwell", "say", "agreement"],
        )
        .unwrap()
    }

    #[test]
    fn test_sample_rejects_ragged_sequences() {
        assert!(LemmaSample::new(vec!["a", "b"], vec!["T"], vec!["a", "b"]).is_err());
        assert!(LemmaSample::new(vec!["a"], vec!["T"], vec![]).is_err());
    }

    #[test]
    fn test_sample_display() {
        let sample = LemmaSample::new(vec!["said"], vec!["VBD"], vec!["say"]).unwrap();
        assert_eq!(sample.to_string(), "said\tVBD\tsay");
    }

    #[test]
    fn test_word_accuracy() {
        struct LowercaseLemmatizer;
        impl Lemmatizer for LowercaseLemmatizer {
            fn lemmatize(&self, tokens: &[String], _tags: &[String]) -> Vec<String> {
                tokens.iter().map(|t| t.to_lowercase()).collect()
            }
        }

        let lemmatizer = LowercaseLemmatizer;
        let mut evaluator = Evaluator::new(LemmatizerEvaluator::new(&lemmatizer));
        let mut samples = object_stream([sample()]);
        evaluator.evaluate(&mut samples).unwrap();

        // Only "Rockwell" -> "rockwell" is right.
        let scores = evaluator.into_processor();
        assert!((scores.word_accuracy() - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(scores.word_count(), 3);
    }

    #[test]
    fn test_identity_lemmatizer_misses_inflections() {
        let lemmatizer = IdentityLemmatizer;
        let mut evaluator = LemmatizerEvaluator::new(&lemmatizer);
        evaluator.process_sample(&sample()).unwrap();
        assert_eq!(evaluator.word_accuracy(), 0.0);
        assert_eq!(evaluator.word_count(), 3);
    }
}
