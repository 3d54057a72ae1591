//! Language prediction over a trained classifier.

use std::sync::Arc;

use rayon::prelude::*;

use crate::classify::{ContextGenerator, Event, EventTrainer, MaxentModel, TrainingParameters};
use crate::error::Result;
use crate::langdetect::sample::{Language, LanguageSample};
use crate::stream::ObjectStream;

/// Predicts the language of a document.
pub trait LanguageDetector: Send + Sync {
    /// Every supported language scored against `content`, sorted by
    /// confidence, best first. Empty content yields no predictions.
    fn predict_languages(&self, content: &str) -> Vec<Language>;

    /// The most confident prediction, if there is one.
    fn predict_language(&self, content: &str) -> Option<Language> {
        self.predict_languages(content).into_iter().next()
    }

    /// The language codes the detector can distinguish.
    fn supported_languages(&self) -> Vec<String>;
}

/// A [`LanguageDetector`] over a trained [`MaxentModel`].
///
/// The model and context generator are shared immutably, so constructing
/// one detector per thread over the same `Arc`s costs two pointer clones.
pub struct MaxentLanguageDetector {
    model: Arc<dyn MaxentModel>,
    generator: Arc<dyn ContextGenerator>,
}

impl MaxentLanguageDetector {
    /// Wrap a trained model and the feature generator it was trained with.
    pub fn new(model: Arc<dyn MaxentModel>, generator: Arc<dyn ContextGenerator>) -> Self {
        MaxentLanguageDetector { model, generator }
    }

    /// Predict every document in `documents` in parallel.
    ///
    /// Inference is read-only, so the documents fan out over the rayon
    /// thread pool against the one shared model.
    pub fn predict_batch(&self, documents: &[String]) -> Vec<Vec<Language>> {
        documents
            .par_iter()
            .map(|document| self.predict_languages(document))
            .collect()
    }
}

impl LanguageDetector for MaxentLanguageDetector {
    fn predict_languages(&self, content: &str) -> Vec<Language> {
        if content.is_empty() {
            return Vec::new();
        }
        let context = self.generator.context(content);
        let scores = self.model.eval(&context);
        let mut languages: Vec<Language> = scores
            .iter()
            .enumerate()
            .filter_map(|(i, score)| {
                Language::with_confidence(self.model.outcome(i), *score).ok()
            })
            .collect();
        languages.sort_by(|a, b| b.confidence().total_cmp(&a.confidence()));
        languages
    }

    fn supported_languages(&self) -> Vec<String> {
        self.model.outcomes()
    }
}

/// Adapts a [`LanguageSample`] stream into the [`Event`] stream a trainer
/// consumes, generating each sample's feature context on the fly.
pub struct LanguageDetectorEventStream<'a> {
    samples: &'a mut dyn ObjectStream<LanguageSample>,
    generator: &'a dyn ContextGenerator,
}

impl<'a> LanguageDetectorEventStream<'a> {
    /// Stream one event per sample in `samples`.
    pub fn new(
        samples: &'a mut dyn ObjectStream<LanguageSample>,
        generator: &'a dyn ContextGenerator,
    ) -> Self {
        LanguageDetectorEventStream { samples, generator }
    }
}

impl ObjectStream<Event> for LanguageDetectorEventStream<'_> {
    fn read(&mut self) -> Result<Option<Event>> {
        Ok(self.samples.read()?.map(|sample| {
            Event::new(
                sample.language().lang(),
                self.generator.context(sample.context()),
            )
        }))
    }

    fn reset(&mut self) -> Result<()> {
        self.samples.reset()
    }
}

/// Train a language detection model from labeled samples.
///
/// # Errors
///
/// Returns an error when the sample stream fails or the trainer rejects
/// the event set.
pub fn train_language_detector(
    samples: &mut dyn ObjectStream<LanguageSample>,
    parameters: &TrainingParameters,
    generator: &dyn ContextGenerator,
    trainer: &mut dyn EventTrainer,
) -> Result<Box<dyn MaxentModel>> {
    let mut events = LanguageDetectorEventStream::new(samples, generator);
    trainer.train(&mut events, parameters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::langdetect::context::CharNgramContextGenerator;
    use crate::stream::object_stream;

    struct TwoLanguageModel;

    impl MaxentModel for TwoLanguageModel {
        fn eval(&self, context: &[String]) -> Vec<f64> {
            if context.iter().any(|f| f.contains('á')) {
                vec![0.9, 0.1]
            } else {
                vec![0.1, 0.9]
            }
        }

        fn outcome(&self, index: usize) -> &str {
            ["spa", "eng"][index]
        }

        fn num_outcomes(&self) -> usize {
            2
        }
    }

    fn detector() -> MaxentLanguageDetector {
        MaxentLanguageDetector::new(
            Arc::new(TwoLanguageModel),
            Arc::new(CharNgramContextGenerator::default()),
        )
    }

    #[test]
    fn test_predictions_sorted_by_confidence() {
        let detector = detector();
        let languages = detector.predict_languages("cámara árbol");
        assert_eq!(languages.len(), 2);
        assert!(languages[0].confidence() >= languages[1].confidence());
        assert_eq!(languages[0].lang(), "spa");
    }

    #[test]
    fn test_empty_content_has_no_prediction() {
        let detector = detector();
        assert!(detector.predict_languages("").is_empty());
        assert!(detector.predict_language("").is_none());
    }

    #[test]
    fn test_supported_languages() {
        assert_eq!(detector().supported_languages(), vec!["spa", "eng"]);
    }

    #[test]
    fn test_event_stream_labels_and_features() {
        let samples = vec![LanguageSample::new(
            Language::new("pob").unwrap(),
            "bom dia",
        )];
        let mut stream = object_stream(samples);
        let generator = CharNgramContextGenerator::default();
        let mut events = LanguageDetectorEventStream::new(&mut stream, &generator);

        let event = events.read().unwrap().unwrap();
        assert_eq!(event.outcome(), "pob");
        assert!(event.context().contains(&"bom".to_string()));
        assert!(events.read().unwrap().is_none());
    }

    #[test]
    fn test_batch_prediction_matches_sequential() {
        let detector = detector();
        let documents = vec![
            "cámara árbol".to_string(),
            "plain english text".to_string(),
        ];
        let batch = detector.predict_batch(&documents);
        for (document, predictions) in documents.iter().zip(&batch) {
            assert_eq!(predictions, &detector.predict_languages(document));
        }
    }
}
