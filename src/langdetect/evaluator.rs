//! Language detector evaluation and cross-validation.

use std::sync::Arc;

use crate::classify::{ContextGenerator, EventTrainer, TrainingParameters};
use crate::error::{Result, TanagerError};
use crate::eval::{CrossValidationPartitioner, Evaluator, FMeasure, Mean, SampleProcessor};
use crate::langdetect::detector::{
    LanguageDetector, MaxentLanguageDetector, train_language_detector,
};
use crate::langdetect::sample::LanguageSample;
use crate::stream::ObjectStream;

/// Measures a [`LanguageDetector`] against gold samples.
///
/// For each sample the detector predicts on the document text alone; the
/// predicted language feeds both an [`FMeasure`] and a document-level
/// accuracy [`Mean`]. Plug it into
/// [`Evaluator`](crate::eval::evaluator::Evaluator) as its processor.
pub struct LanguageDetectorEvaluator<'a> {
    detector: &'a dyn LanguageDetector,
    fmeasure: FMeasure,
    accuracy: Mean,
}

impl<'a> LanguageDetectorEvaluator<'a> {
    /// Evaluate `detector`.
    pub fn new(detector: &'a dyn LanguageDetector) -> Self {
        LanguageDetectorEvaluator {
            detector,
            fmeasure: FMeasure::new(),
            accuracy: Mean::new(),
        }
    }

    /// Precision/recall scores accumulated so far.
    pub fn fmeasure(&self) -> &FMeasure {
        &self.fmeasure
    }

    /// Fraction of documents labeled correctly.
    pub fn accuracy(&self) -> f64 {
        self.accuracy.value()
    }

    /// Number of documents evaluated.
    pub fn document_count(&self) -> u64 {
        self.accuracy.count()
    }
}

impl SampleProcessor<LanguageSample> for LanguageDetectorEvaluator<'_> {
    fn process_sample(&mut self, reference: &LanguageSample) -> Result<LanguageSample> {
        let predicted = self
            .detector
            .predict_language(reference.context())
            .ok_or_else(|| {
                TanagerError::eval(format!(
                    "no language predicted for {:?}",
                    reference.context()
                ))
            })?;

        self.fmeasure.update_scores(
            std::slice::from_ref(reference.language()),
            std::slice::from_ref(&predicted),
        );
        self.accuracy
            .add(if reference.language() == &predicted { 1.0 } else { 0.0 });

        Ok(LanguageSample::new(predicted, reference.context()))
    }
}

/// K-fold cross-validation for language detection.
///
/// Each fold trains a fresh model on the fold's training side, evaluates it
/// on the held-out side, and folds the per-document accuracy into one
/// [`Mean`] weighted by fold size.
pub struct LanguageDetectorCrossValidator {
    parameters: TrainingParameters,
    document_accuracy: Mean,
}

impl LanguageDetectorCrossValidator {
    /// Cross-validate with the given training parameters.
    pub fn new(parameters: TrainingParameters) -> Self {
        LanguageDetectorCrossValidator {
            parameters,
            document_accuracy: Mean::new(),
        }
    }

    /// Run `n_folds`-fold cross-validation over `samples`.
    ///
    /// # Errors
    ///
    /// Returns an error when partitioning, training or evaluating any fold
    /// fails; folds already evaluated keep their contribution.
    pub fn evaluate(
        &mut self,
        samples: &mut dyn ObjectStream<LanguageSample>,
        n_folds: usize,
        generator: Arc<dyn ContextGenerator>,
        trainer: &mut dyn EventTrainer,
    ) -> Result<()> {
        let mut partitioner = CrossValidationPartitioner::new(samples, n_folds)?;

        while partitioner.has_next() {
            let mut training = partitioner.next()?;
            let model = train_language_detector(
                &mut training,
                &self.parameters,
                generator.as_ref(),
                trainer,
            )?;
            let detector = MaxentLanguageDetector::new(Arc::from(model), Arc::clone(&generator));

            let mut evaluator = Evaluator::new(LanguageDetectorEvaluator::new(&detector));
            evaluator.evaluate(&mut training.test_sample_stream())?;

            let fold = evaluator.into_processor();
            self.document_accuracy
                .add_weighted(fold.accuracy(), fold.document_count());
        }

        Ok(())
    }

    /// Accuracy over every document evaluated across all folds.
    pub fn document_accuracy(&self) -> f64 {
        self.document_accuracy.value()
    }

    /// Number of documents evaluated across all folds.
    pub fn document_count(&self) -> u64 {
        self.document_accuracy.count()
    }
}
