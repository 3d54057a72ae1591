//! Character n-gram based language detection.
//!
//! This task is the toolkit's reference consumer: it wires the n-gram
//! feature machinery, the classifier seam and the evaluation framework
//! together end to end. Documents are normalized, sliced into character
//! n-gram features by [`context::CharNgramContextGenerator`], and scored by
//! whatever [`MaxentModel`](crate::classify::MaxentModel) backend was
//! trained through the [`EventTrainer`](crate::classify::EventTrainer)
//! seam.

pub mod context;
pub mod detector;
pub mod evaluator;
pub mod sample;

pub use context::CharNgramContextGenerator;
pub use detector::{
    LanguageDetector, LanguageDetectorEventStream, MaxentLanguageDetector,
    train_language_detector,
};
pub use evaluator::{LanguageDetectorCrossValidator, LanguageDetectorEvaluator};
pub use sample::{Language, LanguageSample, LanguageSampleStream};
