//! Streaming, mergeable model evaluation.
//!
//! Every task in the toolkit measures itself with the same small family of
//! accumulators:
//!
//! - [`mean::Mean`] - Running weighted average
//! - [`fmeasure::FMeasure`] - Incremental precision/recall/F1 over
//!   comparable element sets
//! - [`evaluator::Evaluator`] - Generic harness that drains a gold sample
//!   stream through a pluggable prediction strategy
//! - [`cross_validation::CrossValidationPartitioner`] - K-fold train/test
//!   splits over one sample stream
//!
//! Accumulators never retain per-sample history, so evaluation runs over
//! unbounded streams in constant memory, and independently accumulated
//! instances merge into exactly the result a single sequential run would
//! have produced.

pub mod cross_validation;
pub mod evaluator;
pub mod fmeasure;
pub mod mean;

pub use cross_validation::CrossValidationPartitioner;
pub use evaluator::{EvaluationMonitor, Evaluator, SampleProcessor};
pub use fmeasure::FMeasure;
pub use mean::Mean;
