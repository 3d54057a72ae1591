//! N-gram counting and probability estimation.
//!
//! This module provides the n-gram subsystem shared by every statistical
//! task in the toolkit:
//!
//! - [`sequence::TokenSequence`] - Immutable ordered token list used as the
//!   n-gram key type
//! - [`utils`] - Stateless maximum-likelihood and interpolated probability
//!   functions computed directly over a corpus
//! - [`model::NGramModel`] - Mutable n-gram frequency table
//! - [`language_model::NGramLanguageModel`] - Smoothing, conditional
//!   probabilities and next-token prediction layered over the frequency
//!   table
//!
//! # Examples
//!
//! ```
//! use tanager::ngram::language_model::NGramLanguageModel;
//! use tanager::ngram::sequence::TokenSequence;
//!
//! let mut model = NGramLanguageModel::new(2).unwrap();
//! model.add(&TokenSequence::new(["the", "red", "house"]), 1, 2).unwrap();
//!
//! let p = model.calculate_probability(&TokenSequence::new(["the", "red"]));
//! assert!(p > 0.0 && p <= 1.0);
//! ```

pub mod language_model;
pub mod model;
pub mod sequence;
pub mod utils;

pub use language_model::NGramLanguageModel;
pub use model::NGramModel;
pub use sequence::TokenSequence;
