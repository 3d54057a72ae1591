//! # Tanager
//!
//! A statistical natural language processing toolkit for Rust.
//!
//! ## Features
//!
//! - N-gram frequency models with maximum-likelihood and Lidstone-smoothed
//!   probability estimation
//! - Next-token prediction over trained n-gram language models
//! - Streaming, mergeable evaluation metrics (precision/recall/F-measure,
//!   weighted means)
//! - K-fold cross-validation over restartable sample streams
//! - Pluggable classifier, context-generator and text-normalizer seams
//!
//! The toolkit is built around two reusable subsystems: the [`ngram`] family
//! of counting and probability types, and the [`eval`] family of streaming
//! metric accumulators. Task-level components such as [`langdetect`] and
//! [`lemmatize`] compose those subsystems and show how a concrete NLP task
//! plugs into them.

pub mod classify;
pub mod error;
pub mod eval;
pub mod langdetect;
pub mod lemmatize;
pub mod ngram;
pub mod normalize;
pub mod span;
pub mod stream;
pub mod util;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
