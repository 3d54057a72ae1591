//! Shared utilities.

pub mod cache;

pub use cache::{EvictionPolicy, KeyedCache};
