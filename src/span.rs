//! Labeled interval spans.
//!
//! A [`Span`] marks the half-open interval `[start, end)` over a token or
//! character sequence, optionally carrying a type label (`"person"`,
//! `"NP"`, ...). Spans compare by value — `(start, end, label)` — which
//! makes them directly usable as elements of evaluation sets and as map
//! keys.
//!
//! # Examples
//!
//! ```
//! use tanager::span::Span;
//!
//! let span = Span::new(2, 4).unwrap();
//! assert_eq!(span.len(), 2);
//! assert!(span.contains(3));
//! assert!(!span.contains(4));
//!
//! let labeled = Span::with_label(2, 4, "person").unwrap();
//! assert_ne!(span, labeled);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TanagerError};

/// A half-open interval `[start, end)` with an optional type label.
///
/// `start <= end` is enforced at construction; zero-length spans are valid
/// and appear when evaluation sets are merged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    start: usize,
    end: usize,
    label: Option<String>,
}

impl Span {
    /// Create a new span without a label.
    ///
    /// # Errors
    ///
    /// Returns an error if `start > end`.
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(TanagerError::invalid_argument(format!(
                "span start ({start}) must not be greater than end ({end})"
            )));
        }
        Ok(Span {
            start,
            end,
            label: None,
        })
    }

    /// Create a new span with a type label.
    ///
    /// # Errors
    ///
    /// Returns an error if `start > end`.
    pub fn with_label<S: Into<String>>(start: usize, end: usize, label: S) -> Result<Self> {
        let mut span = Span::new(start, end)?;
        span.label = Some(label.into());
        Ok(span)
    }

    /// The inclusive start of the interval.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The exclusive end of the interval.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The type label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Length of the interval.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check whether the interval is zero-length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check whether `index` falls inside the interval.
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Check whether `other` lies entirely inside this span.
    pub fn contains_span(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Check whether two spans overlap in at least one position.
    pub fn intersects(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Slice the covered region out of `text`, treating the bounds as byte
    /// offsets. Returns `None` when the bounds do not fall on character
    /// boundaries or exceed the text.
    pub fn covered_text<'t>(&self, text: &'t str) -> Option<&'t str> {
        text.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "[{}..{}) {}", self.start, self.end, label),
            None => write!(f, "[{}..{})", self.start, self.end),
        }
    }
}
