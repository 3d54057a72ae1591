//! Incremental precision, recall and F-measure.

use serde::{Deserialize, Serialize};

/// An incremental precision/recall/F1 accumulator.
///
/// Per-sample scores are folded in via
/// [`update_scores`](FMeasure::update_scores); the accumulator keeps only
/// three counters (predicted, reference and matched element totals), so it
/// handles unbounded streams in constant memory and two independently
/// accumulated instances [`merge`](FMeasure::merge) into exactly the result
/// one sequential pass would have produced.
///
/// Elements are compared with `PartialEq` and matched as multisets: a
/// reference element is consumed by at most one predicted element, so three
/// identical predictions against one identical reference yield a single
/// true positive.
///
/// # Examples
///
/// ```
/// use tanager::eval::fmeasure::FMeasure;
/// use tanager::span::Span;
///
/// let gold = vec![Span::new(1, 10).unwrap(), Span::new(12, 20).unwrap()];
/// let predicted = vec![Span::new(1, 10).unwrap()];
///
/// let mut fmeasure = FMeasure::new();
/// fmeasure.update_scores(&gold, &predicted);
/// assert_eq!(fmeasure.precision_score(), 1.0);
/// assert_eq!(fmeasure.recall_score(), 0.5);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FMeasure {
    selected: f64,
    target: f64,
    true_positives: f64,
}

impl FMeasure {
    /// Create a new empty accumulator.
    pub fn new() -> Self {
        FMeasure::default()
    }

    /// Cumulative precision: true positives over predicted elements, 0 while
    /// nothing has been predicted.
    pub fn precision_score(&self) -> f64 {
        if self.selected > 0.0 {
            self.true_positives / self.selected
        } else {
            0.0
        }
    }

    /// Cumulative recall: true positives over reference elements, 0 while no
    /// reference element has been seen.
    pub fn recall_score(&self) -> f64 {
        if self.target > 0.0 {
            self.true_positives / self.target
        } else {
            0.0
        }
    }

    /// Harmonic mean of cumulative precision and recall, or `-1.0` while
    /// both are zero.
    pub fn value(&self) -> f64 {
        let precision = self.precision_score();
        let recall = self.recall_score();
        if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            -1.0
        }
    }

    /// Fold one sample's reference and predicted elements into the counters.
    pub fn update_scores<T: PartialEq>(&mut self, references: &[T], predictions: &[T]) {
        self.true_positives += count_true_positives(references, predictions) as f64;
        self.selected += predictions.len() as f64;
        self.target += references.len() as f64;
    }

    /// Fold another accumulator into this one. Merging is the counter-wise
    /// sum, so the order of merges cannot change the result.
    pub fn merge(&mut self, other: &FMeasure) {
        self.selected += other.selected;
        self.target += other.target;
        self.true_positives += other.true_positives;
    }
}

/// Multiset intersection size of `references` and `predictions`.
///
/// Each reference element can be claimed by at most one prediction.
pub fn count_true_positives<T: PartialEq>(references: &[T], predictions: &[T]) -> usize {
    let mut matched = vec![false; references.len()];
    let mut true_positives = 0;
    for prediction in predictions {
        for (i, reference) in references.iter().enumerate() {
            if !matched[i] && prediction == reference {
                matched[i] = true;
                true_positives += 1;
                break;
            }
        }
    }
    true_positives
}

/// Single-sample precision: true positives over predicted elements.
///
/// Returns `f64::NAN` when `predictions` is empty (precision is undefined
/// without a prediction) and `0.0` when there are predictions but no
/// reference elements.
pub fn precision<T: PartialEq>(references: &[T], predictions: &[T]) -> f64 {
    if predictions.is_empty() {
        f64::NAN
    } else {
        count_true_positives(references, predictions) as f64 / predictions.len() as f64
    }
}

/// Single-sample recall: true positives over reference elements.
///
/// Returns `f64::NAN` when `references` is empty and `0.0` when there are
/// reference elements but no predictions matched.
pub fn recall<T: PartialEq>(references: &[T], predictions: &[T]) -> f64 {
    if references.is_empty() {
        f64::NAN
    } else {
        count_true_positives(references, predictions) as f64 / references.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    fn span(start: usize, end: usize) -> Span {
        Span::new(start, end).unwrap()
    }

    fn gold() -> Vec<Span> {
        vec![
            span(1, 10),
            span(12, 20),
            span(22, 24),
            span(26, 30),
            span(32, 34),
        ]
    }

    fn predicted() -> Vec<Span> {
        vec![
            span(1, 10),
            span(12, 20),
            span(22, 27),
            span(29, 30),
            span(32, 34),
        ]
    }

    fn predicted_completely_distinct() -> Vec<Span> {
        vec![span(0, 1), span(2, 3), span(4, 5)]
    }

    const DELTA: f64 = 1e-9;

    #[test]
    fn test_count_true_positives() {
        assert_eq!(count_true_positives(&gold(), &gold()), gold().len());
        assert_eq!(count_true_positives(&gold(), &predicted()), 3);
        assert_eq!(
            count_true_positives(&gold(), &predicted_completely_distinct()),
            0
        );
    }

    #[test]
    fn test_true_positives_match_as_multiset() {
        let references = vec![span(1, 2), span(1, 2)];
        let predictions = vec![span(1, 2), span(1, 2), span(1, 2)];
        assert_eq!(count_true_positives(&references, &predictions), 2);
    }

    #[test]
    fn test_zero_length_spans_compare_normally() {
        let references = vec![span(11, 11)];
        let predictions = vec![span(11, 11)];
        assert_eq!(count_true_positives(&references, &predictions), 1);
    }

    #[test]
    fn test_single_sample_precision() {
        assert!((precision(&gold(), &predicted()) - 0.6).abs() < DELTA);
        assert!((precision(&gold(), &gold()) - 1.0).abs() < DELTA);
        assert!(precision::<Span>(&gold(), &[]).is_nan());
        assert_eq!(precision::<Span>(&[], &predicted()), 0.0);
    }

    #[test]
    fn test_single_sample_recall() {
        assert!((recall(&gold(), &predicted()) - 0.6).abs() < DELTA);
        assert!((recall(&gold(), &gold()) - 1.0).abs() < DELTA);
        assert!(recall::<Span>(&[], &predicted()).is_nan());
        assert_eq!(recall::<Span>(&gold(), &[]), 0.0);
    }

    #[test]
    fn test_empty_accumulator_sentinel() {
        let fmeasure = FMeasure::new();
        assert_eq!(fmeasure.precision_score(), 0.0);
        assert_eq!(fmeasure.recall_score(), 0.0);
        assert_eq!(fmeasure.value(), -1.0);
    }

    #[test]
    fn test_update_scores_accumulates() {
        let mut fmeasure = FMeasure::new();
        fmeasure.update_scores(&gold(), &predicted());
        fmeasure.update_scores(&gold(), &gold());

        let expected_precision = (3.0 + 5.0) / (5.0 + 5.0);
        let expected_recall = (3.0 + 5.0) / (5.0 + 5.0);
        assert!((fmeasure.precision_score() - expected_precision).abs() < DELTA);
        assert!((fmeasure.recall_score() - expected_recall).abs() < DELTA);
        let expected_f = 2.0 * expected_precision * expected_recall
            / (expected_precision + expected_recall);
        assert!((fmeasure.value() - expected_f).abs() < DELTA);
    }

    #[test]
    fn test_merge_matches_sequential() {
        let mut sequential = FMeasure::new();
        sequential.update_scores(&gold(), &predicted());
        sequential.update_scores(&gold(), &predicted_completely_distinct());

        let mut left = FMeasure::new();
        left.update_scores(&gold(), &predicted());
        let mut right = FMeasure::new();
        right.update_scores(&gold(), &predicted_completely_distinct());

        let mut merged = left.clone();
        merged.merge(&right);

        assert!((merged.precision_score() - sequential.precision_score()).abs() < DELTA);
        assert!((merged.recall_score() - sequential.recall_score()).abs() < DELTA);
        assert!((merged.value() - sequential.value()).abs() < DELTA);
    }

    #[test]
    fn test_merge_is_associative() {
        let mut a = FMeasure::new();
        a.update_scores(&gold(), &predicted());
        let mut b = FMeasure::new();
        b.update_scores(&gold(), &gold());
        let mut c = FMeasure::new();
        c.update_scores(&gold(), &predicted_completely_distinct());

        let mut left_first = a.clone();
        left_first.merge(&b);
        left_first.merge(&c);

        let mut right_first = b.clone();
        right_first.merge(&c);
        let mut outer = a.clone();
        outer.merge(&right_first);

        assert!((left_first.value() - outer.value()).abs() < DELTA);
        assert!((left_first.precision_score() - outer.precision_score()).abs() < DELTA);
        assert!((left_first.recall_score() - outer.recall_score()).abs() < DELTA);
    }
}
