//! Generic evaluation harness over gold sample streams.

use crate::error::Result;
use crate::stream::ObjectStream;

/// A prediction strategy under evaluation.
///
/// Given a gold reference sample, produce the predicted sample a model would
/// emit for the same input. Implementations usually also accumulate their
/// own scores while doing so, e.g. with
/// [`FMeasure`](crate::eval::fmeasure::FMeasure) or
/// [`Mean`](crate::eval::mean::Mean).
///
/// Any `FnMut(&S) -> Result<S>` closure is a processor, which keeps simple
/// evaluations free of ceremony.
pub trait SampleProcessor<S> {
    /// Predict for the input underlying `reference`.
    ///
    /// # Errors
    ///
    /// Returns an error when prediction fails; the evaluation run aborts.
    fn process_sample(&mut self, reference: &S) -> Result<S>;
}

impl<S, F> SampleProcessor<S> for F
where
    F: FnMut(&S) -> Result<S>,
{
    fn process_sample(&mut self, reference: &S) -> Result<S> {
        self(reference)
    }
}

/// An observer notified after each sample is processed.
///
/// Monitors see the gold and predicted sample side by side, which is enough
/// to print progress, log misclassifications or keep secondary tallies.
pub trait EvaluationMonitor<S> {
    /// Called once per sample, after prediction succeeded.
    fn sample_processed(&mut self, reference: &S, predicted: &S);
}

/// Drains a gold sample stream through a [`SampleProcessor`], notifying
/// registered [`EvaluationMonitor`]s along the way.
///
/// The harness owns the control flow only; what "predict" and "score" mean
/// lives entirely in the processor.
///
/// # Examples
///
/// ```
/// use tanager::error::Result;
/// use tanager::eval::evaluator::Evaluator;
/// use tanager::stream::object_stream;
///
/// let mut evaluator = Evaluator::new(|sample: &String| -> Result<String> {
///     Ok(sample.to_uppercase())
/// });
/// let mut stream = object_stream(["ab".to_string(), "CD".to_string()]);
/// evaluator.evaluate(&mut stream).unwrap();
/// ```
pub struct Evaluator<S, P: SampleProcessor<S>> {
    processor: P,
    monitors: Vec<Box<dyn EvaluationMonitor<S>>>,
}

impl<S, P: SampleProcessor<S>> Evaluator<S, P> {
    /// Create an evaluator with no monitors.
    pub fn new(processor: P) -> Self {
        Evaluator {
            processor,
            monitors: Vec::new(),
        }
    }

    /// Create an evaluator that notifies `monitors` after every sample.
    pub fn with_monitors(processor: P, monitors: Vec<Box<dyn EvaluationMonitor<S>>>) -> Self {
        Evaluator {
            processor,
            monitors,
        }
    }

    /// Read every sample from `samples` and run it through the processor.
    ///
    /// # Errors
    ///
    /// The first stream or processor error aborts the run and is returned;
    /// samples after the failing one are not touched.
    pub fn evaluate(&mut self, samples: &mut dyn ObjectStream<S>) -> Result<()> {
        while let Some(reference) = samples.read()? {
            let predicted = self.processor.process_sample(&reference)?;
            for monitor in &mut self.monitors {
                monitor.sample_processed(&reference, &predicted);
            }
        }
        Ok(())
    }

    /// Borrow the processor, e.g. to read its accumulated scores.
    pub fn processor(&self) -> &P {
        &self.processor
    }

    /// Consume the evaluator and return its processor.
    pub fn into_processor(self) -> P {
        self.processor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TanagerError;
    use crate::stream::object_stream;

    use std::cell::RefCell;
    use std::rc::Rc;

    struct CountingMonitor {
        matches: Rc<RefCell<usize>>,
        total: Rc<RefCell<usize>>,
    }

    impl EvaluationMonitor<String> for CountingMonitor {
        fn sample_processed(&mut self, reference: &String, predicted: &String) {
            *self.total.borrow_mut() += 1;
            if reference == predicted {
                *self.matches.borrow_mut() += 1;
            }
        }
    }

    #[test]
    fn test_evaluate_drains_stream() {
        let mut seen = Vec::new();
        {
            let mut evaluator = Evaluator::new(|sample: &String| {
                seen.push(sample.clone());
                Ok(sample.clone())
            });
            let mut stream = object_stream(["a".to_string(), "b".to_string(), "c".to_string()]);
            evaluator.evaluate(&mut stream).unwrap();
        }
        assert_eq!(seen, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_processor_error_aborts_run() {
        let mut processed = 0usize;
        {
            let mut evaluator = Evaluator::new(|sample: &String| {
                if sample == "boom" {
                    return Err(TanagerError::eval("prediction failed"));
                }
                processed += 1;
                Ok(sample.clone())
            });
            let mut stream = object_stream([
                "ok".to_string(),
                "boom".to_string(),
                "never".to_string(),
            ]);
            assert!(evaluator.evaluate(&mut stream).is_err());
        }
        assert_eq!(processed, 1);
    }

    #[test]
    fn test_monitors_observe_every_sample() {
        let matches = Rc::new(RefCell::new(0));
        let total = Rc::new(RefCell::new(0));
        let monitor = CountingMonitor {
            matches: Rc::clone(&matches),
            total: Rc::clone(&total),
        };
        let mut evaluator = Evaluator::with_monitors(
            |sample: &String| Ok(sample.to_uppercase()),
            vec![Box::new(monitor)],
        );
        let mut stream = object_stream(["AB".to_string(), "cd".to_string()]);
        evaluator.evaluate(&mut stream).unwrap();
        assert_eq!(*total.borrow(), 2);
        assert_eq!(*matches.borrow(), 1);
    }
}
