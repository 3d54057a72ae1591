//! K-fold cross-validation splits over a sample stream.

use crate::error::{Result, TanagerError};
use crate::stream::ObjectStream;

/// Splits one sample stream into `k` train/test partitions.
///
/// The source stream is materialized once up front; fold `i` then holds the
/// contiguous test range `[i*n/k, (i+1)*n/k)` and trains on everything
/// outside it. Every sample lands in exactly one test range across the `k`
/// folds, so the union of the test sets is the whole corpus.
///
/// Each call to [`next`](CrossValidationPartitioner::next) hands out a
/// [`TrainingSampleStream`] borrowing the partitioner, which statically
/// prevents using a fold's streams after advancing to the next fold.
///
/// # Examples
///
/// ```
/// use tanager::eval::cross_validation::CrossValidationPartitioner;
/// use tanager::stream::{collect, object_stream};
///
/// let mut stream = object_stream(0..10);
/// let mut partitioner = CrossValidationPartitioner::new(&mut stream, 2).unwrap();
/// let mut training = partitioner.next().unwrap();
/// assert_eq!(collect(&mut training).unwrap(), (5..10).collect::<Vec<_>>());
/// ```
pub struct CrossValidationPartitioner<T: Clone> {
    samples: Vec<T>,
    n_folds: usize,
    fold: usize,
}

impl<T: Clone> CrossValidationPartitioner<T> {
    /// Materialize `samples` and prepare `n_folds` partitions.
    ///
    /// # Errors
    ///
    /// Returns an error if `n_folds` is less than 2 or reading the stream
    /// fails.
    pub fn new(samples: &mut dyn ObjectStream<T>, n_folds: usize) -> Result<Self> {
        let mut collected = Vec::new();
        while let Some(sample) = samples.read()? {
            collected.push(sample);
        }
        Self::from_samples(collected, n_folds)
    }

    /// Prepare `n_folds` partitions over already collected samples.
    ///
    /// # Errors
    ///
    /// Returns an error if `n_folds` is less than 2.
    pub fn from_samples(samples: Vec<T>, n_folds: usize) -> Result<Self> {
        if n_folds < 2 {
            return Err(TanagerError::invalid_argument(format!(
                "number of folds must be at least 2, got {n_folds}"
            )));
        }
        Ok(CrossValidationPartitioner {
            samples,
            n_folds,
            fold: 0,
        })
    }

    /// Number of folds this partitioner produces.
    pub fn n_folds(&self) -> usize {
        self.n_folds
    }

    /// Check whether another fold remains.
    pub fn has_next(&self) -> bool {
        self.fold < self.n_folds
    }

    /// Advance to the next fold and return its training sample stream.
    ///
    /// # Errors
    ///
    /// Returns an error when all folds have been consumed.
    pub fn next(&mut self) -> Result<TrainingSampleStream<'_, T>> {
        if !self.has_next() {
            return Err(TanagerError::invalid_operation(format!(
                "all {} folds have been consumed",
                self.n_folds
            )));
        }
        let fold = self.fold;
        self.fold += 1;

        let n = self.samples.len();
        let test_start = fold * n / self.n_folds;
        let test_end = (fold + 1) * n / self.n_folds;
        Ok(TrainingSampleStream {
            samples: &self.samples,
            test_start,
            test_end,
            position: 0,
        })
    }
}

/// The training side of one cross-validation fold.
///
/// Reading yields every sample outside the fold's test range, in corpus
/// order. After training, [`test_sample_stream`](Self::test_sample_stream)
/// exposes the held-out range for evaluation.
pub struct TrainingSampleStream<'a, T: Clone> {
    samples: &'a [T],
    test_start: usize,
    test_end: usize,
    position: usize,
}

impl<'a, T: Clone> TrainingSampleStream<'a, T> {
    /// A stream over the fold's held-out test samples.
    pub fn test_sample_stream(&self) -> TestSampleStream<'a, T> {
        TestSampleStream {
            samples: &self.samples[self.test_start..self.test_end],
            position: 0,
        }
    }
}

impl<T: Clone> ObjectStream<T> for TrainingSampleStream<'_, T> {
    fn read(&mut self) -> Result<Option<T>> {
        if self.position == self.test_start {
            self.position = self.test_end;
        }
        match self.samples.get(self.position) {
            Some(sample) => {
                self.position += 1;
                Ok(Some(sample.clone()))
            }
            None => Ok(None),
        }
    }

    fn reset(&mut self) -> Result<()> {
        self.position = 0;
        Ok(())
    }
}

/// A stream over one fold's held-out test samples.
pub struct TestSampleStream<'a, T: Clone> {
    samples: &'a [T],
    position: usize,
}

impl<T: Clone> ObjectStream<T> for TestSampleStream<'_, T> {
    fn read(&mut self) -> Result<Option<T>> {
        match self.samples.get(self.position) {
            Some(sample) => {
                self.position += 1;
                Ok(Some(sample.clone()))
            }
            None => Ok(None),
        }
    }

    fn reset(&mut self) -> Result<()> {
        self.position = 0;
        Ok(())
    }
}
