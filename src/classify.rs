//! Opaque classifier seam: events, training parameters and model traits.
//!
//! Nothing in this module trains anything. It defines the boundary the rest
//! of the toolkit talks through, so tasks like
//! [`langdetect`](crate::langdetect) stay decoupled from the learning
//! algorithm behind it. Any maximum-entropy, perceptron or frequency-based
//! backend that implements [`EventTrainer`] plugs in unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TanagerError};
use crate::stream::ObjectStream;

/// Number of training iterations, when the backend is iterative.
pub const ITERATIONS_PARAM: &str = "Iterations";
/// Minimum feature frequency below which a feature is discarded.
pub const CUTOFF_PARAM: &str = "Cutoff";
/// Name of the training algorithm to use.
pub const ALGORITHM_PARAM: &str = "Algorithm";

/// One training observation: an outcome label plus its feature context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    outcome: String,
    context: Vec<String>,
}

impl Event {
    /// Create an event for `outcome` observed with the given features.
    pub fn new<S, I, F>(outcome: S, context: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        Event {
            outcome: outcome.into(),
            context: context.into_iter().map(Into::into).collect(),
        }
    }

    /// The outcome label.
    pub fn outcome(&self) -> &str {
        &self.outcome
    }

    /// The feature strings observed with the outcome.
    pub fn context(&self) -> &[String] {
        &self.context
    }
}

/// String-keyed training configuration passed to an [`EventTrainer`].
///
/// Keys are free-form; the constants in this module name the ones most
/// backends understand. Unknown keys are the backend's to interpret or
/// ignore.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingParameters {
    parameters: BTreeMap<String, String>,
}

impl TrainingParameters {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        TrainingParameters::default()
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn set<K: Into<String>, V: ToString>(&mut self, key: K, value: V) {
        self.parameters.insert(key.into(), value.to_string());
    }

    /// Set `key` to `value` only when `key` is absent.
    pub fn set_if_absent<K: Into<String>, V: ToString>(&mut self, key: K, value: V) {
        self.parameters
            .entry(key.into())
            .or_insert_with(|| value.to_string());
    }

    /// The raw string value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    /// The value of `key` parsed as an integer, or `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error when the stored value does not parse as an integer.
    pub fn get_int(&self, key: &str, default: i64) -> Result<i64> {
        match self.parameters.get(key) {
            None => Ok(default),
            Some(value) => value.parse().map_err(|_| {
                TanagerError::invalid_argument(format!(
                    "parameter {key} is not an integer: {value}"
                ))
            }),
        }
    }

    /// Iterate over the stored key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameters
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A trained classification model.
///
/// Models are read-only after training; implementations must be shareable
/// across threads so batch prediction can fan out.
pub trait MaxentModel: Send + Sync {
    /// Score every outcome for the given feature context. The returned
    /// vector has one entry per outcome, indexed like
    /// [`outcome`](MaxentModel::outcome).
    fn eval(&self, context: &[String]) -> Vec<f64>;

    /// The label of outcome `index`.
    fn outcome(&self, index: usize) -> &str;

    /// Number of outcomes the model distinguishes.
    fn num_outcomes(&self) -> usize;

    /// All outcome labels, indexed consistently with
    /// [`eval`](MaxentModel::eval).
    fn outcomes(&self) -> Vec<String> {
        (0..self.num_outcomes())
            .map(|i| self.outcome(i).to_string())
            .collect()
    }
}

/// Trains a [`MaxentModel`] from a stream of events.
pub trait EventTrainer {
    /// Consume `events` and produce a trained model.
    ///
    /// # Errors
    ///
    /// Returns an error when the stream fails or the event set cannot be
    /// trained on (e.g. no events, or a single outcome where the backend
    /// needs at least two).
    fn train(
        &mut self,
        events: &mut dyn ObjectStream<Event>,
        parameters: &TrainingParameters,
    ) -> Result<Box<dyn MaxentModel>>;
}

/// Turns raw task input into the feature strings a model consumes.
pub trait ContextGenerator: Send + Sync {
    /// The feature context for `input`.
    fn context(&self, input: &str) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_accessors() {
        let event = Event::new("pob", ["ng=ol", "ng=la"]);
        assert_eq!(event.outcome(), "pob");
        assert_eq!(event.context(), ["ng=ol".to_string(), "ng=la".to_string()]);
    }

    #[test]
    fn test_parameters_set_if_absent() {
        let mut params = TrainingParameters::new();
        params.set(ITERATIONS_PARAM, 100);
        params.set_if_absent(ITERATIONS_PARAM, 500);
        params.set_if_absent(CUTOFF_PARAM, 5);

        assert_eq!(params.get_int(ITERATIONS_PARAM, 0).unwrap(), 100);
        assert_eq!(params.get_int(CUTOFF_PARAM, 0).unwrap(), 5);
    }

    #[test]
    fn test_get_int_default_and_error() {
        let mut params = TrainingParameters::new();
        assert_eq!(params.get_int(CUTOFF_PARAM, 5).unwrap(), 5);

        params.set(ALGORITHM_PARAM, "MAXENT");
        assert!(params.get_int(ALGORITHM_PARAM, 0).is_err());
    }

    #[test]
    fn test_parameters_round_trip_json() {
        let mut params = TrainingParameters::new();
        params.set(ALGORITHM_PARAM, "MAXENT");
        params.set(ITERATIONS_PARAM, 100);

        let json = serde_json::to_string(&params).unwrap();
        let restored: TrainingParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, params);
    }
}
