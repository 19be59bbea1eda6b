use ndarray::{Array1, Array2, Ix1};
use serde::{de::DeserializeOwned, Serialize};

use linfa::Dataset;

use crate::error::Result;
use crate::task::Task;

/// A learning algorithm competing for a task
///
/// The candidate receives the features produced by the fitted pipeline, never the raw samples.
pub trait Candidate {
    type Task: Task;
    type Trained: Predictor<Self::Task> + Serialize + DeserializeOwned;

    /// Display name, also used to identify the candidate in the leaderboard
    fn name(&self) -> String;

    fn fit(
        &self,
        dataset: &Dataset<f64, <Self::Task as Task>::Target, Ix1>,
    ) -> Result<Self::Trained>;
}

/// A trained candidate
pub trait Predictor<T: Task> {
    fn predict(&self, features: &Array2<f64>) -> Array1<T::Target>;

    /// Class membership probabilities, one column per target key
    fn predict_probabilities(&self, _features: &Array2<f64>) -> Option<Array2<f64>> {
        None
    }
}
