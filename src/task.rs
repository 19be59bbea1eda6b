//! Learning tasks
//!
//! A task ties together the label type of the samples, the target type the learning algorithms
//! are trained on, the encoding between the two and the metrics a trained model is judged by.

use std::fmt;

use ndarray::{Array1, Array2};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};
use crate::metrics::{ClassificationMetrics, MetricSet, RegressionMetrics};
use crate::pipeline::LabelKeys;

pub trait Task {
    /// Label as provided by the samples
    type Label: Clone + PartialEq + fmt::Debug + fmt::Display;
    /// Target as consumed by the learning algorithms
    type Target: Clone + fmt::Debug;
    /// Learned mapping between labels and targets, stored with the model
    type Encoder: Serialize + DeserializeOwned + Clone + fmt::Debug;
    type Metrics: MetricSet;

    fn fit_encoder(labels: &[Self::Label]) -> Self::Encoder;

    fn encode(encoder: &Self::Encoder, labels: &[Self::Label]) -> Result<Array1<Self::Target>>;

    fn decode(encoder: &Self::Encoder, target: &Self::Target) -> Self::Label;

    /// Score predicted targets against the true labels
    ///
    /// `probabilities` holds one row per sample and one column per target class, if the model
    /// provides them.
    fn evaluate(
        encoder: &Self::Encoder,
        predicted: &Array1<Self::Target>,
        probabilities: Option<&Array2<f64>>,
        truth: &[Self::Label],
    ) -> Result<Self::Metrics>;
}

/// Prediction of a continuous value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regression {}

impl Task for Regression {
    type Label = f64;
    type Target = f64;
    type Encoder = ();
    type Metrics = RegressionMetrics;

    fn fit_encoder(_labels: &[f64]) {}

    fn encode(_encoder: &(), labels: &[f64]) -> Result<Array1<f64>> {
        Ok(Array1::from(labels.to_vec()))
    }

    fn decode(_encoder: &(), target: &f64) -> f64 {
        *target
    }

    fn evaluate(
        _encoder: &(),
        predicted: &Array1<f64>,
        _probabilities: Option<&Array2<f64>>,
        truth: &[f64],
    ) -> Result<RegressionMetrics> {
        RegressionMetrics::from_predictions(predicted, &Array1::from(truth.to_vec()))
    }
}

/// Prediction of one of several textual classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {}

impl Task for Classification {
    type Label = String;
    type Target = usize;
    type Encoder = LabelKeys;
    type Metrics = ClassificationMetrics;

    fn fit_encoder(labels: &[String]) -> LabelKeys {
        LabelKeys::fit(labels)
    }

    fn encode(keys: &LabelKeys, labels: &[String]) -> Result<Array1<usize>> {
        labels
            .iter()
            .map(|label| {
                keys.key(label)
                    .ok_or_else(|| Error::Parameters(format!("unknown label {}", label)))
            })
            .collect()
    }

    /// Keys outside of the learned range decode to an empty label
    fn decode(keys: &LabelKeys, target: &usize) -> String {
        keys.label(*target).unwrap_or_default().to_string()
    }

    fn evaluate(
        keys: &LabelKeys,
        predicted: &Array1<usize>,
        probabilities: Option<&Array2<f64>>,
        truth: &[String],
    ) -> Result<ClassificationMetrics> {
        let predicted_labels: Vec<String> = predicted
            .iter()
            .map(|key| Self::decode(keys, key))
            .collect();

        // without probabilities the prediction is taken as certain
        let true_class_probabilities: Vec<f64> = truth
            .iter()
            .enumerate()
            .map(|(i, label)| match (probabilities, keys.key(label)) {
                (Some(probs), Some(key)) if key < probs.ncols() => probs[[i, key]],
                (Some(_), _) => 0.0,
                (None, _) if predicted_labels[i] == *label => 1.0,
                (None, _) => 0.0,
            })
            .collect();

        ClassificationMetrics::from_predictions(&predicted_labels, truth, &true_class_probabilities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn classification_encoding() {
        let train = labels(&["6", "5", "7", "6"]);
        let keys = Classification::fit_encoder(&train);

        assert_eq!(
            Classification::encode(&keys, &train).unwrap(),
            array![1, 0, 2, 1]
        );
        assert_eq!(Classification::decode(&keys, &2), "7");
        assert!(Classification::encode(&keys, &labels(&["9"])).is_err());
    }

    #[test]
    fn labels_unseen_in_training_count_as_misses() {
        let keys = Classification::fit_encoder(&labels(&["5", "6"]));
        let truth = labels(&["5", "6", "8"]);
        let metrics = Classification::evaluate(&keys, &array![0, 1, 1], None, &truth).unwrap();

        assert_abs_diff_eq!(metrics.micro_accuracy, 2. / 3.);
        assert_abs_diff_eq!(metrics.macro_accuracy, 2. / 3.);
    }

    #[test]
    fn probabilities_of_the_true_class() {
        let keys = Classification::fit_encoder(&labels(&["a", "b"]));
        let truth = labels(&["a", "b"]);
        let probs = array![[0.5, 0.5], [0.5, 0.5]];
        let metrics =
            Classification::evaluate(&keys, &array![0, 1], Some(&probs), &truth).unwrap();

        assert_abs_diff_eq!(metrics.macro_accuracy, 1.);
        assert_abs_diff_eq!(metrics.log_loss, 2f64.ln(), epsilon = 1e-12);
        assert_abs_diff_eq!(metrics.log_loss_reduction, 0., epsilon = 1e-12);
    }

    #[test]
    fn regression_is_identity() {
        let encoder = Regression::fit_encoder(&[1., 2.]);
        assert_eq!(
            Regression::encode(&encoder, &[1., 2.]).unwrap(),
            array![1., 2.]
        );
        assert_abs_diff_eq!(Regression::decode(&encoder, &3.5), 3.5);
    }
}
