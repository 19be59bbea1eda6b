//! Quality measures of a trained model on held-out data
//!
//! Regression errors come from `linfa`, the classification measures are computed on decoded
//! label texts so that classes which were never predicted still count.

use std::collections::BTreeMap;

use linfa::prelude::SingleTargetRegression;
use ndarray::Array1;

use crate::error::Result;

/// Probabilities are clipped to `[EPSILON, 1]` before taking the logarithm
pub const LOG_LOSS_EPSILON: f64 = 1e-15;

/// Common view of a metric set, used for ranking and reporting
pub trait MetricSet: std::fmt::Debug + Clone {
    /// Score used to rank candidates, higher is better
    fn primary_score(&self) -> f64;

    /// Name of the primary score
    fn primary_name(&self) -> &'static str;

    /// All values with their labels, in reporting order
    fn values(&self) -> Vec<(&'static str, f64)>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionMetrics {
    pub r_squared: f64,
    pub mean_absolute_error: f64,
    pub mean_squared_error: f64,
    pub root_mean_squared_error: f64,
}

impl RegressionMetrics {
    pub fn from_predictions(predicted: &Array1<f64>, truth: &Array1<f64>) -> Result<Self> {
        let mean_squared_error = predicted.mean_squared_error(truth)?;

        Ok(RegressionMetrics {
            r_squared: predicted.r2(truth)?,
            mean_absolute_error: predicted.mean_absolute_error(truth)?,
            mean_squared_error,
            root_mean_squared_error: mean_squared_error.sqrt(),
        })
    }
}

impl MetricSet for RegressionMetrics {
    fn primary_score(&self) -> f64 {
        self.r_squared
    }

    fn primary_name(&self) -> &'static str {
        "R2 Score"
    }

    fn values(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("R2 Score", self.r_squared),
            ("Absolute loss", self.mean_absolute_error),
            ("Squared loss", self.mean_squared_error),
            ("RMS loss", self.root_mean_squared_error),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationMetrics {
    /// Mean of the per-class recalls over the classes present in the truth
    pub macro_accuracy: f64,
    /// Fraction of correctly classified samples
    pub micro_accuracy: f64,
    pub log_loss: f64,
    /// Relative improvement of the log loss over predicting the class frequencies
    pub log_loss_reduction: f64,
}

impl ClassificationMetrics {
    /// Compare predicted with true labels
    ///
    /// `true_class_probabilities[i]` is the probability the model assigned to the true label of
    /// sample `i`.
    pub fn from_predictions<L: AsRef<str>>(
        predicted: &[L],
        truth: &[L],
        true_class_probabilities: &[f64],
    ) -> Result<Self> {
        let n = truth.len();
        if n == 0 || predicted.len() != n || true_class_probabilities.len() != n {
            return Err(linfa::Error::NotEnoughSamples.into());
        }

        let mut per_class: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        let mut correct = 0;
        for (p, t) in predicted.iter().zip(truth) {
            let hit = p.as_ref() == t.as_ref();
            let class = per_class.entry(t.as_ref()).or_insert((0, 0));
            class.1 += 1;
            if hit {
                class.0 += 1;
                correct += 1;
            }
        }

        let micro_accuracy = correct as f64 / n as f64;
        let macro_accuracy = per_class
            .values()
            .map(|&(hits, total)| hits as f64 / total as f64)
            .sum::<f64>()
            / per_class.len() as f64;

        let log_loss = true_class_probabilities
            .iter()
            .map(|p| -p.max(LOG_LOSS_EPSILON).min(1.0).ln())
            .sum::<f64>()
            / n as f64;

        let prior_log_loss = per_class
            .values()
            .map(|&(_, total)| {
                let p = total as f64 / n as f64;
                -(total as f64) * p.ln()
            })
            .sum::<f64>()
            / n as f64;

        let log_loss_reduction = if prior_log_loss > 0.0 {
            (prior_log_loss - log_loss) / prior_log_loss
        } else {
            0.0
        };

        Ok(ClassificationMetrics {
            macro_accuracy,
            micro_accuracy,
            log_loss,
            log_loss_reduction,
        })
    }
}

impl MetricSet for ClassificationMetrics {
    fn primary_score(&self) -> f64 {
        self.macro_accuracy
    }

    fn primary_name(&self) -> &'static str {
        "Accuracy Macro"
    }

    fn values(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Accuracy Macro", self.macro_accuracy),
            ("Accuracy Micro", self.micro_accuracy),
            ("Log Loss", self.log_loss),
            ("Log Loss Reduction", self.log_loss_reduction),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn regression_errors() {
        let metrics =
            RegressionMetrics::from_predictions(&array![1., 2., 3., 4.], &array![1., 2., 3., 6.])
                .unwrap();

        assert_abs_diff_eq!(metrics.mean_absolute_error, 0.5);
        assert_abs_diff_eq!(metrics.mean_squared_error, 1.0);
        assert_abs_diff_eq!(metrics.root_mean_squared_error, 1.0);
        // truth variance: mean 3, squared deviations 4 + 1 + 0 + 9
        assert_abs_diff_eq!(metrics.r_squared, 1. - 4. / 14., epsilon = 1e-9);
        assert_abs_diff_eq!(metrics.primary_score(), metrics.r_squared);
    }

    #[test]
    fn macro_accuracy_weights_classes_equally() {
        let truth = ["a", "a", "a", "b"];
        let predicted = ["a", "a", "a", "a"];
        let metrics =
            ClassificationMetrics::from_predictions(&predicted, &truth, &[1., 1., 1., 0.]).unwrap();

        assert_abs_diff_eq!(metrics.micro_accuracy, 0.75);
        assert_abs_diff_eq!(metrics.macro_accuracy, 0.5);
    }

    #[test]
    fn log_loss_is_clipped() {
        let truth = ["a", "b"];
        let metrics =
            ClassificationMetrics::from_predictions(&truth, &truth, &[1., 0.]).unwrap();

        assert_abs_diff_eq!(metrics.log_loss, -(1e-15f64).ln() / 2., epsilon = 1e-9);
        assert!(metrics.log_loss.is_finite());
    }

    #[test]
    fn log_loss_reduction_against_class_frequencies() {
        let truth = ["a", "b"];
        let metrics =
            ClassificationMetrics::from_predictions(&truth, &truth, &[0.5, 0.5]).unwrap();
        assert_abs_diff_eq!(metrics.log_loss_reduction, 0., epsilon = 1e-12);

        let metrics =
            ClassificationMetrics::from_predictions(&truth, &truth, &[1., 1.]).unwrap();
        assert_abs_diff_eq!(metrics.log_loss_reduction, 1., epsilon = 1e-12);

        // single class, prior loss is zero
        let truth = ["a", "a"];
        let metrics =
            ClassificationMetrics::from_predictions(&truth, &truth, &[0.9, 0.9]).unwrap();
        assert_abs_diff_eq!(metrics.log_loss_reduction, 0.);
    }

    #[test]
    fn empty_input_is_rejected() {
        let empty: [&str; 0] = [];
        assert!(ClassificationMetrics::from_predictions(&empty, &empty, &[]).is_err());
    }
}
