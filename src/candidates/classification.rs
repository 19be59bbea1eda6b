use linfa::traits::{Fit, Predict};
use linfa::Dataset;
use linfa_bayes::GaussianNb;
use linfa_logistic::{MultiFittedLogisticRegression, MultiLogisticRegression};
use linfa_trees::{DecisionTree, SplitQuality};
use ndarray::{Array1, Array2, Ix1};
use serde::{Deserialize, Serialize};

use crate::candidate::{Candidate, Predictor};
use crate::error::{Error, Result};
use crate::task::Classification;

/// Multi-class classification algorithms
#[derive(Debug, Clone, PartialEq)]
pub enum Classifier {
    /// Multinomial logistic regression with L2 penalty `alpha`
    LogisticRegression { alpha: f64, max_iterations: u64 },
    GaussianNaiveBayes { var_smoothing: f64 },
    /// Decision tree grown with the Gini impurity
    DecisionTree {
        max_depth: Option<usize>,
        min_weight_leaf: f32,
    },
}

impl Classifier {
    /// The classifiers compared by the wine quality workflow
    pub fn all() -> Vec<Classifier> {
        vec![
            Classifier::LogisticRegression {
                alpha: 1.0,
                max_iterations: 100,
            },
            Classifier::GaussianNaiveBayes {
                var_smoothing: 1e-9,
            },
            Classifier::DecisionTree {
                max_depth: Some(12),
                min_weight_leaf: 2.0,
            },
        ]
    }
}

/// Model of a trained [`Classifier`]
#[derive(Serialize, Deserialize)]
pub enum FittedClassifier {
    LogisticRegression(MultiFittedLogisticRegression<f64, usize>),
    GaussianNaiveBayes(GaussianNb<f64, usize>),
    DecisionTree(DecisionTree<f64, usize>),
}

impl Candidate for Classifier {
    type Task = Classification;
    type Trained = FittedClassifier;

    fn name(&self) -> String {
        match self {
            Classifier::LogisticRegression { .. } => "LogisticRegression",
            Classifier::GaussianNaiveBayes { .. } => "GaussianNaiveBayes",
            Classifier::DecisionTree { .. } => "DecisionTree",
        }
        .to_string()
    }

    fn fit(&self, dataset: &Dataset<f64, usize, Ix1>) -> Result<FittedClassifier> {
        let name = self.name();

        let fitted = match *self {
            Classifier::LogisticRegression {
                alpha,
                max_iterations,
            } => FittedClassifier::LogisticRegression(
                MultiLogisticRegression::<f64>::default()
                    .alpha(alpha)
                    .max_iterations(max_iterations)
                    .fit(dataset)
                    .map_err(Error::training(&name))?,
            ),
            Classifier::GaussianNaiveBayes { var_smoothing } => {
                FittedClassifier::GaussianNaiveBayes(
                    GaussianNb::<f64, usize>::params()
                        .var_smoothing(var_smoothing)
                        .fit(dataset)
                        .map_err(Error::training(&name))?,
                )
            }
            Classifier::DecisionTree {
                max_depth,
                min_weight_leaf,
            } => FittedClassifier::DecisionTree(
                DecisionTree::<f64, usize>::params()
                    .split_quality(SplitQuality::Gini)
                    .max_depth(max_depth)
                    .min_weight_leaf(min_weight_leaf)
                    .fit(dataset)
                    .map_err(Error::training(&name))?,
            ),
        };

        Ok(fitted)
    }
}

impl Predictor<Classification> for FittedClassifier {
    fn predict(&self, features: &Array2<f64>) -> Array1<usize> {
        match self {
            FittedClassifier::LogisticRegression(model) => model.predict(features),
            FittedClassifier::GaussianNaiveBayes(model) => model.predict(features),
            FittedClassifier::DecisionTree(model) => model.predict(features),
        }
    }

    /// Only the logistic regression provides calibrated probabilities
    fn predict_probabilities(&self, features: &Array2<f64>) -> Option<Array2<f64>> {
        match self {
            FittedClassifier::LogisticRegression(model) => {
                Some(model.predict_probabilities(features))
            }
            _ => None,
        }
    }
}
