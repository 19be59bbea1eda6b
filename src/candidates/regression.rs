use linfa::traits::{Fit, Predict};
use linfa::Dataset;
use linfa_elasticnet::ElasticNet;
use linfa_linear::{FittedLinearRegression, Link, LinearRegression, TweedieRegressor};
use ndarray::{Array1, Array2, Ix1};
use serde::{Deserialize, Serialize};

use crate::candidate::{Candidate, Predictor};
use crate::error::{Error, Result};
use crate::task::Regression;

/// Regression algorithms
#[derive(Debug, Clone, PartialEq)]
pub enum Regressor {
    /// Ordinary least squares
    LinearRegression,
    /// Elastic net with `penalty * (l1_ratio * L1 + (1 - l1_ratio) * L2)` regularization
    ElasticNet { penalty: f64, l1_ratio: f64 },
    Lasso { penalty: f64 },
    Ridge { penalty: f64 },
    /// Generalized linear model with Poisson distribution and log link
    PoissonRegression { alpha: f64, max_iter: usize },
    /// Generalized linear model with a Tweedie distribution of the given power and log link
    TweedieRegression { power: f64, alpha: f64, max_iter: usize },
}

impl Regressor {
    /// The regressors compared by the bike sharing demand workflow
    pub fn all() -> Vec<Regressor> {
        vec![
            Regressor::LinearRegression,
            Regressor::Ridge { penalty: 1.0 },
            Regressor::Lasso { penalty: 0.1 },
            Regressor::ElasticNet {
                penalty: 0.1,
                l1_ratio: 0.5,
            },
            Regressor::PoissonRegression {
                alpha: 0.0,
                max_iter: 300,
            },
            Regressor::TweedieRegression {
                power: 1.5,
                alpha: 0.0,
                max_iter: 300,
            },
        ]
    }
}

/// Model of a trained [`Regressor`]
#[derive(Serialize, Deserialize)]
pub enum FittedRegressor {
    Linear(FittedLinearRegression<f64>),
    ElasticNet(ElasticNet<f64>),
    Tweedie(TweedieRegressor<f64>),
}

impl Candidate for Regressor {
    type Task = Regression;
    type Trained = FittedRegressor;

    fn name(&self) -> String {
        match self {
            Regressor::LinearRegression => "LinearRegression",
            Regressor::ElasticNet { .. } => "ElasticNet",
            Regressor::Lasso { .. } => "Lasso",
            Regressor::Ridge { .. } => "Ridge",
            Regressor::PoissonRegression { .. } => "PoissonRegression",
            Regressor::TweedieRegression { .. } => "TweedieRegression",
        }
        .to_string()
    }

    fn fit(&self, dataset: &Dataset<f64, f64, Ix1>) -> Result<FittedRegressor> {
        let name = self.name();

        let fitted = match *self {
            Regressor::LinearRegression => FittedRegressor::Linear(
                LinearRegression::new()
                    .fit(dataset)
                    .map_err(Error::training(&name))?,
            ),
            Regressor::ElasticNet { penalty, l1_ratio } => FittedRegressor::ElasticNet(
                ElasticNet::<f64>::params()
                    .penalty(penalty)
                    .l1_ratio(l1_ratio)
                    .fit(dataset)
                    .map_err(Error::training(&name))?,
            ),
            Regressor::Lasso { penalty } => FittedRegressor::ElasticNet(
                ElasticNet::<f64>::lasso()
                    .penalty(penalty)
                    .fit(dataset)
                    .map_err(Error::training(&name))?,
            ),
            Regressor::Ridge { penalty } => FittedRegressor::ElasticNet(
                ElasticNet::<f64>::ridge()
                    .penalty(penalty)
                    .fit(dataset)
                    .map_err(Error::training(&name))?,
            ),
            Regressor::PoissonRegression { alpha, max_iter } => FittedRegressor::Tweedie(
                TweedieRegressor::<f64>::params()
                    .power(1.0)
                    .link(Link::Log)
                    .alpha(alpha)
                    .max_iter(max_iter)
                    .fit(dataset)
                    .map_err(Error::training(&name))?,
            ),
            Regressor::TweedieRegression {
                power,
                alpha,
                max_iter,
            } => FittedRegressor::Tweedie(
                TweedieRegressor::<f64>::params()
                    .power(power)
                    .link(Link::Log)
                    .alpha(alpha)
                    .max_iter(max_iter)
                    .fit(dataset)
                    .map_err(Error::training(&name))?,
            ),
        };

        Ok(fitted)
    }
}

impl Predictor<Regression> for FittedRegressor {
    fn predict(&self, features: &Array2<f64>) -> Array1<f64> {
        match self {
            FittedRegressor::Linear(model) => model.predict(features),
            FittedRegressor::ElasticNet(model) => model.predict(features),
            FittedRegressor::Tweedie(model) => model.predict(features),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Regressor;
    use crate::candidate::{Candidate, Predictor};
    use approx::assert_abs_diff_eq;
    use linfa::Dataset;
    use ndarray::{array, Ix1};

    fn line() -> Dataset<f64, f64, Ix1> {
        Dataset::new(
            array![[0.], [1.], [2.], [3.], [4.]],
            array![1., 3., 5., 7., 9.],
        )
    }

    #[test]
    fn names_follow_the_algorithm() {
        let names: Vec<String> = Regressor::all().iter().map(Candidate::name).collect();
        assert_eq!(
            names,
            vec![
                "LinearRegression",
                "Ridge",
                "Lasso",
                "ElasticNet",
                "PoissonRegression",
                "TweedieRegression"
            ]
        );
    }

    #[test]
    fn linear_regression_recovers_a_line() {
        let model = Regressor::LinearRegression.fit(&line()).unwrap();
        assert_abs_diff_eq!(
            model.predict(&array![[5.], [10.]]),
            array![11., 21.],
            epsilon = 1e-8
        );
        assert!(model.predict_probabilities(&array![[5.]]).is_none());
    }

    #[test]
    fn ridge_shrinks_towards_the_mean() {
        let model = Regressor::Ridge { penalty: 0.5 }.fit(&line()).unwrap();
        let prediction = model.predict(&array![[4.]]);
        assert!(prediction[0] < 9.0);
        assert!(prediction[0] > 5.0);
    }

    #[test]
    fn poisson_regression_predicts_positive_counts() {
        let dataset = Dataset::new(
            array![[0.], [1.], [2.], [3.]],
            array![1., 2., 4., 8.],
        );
        let model = Regressor::PoissonRegression {
            alpha: 0.0,
            max_iter: 300,
        }
        .fit(&dataset)
        .unwrap();

        let prediction = model.predict(&array![[1.5]]);
        assert!(prediction[0] > 2.0 && prediction[0] < 4.0);
    }
}
