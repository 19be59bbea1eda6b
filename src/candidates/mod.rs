//! Learning algorithms of `linfa` wrapped as candidates

mod classification;
mod regression;

pub use classification::{Classifier, FittedClassifier};
pub use regression::{FittedRegressor, Regressor};
