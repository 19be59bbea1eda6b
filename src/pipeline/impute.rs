//! Replacement of missing numeric values

use ndarray::{ArrayBase, Data, Ix1};
use serde::{Deserialize, Serialize};

/// Replaces `NaN` with the mean of the non-missing training values
///
/// A column without a single observed value imputes zero.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MeanImputer {
    mean: f64,
}

impl MeanImputer {
    pub fn fit<D: Data<Elem = f64>>(column: &ArrayBase<D, Ix1>) -> Self {
        let (sum, count) = column
            .iter()
            .filter(|v| !v.is_nan())
            .fold((0.0, 0usize), |(sum, count), &v| (sum + v, count + 1));

        let mean = if count == 0 { 0.0 } else { sum / count as f64 };

        MeanImputer { mean }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn impute(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.mean
        } else {
            value
        }
    }
}
