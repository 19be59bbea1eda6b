use linfa_selection_datasets::FromRecord;
use ndarray::Array2;

use crate::error::{Error, Result};
use crate::task::Task;

/// A typed dataset row which can be fed through a feature pipeline
pub trait Sample: FromRecord {
    type Task: Task;

    /// Raw column values in the declaration order of the pipeline, `NaN` for missing values
    fn features(&self) -> Vec<f64>;

    fn label(&self) -> <Self::Task as Task>::Label;
}

/// Stack the raw features of `samples` into a records matrix
pub(crate) fn records<S: Sample>(samples: &[S]) -> Result<Array2<f64>> {
    let ncols = samples.first().map_or(0, |s| s.features().len());

    let mut values = Vec::with_capacity(samples.len() * ncols);
    for sample in samples {
        let features = sample.features();
        if features.len() != ncols {
            return Err(Error::SchemaMismatch {
                expected: ncols,
                found: features.len(),
            });
        }
        values.extend(features);
    }

    Ok(Array2::from_shape_vec((samples.len(), ncols), values)?)
}

pub(crate) fn labels<S: Sample>(samples: &[S]) -> Vec<<S::Task as Task>::Label> {
    samples.iter().map(Sample::label).collect()
}
