//! Feature pipeline shared by all candidates
//!
//! The pipeline turns the raw column values of a sample into the feature vector consumed by the
//! learning algorithms. Nominal columns are one-hot encoded, numeric columns are imputed and
//! optionally scaled to a fixed range. Every statistic is learned from the training data only and
//! stored with the fitted pipeline, so prediction and evaluation apply exactly the same mapping.
//!
//! ```rust
//! use linfa::prelude::*;
//! use linfa_selection::pipeline::FeaturePipelineParams;
//! use ndarray::array;
//!
//! let raw = Dataset::new(array![[1., 10.], [2., 20.], [1., 30.]], array![0., 1., 2.]);
//! let pipeline = FeaturePipelineParams::new()
//!     .one_hot("season")
//!     .numeric("temperature")
//!     .normalize()
//!     .fit(&raw)?;
//!
//! let features = pipeline.transform(raw.records());
//! assert_eq!(features.row(1).to_vec(), vec![0., 1., 0.5]);
//! # Ok::<(), linfa_selection::Error>(())
//! ```

mod hyperparams;
mod impute;
mod label;
mod one_hot;

use linfa::dataset::DatasetBase;
use linfa::traits::{Fit, Transformer};
use linfa_preprocessing::linear_scaling::LinearScaler;
use ndarray::{s, Array2, ArrayBase, ArrayView1, Data, Ix2, Zip};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use hyperparams::{Column, ColumnKind, FeaturePipelineParams, FeaturePipelineValidParams};
pub use impute::MeanImputer;
pub use label::LabelKeys;
pub use one_hot::OneHotEncoder;

#[derive(Serialize, Deserialize, Debug, Clone)]
enum Stage {
    OneHot(OneHotEncoder),
    Numeric(MeanImputer),
}

impl Stage {
    fn width(&self) -> usize {
        match self {
            Stage::OneHot(enc) => enc.width(),
            Stage::Numeric(_) => 1,
        }
    }
}

/// Imputed values of the numeric columns, in declaration order
fn impute_numeric<D: Data<Elem = f64>>(
    stages: &[Stage],
    records: &ArrayBase<D, Ix2>,
) -> Array2<f64> {
    let numeric: Vec<(&MeanImputer, ArrayView1<'_, f64>)> = stages
        .iter()
        .zip(records.columns())
        .filter_map(|(stage, values)| match stage {
            Stage::Numeric(imputer) => Some((imputer, values)),
            Stage::OneHot(_) => None,
        })
        .collect();

    let mut block = Array2::zeros((records.nrows(), numeric.len()));
    for (mut out, (imputer, values)) in block.columns_mut().into_iter().zip(numeric) {
        Zip::from(&mut out)
            .and(&values)
            .for_each(|out, &v| *out = imputer.impute(v));
    }

    block
}

/// A fitted feature pipeline
///
/// Maps records with one column per declared raw column to the concatenated feature matrix.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FeaturePipeline {
    names: Vec<String>,
    stages: Vec<Stage>,
    scaler: Option<LinearScaler<f64>>,
}

impl FeaturePipeline {
    /// Number of raw columns the pipeline expects
    pub fn ncolumns(&self) -> usize {
        self.stages.len()
    }

    /// Number of features the pipeline produces
    pub fn nfeatures(&self) -> usize {
        self.stages.iter().map(Stage::width).sum()
    }

    /// Min-max scaler of the numeric columns, if the pipeline normalizes them
    pub fn scaler(&self) -> Option<&LinearScaler<f64>> {
        self.scaler.as_ref()
    }

    /// Feature names in output order, indicators are named `column=category`
    pub fn feature_names(&self) -> Vec<String> {
        self.names
            .iter()
            .zip(&self.stages)
            .flat_map(|(name, stage)| match stage {
                Stage::OneHot(enc) => enc
                    .indicators()
                    .iter()
                    .map(|c| format!("{}={}", name, c))
                    .collect(),
                Stage::Numeric(_) => vec![name.clone()],
            })
            .collect()
    }

    /// Transform records after checking their width
    pub fn try_transform<D: Data<Elem = f64>>(
        &self,
        records: &ArrayBase<D, Ix2>,
    ) -> Result<Array2<f64>> {
        if records.ncols() != self.ncolumns() {
            return Err(Error::SchemaMismatch {
                expected: self.ncolumns(),
                found: records.ncols(),
            });
        }

        Ok(self.transform(records))
    }
}

impl<D: Data<Elem = f64>, T> Fit<ArrayBase<D, Ix2>, T, Error> for FeaturePipelineValidParams {
    type Object = FeaturePipeline;

    /// Learn the categories, means and ranges of the training records
    ///
    /// Fails if the dataset is empty or its width differs from the declared columns.
    fn fit(&self, dataset: &DatasetBase<ArrayBase<D, Ix2>, T>) -> Result<Self::Object> {
        let records = dataset.records();
        if records.nrows() == 0 {
            return Err(linfa::Error::NotEnoughSamples.into());
        }
        if records.ncols() != self.columns().len() {
            return Err(Error::SchemaMismatch {
                expected: self.columns().len(),
                found: records.ncols(),
            });
        }

        let stages: Vec<Stage> = self
            .columns()
            .iter()
            .zip(records.columns())
            .map(|(column, values)| match column.kind() {
                ColumnKind::OneHot => Stage::OneHot(OneHotEncoder::fit(&values, self.drop_first())),
                ColumnKind::Numeric => Stage::Numeric(MeanImputer::fit(&values)),
            })
            .collect();

        let nnumeric = stages
            .iter()
            .filter(|stage| matches!(stage, Stage::Numeric(_)))
            .count();
        let scaler = match self.min_max() {
            Some((min, max)) if nnumeric > 0 => {
                let numeric = DatasetBase::from(impute_numeric(&stages, records));
                Some(
                    LinearScaler::min_max_range(min, max).fit(&numeric)?,
                )
            }
            _ => None,
        };

        Ok(FeaturePipeline {
            names: self
                .columns()
                .iter()
                .map(|c| c.name().to_string())
                .collect(),
            stages,
            scaler,
        })
    }
}

impl<D: Data<Elem = f64>> Transformer<&ArrayBase<D, Ix2>, Array2<f64>> for FeaturePipeline {
    /// Map raw records of size (nsamples, ncolumns) to features of size (nsamples, nfeatures)
    ///
    /// Panics if the number of columns differs from the fitted pipeline, use
    /// [`try_transform`](FeaturePipeline::try_transform) to get an error instead.
    fn transform(&self, records: &ArrayBase<D, Ix2>) -> Array2<f64> {
        assert_eq!(
            records.ncols(),
            self.ncolumns(),
            "records do not match the fitted pipeline"
        );

        let mut numeric = impute_numeric(&self.stages, records);
        if let Some(scaler) = &self.scaler {
            numeric = scaler.transform(numeric);
        }
        let mut numeric_columns = numeric.columns().into_iter();

        let mut features = Array2::zeros((records.nrows(), self.nfeatures()));
        let mut offset = 0;
        for (stage, values) in self.stages.iter().zip(records.columns()) {
            let width = stage.width();
            match stage {
                Stage::OneHot(enc) => {
                    enc.encode_into(&values, features.slice_mut(s![.., offset..offset + width]))
                }
                Stage::Numeric(_) => {
                    if let Some(column) = numeric_columns.next() {
                        features.column_mut(offset).assign(&column);
                    }
                }
            }
            offset += width;
        }

        features
    }
}
