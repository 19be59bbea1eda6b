use std::collections::HashSet;

use linfa::ParamGuard;

use crate::error::{Error, Result};

/// How a raw column enters the feature vector
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    /// Nominal column, expanded into one indicator feature per category seen during fitting
    OneHot,
    /// Numeric column, missing values are replaced by the training mean
    Numeric,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    name: String,
    kind: ColumnKind,
}

impl Column {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }
}

/// A verified feature pipeline declaration
///
/// See [`FeaturePipelineParams`](crate::pipeline::FeaturePipelineParams) for more information.
#[derive(Clone, Debug, PartialEq)]
pub struct FeaturePipelineValidParams {
    columns: Vec<Column>,
    min_max: Option<(f64, f64)>,
    drop_first: bool,
}

impl FeaturePipelineValidParams {
    /// Raw columns in declaration order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Target range of the numeric columns, if they are normalized
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.min_max
    }

    /// Whether one-hot columns leave out the indicator of their first category
    pub fn drop_first(&self) -> bool {
        self.drop_first
    }
}

/// Declaration of the column transformations shared by every candidate
///
/// Columns are declared in the order in which the samples provide their raw values. The fitted
/// pipeline concatenates the transformed columns in the same order, one-hot columns expanded in
/// place.
///
/// ```rust
/// use linfa_selection::pipeline::FeaturePipelineParams;
///
/// let params = FeaturePipelineParams::new()
///     .one_hot("season")
///     .numeric("temperature")
///     .normalize();
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FeaturePipelineParams(FeaturePipelineValidParams);

impl Default for FeaturePipelineParams {
    fn default() -> Self {
        Self::new()
    }
}

impl FeaturePipelineParams {
    pub fn new() -> Self {
        Self(FeaturePipelineValidParams {
            columns: Vec::new(),
            min_max: None,
            drop_first: false,
        })
    }

    /// Append a nominal column
    pub fn one_hot(self, name: impl Into<String>) -> Self {
        self.column(name, ColumnKind::OneHot)
    }

    /// Append a numeric column
    pub fn numeric(self, name: impl Into<String>) -> Self {
        self.column(name, ColumnKind::Numeric)
    }

    pub fn column(mut self, name: impl Into<String>, kind: ColumnKind) -> Self {
        self.0.columns.push(Column {
            name: name.into(),
            kind,
        });
        self
    }

    /// Encode the first category of every one-hot column as all zeros
    ///
    /// Without it the indicators of a column always sum to one, which makes them collinear with
    /// an intercept.
    pub fn drop_first(mut self) -> Self {
        self.0.drop_first = true;
        self
    }

    /// Scale numeric columns to `[0, 1]` with the minimum and maximum of the training data
    pub fn normalize(self) -> Self {
        self.min_max_range(0.0, 1.0)
    }

    /// Scale numeric columns to `[min, max]` with the minimum and maximum of the training data
    pub fn min_max_range(mut self, min: f64, max: f64) -> Self {
        self.0.min_max = Some((min, max));
        self
    }
}

impl ParamGuard for FeaturePipelineParams {
    type Checked = FeaturePipelineValidParams;
    type Error = Error;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.columns.is_empty() {
            return Err(Error::Parameters(
                "feature pipeline declares no columns".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        if let Some(column) = self.0.columns.iter().find(|c| !seen.insert(c.name.as_str())) {
            return Err(Error::Parameters(format!(
                "column {} is declared twice",
                column.name
            )));
        }

        match self.0.min_max {
            Some((min, max)) if !(min < max) => Err(Error::Parameters(format!(
                "normalization range [{}, {}] is empty",
                min, max
            ))),
            _ => Ok(&self.0),
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
