//! linfa-selection prelude.
//!
//! This module contains the most used types, traits and functions that you can import easily
//! as a group.
//!

#[doc(no_inline)]
pub use crate::error::{Error, Result};

#[doc(no_inline)]
pub use crate::candidate::{Candidate, Predictor};

#[doc(no_inline)]
pub use crate::candidates::{Classifier, Regressor};

#[doc(no_inline)]
pub use crate::harness::{FailurePolicy, HarnessParams, Leaderboard, Outcome, SelectionHarness};

#[doc(no_inline)]
pub use crate::metrics::{ClassificationMetrics, MetricSet, RegressionMetrics};

#[doc(no_inline)]
pub use crate::model::{Prediction, TrainableModel, TrainedModel};

#[doc(no_inline)]
pub use crate::pipeline::{FeaturePipeline, FeaturePipelineParams};

#[doc(no_inline)]
pub use crate::report::Reporter;

#[doc(no_inline)]
pub use crate::sample::Sample;

#[doc(no_inline)]
pub use crate::task::{Classification, Regression, Task};

#[doc(no_inline)]
pub use crate::workflow::{
    bike_sharing_pipeline, run_workflow, wine_quality_pipeline, WorkflowConfig,
};
