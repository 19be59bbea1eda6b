//! `linfa-selection` trains several competing `linfa` models on the same data and keeps the best.
//!
//! ## The Big Picture
//!
//! Choosing a learning algorithm usually means fitting a handful of candidates through the same
//! preprocessing, scoring them on held-out data and persisting the winner. `linfa-selection`
//! wraps that loop:
//!
//! * typed samples are streamed from delimited text files by
//!   [`linfa-selection-datasets`](linfa_selection_datasets)
//! * a declarative [`FeaturePipeline`](pipeline::FeaturePipeline) one-hot encodes, imputes and
//!   scales the raw columns
//! * every [`Candidate`] is fitted in isolation and scored with the metrics of its [`Task`]
//! * the [`SelectionHarness`] collects the scores in a [`Leaderboard`], picks the best model,
//!   previews its predictions and saves it as a `bincode` artifact
//!
//! ## Current state
//!
//! Two workflows are provided, each with its own binary:
//!
//! * bike sharing demand, a regression over hourly rental counts compared with
//!   [`Regressor`]s from `linfa-linear` and `linfa-elasticnet`
//! * white wine quality, a classification of quality grades compared with [`Classifier`]s from
//!   `linfa-logistic`, `linfa-bayes` and `linfa-trees`
//!
//! ```no_run
//! use linfa_selection::prelude::*;
//! use linfa_selection_datasets::WineQualitySample;
//!
//! let harness = SelectionHarness::<WineQualitySample>::new(wine_quality_pipeline())?;
//! let leaderboard = harness.run_all(
//!     Classifier::all(),
//!     "Data/winequality_white_train.csv",
//!     "Data/winequality_white_test.csv",
//! )?;
//!
//! for (name, score) in leaderboard.scores() {
//!     println!("{}: {}", name, score);
//! }
//! leaderboard.select_best()?.save("WineQualityModel.bin")?;
//! # Ok::<(), linfa_selection::Error>(())
//! ```

mod artifact;
pub mod candidate;
pub mod candidates;
pub mod error;
pub mod harness;
pub mod metrics;
pub mod model;
pub mod pipeline;
pub mod prelude;
pub mod report;
mod sample;
pub mod task;
pub mod workflow;

pub use candidate::{Candidate, Predictor};
pub use candidates::{Classifier, FittedClassifier, FittedRegressor, Regressor};
pub use error::{Error, Result};
pub use harness::{FailurePolicy, HarnessParams, Leaderboard, SelectionHarness};
pub use model::{Prediction, TrainableModel, TrainedModel};
pub use sample::Sample;
pub use task::{Classification, Regression, Task};
pub use workflow::{run_workflow, WorkflowConfig};
