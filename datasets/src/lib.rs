//! `linfa-selection-datasets` turns the delimited text files of the benchmark workflows into typed samples.
//!
//! ## The Big Picture
//!
//! `linfa-selection-datasets` is a crate in the [`linfa`](https://crates.io/crates/linfa) ecosystem, an effort to create a toolkit for classical Machine Learning implemented in pure Rust, akin to Python's `scikit-learn`.
//!
//! ## Current State
//!
//! The following record types are provided:
//!
//! * [`BikeSharingDemandSample`]: hourly bike rental counts (regression)
//! * [`WineQualitySample`]: white wine quality grades (classification)
//!
//! Both are read with the same streaming reader. The first line of every file is a header and
//! skipped, every other line must convert to a record or the read fails with a [`ParseError`].
//!
//! ## Reading a dataset
//!
//! ```no_run
//! use linfa_selection_datasets::{read_samples, WineQualitySample};
//!
//! for sample in read_samples::<WineQualitySample, _>("Data/winequality_white_train.csv")? {
//!     let sample = sample?;
//!     println!("{} -> {}", sample.alcohol, sample.label);
//! }
//! # Ok::<(), linfa_selection_datasets::ParseError>(())
//! ```

mod bike;
mod error;
mod reader;
mod wine;

pub use bike::BikeSharingDemandSample;
pub use error::{ParseError, Result};
pub use reader::{load_samples, read_samples, read_samples_from, Fields, FromRecord, SampleIter};
pub use wine::WineQualitySample;
