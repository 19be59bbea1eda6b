//! Error types in linfa-selection
//!

use std::path::PathBuf;

use linfa_preprocessing::error::PreprocessingError;
use linfa_selection_datasets::ParseError;
use ndarray::ShapeError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("model {0} has not been trained")]
    UntrainedModel(String),
    #[error("model {0} is already trained, a model can only be fitted once")]
    AlreadyTrained(String),
    #[error("training {candidate} failed: {reason}")]
    TrainingFailure { candidate: String, reason: String },
    #[error("could not write model artifact {path}: {source}")]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not read model artifact {path}: {source}")]
    ArtifactRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("model artifact encoding failed: {0}")]
    Serialization(#[from] bincode::Error),
    #[error("dataset {0} contains no samples")]
    EmptyDataset(PathBuf),
    #[error("no samples given")]
    NoSamples,
    #[error("sample provides {found} features, the pipeline declares {expected}")]
    SchemaMismatch { expected: usize, found: usize },
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[error("no candidate could be scored")]
    NoCandidates,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Linfa(#[from] linfa::Error),
    #[error(transparent)]
    Preprocessing(#[from] PreprocessingError),
    #[error("invalid ndarray shape {0}")]
    NdShape(#[from] ShapeError),
}

impl Error {
    /// Wrap an error of the learning algorithm of `candidate`
    pub fn training<E: std::fmt::Display>(candidate: &str) -> impl FnOnce(E) -> Error + '_ {
        move |err| Error::TrainingFailure {
            candidate: candidate.to_string(),
            reason: err.to_string(),
        }
    }

    /// Errors which end the whole run instead of a single candidate
    ///
    /// Unreadable, empty or malformed datasets affect every candidate alike.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Parse(_)
                | Error::Io(_)
                | Error::Parameters(_)
                | Error::Preprocessing(_)
                | Error::EmptyDataset(_)
                | Error::NoSamples
                | Error::SchemaMismatch { .. }
        )
    }
}
