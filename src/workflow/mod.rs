//! Batch jobs comparing candidates on a pair of dataset files

mod bike;
mod wine;

use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use crate::candidate::Candidate;
use crate::error::Result;
use crate::harness::{Leaderboard, SelectionHarness};
use crate::pipeline::FeaturePipelineParams;
use crate::report::Reporter;
use crate::sample::Sample;

pub use bike::bike_sharing_pipeline;
pub use wine::wine_quality_pipeline;

/// Locations of the datasets and of the artifact of a workflow
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkflowConfig {
    pub training_data: PathBuf,
    pub test_data: PathBuf,
    pub artifact: PathBuf,
}

impl WorkflowConfig {
    pub fn new(
        training_data: impl Into<PathBuf>,
        test_data: impl Into<PathBuf>,
        artifact: impl Into<PathBuf>,
    ) -> Self {
        WorkflowConfig {
            training_data: training_data.into(),
            test_data: test_data.into(),
            artifact: artifact.into(),
        }
    }

    pub fn bike_sharing_demand() -> Self {
        Self::new(
            "Data/hour_train.csv",
            "Data/hour_test.csv",
            "BikeSharingDemandsModel.bin",
        )
    }

    pub fn wine_quality() -> Self {
        Self::new(
            "Data/winequality_white_train.csv",
            "Data/winequality_white_test.csv",
            "WineQualityModel.bin",
        )
    }

    /// Resolve relative paths against `dir`
    pub fn relative_to<P: AsRef<Path>>(&self, dir: P) -> Self {
        let dir = dir.as_ref();
        WorkflowConfig {
            training_data: dir.join(&self.training_data),
            test_data: dir.join(&self.test_data),
            artifact: dir.join(&self.artifact),
        }
    }
}

impl<S: Sample> SelectionHarness<S> {
    /// Run all candidates, report every outcome, then preview and save the winner
    pub fn run_workflow<C, I, W>(
        &self,
        config: &WorkflowConfig,
        candidates: I,
        reporter: &mut Reporter<W>,
    ) -> Result<Leaderboard<S, C>>
    where
        C: Candidate<Task = S::Task>,
        I: IntoIterator<Item = C>,
        W: Write,
    {
        let leaderboard = self.run_all(candidates, &config.training_data, &config.test_data)?;
        leaderboard.report(reporter)?;

        let best = leaderboard.select_best()?;
        info!("best model is {}", best.name());
        self.report_and_finalize(best, &config.test_data, &config.artifact, reporter)?;

        Ok(leaderboard)
    }
}

/// Run a workflow with the default harness parameters
pub fn run_workflow<S, C, I, W>(
    config: &WorkflowConfig,
    pipeline: FeaturePipelineParams,
    candidates: I,
    reporter: &mut Reporter<W>,
) -> Result<Leaderboard<S, C>>
where
    S: Sample,
    C: Candidate<Task = S::Task>,
    I: IntoIterator<Item = C>,
    W: Write,
{
    SelectionHarness::new(pipeline)?.run_workflow(config, candidates, reporter)
}
