//! Training, scoring and selection of competing candidates
//!
//! Every candidate gets its own copy of the feature pipeline and is fitted and scored in
//! isolation. The scores end up in a [`Leaderboard`], which keeps the candidate order and records
//! failed candidates next to the scored ones.

use std::marker::PhantomData;
use std::path::Path;

use linfa::ParamGuard;
use linfa_selection_datasets::read_samples;
use log::{info, warn};

use crate::candidate::Candidate;
use crate::error::{Error, Result};
use crate::metrics::MetricSet;
use crate::model::TrainableModel;
use crate::pipeline::FeaturePipelineParams;
use crate::report::Reporter;
use crate::sample::Sample;
use crate::task::Task;

type Metrics<S> = <<S as Sample>::Task as Task>::Metrics;

/// What happens when a single candidate fails to train or evaluate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Record the failure and go on with the remaining candidates
    Continue,
    /// Stop the run with the error of the first failing candidate
    Abort,
}

/// A verified harness configuration
#[derive(Clone, Debug, PartialEq)]
pub struct HarnessValidParams {
    failure_policy: FailurePolicy,
    preview_rows: usize,
}

impl HarnessValidParams {
    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    pub fn preview_rows(&self) -> usize {
        self.preview_rows
    }
}

/// Harness configuration
///
/// | Name | Default | Purpose |
/// | :--- | :--- | :--- |
/// | [failure_policy](Self::failure_policy) | `Continue` | Handling of candidates which fail to train |
/// | [preview_rows](Self::preview_rows) | `10` | Number of test rows predicted by the winner in the report |
#[derive(Clone, Debug, PartialEq)]
pub struct HarnessParams(HarnessValidParams);

impl Default for HarnessParams {
    fn default() -> Self {
        Self::new()
    }
}

impl HarnessParams {
    pub fn new() -> Self {
        Self(HarnessValidParams {
            failure_policy: FailurePolicy::Continue,
            preview_rows: 10,
        })
    }

    pub fn failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.0.failure_policy = failure_policy;
        self
    }

    pub fn preview_rows(mut self, preview_rows: usize) -> Self {
        self.0.preview_rows = preview_rows;
        self
    }
}

impl ParamGuard for HarnessParams {
    type Checked = HarnessValidParams;
    type Error = Error;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.preview_rows == 0 {
            Err(Error::Parameters(
                "preview_rows should be positive".to_string(),
            ))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

pub enum Outcome<S: Sample, C: Candidate<Task = S::Task>> {
    Scored {
        model: TrainableModel<S, C>,
        metrics: Metrics<S>,
    },
    Failed(Error),
}

/// Result of a single candidate
pub struct Entry<S: Sample, C: Candidate<Task = S::Task>> {
    pub name: String,
    pub outcome: Outcome<S, C>,
}

impl<S: Sample, C: Candidate<Task = S::Task>> Entry<S, C> {
    /// Primary score, `None` for failed candidates
    pub fn score(&self) -> Option<f64> {
        match &self.outcome {
            Outcome::Scored { metrics, .. } => Some(metrics.primary_score()),
            Outcome::Failed(_) => None,
        }
    }
}

/// Results of all candidates, in candidate order
pub struct Leaderboard<S: Sample, C: Candidate<Task = S::Task>> {
    entries: Vec<Entry<S, C>>,
}

impl<S: Sample, C: Candidate<Task = S::Task>> Leaderboard<S, C> {
    pub fn entries(&self) -> &[Entry<S, C>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, primary score)` of the scored candidates
    pub fn scores(&self) -> Vec<(&str, f64)> {
        self.entries
            .iter()
            .filter_map(|e| e.score().map(|score| (e.name.as_str(), score)))
            .collect()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &Error)> {
        self.entries.iter().filter_map(|e| match &e.outcome {
            Outcome::Failed(err) => Some((e.name.as_str(), err)),
            Outcome::Scored { .. } => None,
        })
    }

    /// The scored model with the highest primary score
    ///
    /// Ties go to the earliest candidate, a `NaN` score ranks below every number.
    pub fn select_best(&self) -> Result<&TrainableModel<S, C>> {
        let idx =
            best_index(self.entries.iter().map(Entry::score)).ok_or(Error::NoCandidates)?;

        match &self.entries[idx].outcome {
            Outcome::Scored { model, .. } => Ok(model),
            Outcome::Failed(_) => Err(Error::NoCandidates),
        }
    }

    /// Write the metrics block or failure of every candidate
    pub fn report<W: std::io::Write>(&self, reporter: &mut Reporter<W>) -> Result<()> {
        for entry in &self.entries {
            match &entry.outcome {
                Outcome::Scored { metrics, .. } => reporter.metrics(&entry.name, metrics)?,
                Outcome::Failed(err) => reporter.failure(&entry.name, err)?,
            }
        }

        Ok(())
    }
}

/// Index of the first maximal score, skipping `None`
pub fn best_index<I: IntoIterator<Item = Option<f64>>>(scores: I) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (idx, score) in scores.into_iter().enumerate() {
        let score = match score {
            Some(score) => score,
            None => continue,
        };

        best = match best {
            None => Some((idx, score)),
            Some((_, current)) if current.is_nan() && !score.is_nan() => Some((idx, score)),
            Some((_, current)) if score > current => Some((idx, score)),
            keep => keep,
        };
    }

    best.map(|(idx, _)| idx)
}

/// Trains candidates through a shared pipeline declaration and picks the best
pub struct SelectionHarness<S> {
    pipeline: FeaturePipelineParams,
    params: HarnessValidParams,
    sample: PhantomData<S>,
}

impl<S: Sample> SelectionHarness<S> {
    pub fn new(pipeline: FeaturePipelineParams) -> Result<Self> {
        Self::with_params(pipeline, HarnessParams::default())
    }

    /// Fails with `Parameters` if either configuration is invalid
    pub fn with_params(pipeline: FeaturePipelineParams, params: HarnessParams) -> Result<Self> {
        pipeline.check_ref()?;

        Ok(SelectionHarness {
            pipeline,
            params: params.check()?,
            sample: PhantomData,
        })
    }

    pub fn params(&self) -> &HarnessValidParams {
        &self.params
    }

    /// Fit every candidate on `training` and score it on `test`
    ///
    /// Dataset errors abort the run since they hit every candidate. Other failures are handled
    /// according to the failure policy.
    pub fn run_all<C, I, P, Q>(
        &self,
        candidates: I,
        training: P,
        test: Q,
    ) -> Result<Leaderboard<S, C>>
    where
        C: Candidate<Task = S::Task>,
        I: IntoIterator<Item = C>,
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let mut entries = Vec::new();

        for candidate in candidates {
            let mut model = TrainableModel::<S, C>::new(candidate, self.pipeline.clone());
            let name = model.name().to_string();
            info!("fitting {}", name);

            let outcome = model
                .fit(training.as_ref())
                .and_then(|()| model.evaluate(test.as_ref()));

            let outcome = match outcome {
                Ok(metrics) => {
                    info!(
                        "{} scored {} {}",
                        name,
                        metrics.primary_name(),
                        metrics.primary_score()
                    );
                    Outcome::Scored { model, metrics }
                }
                Err(err)
                    if err.is_fatal() || self.params.failure_policy == FailurePolicy::Abort =>
                {
                    return Err(err)
                }
                Err(err) => {
                    warn!("{} failed: {}", name, err);
                    Outcome::Failed(err)
                }
            };

            entries.push(Entry { name, outcome });
        }

        Ok(Leaderboard { entries })
    }

    /// Preview predictions of the winner on the first test rows and persist it
    pub fn report_and_finalize<C, P, Q, W>(
        &self,
        best: &TrainableModel<S, C>,
        test: P,
        artifact: Q,
        reporter: &mut Reporter<W>,
    ) -> Result<()>
    where
        C: Candidate<Task = S::Task>,
        P: AsRef<Path>,
        Q: AsRef<Path>,
        W: std::io::Write,
    {
        let trained = best.trained()?;

        let mut rows = Vec::with_capacity(self.params.preview_rows);
        for sample in read_samples::<S, _>(test)?.take(self.params.preview_rows) {
            let sample = sample?;
            rows.push((trained.predict(&sample)?.value, sample.label()));
        }
        reporter.predictions(best.name(), &rows)?;

        let artifact = artifact.as_ref();
        best.save(artifact)?;
        info!("saved {} to {}", best.name(), artifact.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_maximum_wins() {
        assert_eq!(best_index(vec![Some(0.5), Some(0.7), Some(0.7)]), Some(1));
        assert_eq!(best_index(vec![Some(0.5), Some(0.5)]), Some(0));
    }

    #[test]
    fn failures_and_nan_rank_last() {
        assert_eq!(best_index(vec![None, Some(f64::NAN), Some(-3.0)]), Some(2));
        assert_eq!(best_index(vec![Some(f64::NAN), None]), Some(0));
        assert_eq!(best_index(vec![None, None]), None);
        assert_eq!(best_index(Vec::new()), None);
    }

    #[test]
    fn negative_scores_are_ranked() {
        assert_eq!(best_index(vec![Some(-2.0), Some(-1.0), None]), Some(1));
    }

    #[test]
    fn preview_rows_must_be_positive() {
        assert!(HarnessParams::new().preview_rows(0).check().is_err());
        let params = HarnessParams::new()
            .failure_policy(FailurePolicy::Abort)
            .check()
            .unwrap();
        assert_eq!(params.failure_policy(), FailurePolicy::Abort);
        assert_eq!(params.preview_rows(), 10);
    }
}
