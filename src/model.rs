//! Lifecycle of a single candidate
//!
//! A [`TrainableModel`] starts untrained, is fitted exactly once on a training file and can then
//! be evaluated, queried and persisted. The trained state, a [`TrainedModel`], bundles the fitted
//! feature pipeline, the label encoding and the fitted learning algorithm, so a restored artifact
//! predicts exactly like the model it was saved from.

use std::marker::PhantomData;
use std::path::Path;
use std::time::Instant;

use linfa::traits::Fit;
use linfa::{Dataset, ParamGuard};
use linfa_selection_datasets::load_samples;
use log::{debug, info};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::artifact;
use crate::candidate::{Candidate, Predictor};
use crate::error::{Error, Result};
use crate::pipeline::{FeaturePipeline, FeaturePipelineParams};
use crate::sample::{self, Sample};
use crate::task::Task;

type Label<S> = <<S as Sample>::Task as Task>::Label;
type Metrics<S> = <<S as Sample>::Task as Task>::Metrics;

/// Output of a single prediction, decoded to the label type of the samples
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction<L> {
    pub value: L,
}

/// Fitted pipeline and learning algorithm of a candidate
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TrainedModel<S: Sample, C: Candidate<Task = S::Task>> {
    name: String,
    pipeline: FeaturePipeline,
    encoder: <S::Task as Task>::Encoder,
    model: C::Trained,
    #[serde(skip)]
    sample: PhantomData<S>,
}

impl<S: Sample, C: Candidate<Task = S::Task>> TrainedModel<S, C> {
    /// Restore a model written by [`save`](TrainedModel::save)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        artifact::read(path)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        artifact::write(path, self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pipeline(&self) -> &FeaturePipeline {
        &self.pipeline
    }

    pub fn model(&self) -> &C::Trained {
        &self.model
    }

    fn features(&self, samples: &[S]) -> Result<Array2<f64>> {
        self.pipeline.try_transform(&sample::records(samples)?)
    }

    pub fn predict(&self, sample: &S) -> Result<Prediction<Label<S>>> {
        let features = self.features(std::slice::from_ref(sample))?;
        let predicted = self.model.predict(&features);

        Ok(Prediction {
            value: <S::Task as Task>::decode(&self.encoder, &predicted[0]),
        })
    }

    /// Predict every sample, in input order
    pub fn predict_batch(&self, samples: &[S]) -> Result<Vec<Prediction<Label<S>>>> {
        if samples.is_empty() {
            return Ok(Vec::new());
        }

        let features = self.features(samples)?;
        Ok(self
            .model
            .predict(&features)
            .iter()
            .map(|target| Prediction {
                value: <S::Task as Task>::decode(&self.encoder, target),
            })
            .collect())
    }

    /// Score the model on labelled samples, fails with `NoSamples` if there are none
    pub fn evaluate_samples(&self, samples: &[S]) -> Result<Metrics<S>> {
        if samples.is_empty() {
            return Err(Error::NoSamples);
        }

        let features = self.features(samples)?;
        let predicted = self.model.predict(&features);
        let probabilities = self.model.predict_probabilities(&features);

        <S::Task as Task>::evaluate(
            &self.encoder,
            &predicted,
            probabilities.as_ref(),
            &sample::labels(samples),
        )
    }
}

/// Single-sample prediction bound to a trained model
pub struct PredictionEngine<'a, S: Sample, C: Candidate<Task = S::Task>> {
    trained: &'a TrainedModel<S, C>,
}

impl<'a, S: Sample, C: Candidate<Task = S::Task>> PredictionEngine<'a, S, C> {
    pub fn predict(&self, sample: &S) -> Result<Prediction<Label<S>>> {
        self.trained.predict(sample)
    }
}

/// A candidate together with the feature pipeline it is trained with
pub struct TrainableModel<S: Sample, C: Candidate<Task = S::Task>> {
    name: String,
    candidate: C,
    pipeline: FeaturePipelineParams,
    trained: Option<TrainedModel<S, C>>,
}

impl<S: Sample, C: Candidate<Task = S::Task>> TrainableModel<S, C> {
    pub fn new(candidate: C, pipeline: FeaturePipelineParams) -> Self {
        TrainableModel {
            name: candidate.name(),
            candidate,
            pipeline,
            trained: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn candidate(&self) -> &C {
        &self.candidate
    }

    pub fn is_trained(&self) -> bool {
        self.trained.is_some()
    }

    /// The trained state, fails with `UntrainedModel` before [`fit`](TrainableModel::fit)
    pub fn trained(&self) -> Result<&TrainedModel<S, C>> {
        self.trained
            .as_ref()
            .ok_or_else(|| Error::UntrainedModel(self.name.clone()))
    }

    /// Learn the pipeline statistics and the candidate from a training file
    ///
    /// A model is fitted once, fitting it again fails with `AlreadyTrained`.
    pub fn fit<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        if self.trained.is_some() {
            return Err(Error::AlreadyTrained(self.name.clone()));
        }

        let start = Instant::now();
        let samples: Vec<S> = load_samples(path)?;
        if samples.is_empty() {
            return Err(Error::EmptyDataset(path.to_path_buf()));
        }

        let labels = sample::labels(&samples);
        let encoder = <S::Task as Task>::fit_encoder(&labels);
        let raw = Dataset::new(
            sample::records(&samples)?,
            <S::Task as Task>::encode(&encoder, &labels)?,
        );

        let pipeline = self.pipeline.check_ref()?.fit(&raw)?;
        let features = pipeline.try_transform(raw.records())?;
        debug!(
            "{}: {} samples, {} raw columns, {} features",
            self.name,
            features.nrows(),
            pipeline.ncolumns(),
            pipeline.nfeatures()
        );

        let dataset =
            Dataset::new(features, raw.targets).with_feature_names(pipeline.feature_names());
        let model = self.candidate.fit(&dataset)?;
        info!(
            "trained {} in {:.2}s",
            self.name,
            start.elapsed().as_secs_f64()
        );

        self.trained = Some(TrainedModel {
            name: self.name.clone(),
            pipeline,
            encoder,
            model,
            sample: PhantomData,
        });

        Ok(())
    }

    pub fn predictor(&self) -> Result<PredictionEngine<'_, S, C>> {
        Ok(PredictionEngine {
            trained: self.trained()?,
        })
    }

    pub fn predict(&self, sample: &S) -> Result<Prediction<Label<S>>> {
        self.predictor()?.predict(sample)
    }

    /// Score the trained model on a labelled test file
    pub fn evaluate<P: AsRef<Path>>(&self, path: P) -> Result<Metrics<S>> {
        let path = path.as_ref();
        let trained = self.trained()?;

        let samples: Vec<S> = load_samples(path)?;
        if samples.is_empty() {
            return Err(Error::EmptyDataset(path.to_path_buf()));
        }

        trained.evaluate_samples(&samples)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.trained()?.save(path)
    }
}
