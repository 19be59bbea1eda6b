#![allow(dead_code)]

use std::path::PathBuf;

use linfa::Dataset;
use linfa_selection::prelude::*;
use linfa_selection::FittedRegressor;
use ndarray::{Array1, Array2, Ix1};
use serde::{Deserialize, Serialize};
use tempfile::TempDir;

pub const BIKE_HEADER: &str = "instant,dteday,season,yr,mnth,hr,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt";
pub const WINE_HEADER: &str = "\"fixed acidity\";\"volatile acidity\";\"citric acid\";\"residual sugar\";\"chlorides\";\"free sulfur dioxide\";\"total sulfur dioxide\";\"density\";\"pH\";\"sulphates\";\"alcohol\";\"quality\"";

/// One hour of rentals, everything but the hour of day fixed
pub fn bike_row(hour: i32, count: f32) -> String {
    format!(
        "1,2011-01-01,1,0,1,{},0,6,0,1,0.24,0.2879,0.81,0.0,3,13,{}",
        hour, count
    )
}

/// One wine, everything but the alcohol content fixed
pub fn wine_row(alcohol: f32, label: &str) -> String {
    format!(
        "7;0.27;0.36;20.7;0.045;45;170;1.001;3;0.45;{};{}",
        alcohol, label
    )
}

/// Temporary directory holding dataset fixtures
pub struct Fixtures {
    dir: TempDir,
}

impl Fixtures {
    pub fn new() -> Self {
        Fixtures {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, header: &str, rows: &[String]) -> PathBuf {
        let mut content = String::from(header);
        content.push('\n');
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }

        let path = self.path(name);
        std::fs::write(&path, content).unwrap();
        path
    }
}

/// Bike rentals at 8 o'clock (150) and 3 o'clock (50)
pub fn bike_rows(repeat: usize) -> Vec<String> {
    (0..repeat)
        .flat_map(|_| vec![bike_row(8, 150.0), bike_row(3, 50.0)])
        .collect()
}

/// Rentals over `n` hours with calendar, weather and measurements varying independently
///
/// The codes cycle with coprime periods, so no one-hot block is a combination of the others.
pub fn varied_bike_rows(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let season = i % 4 + 1;
            let year = (2 * i >= n) as usize;
            let month = i % 5 + 1;
            let hour = (i % 3) * 8;
            let holiday = (i % 11 == 0) as usize;
            let weekday = (i / 60) % 7;
            let workingday = (holiday == 0 && weekday % 6 != 0) as usize;
            let weather = i % 7 + 1;
            let temp = ((i * 37) % 101) as f32 / 101.0;
            let atemp = ((i * 53) % 103) as f32 / 103.0;
            let humidity = ((i * 29) % 107) as f32 / 107.0;
            let windspeed = ((i * 17) % 109) as f32 / 109.0;
            let count = 40 + 5 * hour + 8 * season + (60.0 * temp + 20.0 * humidity) as usize;

            format!(
                "{},2011-01-01,{},{},{},{},{},{},{},{},{},{},{},{},0,{},{}",
                i + 1,
                season,
                year,
                month,
                hour,
                holiday,
                weekday,
                workingday,
                weather,
                temp,
                atemp,
                humidity,
                windspeed,
                count,
                count
            )
        })
        .collect()
}

/// Wines graded "good" above 12% alcohol and "bad" below 9%
pub fn wine_rows(alcohols: &[f32]) -> Vec<String> {
    alcohols
        .iter()
        .map(|&a| wine_row(a, if a > 10.0 { "good" } else { "bad" }))
        .collect()
}

/// Always predicts the mean of the training targets
#[derive(Clone, Debug)]
pub struct MeanRegressor;

#[derive(Serialize, Deserialize)]
pub struct FittedMean(pub f64);

impl Candidate for MeanRegressor {
    type Task = Regression;
    type Trained = FittedMean;

    fn name(&self) -> String {
        "MeanRegressor".to_string()
    }

    fn fit(&self, dataset: &Dataset<f64, f64, Ix1>) -> Result<FittedMean> {
        Ok(FittedMean(dataset.targets().mean().unwrap_or(0.0)))
    }
}

impl Predictor<Regression> for FittedMean {
    fn predict(&self, features: &Array2<f64>) -> Array1<f64> {
        Array1::from_elem(features.nrows(), self.0)
    }
}

/// Refuses to train
#[derive(Clone, Debug)]
pub struct FailingRegressor;

impl Candidate for FailingRegressor {
    type Task = Regression;
    type Trained = FittedMean;

    fn name(&self) -> String {
        "FailingRegressor".to_string()
    }

    fn fit(&self, _dataset: &Dataset<f64, f64, Ix1>) -> Result<FittedMean> {
        Err(Error::TrainingFailure {
            candidate: self.name(),
            reason: "did not converge".to_string(),
        })
    }
}

/// Regression candidates of a single run, real and mocked
pub enum MixedRegressor {
    Linfa(Regressor),
    Mean,
    Failing,
}

#[derive(Serialize, Deserialize)]
pub enum FittedMixed {
    Linfa(FittedRegressor),
    Mean(FittedMean),
}

impl Candidate for MixedRegressor {
    type Task = Regression;
    type Trained = FittedMixed;

    fn name(&self) -> String {
        match self {
            MixedRegressor::Linfa(regressor) => regressor.name(),
            MixedRegressor::Mean => MeanRegressor.name(),
            MixedRegressor::Failing => FailingRegressor.name(),
        }
    }

    fn fit(&self, dataset: &Dataset<f64, f64, Ix1>) -> Result<FittedMixed> {
        match self {
            MixedRegressor::Linfa(regressor) => regressor.fit(dataset).map(FittedMixed::Linfa),
            MixedRegressor::Mean => MeanRegressor.fit(dataset).map(FittedMixed::Mean),
            MixedRegressor::Failing => FailingRegressor.fit(dataset).map(FittedMixed::Mean),
        }
    }
}

impl Predictor<Regression> for FittedMixed {
    fn predict(&self, features: &Array2<f64>) -> Array1<f64> {
        match self {
            FittedMixed::Linfa(model) => model.predict(features),
            FittedMixed::Mean(model) => model.predict(features),
        }
    }
}

/// Always predicts the class with key 0
#[derive(Clone, Debug)]
pub struct FirstClass {
    pub name: &'static str,
}

#[derive(Serialize, Deserialize)]
pub struct FittedFirstClass;

impl Candidate for FirstClass {
    type Task = Classification;
    type Trained = FittedFirstClass;

    fn name(&self) -> String {
        self.name.to_string()
    }

    fn fit(&self, _dataset: &Dataset<f64, usize, Ix1>) -> Result<FittedFirstClass> {
        Ok(FittedFirstClass)
    }
}

impl Predictor<Classification> for FittedFirstClass {
    fn predict(&self, features: &Array2<f64>) -> Array1<usize> {
        Array1::zeros(features.nrows())
    }
}
