use linfa_selection_datasets::BikeSharingDemandSample;

use crate::pipeline::FeaturePipelineParams;
use crate::sample::Sample;
use crate::task::Regression;

impl Sample for BikeSharingDemandSample {
    type Task = Regression;

    fn features(&self) -> Vec<f64> {
        vec![
            self.season as f64,
            self.year as f64,
            self.month as f64,
            self.hour as f64,
            if self.holiday { 1.0 } else { 0.0 },
            self.weekday as f64,
            self.weather as f64,
            self.temperature as f64,
            self.normalized_temperature as f64,
            self.humidity as f64,
            self.windspeed as f64,
        ]
    }

    fn label(&self) -> f64 {
        self.count as f64
    }
}

/// Calendar and weather codes are one-hot encoded, the measurements stay numeric
///
/// The first category of every code is dropped, so least squares with an intercept stays
/// solvable.
pub fn bike_sharing_pipeline() -> FeaturePipelineParams {
    FeaturePipelineParams::new()
        .drop_first()
        .one_hot("season")
        .one_hot("year")
        .one_hot("month")
        .one_hot("hour")
        .one_hot("holiday")
        .numeric("weekday")
        .one_hot("weather")
        .numeric("temperature")
        .numeric("normalized_temperature")
        .numeric("humidity")
        .numeric("windspeed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use linfa::ParamGuard;

    #[test]
    fn features_match_the_declared_columns() {
        let sample = BikeSharingDemandSample {
            season: 2,
            year: 1,
            month: 5,
            hour: 17,
            holiday: true,
            weekday: 3,
            weather: 1,
            temperature: 0.5,
            normalized_temperature: 0.25,
            humidity: 0.75,
            windspeed: 0.125,
            count: 420.0,
        };

        let pipeline = bike_sharing_pipeline();
        let features = sample.features();
        assert_eq!(pipeline.check_ref().unwrap().columns().len(), features.len());
        assert_eq!(
            features,
            vec![2., 1., 5., 17., 1., 3., 1., 0.5, 0.25, 0.75, 0.125]
        );
        assert_eq!(sample.label(), 420.0);
    }
}
