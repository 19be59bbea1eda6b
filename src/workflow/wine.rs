use linfa_selection_datasets::WineQualitySample;

use crate::pipeline::FeaturePipelineParams;
use crate::sample::Sample;
use crate::task::Classification;

impl Sample for WineQualitySample {
    type Task = Classification;

    fn features(&self) -> Vec<f64> {
        [
            self.fixed_acidity,
            self.volatile_acidity,
            self.citric_acid,
            self.residual_sugar,
            self.chlorides,
            self.free_sulfur_dioxide,
            self.total_sulfur_dioxide,
            self.density,
            self.ph,
            self.sulphates,
            self.alcohol,
        ]
        .iter()
        .map(|&v| v as f64)
        .collect()
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}

/// All measurements are imputed and scaled to `[0, 1]`
pub fn wine_quality_pipeline() -> FeaturePipelineParams {
    [
        "fixed_acidity",
        "volatile_acidity",
        "citric_acid",
        "residual_sugar",
        "chlorides",
        "free_sulfur_dioxide",
        "total_sulfur_dioxide",
        "density",
        "ph",
        "sulphates",
        "alcohol",
    ]
    .iter()
    .fold(FeaturePipelineParams::new(), |params, name| {
        params.numeric(*name)
    })
    .normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use linfa::ParamGuard;

    #[test]
    fn missing_measurements_stay_missing() {
        let sample = WineQualitySample {
            fixed_acidity: f32::NAN,
            volatile_acidity: 0.27,
            citric_acid: 0.36,
            residual_sugar: 20.7,
            chlorides: 0.045,
            free_sulfur_dioxide: 45.0,
            total_sulfur_dioxide: 170.0,
            density: 1.001,
            ph: 3.0,
            sulphates: 0.45,
            alcohol: 8.8,
            label: "6".to_string(),
        };

        let features = sample.features();
        assert_eq!(features.len(), 11);
        assert!(features[0].is_nan());
        assert_eq!(
            wine_quality_pipeline().check_ref().unwrap().columns().len(),
            features.len()
        );
        assert_eq!(sample.label(), "6");
    }
}
