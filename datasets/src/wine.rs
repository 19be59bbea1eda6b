//! Physicochemical measurements and sensory quality of white vinho verde wines
//!
//! Semicolon-delimited, 12 columns per row, the quality grade in the last column.

use crate::error::Result;
use crate::reader::{Fields, FromRecord};

/// Measurements of a single wine together with its quality grade
#[derive(Debug, Clone, PartialEq)]
pub struct WineQualitySample {
    pub fixed_acidity: f32,
    pub volatile_acidity: f32,
    pub citric_acid: f32,
    pub residual_sugar: f32,
    pub chlorides: f32,
    pub free_sulfur_dioxide: f32,
    pub total_sulfur_dioxide: f32,
    pub density: f32,
    pub ph: f32,
    pub sulphates: f32,
    pub alcohol: f32,
    /// Quality grade kept as text, the classification label
    pub label: String,
}

impl FromRecord for WineQualitySample {
    const DELIMITER: u8 = b';';
    const COLUMNS: usize = 12;

    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(WineQualitySample {
            fixed_acidity: fields.real_or_missing(0, "fixed acidity")?,
            volatile_acidity: fields.real_or_missing(1, "volatile acidity")?,
            citric_acid: fields.real_or_missing(2, "citric acid")?,
            residual_sugar: fields.real_or_missing(3, "residual sugar")?,
            chlorides: fields.real_or_missing(4, "chlorides")?,
            free_sulfur_dioxide: fields.real_or_missing(5, "free sulfur dioxide")?,
            total_sulfur_dioxide: fields.real_or_missing(6, "total sulfur dioxide")?,
            density: fields.real_or_missing(7, "density")?,
            ph: fields.real_or_missing(8, "pH")?,
            sulphates: fields.real_or_missing(9, "sulphates")?,
            alcohol: fields.real_or_missing(10, "alcohol")?,
            label: fields.text(11, "quality")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{read_samples_from, ParseError};
    use approx::assert_abs_diff_eq;

    const HEADER: &str = "\"fixed acidity\";\"volatile acidity\";\"citric acid\";\"residual sugar\";\"chlorides\";\"free sulfur dioxide\";\"total sulfur dioxide\";\"density\";\"pH\";\"sulphates\";\"alcohol\";\"quality\"\n";

    #[test]
    fn reads_measurements_and_label() {
        let data = format!(
            "{}7;0.27;0.36;20.7;0.045;45;170;1.001;3;0.45;8.8;6\n6.3;0.3;0.34;1.6;0.049;14;132;0.994;3.3;0.49;9.5;5\n",
            HEADER
        );
        let samples = read_samples_from::<WineQualitySample, _>(data.as_bytes())
            .collect::<Result<Vec<_>>>()
            .unwrap();

        assert_eq!(samples.len(), 2);
        assert_abs_diff_eq!(samples[0].fixed_acidity, 7.0);
        assert_abs_diff_eq!(samples[0].residual_sugar, 20.7);
        assert_abs_diff_eq!(samples[0].alcohol, 8.8);
        assert_eq!(samples[0].label, "6");
        assert_abs_diff_eq!(samples[1].ph, 3.3);
        assert_eq!(samples[1].label, "5");
    }

    #[test]
    fn empty_measurement_is_missing() {
        let data = format!("{};0.27;0.36;20.7;0.045;45;170;1.001;3;0.45;8.8;6\n", HEADER);
        let sample = read_samples_from::<WineQualitySample, _>(data.as_bytes())
            .next()
            .unwrap()
            .unwrap();

        assert!(sample.fixed_acidity.is_nan());
        assert_abs_diff_eq!(sample.volatile_acidity, 0.27);
    }

    #[test]
    fn garbage_measurement_fails() {
        let data = format!("{}7;abc;0.36;20.7;0.045;45;170;1.001;3;0.45;8.8;6\n", HEADER);
        let err = read_samples_from::<WineQualitySample, _>(data.as_bytes())
            .next()
            .unwrap()
            .unwrap_err();

        assert!(matches!(
            err,
            ParseError::InvalidField {
                line: 2,
                column: 1,
                ..
            }
        ));
    }
}
