//! Hourly bike rental counts of the Capital Bikeshare system
//!
//! Comma-delimited, 17 columns per row in the layout of the UCI `hour.csv` file.
//! The record index, date, working day flag and the casual/registered split of the
//! count are not read.

use crate::error::Result;
use crate::reader::{Fields, FromRecord};

/// One hour of bike rentals
#[derive(Debug, Clone, PartialEq)]
pub struct BikeSharingDemandSample {
    pub season: i32,
    pub year: i32,
    pub month: i32,
    pub hour: i32,
    pub holiday: bool,
    pub weekday: i32,
    pub weather: i32,
    pub temperature: f32,
    pub normalized_temperature: f32,
    pub humidity: f32,
    pub windspeed: f32,
    /// Number of rented bikes, the regression label
    pub count: f32,
}

impl FromRecord for BikeSharingDemandSample {
    const DELIMITER: u8 = b',';
    const COLUMNS: usize = 17;

    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(BikeSharingDemandSample {
            season: fields.integer(2, "season")?,
            year: fields.integer(3, "year")?,
            month: fields.integer(4, "month")?,
            hour: fields.integer(5, "hour")?,
            holiday: fields.flag(6, "holiday")?,
            weekday: fields.integer(7, "weekday")?,
            weather: fields.integer(9, "weather")?,
            temperature: fields.real(10, "temperature")?,
            normalized_temperature: fields.real(11, "normalized temperature")?,
            humidity: fields.real(12, "humidity")?,
            windspeed: fields.real(13, "windspeed")?,
            count: fields.real(16, "count")?,
        })
    }
}
