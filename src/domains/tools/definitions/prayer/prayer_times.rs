//! Daily prayer times by coordinates.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::daily_timings;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::aladhan::{ApiQuery, validation::dmy_date_or_today};
use crate::domains::tools::handlers::ToolDefinition;

/// Parameters for daily prayer times at a coordinate.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrayerTimesParams {
    /// Latitude in decimal degrees (-90 to 90).
    pub lat: f64,

    /// Longitude in decimal degrees (-180 to 180).
    pub lon: f64,

    /// Date in DD-MM-YYYY format (defaults to today).
    pub date: Option<String>,

    /// Prayer calculation method (0-23 or 99).
    pub method: Option<i64>,

    /// Juristic school for Asr (0=Shafi, 1=Hanafi).
    pub school: Option<i64>,

    /// IANA timezone (e.g., Asia/Singapore).
    pub timezone: Option<String>,

    /// Return times in ISO-8601 format.
    pub iso8601: Option<bool>,
}

/// Daily prayer times by coordinates.
#[derive(Debug, Clone)]
pub struct PrayerTimesTool;

impl ToolDefinition for PrayerTimesTool {
    const NAME: &'static str = "get_prayer_times";

    const DESCRIPTION: &'static str = "Get daily prayer times by coordinates. \
         Returns Fajr, Sunrise, Dhuhr, Asr, Sunset, Maghrib, Isha, Imsak, Midnight and \
         the night thirds for the given date (DD-MM-YYYY, default today).";

    type Params = PrayerTimesParams;

    fn build_query(params: Self::Params) -> Result<ApiQuery, ToolError> {
        let date = dmy_date_or_today("date", params.date.as_deref())?;

        Ok(ApiQuery::new(format!("/timings/{date}"))
            .coordinates(params.lat, params.lon)?
            .method(params.method)?
            .school(params.school)?
            .timezone(params.timezone.as_deref())
            .iso8601(params.iso8601))
    }

    fn shape_response(payload: Value) -> Value {
        daily_timings(payload)
    }
}
