//! Prayer-time calendar for a Hijri month, by coordinates.

use schemars::JsonSchema;
use serde::Deserialize;

use super::month_query;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::aladhan::ApiQuery;
use crate::domains::tools::handlers::ToolDefinition;

/// Parameters for a Hijri-month calendar at a coordinate.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HijriCalendarParams {
    /// Hijri year (e.g., 1446).
    pub year: i64,

    /// Hijri month (1-12).
    pub month: i64,

    /// Latitude in decimal degrees (-90 to 90).
    pub lat: f64,

    /// Longitude in decimal degrees (-180 to 180).
    pub lon: f64,

    /// Prayer calculation method (0-23 or 99).
    pub method: Option<i64>,

    /// Juristic school for Asr (0=Shafi, 1=Hanafi).
    pub school: Option<i64>,

    /// Midnight mode (0=Standard, 1=Jafari).
    pub midnight_mode: Option<i64>,

    /// IANA timezone (e.g., Asia/Karachi).
    pub timezone: Option<String>,

    /// Higher-latitude adjustment (1=Middle of the night, 2=One seventh, 3=Angle based).
    pub latitude_adjustment_method: Option<i64>,

    /// Hijri calendar method: HJCoSA, UAQ, DIYANET or MATHEMATICAL.
    pub calendar_method: Option<String>,

    /// Return times in ISO-8601 format.
    pub iso8601: Option<bool>,

    /// Days to shift the Hijri date by.
    pub adjustment: Option<i64>,
}

/// Daily prayer times across one Hijri month, by coordinates.
#[derive(Debug, Clone)]
pub struct HijriCalendarTool;

impl ToolDefinition for HijriCalendarTool {
    const NAME: &'static str = "get_hijri_calendar";

    const DESCRIPTION: &'static str = "Get prayer times for every day of a Hijri month \
         by coordinates.";

    type Params = HijriCalendarParams;

    fn build_query(params: Self::Params) -> Result<ApiQuery, ToolError> {
        Ok(month_query("/hijriCalendar", params.year, params.month)?
            .coordinates(params.lat, params.lon)?
            .method(params.method)?
            .school(params.school)?
            .midnight_mode(params.midnight_mode)?
            .timezone(params.timezone.as_deref())
            .latitude_adjustment_method(params.latitude_adjustment_method)?
            .calendar_method(params.calendar_method.as_deref())?
            .iso8601(params.iso8601)
            .optional("adjustment", params.adjustment))
    }
}
