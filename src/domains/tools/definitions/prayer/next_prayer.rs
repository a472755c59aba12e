//! Next prayer by coordinates.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::aladhan::{ApiQuery, validation::dmy_date_or_today};
use crate::domains::tools::handlers::ToolDefinition;

/// Parameters for the next prayer at a coordinate.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NextPrayerParams {
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

/// Next upcoming prayer (name and time) at a coordinate.
#[derive(Debug, Clone)]
pub struct NextPrayerTool;

impl ToolDefinition for NextPrayerTool {
    const NAME: &'static str = "get_next_prayer";

    const DESCRIPTION: &'static str = "Get the next prayer (name and time) for given coordinates.";

    type Params = NextPrayerParams;

    fn build_query(params: Self::Params) -> Result<ApiQuery, ToolError> {
        let date = dmy_date_or_today("date", params.date.as_deref())?;

        Ok(ApiQuery::new(format!("/nextPrayer/{date}"))
            .coordinates(params.lat, params.lon)?
            .method(params.method)?
            .school(params.school)?
            .timezone(params.timezone.as_deref())
            .iso8601(params.iso8601))
    }
}
