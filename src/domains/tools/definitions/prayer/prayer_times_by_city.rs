//! Daily prayer times by city/country.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::daily_timings;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::aladhan::{ApiQuery, validation::dmy_date_or_today};
use crate::domains::tools::handlers::ToolDefinition;

/// Parameters for daily prayer times in a named city.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrayerTimesByCityParams {
    /// City name.
    pub city: String,

    /// Country name or 2-letter ISO code.
    pub country: String,

    /// State/province, to disambiguate the city.
    pub state: Option<String>,

    /// Date in DD-MM-YYYY format (defaults to today).
    pub date: Option<String>,

    /// Prayer calculation method (0-23 or 99).
    pub method: Option<i64>,

    /// Juristic school for Asr (0=Shafi, 1=Hanafi).
    pub school: Option<i64>,

    /// IANA timezone (e.g., Europe/London).
    pub timezone: Option<String>,

    /// Return times in ISO-8601 format.
    pub iso8601: Option<bool>,
}

/// Daily prayer times by city/country.
#[derive(Debug, Clone)]
pub struct PrayerTimesByCityTool;

impl ToolDefinition for PrayerTimesByCityTool {
    const NAME: &'static str = "get_prayer_times_by_city";

    const DESCRIPTION: &'static str = "Get daily prayer times by city/country. \
         The city is geocoded by Aladhan; pass `state` when the name is ambiguous. \
         Date is DD-MM-YYYY and defaults to today.";

    type Params = PrayerTimesByCityParams;

    fn build_query(params: Self::Params) -> Result<ApiQuery, ToolError> {
        let date = dmy_date_or_today("date", params.date.as_deref())?;

        Ok(ApiQuery::new(format!("/timingsByCity/{date}"))
            .location(&params.city, &params.country, params.state.as_deref())?
            .method(params.method)?
            .school(params.school)?
            .timezone(params.timezone.as_deref())
            .iso8601(params.iso8601))
    }

    fn shape_response(payload: Value) -> Value {
        daily_timings(payload)
    }
}
