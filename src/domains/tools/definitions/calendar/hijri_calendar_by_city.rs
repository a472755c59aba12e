//! Prayer-time calendar for a Hijri month, by city.

use schemars::JsonSchema;
use serde::Deserialize;

use super::month_query;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::aladhan::ApiQuery;
use crate::domains::tools::handlers::ToolDefinition;

/// Parameters for a Hijri-month calendar in a named city.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HijriCalendarByCityParams {
    /// Hijri year (e.g., 1446).
    pub year: i64,

    /// Hijri month (1-12).
    pub month: i64,

    /// City name.
    pub city: String,

    /// Country name or 2-letter ISO code.
    pub country: String,

    /// State/province.
    pub state: Option<String>,

    /// Prayer calculation method (0-23 or 99).
    pub method: Option<i64>,

    /// Juristic school for Asr (0=Shafi, 1=Hanafi).
    pub school: Option<i64>,

    /// IANA timezone.
    pub timezone: Option<String>,

    /// Higher-latitude adjustment (1-3).
    pub latitude_adjustment_method: Option<i64>,

    /// Hijri calendar method: HJCoSA, UAQ, DIYANET or MATHEMATICAL.
    pub calendar_method: Option<String>,

    /// Midnight mode (0=Standard, 1=Jafari).
    pub midnight_mode: Option<i64>,

    /// Return times in ISO-8601 format.
    pub iso8601: Option<bool>,

    /// Days to shift the Hijri date by.
    pub adjustment: Option<i64>,
}

/// Daily prayer times across one Hijri month, by city.
#[derive(Debug, Clone)]
pub struct HijriCalendarByCityTool;

impl ToolDefinition for HijriCalendarByCityTool {
    const NAME: &'static str = "get_hijri_calendar_by_city";

    const DESCRIPTION: &'static str = "Get prayer times for every day of a Hijri month \
         by city/country.";

    type Params = HijriCalendarByCityParams;

    fn build_query(params: Self::Params) -> Result<ApiQuery, ToolError> {
        Ok(month_query("/hijriCalendarByCity", params.year, params.month)?
            .location(&params.city, &params.country, params.state.as_deref())?
            .method(params.method)?
            .school(params.school)?
            .timezone(params.timezone.as_deref())
            .latitude_adjustment_method(params.latitude_adjustment_method)?
            .calendar_method(params.calendar_method.as_deref())?
            .midnight_mode(params.midnight_mode)?
            .iso8601(params.iso8601)
            .optional("adjustment", params.adjustment))
    }
}
