//! Prayer-time calendar for a Gregorian month, by city.

use schemars::JsonSchema;
use serde::Deserialize;

use super::month_query;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::aladhan::ApiQuery;
use crate::domains::tools::handlers::ToolDefinition;

/// Parameters for a Gregorian-month calendar in a named city.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCalendarByCityParams {
    /// Gregorian year (e.g., 2025).
    pub year: i64,

    /// Gregorian month (1-12).
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

    /// Midnight mode (0=Standard, 1=Jafari).
    pub midnight_mode: Option<i64>,

    /// IANA timezone.
    pub timezone: Option<String>,

    /// Higher-latitude adjustment (1-3).
    pub latitude_adjustment_method: Option<i64>,

    /// Shafaq type for Isha (general, ahmer, abyad).
    pub shafaq: Option<String>,

    /// Comma-separated minute offsets for the individual timings.
    pub tune: Option<String>,

    /// Return times in ISO-8601 format.
    pub iso8601: Option<bool>,

    /// Days to shift the Hijri date by.
    pub adjustment: Option<i64>,

    /// Aladhan API key for premium features.
    pub x7xapikey: Option<String>,
}

/// Daily prayer times across one Gregorian month, by city.
#[derive(Debug, Clone)]
pub struct MonthlyCalendarByCityTool;

impl ToolDefinition for MonthlyCalendarByCityTool {
    const NAME: &'static str = "get_monthly_calendar_by_city";

    const DESCRIPTION: &'static str = "Get prayer times for every day of a Gregorian month \
         by city/country.";

    type Params = MonthlyCalendarByCityParams;

    fn build_query(params: Self::Params) -> Result<ApiQuery, ToolError> {
        Ok(month_query("/calendarByCity", params.year, params.month)?
            .location(&params.city, &params.country, params.state.as_deref())?
            .method(params.method)?
            .school(params.school)?
            .midnight_mode(params.midnight_mode)?
            .timezone(params.timezone.as_deref())
            .latitude_adjustment_method(params.latitude_adjustment_method)?
            .shafaq(params.shafaq.as_deref())?
            .optional_text("tune", params.tune.as_deref())
            .iso8601(params.iso8601)
            .optional("adjustment", params.adjustment)
            .optional_text("x7xapikey", params.x7xapikey.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::handlers::prepare;
    use serde_json::{Value, json};

    fn args(value: Value) -> rmcp::model::JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_query_mapping() {
        let query = prepare::<MonthlyCalendarByCityTool>(args(json!({
            "year": 2025,
            "month": 1,
            "city": "Istanbul",
            "country": "TR",
            "method": 13,
            "school": 0,
            "iso8601": true,
            "x7xapikey": "secret"
        })))
        .unwrap();

        assert_eq!(query.path(), "/calendarByCity/2025/1");
        assert_eq!(
            query.encoded(),
            "city=Istanbul&country=TR&method=13&school=0&iso8601=true&x7xapikey=secret"
        );
    }

    #[test]
    fn test_api_key_omitted_when_absent() {
        let query = prepare::<MonthlyCalendarByCityTool>(args(json!({
            "year": 2025, "month": 1, "city": "Istanbul", "country": "TR"
        })))
        .unwrap();
        assert_eq!(query.get("x7xapikey"), None);
    }

    #[test]
    fn test_missing_year() {
        let err = prepare::<MonthlyCalendarByCityTool>(args(json!({
            "month": 1, "city": "Istanbul", "country": "TR"
        })))
        .unwrap_err();
        assert_eq!(err.field(), Some("year"));
    }
}
