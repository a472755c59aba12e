//! Prayer-time calendar for a Gregorian month, by coordinates.

use schemars::JsonSchema;
use serde::Deserialize;

use super::month_query;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::aladhan::ApiQuery;
use crate::domains::tools::handlers::ToolDefinition;

/// Parameters for a Gregorian-month calendar at a coordinate.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCalendarParams {
    /// Gregorian year (e.g., 2025).
    pub year: i64,

    /// Gregorian month (1-12).
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
}

/// Daily prayer times across one Gregorian month, by coordinates.
#[derive(Debug, Clone)]
pub struct MonthlyCalendarTool;

impl ToolDefinition for MonthlyCalendarTool {
    const NAME: &'static str = "get_monthly_calendar";

    const DESCRIPTION: &'static str = "Get prayer times for every day of a Gregorian month \
         by coordinates.";

    type Params = MonthlyCalendarParams;

    fn build_query(params: Self::Params) -> Result<ApiQuery, ToolError> {
        Ok(month_query("/calendar", params.year, params.month)?
            .coordinates(params.lat, params.lon)?
            .method(params.method)?
            .school(params.school)?
            .midnight_mode(params.midnight_mode)?
            .timezone(params.timezone.as_deref())
            .latitude_adjustment_method(params.latitude_adjustment_method)?
            .shafaq(params.shafaq.as_deref())?
            .optional_text("tune", params.tune.as_deref())
            .iso8601(params.iso8601)
            .optional("adjustment", params.adjustment))
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
        let query = prepare::<MonthlyCalendarTool>(args(json!({
            "year": 2025,
            "month": 3,
            "lat": 51.5074,
            "lon": -0.1278,
            "method": 15,
            "shafaq": "general",
            "tune": "0,0,0,0,0,0,0,0,0"
        })))
        .unwrap();

        assert_eq!(query.path(), "/calendar/2025/3");
        assert_eq!(
            query.encoded(),
            "latitude=51.5074&longitude=-0.1278&method=15&shafaq=general\
             &tune=0%2C0%2C0%2C0%2C0%2C0%2C0%2C0%2C0"
        );
    }

    #[test]
    fn test_blank_tune_not_sent() {
        let query = prepare::<MonthlyCalendarTool>(args(json!({
            "year": 2025, "month": 3, "lat": 0, "lon": 0, "tune": ""
        })))
        .unwrap();
        assert_eq!(query.get("tune"), None);
    }

    #[test]
    fn test_unknown_shafaq() {
        let err = prepare::<MonthlyCalendarTool>(args(json!({
            "year": 2025, "month": 3, "lat": 0, "lon": 0, "shafaq": "white"
        })))
        .unwrap_err();
        assert_eq!(err.field(), Some("shafaq"));
    }

    #[test]
    fn test_fractional_year_rejected() {
        let err = prepare::<MonthlyCalendarTool>(args(json!({
            "year": 2025.5, "month": 3, "lat": 0, "lon": 0
        })))
        .unwrap_err();
        assert_eq!(err.field(), Some("year"));
    }

    #[test]
    fn test_oversized_year_names_field() {
        let err = prepare::<MonthlyCalendarTool>(args(json!({
            "year": u64::MAX, "month": 3, "lat": 0, "lon": 0
        })))
        .unwrap_err();
        assert_eq!(err.field(), Some("year"));
    }
}
