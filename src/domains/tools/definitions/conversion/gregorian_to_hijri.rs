//! Gregorian to Hijri date conversion tool.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::aladhan::{
    ApiQuery,
    validation::{DMY_FORMAT, parse_iso_date},
};
use crate::domains::tools::handlers::ToolDefinition;

/// Parameters for a Gregorian to Hijri conversion.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GregorianToHijriParams {
    /// Gregorian date in YYYY-MM-DD format.
    pub date: String,
}

/// Gregorian to Hijri conversion.
///
/// Callers pass an ISO date; Aladhan expects day-first, so the date is
/// reformatted before it is sent.
#[derive(Debug, Clone)]
pub struct GregorianToHijriTool;

impl ToolDefinition for GregorianToHijriTool {
    const NAME: &'static str = "convert_gregorian_to_hijri";

    const DESCRIPTION: &'static str =
        "Convert a Gregorian date (YYYY-MM-DD) to its Hijri equivalent.";

    type Params = GregorianToHijriParams;

    fn build_query(params: Self::Params) -> Result<ApiQuery, ToolError> {
        let date = parse_iso_date("date", &params.date)?;
        Ok(ApiQuery::new("/gToH").param("date", date.format(DMY_FORMAT)))
    }
}
