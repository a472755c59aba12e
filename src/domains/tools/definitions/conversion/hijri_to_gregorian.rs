//! Hijri to Gregorian date conversion tool.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::aladhan::{ApiQuery, validation::validate_hijri_date};
use crate::domains::tools::handlers::ToolDefinition;

/// Parameters for a Hijri to Gregorian conversion.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HijriToGregorianParams {
    /// Hijri date in DD-MM-YYYY format.
    pub date: String,
}

/// Hijri to Gregorian conversion.
#[derive(Debug, Clone)]
pub struct HijriToGregorianTool;

impl ToolDefinition for HijriToGregorianTool {
    const NAME: &'static str = "convert_hijri_to_gregorian";

    const DESCRIPTION: &'static str =
        "Convert a Hijri date (DD-MM-YYYY) to its Gregorian equivalent.";

    type Params = HijriToGregorianParams;

    fn build_query(params: Self::Params) -> Result<ApiQuery, ToolError> {
        let date = validate_hijri_date("date", &params.date)?;
        Ok(ApiQuery::new("/hToG").param("date", date))
    }
}
