//! Monthly calendar tools (Hijri and Gregorian months).
//!
//! All four tools address a month as `{endpoint}/{year}/{month}` and
//! return one entry per day of that month.

pub mod hijri_calendar;
pub mod hijri_calendar_by_city;
pub mod monthly_calendar;
pub mod monthly_calendar_by_city;

pub use hijri_calendar::{HijriCalendarParams, HijriCalendarTool};
pub use hijri_calendar_by_city::{HijriCalendarByCityParams, HijriCalendarByCityTool};
pub use monthly_calendar::{MonthlyCalendarParams, MonthlyCalendarTool};
pub use monthly_calendar_by_city::{MonthlyCalendarByCityParams, MonthlyCalendarByCityTool};

use super::aladhan::{
    ApiQuery,
    validation::{validate_month, validate_year},
};
use crate::domains::tools::ToolError;

/// Start a query for `endpoint/{year}/{month}` after range-checking both.
fn month_query(endpoint: &str, year: i64, month: i64) -> Result<ApiQuery, ToolError> {
    let year = validate_year(year)?;
    let month = validate_month(month)?;
    Ok(ApiQuery::new(format!("{endpoint}/{year}/{month}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_query_path() {
        let query = month_query("/calendar", 2025, 3).unwrap();
        assert_eq!(query.path(), "/calendar/2025/3");
    }

    #[test]
    fn test_month_query_bounds() {
        assert_eq!(month_query("/calendar", 2025, 0).unwrap_err().field(), Some("month"));
        assert_eq!(month_query("/calendar", 0, 1).unwrap_err().field(), Some("year"));
    }
}
