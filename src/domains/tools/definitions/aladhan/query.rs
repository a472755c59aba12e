//! Aladhan request construction.
//!
//! [`ApiQuery`] is an endpoint path plus an ordered list of query
//! parameters. Tools build one with the chained setters below; setters for
//! constrained parameters validate their value and return a `Result`.
//! Absent optional values, and blank optional strings, are never sent.

use super::validation::{
    CALENDAR_METHODS, SHAFAQ_TYPES, require_text, validate_latitude,
    validate_latitude_adjustment, validate_longitude, validate_method, validate_midnight_mode,
    validate_one_of, validate_school,
};
use crate::domains::tools::ToolError;

/// A fully built request against the Aladhan API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiQuery {
    path: String,
    params: Vec<(&'static str, String)>,
}

impl ApiQuery {
    /// Start a query for `path` (relative to the API base URL, leading `/`).
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters in insertion order.
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Value of the first parameter called `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// URL-encoded query string, for logging.
    pub fn encoded(&self) -> String {
        serde_urlencoded::to_string(&self.params).unwrap_or_default()
    }

    /// Append a parameter unconditionally.
    pub fn param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.params.push((name, value.to_string()));
        self
    }

    /// Append a parameter only when a value is present.
    pub fn optional<V: ToString>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    /// Append a string parameter only when it is present and not blank.
    pub fn optional_text(self, name: &'static str, value: Option<&str>) -> Self {
        self.optional(name, value.map(str::trim).filter(|v| !v.is_empty()))
    }

    /// `latitude` and `longitude`, range-checked.
    pub fn coordinates(self, lat: f64, lon: f64) -> Result<Self, ToolError> {
        let lat = validate_latitude(lat)?;
        let lon = validate_longitude(lon)?;
        Ok(self.param("latitude", lat).param("longitude", lon))
    }

    /// `city`, `country` and optional `state`.
    pub fn location(self, city: &str, country: &str, state: Option<&str>) -> Result<Self, ToolError> {
        let city = require_text("city", city)?;
        let country = require_text("country", country)?;
        Ok(self
            .param("city", city)
            .param("country", country)
            .optional_text("state", state))
    }

    pub fn method(self, method: Option<i64>) -> Result<Self, ToolError> {
        let method = method.map(validate_method).transpose()?;
        Ok(self.optional("method", method))
    }

    pub fn school(self, school: Option<i64>) -> Result<Self, ToolError> {
        let school = school.map(validate_school).transpose()?;
        Ok(self.optional("school", school))
    }

    pub fn midnight_mode(self, mode: Option<i64>) -> Result<Self, ToolError> {
        let mode = mode.map(validate_midnight_mode).transpose()?;
        Ok(self.optional("midnightMode", mode))
    }

    pub fn latitude_adjustment_method(self, method: Option<i64>) -> Result<Self, ToolError> {
        let method = method.map(validate_latitude_adjustment).transpose()?;
        Ok(self.optional("latitudeAdjustmentMethod", method))
    }

    pub fn calendar_method(self, method: Option<&str>) -> Result<Self, ToolError> {
        let method = non_blank(method)
            .map(|m| validate_one_of("calendarMethod", m, CALENDAR_METHODS))
            .transpose()?;
        Ok(self.optional("calendarMethod", method))
    }

    pub fn shafaq(self, shafaq: Option<&str>) -> Result<Self, ToolError> {
        let shafaq = non_blank(shafaq)
            .map(|s| validate_one_of("shafaq", s, SHAFAQ_TYPES))
            .transpose()?;
        Ok(self.optional("shafaq", shafaq))
    }

    /// IANA zone name, sent as `timezonestring`.
    pub fn timezone(self, timezone: Option<&str>) -> Self {
        self.optional_text("timezonestring", timezone)
    }

    pub fn iso8601(self, iso8601: Option<bool>) -> Self {
        self.optional("iso8601", iso8601)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_keep_insertion_order() {
        let query = ApiQuery::new("/timings/15-01-2025")
            .coordinates(51.5074, -0.1278)
            .unwrap()
            .method(Some(3))
            .unwrap()
            .school(Some(1))
            .unwrap();

        let names: Vec<_> = query.params().iter().map(|(k, _)| *k).collect();
        assert_eq!(names, ["latitude", "longitude", "method", "school"]);
        assert_eq!(query.get("latitude"), Some("51.5074"));
        assert_eq!(query.get("longitude"), Some("-0.1278"));
    }

    #[test]
    fn test_absent_optionals_are_omitted() {
        let query = ApiQuery::new("/calendar/2025/1")
            .method(None)
            .unwrap()
            .school(None)
            .unwrap()
            .timezone(Some("   "))
            .iso8601(None)
            .calendar_method(Some(""))
            .unwrap();
        assert!(query.params().is_empty());
    }

    #[test]
    fn test_invalid_values_name_their_field() {
        let err = ApiQuery::new("/x").school(Some(2)).unwrap_err();
        assert_eq!(err.field(), Some("school"));

        let err = ApiQuery::new("/x").shafaq(Some("red")).unwrap_err();
        assert_eq!(err.field(), Some("shafaq"));

        let err = ApiQuery::new("/x").coordinates(0.0, 200.0).unwrap_err();
        assert_eq!(err.field(), Some("lon"));
    }

    #[test]
    fn test_location_trims_and_requires_text() {
        let query = ApiQuery::new("/x")
            .location(" London ", "United Kingdom", Some(""))
            .unwrap();
        assert_eq!(query.get("city"), Some("London"));
        assert_eq!(query.get("state"), None);

        let err = ApiQuery::new("/x").location("London", " ", None).unwrap_err();
        assert_eq!(err.field(), Some("country"));
    }

    #[test]
    fn test_booleans_and_timezone() {
        let query = ApiQuery::new("/x")
            .timezone(Some("Asia/Singapore"))
            .iso8601(Some(false));
        assert_eq!(query.get("timezonestring"), Some("Asia/Singapore"));
        assert_eq!(query.get("iso8601"), Some("false"));
        assert_eq!(query.encoded(), "timezonestring=Asia%2FSingapore&iso8601=false");
    }
}
