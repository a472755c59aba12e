//! Argument validation for the Aladhan tools.
//!
//! Two layers run before any request is built:
//! - [`check_arguments`] compares the raw JSON arguments with the tool's
//!   input schema (presence of required fields, JSON types);
//! - the typed validators below check value domains once the arguments
//!   have been deserialized into the tool's params struct.
//!
//! Every failure names the offending argument as the client spelled it.

use chrono::{Local, NaiveDate};
use rmcp::model::JsonObject;
use serde_json::Value;

use crate::domains::tools::ToolError;

/// Highest standard calculation method id accepted by Aladhan.
pub const MAX_STANDARD_METHOD: i64 = 23;

/// Calculation method id for custom angles.
pub const CUSTOM_METHOD: i64 = 99;

/// Hijri calendar computation methods.
pub const CALENDAR_METHODS: &[&str] = &["HJCoSA", "UAQ", "DIYANET", "MATHEMATICAL"];

/// Shafaq types used for Isha in the Moonsighting Committee method.
pub const SHAFAQ_TYPES: &[&str] = &["general", "ahmer", "abyad"];

/// Day-first date layout expected by the Aladhan API.
pub const DMY_FORMAT: &str = "%d-%m-%Y";

/// Check raw arguments against a tool's JSON input schema.
///
/// Required fields must be present and non-null. Supplied fields declared
/// in `properties` must carry one of the declared JSON types. Fields the
/// schema does not know about are left to deserialization.
pub fn check_arguments(schema: &JsonObject, arguments: &JsonObject) -> Result<(), ToolError> {
    if let Some(required) = schema.get("required").and_then(Value::as_array) {
        for field in required.iter().filter_map(Value::as_str) {
            if arguments.get(field).is_none_or(Value::is_null) {
                return Err(ToolError::missing_argument(field));
            }
        }
    }

    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return Ok(());
    };

    // Required fields are already known to be non-null; a null optional is absent.
    for (field, value) in arguments.iter().filter(|(_, value)| !value.is_null()) {
        let Some(declared) = properties.get(field).and_then(|p| p.get("type")) else {
            continue;
        };
        if !accepts(declared, value) {
            return Err(ToolError::invalid_argument(
                field.as_str(),
                format!("expected {}, got {}", describe(declared), json_kind(value)),
            ));
        }
    }

    Ok(())
}

fn accepts(declared: &Value, value: &Value) -> bool {
    match declared {
        Value::String(kind) => matches_kind(kind, value),
        Value::Array(kinds) => kinds
            .iter()
            .filter_map(Value::as_str)
            .any(|kind| matches_kind(kind, value)),
        _ => true,
    }
}

fn matches_kind(kind: &str, value: &Value) -> bool {
    match kind {
        "number" => value.is_number(),
        "integer" => value.is_i64(),
        "string" => value.is_string(),
        "boolean" => value.is_boolean(),
        "null" => value.is_null(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        _ => true,
    }
}

fn describe(declared: &Value) -> String {
    match declared {
        Value::String(kind) => kind.clone(),
        Value::Array(kinds) => kinds
            .iter()
            .filter_map(Value::as_str)
            .filter(|kind| *kind != "null")
            .collect::<Vec<_>>()
            .join(" or "),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// Value domains
// ============================================================================

/// Latitude must be a finite value in [-90, 90].
pub fn validate_latitude(lat: f64) -> Result<f64, ToolError> {
    if lat.is_finite() && (-90.0..=90.0).contains(&lat) {
        Ok(lat)
    } else {
        Err(ToolError::invalid_argument(
            "lat",
            format!("must be between -90 and 90, got {lat}"),
        ))
    }
}

/// Longitude must be a finite value in [-180, 180].
pub fn validate_longitude(lon: f64) -> Result<f64, ToolError> {
    if lon.is_finite() && (-180.0..=180.0).contains(&lon) {
        Ok(lon)
    } else {
        Err(ToolError::invalid_argument(
            "lon",
            format!("must be between -180 and 180, got {lon}"),
        ))
    }
}

/// Calculation method: 0-23, or 99 for custom angles.
pub fn validate_method(method: i64) -> Result<i64, ToolError> {
    if (0..=MAX_STANDARD_METHOD).contains(&method) || method == CUSTOM_METHOD {
        Ok(method)
    } else {
        Err(ToolError::invalid_argument(
            "method",
            format!("must be 0-{MAX_STANDARD_METHOD} or {CUSTOM_METHOD}, got {method}"),
        ))
    }
}

/// Juristic school: 0 (Shafi) or 1 (Hanafi).
pub fn validate_school(school: i64) -> Result<i64, ToolError> {
    match school {
        0 | 1 => Ok(school),
        _ => Err(ToolError::invalid_argument(
            "school",
            format!("must be 0 (Shafi) or 1 (Hanafi), got {school}"),
        )),
    }
}

/// Midnight mode: 0 (standard) or 1 (Jafari).
pub fn validate_midnight_mode(mode: i64) -> Result<i64, ToolError> {
    match mode {
        0 | 1 => Ok(mode),
        _ => Err(ToolError::invalid_argument(
            "midnightMode",
            format!("must be 0 or 1, got {mode}"),
        )),
    }
}

/// Higher-latitude adjustment: 1, 2 or 3.
pub fn validate_latitude_adjustment(method: i64) -> Result<i64, ToolError> {
    if (1..=3).contains(&method) {
        Ok(method)
    } else {
        Err(ToolError::invalid_argument(
            "latitudeAdjustmentMethod",
            format!("must be 1, 2, or 3, got {method}"),
        ))
    }
}

/// Value must be one of `allowed` (exact, case-sensitive match).
pub fn validate_one_of<'a>(
    field: &str,
    value: &'a str,
    allowed: &[&str],
) -> Result<&'a str, ToolError> {
    if allowed.contains(&value) {
        Ok(value)
    } else {
        Err(ToolError::invalid_argument(
            field,
            format!("must be one of {}, got '{value}'", allowed.join(", ")),
        ))
    }
}

/// Month number in 1..=12.
pub fn validate_month(month: i64) -> Result<i64, ToolError> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(ToolError::invalid_argument(
            "month",
            format!("must be between 1 and 12, got {month}"),
        ))
    }
}

/// Four-digit year in 1..=9999 (Gregorian or Hijri).
pub fn validate_year(year: i64) -> Result<i64, ToolError> {
    if (1..=9999).contains(&year) {
        Ok(year)
    } else {
        Err(ToolError::invalid_argument(
            "year",
            format!("must be between 1 and 9999, got {year}"),
        ))
    }
}

/// Trimmed, non-empty text.
pub fn require_text<'a>(field: &str, value: &'a str) -> Result<&'a str, ToolError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ToolError::invalid_argument(field, "must not be empty"))
    } else {
        Ok(value)
    }
}

// ============================================================================
// Dates
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum DateLayout {
    /// `YYYY-MM-DD`
    YearFirst,
    /// `DD-MM-YYYY`
    DayFirst,
}

impl DateLayout {
    fn pattern(self) -> &'static str {
        match self {
            Self::YearFirst => "YYYY-MM-DD",
            Self::DayFirst => "DD-MM-YYYY",
        }
    }

    fn separators(self) -> [usize; 2] {
        match self {
            Self::YearFirst => [4, 7],
            Self::DayFirst => [2, 5],
        }
    }
}

/// Split a date into (year, month, day) after checking its exact shape.
fn split_date(field: &str, value: &str, layout: DateLayout) -> Result<(i32, u32, u32), ToolError> {
    let malformed = || {
        ToolError::invalid_argument(
            field,
            format!("expected {}, got '{value}'", layout.pattern()),
        )
    };

    let bytes = value.as_bytes();
    let separators = layout.separators();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| {
            if separators.contains(&i) {
                *b == b'-'
            } else {
                b.is_ascii_digit()
            }
        });
    if !well_formed {
        return Err(malformed());
    }

    let number = |range: std::ops::Range<usize>| value[range].parse::<u32>().map_err(|_| malformed());
    let (year, month, day) = match layout {
        DateLayout::YearFirst => (number(0..4)?, number(5..7)?, number(8..10)?),
        DateLayout::DayFirst => (number(6..10)?, number(3..5)?, number(0..2)?),
    };
    let year = i32::try_from(year).map_err(|_| malformed())?;
    Ok((year, month, day))
}

fn gregorian(field: &str, value: &str, layout: DateLayout) -> Result<NaiveDate, ToolError> {
    let value = value.trim();
    let (year, month, day) = split_date(field, value, layout)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ToolError::invalid_argument(field, format!("'{value}' is not a valid calendar date"))
    })
}

/// Parse a Gregorian `YYYY-MM-DD` date.
pub fn parse_iso_date(field: &str, value: &str) -> Result<NaiveDate, ToolError> {
    gregorian(field, value, DateLayout::YearFirst)
}

/// Parse a Gregorian `DD-MM-YYYY` date.
pub fn parse_dmy_date(field: &str, value: &str) -> Result<NaiveDate, ToolError> {
    gregorian(field, value, DateLayout::DayFirst)
}

/// Validate a Hijri `DD-MM-YYYY` date (days 1-30, months 1-12).
pub fn validate_hijri_date(field: &str, value: &str) -> Result<String, ToolError> {
    let value = value.trim();
    let (year, month, day) = split_date(field, value, DateLayout::DayFirst)?;
    if !(1..=30).contains(&day) || !(1..=12).contains(&month) || year < 1 {
        return Err(ToolError::invalid_argument(
            field,
            format!("'{value}' is not a valid Hijri date"),
        ));
    }
    Ok(value.to_string())
}

/// Resolve an optional `DD-MM-YYYY` date, defaulting to today's local date.
pub fn dmy_date_or_today(field: &str, value: Option<&str>) -> Result<String, ToolError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => parse_dmy_date(field, value).map(|d| d.format(DMY_FORMAT).to_string()),
        None => Ok(Local::now().date_naive().format(DMY_FORMAT).to_string()),
    }
}
