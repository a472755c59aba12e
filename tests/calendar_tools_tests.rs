//! Monthly calendar tools against a mocked Aladhan API.

mod helpers;

use helpers::*;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn month_of_days(days: usize) -> Value {
    let entries: Vec<Value> = (1..=days)
        .map(|day| {
            json!({
                "timings": { "Fajr": "05:00", "Maghrib": "18:00" },
                "date": { "gregorian": { "day": format!("{day:02}") } }
            })
        })
        .collect();
    envelope(Value::Array(entries))
}

#[tokio::test]
async fn test_monthly_calendar_returns_every_day() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/calendar/2025/2"))
        .and(query_param("latitude", "21.4225"))
        .and(query_param("longitude", "39.8262"))
        .and(query_param("method", "4"))
        .and(query_param("shafaq", "general"))
        .and(query_param("adjustment", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(month_of_days(28)))
        .expect(1)
        .mount(&mock)
        .await;

    let server = mock_server(&mock);
    let text = server
        .call_tool(
            "get_monthly_calendar",
            args(json!({
                "year": 2025,
                "month": 2,
                "lat": 21.4225,
                "lon": 39.8262,
                "method": 4,
                "shafaq": "general",
                "adjustment": 1
            })),
        )
        .await;

    let days = parse(&text);
    assert_eq!(days.as_array().map(Vec::len), Some(28));
}

#[tokio::test]
async fn test_monthly_calendar_by_city_forwards_api_key() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/calendarByCity/2025/1"))
        .and(query_param("city", "Istanbul"))
        .and(query_param("country", "Turkey"))
        .and(query_param("tune", "0,2,0,0,0,0,0,-2,0"))
        .and(query_param("x7xapikey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(month_of_days(31)))
        .expect(1)
        .mount(&mock)
        .await;

    let server = mock_server(&mock);
    let text = server
        .call_tool(
            "get_monthly_calendar_by_city",
            args(json!({
                "year": 2025,
                "month": 1,
                "city": "Istanbul",
                "country": "Turkey",
                "tune": "0,2,0,0,0,0,0,-2,0",
                "x7xapikey": "test-key"
            })),
        )
        .await;

    assert_eq!(parse(&text).as_array().map(Vec::len), Some(31));
}

#[tokio::test]
async fn test_hijri_calendar_parameters() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hijriCalendar/1446/9"))
        .and(query_param("calendarMethod", "UAQ"))
        .and(query_param("latitudeAdjustmentMethod", "3"))
        .and(query_param("midnightMode", "1"))
        .and(query_param_is_missing("shafaq"))
        .respond_with(ResponseTemplate::new(200).set_body_json(month_of_days(30)))
        .expect(1)
        .mount(&mock)
        .await;

    let server = mock_server(&mock);
    let text = server
        .call_tool(
            "get_hijri_calendar",
            args(json!({
                "year": 1446,
                "month": 9,
                "lat": 21.4225,
                "lon": 39.8262,
                "calendarMethod": "UAQ",
                "latitudeAdjustmentMethod": 3,
                "midnightMode": 1
            })),
        )
        .await;

    assert_eq!(parse(&text).as_array().map(Vec::len), Some(30));
}

#[tokio::test]
async fn test_hijri_calendar_by_city_empty_data_falls_back_to_body() {
    let mock = MockServer::start().await;
    let body = json!({ "code": 200, "status": "OK", "data": [] });
    Mock::given(method("GET"))
        .and(path("/hijriCalendarByCity/1446/1"))
        .and(query_param("city", "Cairo"))
        .and(query_param("state", "Cairo Governorate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&mock)
        .await;

    let server = mock_server(&mock);
    let text = server
        .call_tool(
            "get_hijri_calendar_by_city",
            args(json!({
                "year": 1446,
                "month": 1,
                "city": "Cairo",
                "country": "Egypt",
                "state": "Cairo Governorate"
            })),
        )
        .await;

    assert_eq!(parse(&text), body);
}

#[tokio::test]
async fn test_out_of_range_month_is_rejected_locally() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(month_of_days(1)))
        .expect(0)
        .mount(&mock)
        .await;

    let server = mock_server(&mock);
    let text = server
        .call_tool(
            "get_monthly_calendar_by_city",
            args(json!({ "year": 2025, "month": 13, "city": "Oslo", "country": "Norway" })),
        )
        .await;

    let message = error_message(&text).unwrap();
    assert!(message.contains("'month'"), "{message}");
}
