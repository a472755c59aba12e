//! Qibla direction tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::aladhan::{
    ApiQuery,
    response::pluck,
    validation::{validate_latitude, validate_longitude},
};
use crate::domains::tools::handlers::ToolDefinition;

/// Parameters for the qibla bearing.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QiblaParams {
    /// Latitude in decimal degrees (-90 to 90).
    pub lat: f64,

    /// Longitude in decimal degrees (-180 to 180).
    pub lon: f64,
}

/// Qibla bearing from a coordinate.
#[derive(Debug, Clone)]
pub struct QiblaTool;

impl ToolDefinition for QiblaTool {
    const NAME: &'static str = "get_qibla";

    const DESCRIPTION: &'static str = "Get Qibla direction (bearing, degrees clockwise from true \
         north) from latitude/longitude.";

    type Params = QiblaParams;

    fn build_query(params: Self::Params) -> Result<ApiQuery, ToolError> {
        let lat = validate_latitude(params.lat)?;
        let lon = validate_longitude(params.lon)?;
        Ok(ApiQuery::new(format!("/qibla/{lat}/{lon}")))
    }

    fn shape_response(payload: Value) -> Value {
        match pluck(&payload, "/data/direction") {
            Some(direction) => json!({ "direction": direction }),
            None => payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AladhanConfig;
    use crate::domains::tools::definitions::aladhan::AladhanClient;
    use crate::domains::tools::handlers::{execute, prepare};

    fn new_york() -> rmcp::model::JsonObject {
        json!({ "lat": 40.7128, "lon": -74.0060 })
            .as_object()
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_coordinates_in_path() {
        let query = prepare::<QiblaTool>(new_york()).unwrap();
        assert_eq!(query.path(), "/qibla/40.7128/-74.006");
        assert!(query.params().is_empty());
    }

    #[test]
    fn test_out_of_range_longitude() {
        let arguments = json!({ "lat": 0, "lon": -181 }).as_object().cloned().unwrap();
        let err = prepare::<QiblaTool>(arguments).unwrap_err();
        assert_eq!(err.field(), Some("lon"));
    }

    #[test]
    fn test_shape_keeps_only_direction() {
        let payload = json!({
            "code": 200,
            "status": "OK",
            "data": { "latitude": 40.7128, "longitude": -74.006, "direction": 58.4817 }
        });
        assert_eq!(
            QiblaTool::shape_response(payload),
            json!({ "direction": 58.4817 })
        );
    }

    #[test]
    fn test_shape_without_direction_passes_payload_through() {
        let payload = json!({ "code": 200, "data": {} });
        assert_eq!(QiblaTool::shape_response(payload.clone()), payload);
    }

    // Integration tests (require network, run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_live_bearing_in_range() {
        let client = AladhanClient::new(&AladhanConfig::default()).unwrap();
        let result = execute::<QiblaTool>(&client, new_york()).await.unwrap();
        let bearing = result["direction"].as_f64().expect("numeric bearing");
        assert!((0.0..360.0).contains(&bearing));
    }
}
