//! Tool definition trait and the shared call pipeline.
//!
//! Each Aladhan tool implements [`ToolDefinition`]: a name, a description,
//! a params struct (which doubles as the JSON input schema), a request
//! builder and, optionally, a response shaper. [`execute`] runs the
//! pipeline every tool shares:
//!
//! ```text
//! arguments -> schema check -> params -> ApiQuery -> HTTP GET -> shaped JSON
//! ```

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use super::ToolError;
use super::definitions::aladhan::{
    AladhanClient, ApiQuery, response::unwrap_data, validation::check_arguments,
};

/// Trait implemented by every tool definition.
pub trait ToolDefinition: 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Typed arguments. Optional arguments are `Option` fields.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Validate params and map them to one Aladhan request.
    fn build_query(params: Self::Params) -> Result<ApiQuery, ToolError>;

    /// Select what the caller receives from the upstream payload.
    fn shape_response(payload: Value) -> Value {
        unwrap_data(payload)
    }

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// Check and decode raw arguments into `T::Params`.
pub fn parse_arguments<T: ToolDefinition>(arguments: JsonObject) -> Result<T::Params, ToolError> {
    let schema = cached_schema_for_type::<T::Params>();
    check_arguments(&schema, &arguments)?;

    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_argument("arguments", e.to_string()))
}

/// Validate, build and describe the request without sending it.
pub fn prepare<T: ToolDefinition>(arguments: JsonObject) -> Result<ApiQuery, ToolError> {
    let params = parse_arguments::<T>(arguments)?;
    let query = T::build_query(params)?;
    debug!("{} -> {}?{}", T::NAME, query.path(), query.encoded());
    Ok(query)
}

/// Run the full pipeline for tool `T`.
///
/// Validation failures return before the client is touched.
pub async fn execute<T: ToolDefinition>(
    client: &AladhanClient,
    arguments: JsonObject,
) -> Result<Value, ToolError> {
    info!("Tool called: {}", T::NAME);
    let query = prepare::<T>(arguments)?;
    let payload = client.get(&query).await?;
    Ok(T::shape_response(payload))
}
