//! Calculation method listing tool.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::aladhan::ApiQuery;
use crate::domains::tools::handlers::ToolDefinition;

/// This tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListCalculationMethodsParams {}

/// Lists the prayer-time calculation methods Aladhan supports.
#[derive(Debug, Clone)]
pub struct ListCalculationMethodsTool;

impl ToolDefinition for ListCalculationMethodsTool {
    const NAME: &'static str = "list_calculation_methods";

    const DESCRIPTION: &'static str = "List Aladhan prayer-time calculation methods. \
         Returns each method keyed by name with its numeric id (usable as the `method` \
         argument of the other tools), display name and angle parameters.";

    type Params = ListCalculationMethodsParams;

    fn build_query(_params: Self::Params) -> Result<ApiQuery, ToolError> {
        Ok(ApiQuery::new("/methods"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AladhanConfig;
    use crate::domains::tools::definitions::aladhan::AladhanClient;
    use crate::domains::tools::handlers::{execute, prepare};
    use rmcp::model::JsonObject;

    #[test]
    fn test_query_has_no_parameters() {
        let query = prepare::<ListCalculationMethodsTool>(JsonObject::new()).unwrap();
        assert_eq!(query.path(), "/methods");
        assert!(query.params().is_empty());
    }

    // Integration tests (require network, run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_live_method_table() {
        let client = AladhanClient::new(&AladhanConfig::default()).unwrap();
        let table = execute::<ListCalculationMethodsTool>(&client, JsonObject::new())
            .await
            .unwrap();

        let methods = table.as_object().expect("method table is an object");
        let ids: Vec<i64> = methods
            .values()
            .filter_map(|m| m.get("id").and_then(|id| id.as_i64()))
            .collect();
        for id in (0..=15).chain([99]) {
            assert!(ids.contains(&id), "method {id} missing");
        }
        for method in methods.values() {
            let Some(id) = method.get("id").and_then(|id| id.as_i64()) else {
                continue;
            };
            if id <= 15 {
                let name = method.get("name").and_then(|n| n.as_str()).unwrap_or_default();
                assert!(!name.is_empty(), "method {id} has no name");
            }
        }
    }
}
