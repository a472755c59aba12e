//! Tool Router - builds the rmcp ToolRouter from registry.
//!
//! Every registry entry becomes one dynamic route. A route races the tool
//! call against the request's cancellation token and always answers with a
//! `CallToolResult`; tool failures are reported in-band with `isError` set.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter};
use rmcp::model::{CallToolResult, JsonObject};
use tracing::info;

use super::ToolError;
use super::definitions::aladhan::{AladhanClient, response::call_result};
use super::registry::{ToolEntry, ToolRegistry};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<AladhanClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRegistry::entries()
        .iter()
        .fold(ToolRouter::new(), |router, entry| {
            router.with_route(create_route(entry, client.clone()))
        })
}

fn create_route<S>(entry: &'static ToolEntry, client: Arc<AladhanClient>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(entry.tool.clone(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let ct = ctx.request_context.ct.clone();
        let client = client.clone();
        async move { Ok(call_until_cancelled(entry, client, args, ct.cancelled()).await) }.boxed()
    })
}

/// Run `entry` unless `cancelled` resolves first.
///
/// Losing the race drops the in-flight request.
async fn call_until_cancelled<F>(
    entry: &'static ToolEntry,
    client: Arc<AladhanClient>,
    args: JsonObject,
    cancelled: F,
) -> CallToolResult
where
    F: Future<Output = ()>,
{
    let outcome = tokio::select! {
        outcome = (entry.call)(client, args) => outcome,
        _ = cancelled => {
            info!("Tool {} cancelled by client", entry.name);
            Err(ToolError::Cancelled)
        }
    };
    call_result(entry.name, outcome)
}
