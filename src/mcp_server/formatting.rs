//! Conversion of analysis results into MCP tool results

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

use crate::error::AnalyzerError;
use crate::project::RootStatus;
use crate::service::NO_PROJECT_ROOT_MESSAGE;

/// Pretty JSON on success, the error's message as a tool error otherwise
pub(super) fn json_result<T: Serialize>(result: Result<T, AnalyzerError>) -> CallToolResult {
    match result.and_then(|value| Ok(serde_json::to_string_pretty(&value)?)) {
        Ok(json) => CallToolResult::success(vec![Content::text(json)]),
        Err(e) => error_result(&e),
    }
}

/// Plain text on success
pub(super) fn text_result(result: Result<String, AnalyzerError>) -> CallToolResult {
    match result {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => error_result(&e),
    }
}

/// The unset state is a normal reply, not a failure
pub(super) fn root_status_result(status: RootStatus) -> CallToolResult {
    match status {
        RootStatus::Unset => text_result(Ok(NO_PROJECT_ROOT_MESSAGE.to_string())),
        status => json_result(Ok(status)),
    }
}

fn error_result(error: &AnalyzerError) -> CallToolResult {
    tracing::debug!("Tool call failed ({:?}): {}", error.category(), error);
    CallToolResult::error(vec![Content::text(format!("Error: {}", error))])
}
