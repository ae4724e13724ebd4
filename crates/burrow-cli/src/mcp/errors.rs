//! Error handling utilities for MCP server

use burrow_core::BurrowError;
use rmcp::ErrorData;

/// Helper to convert session errors to MCP errors.
///
/// Errors caused by the request itself become `invalid_params`; everything
/// else is reported as an internal error.
pub fn to_mcp_error(message: &str, error: &BurrowError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        BurrowError::InvalidInput { .. }
        | BurrowError::IndexOutOfRange { .. }
        | BurrowError::DayNotFound { .. }
        | BurrowError::DayLocked { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}
