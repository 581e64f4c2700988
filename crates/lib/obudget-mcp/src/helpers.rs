use std::borrow::Cow;

use obudget_core::ClientError;
use rmcp::model::{ErrorCode, LoggingLevel, LoggingMessageNotificationParam};
use rmcp::{ErrorData, Peer, RoleServer};
use serde_json::Value;
use tracing::{info, warn};

/// Logger name attached to progress notifications.
pub const LOGGER_NAME: &str = "obudget";

pub fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

pub fn map_err(err: ClientError) -> ErrorData {
    match err {
        ClientError::InvalidArgument(_) => mcp_err(ErrorCode::INVALID_PARAMS, err.to_string()),
        _ => mcp_err(ErrorCode::INTERNAL_ERROR, err.to_string()),
    }
}

/// Sends the advisory progress message for a tool call to the host.
///
/// The message carries no control semantics, so a delivery failure is only logged.
pub async fn announce(peer: &Peer<RoleServer>, message: String) {
    info!(target: "obudget::tools", "{message}");
    let param = LoggingMessageNotificationParam {
        level: LoggingLevel::Info,
        logger: Some(LOGGER_NAME.to_string()),
        data: Value::String(message),
    };
    if let Err(err) = peer.notify_logging_message(param).await {
        warn!(error = %err, "failed to deliver progress message");
    }
}
