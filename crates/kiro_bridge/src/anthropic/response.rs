//! Anthropic Messages API response, streaming and error types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::ContentBlock;
use crate::error::Error;

/// Token usage information
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Non-streaming Messages API response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub id: String,
    #[serde(rename = "type", default = "default_message_type")]
    pub response_type: String,
    #[serde(default = "default_assistant_role")]
    pub role: String,
    pub content: Vec<ContentBlock>,
    pub model: String,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub stop_sequence: Option<String>,
    pub usage: Usage,
}

fn default_message_type() -> String {
    "message".to_string()
}

fn default_assistant_role() -> String {
    "assistant".to_string()
}

impl MessagesResponse {
    pub fn new(
        id: impl Into<String>,
        model: impl Into<String>,
        content: Vec<ContentBlock>,
        usage: Usage,
    ) -> Self {
        Self {
            id: id.into(),
            response_type: default_message_type(),
            role: default_assistant_role(),
            content,
            model: model.into(),
            stop_reason: None,
            stop_sequence: None,
            usage,
        }
    }

    pub fn with_stop_reason(mut self, reason: impl Into<String>) -> Self {
        self.stop_reason = Some(reason.into());
        self
    }
}

/// Server-sent event payloads of a streaming response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    MessageStart {
        message: Map<String, Value>,
    },
    ContentBlockStart {
        index: u32,
        content_block: ContentBlock,
    },
    ContentBlockDelta {
        index: u32,
        delta: Map<String, Value>,
    },
    ContentBlockStop {
        index: u32,
    },
    MessageDelta {
        delta: Map<String, Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        usage: Option<Map<String, Value>>,
    },
    MessageStop,
    Ping,
}

impl StreamEvent {
    /// SSE event name, identical to the `type` tag.
    pub fn event_name(&self) -> &'static str {
        match self {
            StreamEvent::MessageStart { .. } => "message_start",
            StreamEvent::ContentBlockStart { .. } => "content_block_start",
            StreamEvent::ContentBlockDelta { .. } => "content_block_delta",
            StreamEvent::ContentBlockStop { .. } => "content_block_stop",
            StreamEvent::MessageDelta { .. } => "message_delta",
            StreamEvent::MessageStop => "message_stop",
            StreamEvent::Ping => "ping",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

/// Error body returned to Messages API clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type", default = "default_error_type")]
    pub response_type: String,
    pub error: ErrorDetail,
}

fn default_error_type() -> String {
    "error".to_string()
}

impl ErrorResponse {
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            response_type: default_error_type(),
            error: ErrorDetail {
                error_type: error_type.into(),
                message: message.into(),
            },
        }
    }
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        match err {
            Error::InvalidRequest(msg) => ErrorResponse::new("invalid_request_error", msg.clone()),
            other => ErrorResponse::new("api_error", other.to_string()),
        }
    }
}
