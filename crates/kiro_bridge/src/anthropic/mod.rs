//! Anthropic Messages API models and content extraction

pub mod extract;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse, MessagesResponse, StreamEvent, Usage};
pub use types::{
    ContentBlock, ImageSource, Message, MessageContent, MessagesRequest, Role, SystemBlock,
    SystemPrompt, Tool, ToolChoice, ToolChoiceMode, ToolInputSchema,
};
