//! Kiro backend module
//!
//! The backend takes a conversation as a flat `history` of alternating
//! user/assistant entries plus exactly one current user turn.

mod convert;
pub(crate) mod types;

pub use convert::{CONTINUE_PROMPT, PromptPlacement, to_kiro_history, to_kiro_payload, to_kiro_tools};
pub use types::{
    AssistantResponseMessage, ChatTriggerType, ConversationState, CurrentMessage, HistoryEntry,
    KiroInputSchema, KiroPayload, KiroTextContent, KiroTool, KiroToolResult, KiroToolUse, Origin,
    ToolResultStatus, ToolSpecification, UserInputMessage, UserInputMessageContext,
};
