//! Conversion from Messages API requests to Kiro payloads

use std::borrow::Cow;

use super::types::{
    AssistantResponseMessage, ChatTriggerType, ConversationState, CurrentMessage, HistoryEntry,
    KiroInputSchema, KiroPayload, KiroTool, ToolSpecification, UserInputMessage,
    UserInputMessageContext,
};
use crate::anthropic::extract::{
    count_images, extract_system_prompt, extract_text, extract_tool_results, extract_tool_uses,
};
use crate::anthropic::{Message, MessagesRequest, Role, Tool};
use crate::error::{Error, Result};
use crate::model::ModelResolver;

/// Text sent as the user turn when the conversation has nothing to say.
pub const CONTINUE_PROMPT: &str = "Continue";

/// Where the system prompt ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPlacement {
    /// Prepended to the first history message (a user turn)
    History,
    /// Prepended to the current turn's text
    Current,
    /// No system prompt was supplied
    Absent,
}

/// Convert a Messages request to a Kiro payload.
///
/// All messages but the last become `history`; the last becomes the current
/// user turn. A trailing assistant turn is folded into history and replaced
/// by [`CONTINUE_PROMPT`]. Fails only when `messages` is empty.
pub fn to_kiro_payload(
    req: &MessagesRequest,
    conversation_id: &str,
    profile_arn: Option<&str>,
    models: &dyn ModelResolver,
) -> Result<KiroPayload> {
    let Some((current, history_messages)) = req.messages.split_last() else {
        return Err(Error::invalid_request("No messages provided"));
    };

    let model_id = models.resolve(&req.model);
    let system_prompt = extract_system_prompt(req.system.as_ref());

    let (history_messages, placement) = inject_system_prompt(history_messages, &system_prompt);
    let mut history = to_kiro_history(&history_messages, &model_id);

    let mut current_text = extract_text(&current.content);
    if placement == PromptPlacement::Current {
        current_text = format!("{}\n\n{}", system_prompt, current_text);
    }

    if current.role == Role::Assistant {
        history.push(HistoryEntry::AssistantResponseMessage(
            AssistantResponseMessage {
                content: current_text,
                tool_uses: non_empty(extract_tool_uses(&current.content)),
            },
        ));
        current_text = CONTINUE_PROMPT.to_string();
    }

    if current_text.is_empty() {
        current_text = CONTINUE_PROMPT.to_string();
    }

    let context = UserInputMessageContext {
        tool_results: match current.role {
            Role::User => non_empty(extract_tool_results(&current.content)),
            Role::Assistant => None,
        },
        tools: req.tools.as_deref().and_then(to_kiro_tools),
    };

    let dropped_images: usize = req.messages.iter().map(|m| count_images(&m.content)).sum();
    if dropped_images > 0 {
        tracing::debug!(count = dropped_images, "Image blocks have no Kiro representation, dropped");
    }

    tracing::debug!(
        model = %req.model,
        model_id = %model_id,
        history = history.len(),
        ?placement,
        tools = context.tools.as_ref().map_or(0, Vec::len),
        tool_results = context.tool_results.as_ref().map_or(0, Vec::len),
        "Built Kiro payload"
    );

    let user_input_message = UserInputMessage::new(current_text, model_id).with_context(context);

    Ok(KiroPayload {
        conversation_state: ConversationState {
            chat_trigger_type: ChatTriggerType::Manual,
            conversation_id: conversation_id.to_string(),
            current_message: CurrentMessage { user_input_message },
            history,
        },
        profile_arn: profile_arn
            .filter(|arn| !arn.is_empty())
            .map(str::to_string),
    })
}

/// Prepend the system prompt to the first history message when it is a user
/// turn. The caller's messages are never modified; only the first entry of the
/// returned list may be a new value.
fn inject_system_prompt<'a>(
    history: &'a [Message],
    system_prompt: &str,
) -> (Vec<Cow<'a, Message>>, PromptPlacement) {
    let mut messages: Vec<Cow<'a, Message>> = history.iter().map(Cow::Borrowed).collect();

    if system_prompt.is_empty() {
        return (messages, PromptPlacement::Absent);
    }

    let placement = match messages.first_mut() {
        Some(first) if first.role == Role::User => {
            *first = Cow::Owned(first.with_system_prompt(system_prompt));
            PromptPlacement::History
        }
        _ => PromptPlacement::Current,
    };

    (messages, placement)
}

/// Convert past messages to history entries, preserving order.
pub fn to_kiro_history<M>(messages: &[M], model_id: &str) -> Vec<HistoryEntry>
where
    M: AsRef<Message>,
{
    messages
        .iter()
        .map(|msg| {
            let msg = msg.as_ref();
            let content = extract_text(&msg.content);
            match msg.role {
                Role::User => HistoryEntry::UserInputMessage(
                    UserInputMessage::new(content, model_id).with_context(
                        UserInputMessageContext {
                            tool_results: non_empty(extract_tool_results(&msg.content)),
                            tools: None,
                        },
                    ),
                ),
                Role::Assistant => {
                    HistoryEntry::AssistantResponseMessage(AssistantResponseMessage {
                        content,
                        tool_uses: non_empty(extract_tool_uses(&msg.content)),
                    })
                }
            }
        })
        .collect()
}

/// Convert tool definitions; `None` when there are none.
pub fn to_kiro_tools(tools: &[Tool]) -> Option<Vec<KiroTool>> {
    let converted: Vec<KiroTool> = tools
        .iter()
        .map(|tool| KiroTool {
            tool_specification: ToolSpecification {
                name: tool.name.clone(),
                description: tool.description.clone(),
                input_schema: KiroInputSchema {
                    json: tool.input_schema.to_json(),
                },
            },
        })
        .collect();

    non_empty(converted)
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}
