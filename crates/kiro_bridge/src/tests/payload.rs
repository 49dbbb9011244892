use serde_json::json;

use crate::anthropic::{ContentBlock, Message, MessagesRequest, SystemBlock, SystemPrompt, Tool, ToolInputSchema};
use crate::error::Error;
use crate::kiro::{
    CONTINUE_PROMPT, HistoryEntry, KiroPayload, ToolResultStatus, UserInputMessage, to_kiro_payload,
};
use crate::model::ModelMap;

fn convert(req: &MessagesRequest) -> KiroPayload {
    to_kiro_payload(req, "conv-123", None, &ModelMap::new()).unwrap()
}

fn current(payload: &KiroPayload) -> &UserInputMessage {
    &payload.conversation_state.current_message.user_input_message
}

fn user_entry(entry: &HistoryEntry) -> &UserInputMessage {
    match entry {
        HistoryEntry::UserInputMessage(msg) => msg,
        other => panic!("expected user entry, got {:?}", other),
    }
}

#[test]
fn test_empty_messages_is_invalid_request() {
    let req = MessagesRequest::new("claude-sonnet-4", vec![]);
    let err = to_kiro_payload(&req, "conv-123", None, &ModelMap::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidRequest(_)));
}

#[test]
fn test_single_message() {
    let req = MessagesRequest::new("claude-sonnet-4", vec![Message::user("Hi")]);
    let payload = convert(&req);

    let state = &payload.conversation_state;
    assert_eq!(state.conversation_id, "conv-123");
    assert!(state.history.is_empty());
    assert_eq!(current(&payload).content, "Hi");
    assert_eq!(current(&payload).model_id, "CLAUDE_SONNET_4_20250514_V1_0");
    assert!(current(&payload).user_input_message_context.is_none());
}

#[test]
fn test_empty_current_text_becomes_continue() {
    let req = MessagesRequest::new("claude-sonnet-4", vec![Message::user("")]);
    assert_eq!(current(&convert(&req)).content, CONTINUE_PROMPT);

    let blocks_only_image = MessagesRequest::new(
        "claude-sonnet-4",
        vec![Message::user(vec![ContentBlock::image("image/png", "AAAA")])],
    );
    assert_eq!(current(&convert(&blocks_only_image)).content, CONTINUE_PROMPT);
}

#[test]
fn test_system_prompt_injected_into_first_history_message() {
    let req = MessagesRequest::new(
        "claude-sonnet-4",
        vec![
            Message::user("U"),
            Message::assistant("A"),
            Message::user("Next"),
        ],
    )
    .with_system("S");
    let payload = convert(&req);

    let history = &payload.conversation_state.history;
    assert_eq!(history.len(), 2);
    assert_eq!(user_entry(&history[0]).content, "S\n\nU");
    assert_eq!(current(&payload).content, "Next");
}

#[test]
fn test_system_prompt_falls_back_to_current_message() {
    let req = MessagesRequest::new("claude-sonnet-4", vec![Message::user("Hi")]).with_system("S");
    assert_eq!(current(&convert(&req)).content, "S\n\nHi");
}

#[test]
fn test_system_prompt_with_assistant_first_lands_on_current() {
    let req = MessagesRequest::new(
        "claude-sonnet-4",
        vec![Message::assistant("A"), Message::user("Hi")],
    )
    .with_system("S");
    let payload = convert(&req);

    let history = &payload.conversation_state.history;
    assert_eq!(
        history[0],
        HistoryEntry::AssistantResponseMessage(crate::kiro::AssistantResponseMessage {
            content: "A".to_string(),
            tool_uses: None,
        })
    );
    assert_eq!(current(&payload).content, "S\n\nHi");
}

#[test]
fn test_system_prompt_from_blocks() {
    let req = MessagesRequest::new("claude-sonnet-4", vec![Message::user("Hi")]).with_system(
        SystemPrompt::Blocks(vec![
            SystemBlock {
                block_type: "text".to_string(),
                text: "Be ".to_string(),
            },
            SystemBlock {
                block_type: "text".to_string(),
                text: "brief.".to_string(),
            },
        ]),
    );
    assert_eq!(current(&convert(&req)).content, "Be brief.\n\nHi");
}

#[test]
fn test_assistant_terminated_conversation() {
    let req = MessagesRequest::new(
        "claude-sonnet-4",
        vec![Message::user("Hi"), Message::assistant("Hello")],
    );
    let payload = convert(&req);

    let history = &payload.conversation_state.history;
    assert_eq!(history.len(), 2);
    assert_eq!(user_entry(&history[0]).content, "Hi");
    assert_eq!(
        history[1],
        HistoryEntry::AssistantResponseMessage(crate::kiro::AssistantResponseMessage {
            content: "Hello".to_string(),
            tool_uses: None,
        })
    );
    assert_eq!(current(&payload).content, "Continue");
}

#[test]
fn test_assistant_terminated_keeps_tool_uses() {
    let req = MessagesRequest::new(
        "claude-sonnet-4",
        vec![
            Message::user("Find x"),
            Message::assistant(vec![
                ContentBlock::text("Searching"),
                ContentBlock::tool_use("t1", "search", json!({"q": "x"})),
            ]),
        ],
    );
    let payload = convert(&req);

    match &payload.conversation_state.history[1] {
        HistoryEntry::AssistantResponseMessage(msg) => {
            assert_eq!(msg.content, "Searching");
            let uses = msg.tool_uses.as_ref().unwrap();
            assert_eq!(uses[0].tool_use_id, "t1");
        }
        other => panic!("expected assistant entry, got {:?}", other),
    }
    assert!(current(&payload).user_input_message_context.is_none());
}

#[test]
fn test_tool_results_in_history_and_current() {
    let req = MessagesRequest::new(
        "claude-sonnet-4",
        vec![
            Message::user("Find x"),
            Message::assistant(vec![ContentBlock::tool_use("t1", "search", json!({"q": "x"}))]),
            Message::user(vec![ContentBlock::tool_result("t1", "found")]),
            Message::assistant(vec![ContentBlock::tool_use("t2", "search", json!({"q": "y"}))]),
            Message::user(vec![ContentBlock::tool_error("t2", "timeout")]),
        ],
    );
    let payload = convert(&req);

    let history = &payload.conversation_state.history;
    let past = user_entry(&history[2])
        .user_input_message_context
        .as_ref()
        .and_then(|ctx| ctx.tool_results.as_ref())
        .unwrap();
    assert_eq!(past[0].tool_use_id, "t1");
    assert_eq!(past[0].status, ToolResultStatus::Success);
    assert_eq!(past[0].content[0].text, "found");

    let ctx = current(&payload).user_input_message_context.as_ref().unwrap();
    let results = ctx.tool_results.as_ref().unwrap();
    assert_eq!(results[0].tool_use_id, "t2");
    assert_eq!(results[0].status, ToolResultStatus::Error);
    assert!(ctx.tools.is_none());
    assert_eq!(current(&payload).content, CONTINUE_PROMPT);
}

#[test]
fn test_tools_preserve_schema() {
    let schema: ToolInputSchema = serde_json::from_value(json!({
        "type": "object",
        "properties": {
            "q": {"type": "string", "description": "query"},
            "opts": {"type": "object", "properties": {"limit": {"type": "integer"}}}
        },
        "required": ["q"],
        "additionalProperties": false
    }))
    .unwrap();
    let req = MessagesRequest::new("claude-sonnet-4", vec![Message::user("Hi")]).with_tools(vec![
        Tool::new("search", "Search the web").with_schema(schema),
        Tool::new("noop", ""),
    ]);
    let payload = convert(&req);

    let tools = current(&payload)
        .user_input_message_context
        .as_ref()
        .and_then(|ctx| ctx.tools.as_ref())
        .unwrap();
    assert_eq!(tools.len(), 2);
    let spec = &tools[0].tool_specification;
    assert_eq!(spec.name, "search");
    assert_eq!(spec.description, "Search the web");
    assert_eq!(
        spec.input_schema.json,
        json!({
            "type": "object",
            "properties": {
                "q": {"type": "string", "description": "query"},
                "opts": {"type": "object", "properties": {"limit": {"type": "integer"}}}
            },
            "required": ["q"],
            "additionalProperties": false
        })
    );
    assert_eq!(tools[1].tool_specification.input_schema.json, json!({"type": "object"}));
}

#[test]
fn test_empty_tool_list_omits_context() {
    let req = MessagesRequest::new("claude-sonnet-4", vec![Message::user("Hi")]).with_tools(vec![]);
    assert!(current(&convert(&req)).user_input_message_context.is_none());
}

#[test]
fn test_caller_request_not_modified() {
    let req = MessagesRequest::new(
        "claude-sonnet-4",
        vec![Message::user("U"), Message::user("Next")],
    )
    .with_system("S");
    let before = req.clone();

    let _ = convert(&req);

    assert_eq!(req, before);
}

#[test]
fn test_profile_arn_handling() {
    let req = MessagesRequest::new("claude-sonnet-4", vec![Message::user("Hi")]);
    let models = ModelMap::new();

    let with_arn = to_kiro_payload(&req, "c", Some("arn:aws:test"), &models).unwrap();
    assert_eq!(with_arn.profile_arn.as_deref(), Some("arn:aws:test"));

    let empty = to_kiro_payload(&req, "c", Some(""), &models).unwrap();
    assert!(empty.profile_arn.is_none());

    let absent = to_kiro_payload(&req, "c", None, &models).unwrap();
    assert!(absent.profile_arn.is_none());
}

#[test]
fn test_custom_resolver() {
    let req = MessagesRequest::new("anything", vec![Message::user("Hi")]);
    let resolver = |model: &str| format!("internal-{}", model);
    let payload = to_kiro_payload(&req, "c", None, &resolver).unwrap();
    assert_eq!(current(&payload).model_id, "internal-anything");
}

#[test]
fn test_history_order_preserved() {
    let req = MessagesRequest::new(
        "claude-sonnet-4",
        vec![
            Message::user("1"),
            Message::assistant("2"),
            Message::user("3"),
            Message::assistant("4"),
            Message::user("5"),
        ],
    );
    let payload = convert(&req);

    let contents: Vec<&str> = payload
        .conversation_state
        .history
        .iter()
        .map(|entry| match entry {
            HistoryEntry::UserInputMessage(msg) => msg.content.as_str(),
            HistoryEntry::AssistantResponseMessage(msg) => msg.content.as_str(),
        })
        .collect();
    assert_eq!(contents, vec!["1", "2", "3", "4"]);
    assert_eq!(current(&payload).content, "5");
}
