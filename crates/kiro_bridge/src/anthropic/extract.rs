//! Derived views over message content: text, tool uses and tool results.
//!
//! Content arrives either as a plain string or as an ordered block list.
//! Every function here walks blocks in order and matches on the block tag.

use crate::kiro::types::{KiroTextContent, KiroToolResult, KiroToolUse, ToolResultStatus};

use super::types::{ContentBlock, MessageContent, SystemPrompt};

/// Concatenate the text of all `text` blocks. Plain strings pass through.
pub fn extract_text(content: &MessageContent) -> String {
    match content {
        MessageContent::Text(text) => text.clone(),
        MessageContent::Blocks(blocks) => blocks
            .iter()
            .filter_map(ContentBlock::as_text)
            .collect::<String>(),
    }
}

/// Collect `tool_use` blocks as backend tool invocations.
pub fn extract_tool_uses(content: &MessageContent) -> Vec<KiroToolUse> {
    content
        .blocks()
        .iter()
        .filter_map(|block| match block {
            ContentBlock::ToolUse { id, name, input } => Some(KiroToolUse {
                name: name.clone(),
                input: input.clone(),
                tool_use_id: id.clone(),
            }),
            _ => None,
        })
        .collect()
}

/// Collect `tool_result` blocks as backend tool results.
///
/// Nested result content is reduced to a single text entry.
pub fn extract_tool_results(content: &MessageContent) -> Vec<KiroToolResult> {
    content
        .blocks()
        .iter()
        .filter_map(|block| match block {
            ContentBlock::ToolResult {
                tool_use_id,
                content,
                is_error,
            } => Some(KiroToolResult {
                content: vec![KiroTextContent {
                    text: extract_text(content),
                }],
                status: if is_error.unwrap_or(false) {
                    ToolResultStatus::Error
                } else {
                    ToolResultStatus::Success
                },
                tool_use_id: tool_use_id.clone(),
            }),
            _ => None,
        })
        .collect()
}

/// Resolve the system prompt to plain text; empty when absent.
pub fn extract_system_prompt(system: Option<&SystemPrompt>) -> String {
    match system {
        None => String::new(),
        Some(SystemPrompt::Text(text)) => text.clone(),
        Some(SystemPrompt::Blocks(blocks)) => blocks
            .iter()
            .filter(|b| b.block_type == "text")
            .map(|b| b.text.as_str())
            .collect::<String>(),
    }
}

/// Number of image blocks, which have no backend representation.
pub fn count_images(content: &MessageContent) -> usize {
    content
        .blocks()
        .iter()
        .filter(|b| matches!(b, ContentBlock::Image { .. }))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anthropic::types::SystemBlock;
    use serde_json::json;

    #[test]
    fn test_extract_text_string_is_verbatim() {
        let content = MessageContent::from("  hello\n");
        assert_eq!(extract_text(&content), "  hello\n");
    }

    #[test]
    fn test_extract_text_empty_blocks() {
        assert_eq!(extract_text(&MessageContent::Blocks(vec![])), "");
    }

    #[test]
    fn test_extract_text_skips_non_text_blocks() {
        let content = MessageContent::Blocks(vec![
            ContentBlock::text("a"),
            ContentBlock::image("image/png", "aGVsbG8="),
            ContentBlock::tool_use("t1", "search", json!({})),
            ContentBlock::text("b"),
        ]);
        assert_eq!(extract_text(&content), "ab");
    }

    #[test]
    fn test_extract_tool_uses() {
        let content = MessageContent::Blocks(vec![
            ContentBlock::text("let me look"),
            ContentBlock::tool_use("t1", "search", json!({"q": "x"})),
        ]);
        let uses = extract_tool_uses(&content);
        assert_eq!(uses.len(), 1);
        assert_eq!(uses[0].name, "search");
        assert_eq!(uses[0].input, json!({"q": "x"}));
        assert_eq!(uses[0].tool_use_id, "t1");

        let json = serde_json::to_value(&uses[0]).unwrap();
        assert_eq!(
            json,
            json!({"name": "search", "input": {"q": "x"}, "toolUseId": "t1"})
        );
    }

    #[test]
    fn test_extract_tool_uses_from_string_is_empty() {
        assert!(extract_tool_uses(&MessageContent::from("hi")).is_empty());
        assert!(extract_tool_results(&MessageContent::from("hi")).is_empty());
    }

    #[test]
    fn test_extract_tool_results_status() {
        let content = MessageContent::Blocks(vec![
            ContentBlock::tool_result("ok", "fine"),
            ContentBlock::tool_error("bad", "boom"),
            ContentBlock::ToolResult {
                tool_use_id: "explicit".to_string(),
                content: MessageContent::from("x"),
                is_error: Some(false),
            },
        ]);
        let results = extract_tool_results(&content);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].status, ToolResultStatus::Success);
        assert_eq!(results[1].status, ToolResultStatus::Error);
        assert_eq!(results[2].status, ToolResultStatus::Success);
        assert_eq!(results[1].tool_use_id, "bad");
    }

    #[test]
    fn test_extract_tool_results_flattens_nested_blocks() {
        let content = MessageContent::Blocks(vec![ContentBlock::tool_result(
            "t1",
            vec![
                ContentBlock::text("line 1\n"),
                ContentBlock::image("image/png", "aGVsbG8="),
                ContentBlock::text("line 2"),
            ],
        )]);
        let results = extract_tool_results(&content);
        assert_eq!(
            serde_json::to_value(&results).unwrap(),
            json!([{
                "content": [{"text": "line 1\nline 2"}],
                "status": "success",
                "toolUseId": "t1"
            }])
        );
    }

    #[test]
    fn test_generic_and_typed_blocks_agree() {
        let raw = json!([
            {"type": "text", "text": "see "},
            {"type": "tool_use", "id": "t1", "name": "search", "input": {"q": "x"}},
            {"type": "tool_result", "tool_use_id": "t0", "content": "r", "is_error": true}
        ]);
        let generic = MessageContent::from(&raw);
        let typed: MessageContent = serde_json::from_value(raw).unwrap();

        assert_eq!(extract_text(&generic), extract_text(&typed));
        assert_eq!(extract_tool_uses(&generic), extract_tool_uses(&typed));
        assert_eq!(extract_tool_results(&generic), extract_tool_results(&typed));
    }

    #[test]
    fn test_extract_system_prompt() {
        assert_eq!(extract_system_prompt(None), "");
        assert_eq!(
            extract_system_prompt(Some(&SystemPrompt::from("be brief"))),
            "be brief"
        );
        let blocks = SystemPrompt::Blocks(vec![
            SystemBlock {
                block_type: "text".to_string(),
                text: "one ".to_string(),
            },
            SystemBlock {
                block_type: "text".to_string(),
                text: "two".to_string(),
            },
        ]);
        assert_eq!(extract_system_prompt(Some(&blocks)), "one two");
    }

    #[test]
    fn test_count_images() {
        let content = MessageContent::Blocks(vec![
            ContentBlock::image("image/png", "a"),
            ContentBlock::text("caption"),
            ContentBlock::image("image/jpeg", "b"),
        ]);
        assert_eq!(count_images(&content), 2);
        assert_eq!(count_images(&MessageContent::from("x")), 0);
    }
}
