//! Anthropic Messages API request types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::extract::extract_text;

/// Message author. The Messages API only knows these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Base64 image payload. Never decoded here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSource {
    #[serde(rename = "type", default = "default_image_source_type")]
    pub source_type: String,
    pub media_type: String,
    pub data: String,
}

fn default_image_source_type() -> String {
    "base64".to_string()
}

/// One typed unit of message content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    Image {
        source: ImageSource,
    },
    ToolUse {
        id: String,
        name: String,
        input: Value,
    },
    ToolResult {
        tool_use_id: String,
        #[serde(default)]
        content: MessageContent,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        is_error: Option<bool>,
    },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    pub fn image(media_type: impl Into<String>, data: impl Into<String>) -> Self {
        ContentBlock::Image {
            source: ImageSource {
                source_type: default_image_source_type(),
                media_type: media_type.into(),
                data: data.into(),
            },
        }
    }

    pub fn tool_use(id: impl Into<String>, name: impl Into<String>, input: Value) -> Self {
        ContentBlock::ToolUse {
            id: id.into(),
            name: name.into(),
            input,
        }
    }

    pub fn tool_result(tool_use_id: impl Into<String>, content: impl Into<MessageContent>) -> Self {
        ContentBlock::ToolResult {
            tool_use_id: tool_use_id.into(),
            content: content.into(),
            is_error: None,
        }
    }

    pub fn tool_error(tool_use_id: impl Into<String>, content: impl Into<MessageContent>) -> Self {
        ContentBlock::ToolResult {
            tool_use_id: tool_use_id.into(),
            content: content.into(),
            is_error: Some(true),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text { text } => Some(text),
            _ => None,
        }
    }

    /// Read a block from a generic key-value object.
    ///
    /// Missing fields fall back to empty values; objects without a known
    /// `type` yield `None` and are dropped by the caller.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let str_field = |key: &str| {
            obj.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        match obj.get("type").and_then(Value::as_str)? {
            "text" => Some(ContentBlock::Text {
                text: str_field("text"),
            }),
            "image" => {
                let source = obj
                    .get("source")
                    .and_then(|s| serde_json::from_value(s.clone()).ok())?;
                Some(ContentBlock::Image { source })
            }
            "tool_use" => Some(ContentBlock::ToolUse {
                id: str_field("id"),
                name: str_field("name"),
                input: obj.get("input").cloned().unwrap_or_else(|| json!({})),
            }),
            "tool_result" => Some(ContentBlock::ToolResult {
                tool_use_id: str_field("tool_use_id"),
                content: obj
                    .get("content")
                    .map(MessageContent::from)
                    .unwrap_or_default(),
                is_error: obj.get("is_error").map(is_truthy),
            }),
            _ => None,
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Message content (can be a plain string or an ordered list of blocks)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

impl MessageContent {
    pub fn blocks(&self) -> &[ContentBlock] {
        match self {
            MessageContent::Text(_) => &[],
            MessageContent::Blocks(blocks) => blocks,
        }
    }
}

impl Default for MessageContent {
    fn default() -> Self {
        MessageContent::Text(String::new())
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        MessageContent::Text(text)
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        MessageContent::Text(text.to_string())
    }
}

impl From<Vec<ContentBlock>> for MessageContent {
    fn from(blocks: Vec<ContentBlock>) -> Self {
        MessageContent::Blocks(blocks)
    }
}

/// Normalize content materialized as generic JSON.
///
/// Strings stay text, arrays are read block by block, and any other value is
/// kept as its JSON string form.
impl From<&Value> for MessageContent {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(text) => MessageContent::Text(text.clone()),
            Value::Array(items) => MessageContent::Blocks(
                items.iter().filter_map(ContentBlock::from_value).collect(),
            ),
            other => MessageContent::Text(other.to_string()),
        }
    }
}

/// A single conversation turn. Unknown fields on the wire are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: MessageContent,
}

impl Message {
    pub fn new(role: Role, content: impl Into<MessageContent>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<MessageContent>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<MessageContent>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Copy of this message with `prompt` prepended to its text.
    ///
    /// Block-structured content collapses its text into one leading text
    /// block; every non-text block follows in its original order.
    pub fn with_system_prompt(&self, prompt: &str) -> Message {
        let text = format!("{}\n\n{}", prompt, extract_text(&self.content));
        let content = match &self.content {
            MessageContent::Text(_) => MessageContent::Text(text),
            MessageContent::Blocks(blocks) => {
                let mut merged = Vec::with_capacity(blocks.len() + 1);
                merged.push(ContentBlock::Text { text });
                merged.extend(
                    blocks
                        .iter()
                        .filter(|b| !matches!(b, ContentBlock::Text { .. }))
                        .cloned(),
                );
                MessageContent::Blocks(merged)
            }
        };

        Message {
            role: self.role,
            content,
        }
    }
}

impl AsRef<Message> for Message {
    fn as_ref(&self) -> &Message {
        self
    }
}

/// System prompt block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemBlock {
    #[serde(rename = "type", default = "default_system_block_type")]
    pub block_type: String,
    pub text: String,
}

fn default_system_block_type() -> String {
    "text".to_string()
}

/// System prompt (can be a string or a list of text blocks)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SystemPrompt {
    Text(String),
    Blocks(Vec<SystemBlock>),
}

impl From<&str> for SystemPrompt {
    fn from(text: &str) -> Self {
        SystemPrompt::Text(text.to_string())
    }
}

/// JSON Schema for tool input parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInputSchema {
    #[serde(rename = "type", default = "default_schema_type")]
    pub schema_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_schema_type() -> String {
    "object".to_string()
}

impl Default for ToolInputSchema {
    fn default() -> Self {
        Self {
            schema_type: default_schema_type(),
            properties: None,
            required: None,
            extra: Map::new(),
        }
    }
}

impl ToolInputSchema {
    /// The schema as a JSON object, omitting absent optional keys.
    pub fn to_json(&self) -> Value {
        let mut schema = Map::new();
        schema.insert("type".to_string(), json!(self.schema_type));
        if let Some(properties) = &self.properties {
            schema.insert("properties".to_string(), Value::Object(properties.clone()));
        }
        if let Some(required) = &self.required {
            schema.insert("required".to_string(), json!(required));
        }
        for (key, value) in &self.extra {
            schema.insert(key.clone(), value.clone());
        }
        Value::Object(schema)
    }
}

/// Tool definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub input_schema: ToolInputSchema,
}

impl Tool {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema: ToolInputSchema::default(),
        }
    }

    pub fn with_schema(mut self, input_schema: ToolInputSchema) -> Self {
        self.input_schema = input_schema;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolChoiceMode {
    Auto,
    Any,
}

/// Tool choice strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolChoice {
    Mode(ToolChoiceMode),
    Spec(Map<String, Value>),
}

/// Messages API request.
///
/// Generation parameters are carried for the caller; conversion only reads
/// `model`, `messages`, `system` and `tools`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemPrompt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
    #[serde(default)]
    pub stream: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    /// Top-level keys this crate has no field for
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_max_tokens() -> u32 {
    4096
}

impl MessagesRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            max_tokens: default_max_tokens(),
            system: None,
            temperature: None,
            top_p: None,
            top_k: None,
            stop_sequences: None,
            stream: false,
            tools: None,
            tool_choice: None,
            metadata: None,
            extra: Map::new(),
        }
    }

    pub fn with_system(mut self, system: impl Into<SystemPrompt>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_tools(mut self, tools: Vec<Tool>) -> Self {
        self.tools = Some(tools);
        self
    }
}
