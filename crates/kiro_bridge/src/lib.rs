//! kiro_bridge — Messages API to Kiro payload conversion.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐    ┌───────────────────┐    ┌──────────────────┐
//! │ MessagesRequest  │───▶│  to_kiro_payload  │───▶│   KiroPayload    │
//! │ (anthropic)      │    │  (kiro::convert)  │    │ (conversationState)
//! └──────────────────┘    └─────────┬─────────┘    └──────────────────┘
//!                                   │
//!                  ┌────────────────┼────────────────┐
//!                  ▼                ▼                ▼
//!          ┌──────────────┐ ┌──────────────┐ ┌──────────────┐
//!          │   extract    │ │ ModelResolver│ │ BridgeConfig │
//!          │ text / tools │ │  (ModelMap)  │ │  (from_env)  │
//!          └──────────────┘ └──────────────┘ └──────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kiro_bridge::{BridgeConfig, Message, MessagesRequest};
//!
//! let config = BridgeConfig::from_env().unwrap();
//! let req = MessagesRequest::new("claude-sonnet-4", vec![Message::user("Hello")])
//!     .with_system("You are terse.");
//! let payload = config.to_payload(&req, "conv-1").unwrap();
//! println!("{}", serde_json::to_string(&payload).unwrap());
//! ```

pub mod anthropic;
pub mod config;
pub mod error;
pub mod kiro;
pub mod model;

#[cfg(test)]
mod tests;

pub use config::BridgeConfig;
pub use error::{Error, Result};
pub use model::{ModelMap, ModelResolver};

// Re-export commonly used types
pub use anthropic::{ContentBlock, Message, MessageContent, MessagesRequest, Role, Tool};
pub use kiro::{KiroPayload, PromptPlacement, to_kiro_payload};
