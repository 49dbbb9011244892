//! Model name resolution.
//!
//! Clients address models by their public Anthropic names; the backend wants
//! its own internal identifiers. Names without a mapping pass through.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Maps a client-facing model name to the backend model ID.
pub trait ModelResolver {
    fn resolve(&self, model: &str) -> String;
}

impl<F> ModelResolver for F
where
    F: Fn(&str) -> String,
{
    fn resolve(&self, model: &str) -> String {
        self(model)
    }
}

const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("claude-opus-4-5", "claude-opus-4.5"),
    ("claude-opus-4-5-20251101", "claude-opus-4.5"),
    ("claude-haiku-4-5", "claude-haiku-4.5"),
    ("claude-haiku-4.5", "claude-haiku-4.5"),
    ("claude-sonnet-4-5", "CLAUDE_SONNET_4_5_20250929_V1_0"),
    ("claude-sonnet-4-5-20250929", "CLAUDE_SONNET_4_5_20250929_V1_0"),
    ("claude-sonnet-4", "CLAUDE_SONNET_4_20250514_V1_0"),
    ("claude-sonnet-4-20250514", "CLAUDE_SONNET_4_20250514_V1_0"),
    ("claude-3-7-sonnet-20250219", "CLAUDE_3_7_SONNET_20250219_V1_0"),
    ("auto", "claude-sonnet-4.5"),
];

/// Table-driven resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelMap {
    aliases: BTreeMap<String, String>,
}

impl Default for ModelMap {
    fn default() -> Self {
        Self {
            aliases: DEFAULT_ALIASES
                .iter()
                .map(|(name, id)| (name.to_string(), id.to_string()))
                .collect(),
        }
    }
}

impl ModelMap {
    /// Map seeded with the built-in aliases.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map with no aliases; every name passes through.
    pub fn empty() -> Self {
        Self {
            aliases: BTreeMap::new(),
        }
    }

    /// Add or replace an alias. Returns `self` for chaining.
    pub fn with_alias(mut self, name: impl Into<String>, model_id: impl Into<String>) -> Self {
        self.aliases.insert(name.into(), model_id.into());
        self
    }

    /// Apply overrides written as `name=id,name=id`.
    ///
    /// Blank entries are skipped; an entry without `=` or with an empty side
    /// is a configuration error.
    pub fn with_overrides(mut self, spec: &str) -> Result<Self> {
        for entry in spec.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, id) = entry
                .split_once('=')
                .map(|(n, i)| (n.trim(), i.trim()))
                .filter(|(n, i)| !n.is_empty() && !i.is_empty())
                .ok_or_else(|| {
                    Error::config(format!("invalid model alias '{}', expected name=id", entry))
                })?;
            self.aliases.insert(name.to_string(), id.to_string());
        }
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// Aliases in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(n, i)| (n.as_str(), i.as_str()))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl ModelResolver for ModelMap {
    fn resolve(&self, model: &str) -> String {
        self.get(model).unwrap_or(model).to_string()
    }
}
