//! Bridge configuration

use crate::anthropic::MessagesRequest;
use crate::error::Result;
use crate::kiro::{KiroPayload, to_kiro_payload};
use crate::model::ModelMap;

/// Settings shared by every conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BridgeConfig {
    /// AWS CodeWhisperer profile ARN attached to payloads
    pub profile_arn: Option<String>,
    /// Model alias table
    pub model_map: ModelMap,
}

impl BridgeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile_arn(mut self, profile_arn: impl Into<String>) -> Self {
        let arn = profile_arn.into();
        self.profile_arn = (!arn.is_empty()).then_some(arn);
        self
    }

    pub fn with_model_alias(
        mut self,
        name: impl Into<String>,
        model_id: impl Into<String>,
    ) -> Self {
        self.model_map = self.model_map.with_alias(name, model_id);
        self
    }

    pub fn with_model_map(mut self, model_map: ModelMap) -> Self {
        self.model_map = model_map;
        self
    }

    /// Load configuration from environment variables
    ///
    /// Reads:
    /// - `PROFILE_ARN` → profile_arn
    /// - `KIRO_MODEL_MAP` → extra aliases as `name=id,name=id`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a payload using this configuration's profile ARN and model map.
    pub fn to_payload(&self, req: &MessagesRequest, conversation_id: &str) -> Result<KiroPayload> {
        to_kiro_payload(
            req,
            conversation_id,
            self.profile_arn.as_deref(),
            &self.model_map,
        )
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(arn) = lookup("PROFILE_ARN") {
            config = config.with_profile_arn(arn.trim());
        }

        if let Some(spec) = lookup("KIRO_MODEL_MAP") {
            config.model_map = config.model_map.with_overrides(&spec)?;
        }

        Ok(config)
    }
}
