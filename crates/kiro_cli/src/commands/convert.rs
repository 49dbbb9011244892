//! `kiro-bridge convert`

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use kiro_bridge::BridgeConfig;
use kiro_bridge::anthropic::ErrorResponse;
use kirobridge_observability::{conversion_span, record_duration, record_error};

use super::read_request;
use crate::output;

pub fn handle(
    config: &BridgeConfig,
    input: Option<&Path>,
    conversation_id: Option<String>,
    profile_arn: Option<String>,
    compact: bool,
) -> Result<()> {
    let req = read_request(input)?;
    let conversation_id = conversation_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let config = match profile_arn {
        Some(arn) => config.clone().with_profile_arn(arn),
        None => config.clone(),
    };

    let span = conversion_span!(req.model.as_str(), conversation_id.as_str(), req.messages.len());
    let _guard = span.enter();
    let start = Instant::now();

    let payload = match config.to_payload(&req, &conversation_id) {
        Ok(payload) => payload,
        Err(e) => {
            record_error(&e);
            if output::is_json() {
                output::data("error", &ErrorResponse::from(&e));
            }
            return Err(e.into());
        }
    };
    record_duration("duration_ms", start.elapsed());
    tracing::info!(conversation_id = %conversation_id, "Converted request");

    if output::is_json() {
        output::data("payload", &payload);
    } else if compact {
        println!("{}", serde_json::to_string(&payload)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    }

    Ok(())
}
