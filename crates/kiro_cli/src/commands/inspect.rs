//! `kiro-bridge inspect`

use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Color};
use kiro_bridge::anthropic::extract::{
    count_images, extract_system_prompt, extract_text, extract_tool_results, extract_tool_uses,
};
use kiro_bridge::{BridgeConfig, ModelResolver};
use serde::Serialize;

use super::read_request;
use crate::output;

const PREVIEW_CHARS: usize = 60;

#[derive(Serialize)]
struct MessageSummary {
    index: usize,
    role: String,
    text: String,
    tool_uses: usize,
    tool_results: usize,
    images: usize,
}

pub fn handle(config: &BridgeConfig, input: Option<&Path>) -> Result<()> {
    let req = read_request(input)?;

    let summaries: Vec<MessageSummary> = req
        .messages
        .iter()
        .enumerate()
        .map(|(index, msg)| MessageSummary {
            index,
            role: msg.role.to_string(),
            text: extract_text(&msg.content),
            tool_uses: extract_tool_uses(&msg.content).len(),
            tool_results: extract_tool_results(&msg.content).len(),
            images: count_images(&msg.content),
        })
        .collect();
    let system_prompt = extract_system_prompt(req.system.as_ref());
    let model_id = config.model_map.resolve(&req.model);
    let tools = req.tools.as_ref().map_or(0, Vec::len);

    if output::is_json() {
        let data = serde_json::json!({
            "model": req.model,
            "modelId": model_id,
            "systemPrompt": system_prompt,
            "tools": tools,
            "messages": summaries,
        });
        output::data("inspect", &data);
        return Ok(());
    }

    output::header("Request");
    output::kv("model", &format!("{} → {}", req.model, model_id));
    output::kv("messages", &summaries.len().to_string());
    output::kv("tools", &tools.to_string());
    if system_prompt.is_empty() {
        output::kv("system", "(none)");
    } else {
        output::kv("system", &preview(&system_prompt));
    }

    let mut table = output::table();
    table.set_header(
        ["#", "Role", "Text", "Tool uses", "Tool results", "Images"]
            .into_iter()
            .map(|h| {
                Cell::new(h)
                    .fg(Color::Cyan)
                    .add_attribute(comfy_table::Attribute::Bold)
            })
            .collect::<Vec<_>>(),
    );
    for summary in &summaries {
        table.add_row(vec![
            Cell::new(summary.index),
            Cell::new(&summary.role).fg(Color::Green),
            Cell::new(preview(&summary.text)),
            Cell::new(summary.tool_uses),
            Cell::new(summary.tool_results),
            Cell::new(summary.images),
        ]);
    }
    println!("{table}");

    if summaries.iter().any(|s| s.images > 0) {
        output::warning("Image blocks are dropped during conversion");
    }

    Ok(())
}

fn preview(text: &str) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() > PREVIEW_CHARS {
        let cut: String = flat.chars().take(PREVIEW_CHARS).collect();
        format!("{}…", cut)
    } else {
        flat
    }
}
