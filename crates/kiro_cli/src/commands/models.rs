//! `kiro-bridge models`

use anyhow::Result;
use kiro_bridge::{BridgeConfig, ModelResolver};

use crate::output;

pub fn handle(config: &BridgeConfig, resolve: Option<&str>) -> Result<()> {
    match resolve {
        Some(name) => resolve_one(config, name),
        None => list(config),
    }
}

fn resolve_one(config: &BridgeConfig, name: &str) -> Result<()> {
    let model_id = config.model_map.resolve(name);
    if config.model_map.get(name).is_none() {
        output::dim(&format!("No alias for '{}', passing through unchanged", name));
    }
    output::kv(name, &model_id);
    Ok(())
}

fn list(config: &BridgeConfig) -> Result<()> {
    let items: Vec<(&str, &str)> = config.model_map.iter().collect();

    output::header("Model Aliases");

    let mut table = output::table();
    output::table_header(&mut table, "Name", "Kiro model ID");
    for (name, id) in &items {
        output::table_row(&mut table, name, id);
    }
    output::table_print(&table, &items);

    Ok(())
}
