use pipeline_flow_layout::{LayoutConfig, layout_from_str, layout_to_json};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FlowLayoutOptions {
    font_size: Option<f32>,
    rank_spacing: Option<f32>,
    sibling_gap: Option<f32>,
}

fn build_layout_config(options: FlowLayoutOptions) -> LayoutConfig {
    let mut config = LayoutConfig::default();
    if let Some(font_size) = options.font_size {
        config.font_size = font_size;
    }
    if let Some(rank_spacing) = options.rank_spacing {
        config.rank_spacing = rank_spacing;
    }
    if let Some(sibling_gap) = options.sibling_gap {
        config.sibling_gap = sibling_gap;
    }
    config
}

fn layout_json(tree_json: &str, options_json: Option<String>) -> Result<String, String> {
    let options = match options_json {
        Some(raw_options) => serde_json::from_str::<FlowLayoutOptions>(&raw_options)
            .map_err(|error| error.to_string())?,
        None => FlowLayoutOptions::default(),
    };
    let config = build_layout_config(options);
    let layout = layout_from_str(tree_json, &config).map_err(|error| error.to_string())?;
    layout_to_json(&layout).map_err(|error| error.to_string())
}

#[wasm_bindgen]
pub fn layout_pipeline_tree(tree_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    layout_json(tree_json, options_json).map_err(|error| JsValue::from_str(&error))
}
