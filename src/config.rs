use serde::{Deserialize, Serialize};
use std::path::Path;

/// Geometry constants for the flow layout.
///
/// Defaults describe a card with a name block and a trailing status badge,
/// laid out left to right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub min_node_width: f32,
    pub node_height: f32,
    /// Horizontal padding of each padded region inside a card.
    pub node_padding_x: f32,
    pub badge_width: f32,
    pub badge_gap: f32,
    pub font_size: f32,
    /// Average glyph advance as a fraction of the font size.
    pub char_width_ratio: f32,
    pub rank_spacing: f32,
    /// Vertical spacing handed to the ranker; rows come from the sibling walk.
    pub node_spacing: f32,
    pub sibling_gap: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_node_width: 200.0,
            node_height: 100.0,
            node_padding_x: 16.0,
            badge_width: 24.0,
            badge_gap: 8.0,
            font_size: 14.0,
            char_width_ratio: 0.6,
            rank_spacing: 150.0,
            node_spacing: 100.0,
            sibling_gap: 20.0,
        }
    }
}

impl LayoutConfig {
    /// Distance between the row lines of two consecutive siblings.
    pub fn sibling_step(&self) -> f32 {
        self.node_height + self.sibling_gap
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub layout: LayoutConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutOverrides {
    min_node_width: Option<f32>,
    node_height: Option<f32>,
    node_padding_x: Option<f32>,
    badge_width: Option<f32>,
    badge_gap: Option<f32>,
    font_size: Option<f32>,
    char_width_ratio: Option<f32>,
    rank_spacing: Option<f32>,
    node_spacing: Option<f32>,
    sibling_gap: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    layout: Option<LayoutOverrides>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(vars) = parsed.layout {
        apply_overrides(&mut config.layout, vars);
    }
    log::debug!("loaded layout config from {}", path.display());

    Ok(config)
}

fn apply_overrides(layout: &mut LayoutConfig, vars: LayoutOverrides) {
    if let Some(v) = vars.min_node_width {
        layout.min_node_width = v;
    }
    if let Some(v) = vars.node_height {
        layout.node_height = v;
    }
    if let Some(v) = vars.node_padding_x {
        layout.node_padding_x = v;
    }
    if let Some(v) = vars.badge_width {
        layout.badge_width = v;
    }
    if let Some(v) = vars.badge_gap {
        layout.badge_gap = v;
    }
    if let Some(v) = vars.font_size {
        layout.font_size = v;
    }
    if let Some(v) = vars.char_width_ratio {
        layout.char_width_ratio = v;
    }
    if let Some(v) = vars.rank_spacing {
        layout.rank_spacing = v;
    }
    if let Some(v) = vars.node_spacing {
        layout.node_spacing = v;
    }
    if let Some(v) = vars.sibling_gap {
        layout.sibling_gap = v;
    }
}
