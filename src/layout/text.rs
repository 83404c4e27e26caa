use crate::config::LayoutConfig;

/// Estimated card width for a label, never below `min_node_width`.
///
/// The card holds two padded regions (name text, then the status badge), so
/// the horizontal padding is counted twice on each side. This is a glyph-count
/// estimate, not a measurement; slight overflow is tolerated by the card.
pub fn estimate_width(name: &str, config: &LayoutConfig) -> f32 {
    let text_width = text_width(name, config);
    let padding = config.node_padding_x;
    let width =
        2.0 * padding + text_width + config.badge_gap + config.badge_width + 2.0 * padding;
    width.max(config.min_node_width)
}

pub(super) fn text_width(text: &str, config: &LayoutConfig) -> f32 {
    let char_width = config.font_size * config.char_width_ratio;
    text.chars().count() as f32 * char_width
}
