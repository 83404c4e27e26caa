use crate::config::LayoutConfig;
use crate::ir::TreeNode;

use super::text::estimate_width;
use super::types::{RowMap, RowSlot};

/// Assigns each node a row by walking the input tree in sibling order.
///
/// A parent shares its row line with its first child; every later sibling
/// sits one `node_height + sibling_gap` step past the previous sibling's line.
/// Sibling lines are fixed before any of their subtrees are visited, and each
/// subtree is laid out relative to its own root's line.
pub fn assign_rows(tree: &TreeNode, config: &LayoutConfig) -> RowMap {
    assign_rows_from(tree, 0.0, 0.0, config)
}

fn assign_rows_from(
    node: &TreeNode,
    parent_line: f32,
    level_offset: f32,
    config: &LayoutConfig,
) -> RowMap {
    let mut rows = RowMap::new();
    rows.insert(
        node.id.clone(),
        RowSlot {
            line: parent_line,
            y: parent_line - config.node_height / 2.0,
            column: level_offset,
        },
    );

    let child_offset =
        level_offset + estimate_width(node.display_name(), config) + config.rank_spacing;
    let step = config.sibling_step();
    let mut child_line = parent_line;
    for (idx, child) in node.children.iter().enumerate() {
        if idx > 0 {
            child_line -= step;
        }
        rows.extend(assign_rows_from(child, child_line, child_offset, config));
    }
    rows
}
