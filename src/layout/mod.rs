mod error;
mod flatten;
mod merge;
mod ranking;
mod rows;
mod session;
mod text;
pub(crate) mod types;
pub use error::LayoutError;
pub use flatten::flatten;
pub use merge::merge;
pub use ranking::assign_ranks;
pub use rows::assign_rows;
pub use session::LayoutSession;
pub use text::estimate_width;
pub use types::*;
use error::validate_tree;

use crate::config::LayoutConfig;
use crate::ir::TreeNode;

/// Lays out a pipeline tree as a left-to-right flow.
///
/// X comes from a dagre ranking of the flattened graph, Y from a sibling
/// stacking walk over the tree itself. Each call is independent of any
/// previous one; see [`LayoutSession`] for change-driven reuse.
pub fn compute_layout(tree: &TreeNode, config: &LayoutConfig) -> Result<FlowLayout, LayoutError> {
    validate_tree(tree)?;

    let flat = flatten(tree, config);
    log::debug!(
        "flattened tree into {} nodes and {} edges",
        flat.nodes.len(),
        flat.edges.len()
    );

    let ranks = assign_ranks(&flat.nodes, &flat.edges, config);
    let rows = assign_rows(tree, config);
    let nodes = merge(&flat.nodes, &ranks, &rows);
    let bounds = compute_bounds(&nodes);
    log::debug!(
        "layout bounds {:.1}x{:.1} at ({:.1}, {:.1})",
        bounds.width,
        bounds.height,
        bounds.min_x,
        bounds.min_y
    );

    Ok(FlowLayout {
        nodes,
        edges: flat.edges,
        adjacency: flat.adjacency,
        bounds,
    })
}

fn compute_bounds(nodes: &[PositionedNode]) -> Bounds {
    if nodes.is_empty() {
        return Bounds::default();
    }
    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    for node in nodes {
        min_x = min_x.min(node.position.x);
        min_y = min_y.min(node.position.y);
        max_x = max_x.max(node.position.x + node.width);
        max_y = max_y.max(node.position.y + node.height);
    }
    Bounds {
        min_x,
        min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    }
}
