use super::types::{Handles, Position, PositionedNode, RankMap, RowMap};

/// Combines ranker X and row Y into card coordinates.
///
/// Ranker X is a vertex centre and is shifted to the card's left edge. Nodes
/// the ranker did not place use their depth column instead.
pub fn merge(nodes: &[PositionedNode], ranks: &RankMap, rows: &RowMap) -> Vec<PositionedNode> {
    nodes
        .iter()
        .map(|node| {
            let row = rows.get(&node.id).copied().unwrap_or_default();
            let x = match ranks.get(&node.id) {
                Some(center_x) => center_x - node.width / 2.0,
                None => row.column,
            };
            PositionedNode {
                position: Position { x, y: row.y },
                handles: Handles {
                    target: node.has_parent,
                    source: node.has_children,
                },
                ..node.clone()
            }
        })
        .collect()
}
