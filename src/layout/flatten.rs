use std::collections::HashMap;

use crate::config::LayoutConfig;
use crate::ir::TreeNode;

use super::text::estimate_width;
use super::types::{AdjacencyFact, Edge, FlatGraph, Handles, Position, PositionedNode};

/// Flattens a tree into pre-order nodes and parent→child edges.
///
/// Positions are left at the origin; the rank and row passes fill them in.
pub fn flatten(tree: &TreeNode, config: &LayoutConfig) -> FlatGraph {
    flatten_from(tree, None, config)
}

fn flatten_from(node: &TreeNode, parent_id: Option<&str>, config: &LayoutConfig) -> FlatGraph {
    let fact = AdjacencyFact {
        has_children: node.has_children(),
        has_parent: parent_id.is_some(),
    };
    let name = node.display_name();

    let mut graph = FlatGraph {
        nodes: vec![PositionedNode {
            id: node.id.clone(),
            name: name.to_string(),
            status: node.status,
            duration: node.duration.clone(),
            has_children: fact.has_children,
            has_parent: fact.has_parent,
            width: estimate_width(name, config),
            height: config.node_height,
            position: Position::default(),
            handles: Handles::default(),
        }],
        edges: Vec::new(),
        adjacency: HashMap::from([(node.id.clone(), fact)]),
    };
    if let Some(parent) = parent_id {
        graph.edges.push(Edge::new(parent, node.id.as_str()));
    }

    for child in &node.children {
        graph.absorb(flatten_from(child, Some(node.id.as_str()), config));
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Status;

    fn sample() -> TreeNode {
        TreeNode::new("a", "A", Status::Success)
            .with_child(
                TreeNode::new("b", "B", Status::InProgress)
                    .with_child(TreeNode::new("d", "D", Status::Failed)),
            )
            .with_child(TreeNode::new("c", "C", Status::Cancelled).with_duration("3m 2s"))
    }

    #[test]
    fn emits_nodes_and_edges_in_pre_order() {
        let flat = flatten(&sample(), &LayoutConfig::default());
        let ids: Vec<&str> = flat.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "d", "c"]);
        assert_eq!(
            flat.edges,
            vec![Edge::new("a", "b"), Edge::new("b", "d"), Edge::new("a", "c")]
        );
    }

    #[test]
    fn adjacency_matches_tree_shape() {
        let flat = flatten(&sample(), &LayoutConfig::default());
        assert_eq!(flat.adjacency.len(), 4);
        assert_eq!(
            flat.adjacency["a"],
            AdjacencyFact {
                has_children: true,
                has_parent: false
            }
        );
        assert_eq!(
            flat.adjacency["d"],
            AdjacencyFact {
                has_children: false,
                has_parent: true
            }
        );
        for node in &flat.nodes {
            assert_eq!(node.adjacency(), flat.adjacency[&node.id]);
        }
    }

    #[test]
    fn copies_payload_and_leaves_positions_inert() {
        let flat = flatten(&sample(), &LayoutConfig::default());
        let c = flat.nodes.iter().find(|n| n.id == "c").unwrap();
        assert_eq!(c.status, Status::Cancelled);
        assert_eq!(c.duration.as_deref(), Some("3m 2s"));
        assert_eq!(c.width, 200.0);
        assert_eq!(c.height, 100.0);
        assert!(flat.nodes.iter().all(|n| n.position == Position::default()));
    }

    #[test]
    fn resolves_legacy_label() {
        let mut root = TreeNode::new("r", "", Status::Success);
        root.name = None;
        root.label = Some("Deploy".to_string());
        let flat = flatten(&root, &LayoutConfig::default());
        assert_eq!(flat.nodes[0].name, "Deploy");
        assert!(flat.edges.is_empty());
    }
}
