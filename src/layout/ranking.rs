use std::collections::HashSet;

use dagre_rust::{
    GraphConfig as DagreConfig, GraphEdge as DagreEdge, GraphNode as DagreNode,
    layout as dagre_layout,
};
use graphlib_rust::{Graph as DagreGraph, GraphOption};

use crate::config::LayoutConfig;

use super::types::{Edge, PositionedNode, RankMap};

/// Runs dagre left-to-right over the flattened graph and keeps the centre X of
/// every vertex. The vertical placement dagre computes is dropped.
///
/// Returns an empty map for a graph without edges; callers fall back to the
/// depth column for those nodes.
pub fn assign_ranks(nodes: &[PositionedNode], edges: &[Edge], config: &LayoutConfig) -> RankMap {
    let mut ranks = RankMap::new();
    if nodes.is_empty() || edges.is_empty() {
        return ranks;
    }

    let mut dagre_graph: DagreGraph<DagreConfig, DagreNode, DagreEdge> =
        DagreGraph::new(Some(GraphOption {
            directed: Some(true),
            multigraph: Some(false),
            compound: Some(false),
        }));

    let mut graph_config = DagreConfig::default();
    graph_config.rankdir = Some("lr".to_string());
    graph_config.nodesep = Some(config.node_spacing);
    graph_config.ranksep = Some(config.rank_spacing);
    graph_config.marginx = Some(0.0);
    graph_config.marginy = Some(0.0);
    dagre_graph.set_graph(graph_config);

    for layout in nodes {
        let mut node = DagreNode::default();
        node.width = layout.width;
        node.height = config.node_height;
        dagre_graph.set_node(layout.id.clone(), Some(node));
    }

    let mut edge_set: HashSet<(&str, &str)> = HashSet::new();
    for edge in edges {
        if !edge_set.insert((edge.source.as_str(), edge.target.as_str())) {
            continue;
        }
        let edge_label = DagreEdge::default();
        let _ = dagre_graph.set_edge(&edge.source, &edge.target, Some(edge_label), None);
    }

    dagre_layout::run_layout(&mut dagre_graph);

    for layout in nodes {
        let Some(dagre_node) = dagre_graph.node(&layout.id) else {
            log::warn!("ranker dropped node `{}`", layout.id);
            continue;
        };
        ranks.insert(layout.id.clone(), dagre_node.x);
    }
    log::trace!("ranked {} of {} nodes", ranks.len(), nodes.len());

    ranks
}
