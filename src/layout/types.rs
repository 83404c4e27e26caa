use std::collections::HashMap;

use crate::ir::Status;

/// Whether a node sits below a parent and/or above children.
///
/// Renderers use it to decide which connection points to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdjacencyFact {
    pub has_children: bool,
    pub has_parent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// Connection points shown on a card: incoming on the left, outgoing on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Handles {
    pub target: bool,
    pub source: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionedNode {
    pub id: String,
    pub name: String,
    pub status: Status,
    pub duration: Option<String>,
    pub has_children: bool,
    pub has_parent: bool,
    pub width: f32,
    pub height: f32,
    pub position: Position,
    pub handles: Handles,
}

impl PositionedNode {
    pub fn adjacency(&self) -> AdjacencyFact {
        AdjacencyFact {
            has_children: self.has_children,
            has_parent: self.has_parent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn id(&self) -> String {
        format!("{}-{}", self.source, self.target)
    }
}

/// Output of the flattening walk: positionally inert nodes, parent→child
/// edges and the adjacency side-table, all in pre-order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatGraph {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<Edge>,
    pub adjacency: HashMap<String, AdjacencyFact>,
}

impl FlatGraph {
    pub(super) fn absorb(&mut self, other: FlatGraph) {
        self.nodes.extend(other.nodes);
        self.edges.extend(other.edges);
        self.adjacency.extend(other.adjacency);
    }
}

/// Horizontal centre of each node as placed by the layered ranker.
pub type RankMap = HashMap<String, f32>;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RowSlot {
    /// Row line shared by a parent and its first child.
    pub line: f32,
    /// Top edge of the card: the line shifted up by half a node height.
    pub y: f32,
    /// Left edge from the plain depth walk, used when no rank is available.
    pub column: f32,
}

pub type RowMap = HashMap<String, RowSlot>;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowLayout {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<Edge>,
    pub adjacency: HashMap<String, AdjacencyFact>,
    pub bounds: Bounds,
}

impl FlowLayout {
    pub fn node(&self, id: &str) -> Option<&PositionedNode> {
        self.nodes.iter().find(|node| node.id == id)
    }
}
