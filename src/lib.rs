//! Left-to-right flow layout for pipeline trees.
//!
//! A [`TreeNode`] is flattened into cards and parent→child edges, ranked
//! horizontally with dagre, stacked vertically in sibling order, and returned
//! as a [`FlowLayout`] for a renderer to draw.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod parser;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayoutConfig, load_config};
pub use ir::{Status, TreeNode};
pub use layout::{
    AdjacencyFact, Edge, FlowLayout, LayoutError, LayoutSession, PositionedNode, compute_layout,
};
pub use layout_dump::{LayoutDump, layout_to_json, write_layout_dump};
pub use parser::{ParseError, parse_tree};

/// Parses tree text and lays it out in one step.
pub fn layout_from_str(input: &str, config: &LayoutConfig) -> anyhow::Result<FlowLayout> {
    let tree = parse_tree(input)?;
    Ok(compute_layout(&tree, config)?)
}
