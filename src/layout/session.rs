use crate::config::LayoutConfig;
use crate::ir::TreeNode;

use super::compute_layout;
use super::error::LayoutError;
use super::types::FlowLayout;

/// Caller-held handle that re-runs the layout only when the tree changes.
///
/// The cache holds exactly one entry keyed by deep equality of the last tree;
/// any other tree discards it and recomputes from scratch.
#[derive(Debug, Clone, Default)]
pub struct LayoutSession {
    config: LayoutConfig,
    last: Option<(TreeNode, FlowLayout)>,
}

impl LayoutSession {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config, last: None }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn layout(&mut self, tree: &TreeNode) -> Result<&FlowLayout, LayoutError> {
        // The previous entry is taken out up front so a failed run leaves nothing behind.
        match self.last.take() {
            Some((previous, layout)) if previous == *tree => {
                log::trace!("tree unchanged, reusing layout");
                Ok(&self.last.insert((previous, layout)).1)
            }
            _ => {
                let layout = compute_layout(tree, &self.config)?;
                Ok(&self.last.insert((tree.clone(), layout)).1)
            }
        }
    }

    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn is_cached(&self) -> bool {
        self.last.is_some()
    }
}
