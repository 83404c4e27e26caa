use std::collections::HashSet;

use thiserror::Error;

use crate::ir::TreeNode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("node without an id (parent: {})", .parent.as_deref().unwrap_or("<root>"))]
    EmptyId { parent: Option<String> },
    #[error("duplicate node id `{id}`")]
    DuplicateId { id: String },
}

/// Rejects trees whose ids would make nodes or edges collide downstream.
pub(super) fn validate_tree(tree: &TreeNode) -> Result<(), LayoutError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut stack: Vec<(&TreeNode, Option<&str>)> = vec![(tree, None)];
    while let Some((node, parent)) = stack.pop() {
        if node.id.trim().is_empty() {
            return Err(LayoutError::EmptyId {
                parent: parent.map(str::to_string),
            });
        }
        if !seen.insert(node.id.as_str()) {
            return Err(LayoutError::DuplicateId {
                id: node.id.clone(),
            });
        }
        for child in node.children.iter().rev() {
            stack.push((child, Some(node.id.as_str())));
        }
    }
    Ok(())
}
