use thiserror::Error;

use crate::ir::TreeNode;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("empty tree input")]
    Empty,
    #[error("invalid tree input: {json}")]
    Invalid {
        json: serde_json::Error,
        json5: json5::Error,
    },
}

/// Parses a pipeline tree from JSON, retrying as JSON5 so hand-written
/// fixtures may carry comments and trailing commas.
pub fn parse_tree(input: &str) -> Result<TreeNode, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    match serde_json::from_str::<TreeNode>(input) {
        Ok(tree) => Ok(tree),
        Err(json) => match json5::from_str::<TreeNode>(input) {
            Ok(tree) => {
                log::debug!("tree parsed as JSON5");
                Ok(tree)
            }
            Err(json5) => Err(ParseError::Invalid { json, json5 }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Status;

    #[test]
    fn parses_strict_json() {
        let tree = parse_tree(
            r#"{
              "id": "root",
              "name": "Checkout",
              "status": "success",
              "duration": "12s",
              "children": [
                {"id": "build", "label": "Build", "status": "in_progress"}
              ]
            }"#,
        )
        .unwrap();
        assert_eq!(tree.id, "root");
        assert_eq!(tree.duration.as_deref(), Some("12s"));
        assert_eq!(tree.children[0].display_name(), "Build");
        assert_eq!(tree.children[0].status, Status::InProgress);
    }

    #[test]
    fn falls_back_to_json5() {
        let tree = parse_tree(
            r#"{
              // comments are fine here
              id: 'root',
              name: 'Checkout',
              status: 'cancelled',
              children: [],
            }"#,
        )
        .unwrap();
        assert_eq!(tree.status, Status::Cancelled);
        assert!(tree.children.is_empty());
    }

    #[test]
    fn rejects_unknown_status() {
        let err = parse_tree(r#"{"id":"a","status":"skipped"}"#).unwrap_err();
        assert!(matches!(err, ParseError::Invalid { .. }));
        assert!(err.to_string().starts_with("invalid tree input"));
    }

    #[test]
    fn rejects_blank_input() {
        assert!(matches!(parse_tree("  \n"), Err(ParseError::Empty)));
    }
}
