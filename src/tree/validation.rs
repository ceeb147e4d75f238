use snafu::ensure;
use tracing::debug;

use super::{
    EmptyInputSnafu, MalformedInputSnafu, Node, PATH_SEPARATOR, SYNTHETIC_ROOT, TreeError,
};

/// Checks the whole forest once, after parsing. Fails on the first offending node
/// in pre-order; there is no partial recovery.
pub fn validate_tree_structure(forest: &[Node]) -> Result<(), TreeError> {
    ensure!(!forest.is_empty(), EmptyInputSnafu);

    for root in forest {
        ensure!(
            root.depth() == 0,
            MalformedInputSnafu {
                line: root.line(),
                reason: format!("no parent entry at depth {}", root.depth() - 1),
            }
        );
        validate_node(root).inspect_err(|e| debug!("Tree validation failed: {e}"))?;
    }

    Ok(())
}

fn validate_node(node: &Node) -> Result<(), TreeError> {
    ensure!(
        !node.name().is_empty(),
        MalformedInputSnafu {
            line: node.line(),
            reason: "line has no entry name",
        }
    );
    ensure!(
        node.name() != ".." && (node.name() != SYNTHETIC_ROOT || node.is_synthetic_root()),
        MalformedInputSnafu {
            line: node.line(),
            reason: format!("'{}' is not a valid entry name", node.name()),
        }
    );
    ensure!(
        !node.name().contains(PATH_SEPARATOR),
        MalformedInputSnafu {
            line: node.line(),
            reason: format!("entry name '{}' contains a path separator", node.name()),
        }
    );

    for child in node.children() {
        ensure!(
            child.depth() == node.depth() + 1,
            MalformedInputSnafu {
                line: child.line(),
                reason: format!("no parent entry at depth {}", child.depth() - 1),
            }
        );
        validate_node(child)?;
    }

    Ok(())
}
