//! Indented tree rendering for [`Node`].
//!
//! One node per line, two spaces per level. Leaf and operator nodes are
//! followed by the text of their token:
//!
//! ```text
//! Program
//!   Block
//!     Assign
//!       Id a
//!       AddOp +
//!         Int 1
//!         Int 2
//! ```

use std::fmt::{self, Display};

use super::ast::Node;

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(self, 0, f)
    }
}

fn write_tree(node: &Node, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let indent = depth * 2;
    write!(f, "{:indent$}{}", "", node.get_kind())?;

    if let Some(token) = node.get_token() {
        write!(f, " {}", token.value)?;
    }
    writeln!(f)?;

    for child in node.get_children() {
        write_tree(child, depth + 1, f)?;
    }

    Ok(())
}
