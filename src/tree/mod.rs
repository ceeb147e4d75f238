//! Parsed representation of a textual directory-tree diagram.
//!
//! The parser turns the lines printed by `tree` (or a plainly indented listing)
//! into a forest of [`Node`]s. Validation runs separately, once, over the whole forest.

mod glyphs;
mod node;
mod parser;
mod validation;

use snafu::Snafu;

pub use glyphs::{DEFAULT_INDENT_WIDTH, GlyphSet, IndentStyle};
pub use node::{Node, PATH_SEPARATOR, SYNTHETIC_ROOT};
pub use parser::TreeParser;
pub use validation::validate_tree_structure;

#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum TreeError {
    #[snafu(display("Malformed tree input at line {}: {}", line, reason))]
    MalformedInput { line: usize, reason: String },
    #[snafu(display("Tree input contains no entries"))]
    EmptyInput,
}
