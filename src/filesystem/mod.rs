//! Snapshot of an on-disk directory tree.
//!
//! A snapshot can be rendered back into a tree diagram that the parser accepts,
//! which closes the loop diagram → commands → filesystem → diagram.

mod tree;

pub use tree::FilesystemNode;
