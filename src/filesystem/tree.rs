use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::warn;

use crate::ext::BestEffortPathExt;
use crate::tree::PATH_SEPARATOR;
#[cfg(test)]
use crate::tree::Node;

/// Represents the type of a filesystem entry. Children are keyed by name, so
/// sibling order is always sorted regardless of creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilesystemNode {
    File,
    Directory {
        children: BTreeMap<String, FilesystemNode>,
    },
}

impl FilesystemNode {
    /// Reads the directory at `path` recursively. Anything that is neither a
    /// regular file nor a directory is skipped.
    ///
    /// This is synchronous: compio has no directory listing, and the only caller
    /// runs after the last command has finished, with nothing else in flight.
    pub fn scan(path: &Path) -> Result<Self, SnapshotError> {
        let mut children = BTreeMap::new();
        let entries = fs::read_dir(path).context(ReadDirSnafu { path })?;

        for entry in entries {
            let entry = entry.context(ReadDirSnafu { path })?;
            let entry_path = entry.path();
            let file_type = entry.file_type().context(MetadataSnafu { path: &entry_path })?;
            let name = entry.file_name().to_string_lossy().to_string();

            if file_type.is_dir() {
                children.insert(name, Self::scan(&entry_path)?);
            } else if file_type.is_file() {
                children.insert(name, FilesystemNode::File);
            } else {
                warn!("Skipping special file {}", entry_path.best_effort_path_display());
            }
        }

        Ok(FilesystemNode::Directory { children })
    }

    /// Renders the snapshot as a `tree`-style diagram under a root line named
    /// `root_name`. Directories carry a trailing separator so that empty ones
    /// keep their kind when parsed again.
    pub fn render_lines(&self, root_name: &str) -> Vec<String> {
        let mut lines = vec![root_name.to_string()];
        self.render_children("", &mut lines);
        lines
    }

    fn render_children(&self, prefix: &str, lines: &mut Vec<String>) {
        let FilesystemNode::Directory { children } = self else {
            return;
        };

        let last_index = children.len().saturating_sub(1);
        for (index, (name, child)) in children.iter().enumerate() {
            let is_last = index == last_index;
            let connector = if is_last { "└── " } else { "├── " };
            let marker = match child {
                FilesystemNode::Directory { .. } => PATH_SEPARATOR.to_string(),
                FilesystemNode::File => String::new(),
            };
            lines.push(format!("{prefix}{connector}{name}{marker}"));

            let nested = if is_last { "    " } else { "│   " };
            child.render_children(&format!("{prefix}{nested}"), lines);
        }
    }
}

#[cfg(test)]
impl FilesystemNode {
    fn empty_directory() -> Self {
        FilesystemNode::Directory {
            children: BTreeMap::new(),
        }
    }

    /// Builds the expected snapshot for a parsed forest, as if its commands had
    /// been run inside an empty directory.
    pub fn from_forest(forest: &[Node]) -> Self {
        let mut root = Self::empty_directory();
        for node in forest {
            root.insert_node(node);
        }
        root
    }

    fn insert_node(&mut self, node: &Node) {
        if node.is_synthetic_root() {
            for child in node.children() {
                self.insert_node(child);
            }
            return;
        }

        let FilesystemNode::Directory { children } = self else {
            return;
        };

        let entry = children.entry(node.name().to_string());
        if node.is_directory() {
            let directory = entry.or_insert_with(Self::empty_directory);
            for child in node.children() {
                directory.insert_node(child);
            }
        } else {
            entry.or_insert(FilesystemNode::File);
        }
    }
}

#[derive(Debug, Snafu)]
pub enum SnapshotError {
    #[snafu(display("Failed to read directory {}", path.best_effort_path_display()))]
    ReadDirError { path: PathBuf, source: std::io::Error },
    #[snafu(display("Failed to read metadata of {}", path.best_effort_path_display()))]
    MetadataError { path: PathBuf, source: std::io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Node, TreeParser};
    use tempfile::TempDir;

    fn sample() -> FilesystemNode {
        let mut root = FilesystemNode::empty_directory();
        root.insert_node(&parse(&["b/", "└── c.txt"])[0]);
        root.insert_node(&parse(&["a.txt"])[0]);
        root
    }

    fn parse(lines: &[&str]) -> Vec<Node> {
        TreeParser::default().parse(lines).expect("Failed to parse tree")
    }

    #[test]
    fn renders_sorted_tree_diagram() {
        let lines = sample().render_lines(".");
        assert_eq!(lines, vec![".", "├── a.txt", "└── b/", "    └── c.txt"]);
    }

    #[test]
    fn rendered_diagram_parses_back_to_same_snapshot() {
        let snapshot = sample();
        let forest = parse(
            &snapshot
                .render_lines(".")
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>(),
        );
        assert_eq!(FilesystemNode::from_forest(&forest), snapshot);
    }

    #[test]
    fn from_forest_merges_duplicate_entries() {
        let forest = parse(&["a/", "├── x", "└── x", "a/", "└── y/"]);
        let snapshot = FilesystemNode::from_forest(&forest);
        let lines = snapshot.render_lines(".");
        assert_eq!(lines, vec![".", "└── a/", "    ├── x", "    └── y/"]);
    }

    #[test]
    fn scan_reads_nested_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir_all(temp_dir.path().join("b/empty")).expect("Failed to create dirs");
        fs::write(temp_dir.path().join("b/c.txt"), "").expect("Failed to write file");
        fs::write(temp_dir.path().join("a.txt"), "").expect("Failed to write file");

        let snapshot = FilesystemNode::scan(temp_dir.path()).expect("Failed to scan directory");
        assert_eq!(
            snapshot.render_lines("."),
            vec![".", "├── a.txt", "└── b/", "    ├── c.txt", "    └── empty/"]
        );
    }

    #[test]
    fn scan_fails_on_missing_directory() {
        let result = FilesystemNode::scan(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(SnapshotError::ReadDirError { .. })));
    }
}
