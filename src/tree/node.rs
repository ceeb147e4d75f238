pub const PATH_SEPARATOR: char = '/';

/// Name of the synthetic root line `tree` prints when run without arguments.
pub const SYNTHETIC_ROOT: &str = ".";

/// One entry of a parsed tree diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    depth: usize,
    line: usize,
    marked_directory: bool,
    children: Vec<Node>,
}

impl Node {
    /// Builds a node from a raw entry name. A trailing separator marks it as a directory
    /// and is stripped from the stored name.
    pub fn new(raw_name: &str, depth: usize, line: usize) -> Self {
        let name = raw_name.trim_end_matches(PATH_SEPARATOR);
        let marked_directory = name.len() != raw_name.len();

        Node {
            name: name.to_string(),
            depth,
            line,
            marked_directory,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// 1-based line number in the source diagram
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_directory(&self) -> bool {
        self.marked_directory || !self.children.is_empty()
    }

    pub fn is_synthetic_root(&self) -> bool {
        self.depth == 0 && self.name == SYNTHETIC_ROOT
    }

    pub(super) fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Number of entries in this subtree that produce a command.
    pub fn entry_count(&self) -> usize {
        let own = usize::from(!self.is_synthetic_root());
        own + self.children.iter().map(Node::entry_count).sum::<usize>()
    }
}
