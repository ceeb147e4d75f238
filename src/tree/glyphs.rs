use std::num::NonZeroUsize;

use clap::ValueEnum;

/// Indentation segments printed by `tree` in front of nested entries.
/// The NBSP variant is what `tree` emits by default on UTF-8 locales.
pub const TREE_INDENTS: &[&str] = &["│   ", "│\u{a0}\u{a0} ", "|   ", "    "];

/// Branch connectors that directly precede an entry name.
pub const TREE_CONNECTORS: &[&str] = &[
    "├── ",
    "└── ",
    "├──\u{a0}",
    "└──\u{a0}",
    "|-- ",
    "`-- ",
];

pub const DEFAULT_INDENT_WIDTH: NonZeroUsize = match NonZeroUsize::new(4) {
    Some(width) => width,
    None => unreachable!(),
};

/// Characters that only ever appear as drawing glyphs in a tree prefix.
const DRAWING_CHARS: &[char] = &['│', '├', '└', '─', '|', '`', '\u{a0}'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum IndentStyle {
    /// `tree` output with branch connectors (Unicode or `--charset=ascii`)
    #[default]
    Tree,
    /// Plain whitespace indentation, no connectors
    Indented,
}

/// The set of prefix segments recognised while computing a line's depth.
///
/// Every segment counts as exactly one level. When `connectors` is non-empty,
/// any entry below depth 0 must end its prefix with one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSet {
    indents: Vec<String>,
    connectors: Vec<String>,
}

impl GlyphSet {
    pub fn new(style: IndentStyle, indent_width: NonZeroUsize) -> Self {
        match style {
            IndentStyle::Tree => Self::tree(),
            IndentStyle::Indented => Self::indented(indent_width),
        }
    }

    pub fn tree() -> Self {
        Self {
            indents: TREE_INDENTS.iter().map(|s| s.to_string()).collect(),
            connectors: TREE_CONNECTORS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn indented(indent_width: NonZeroUsize) -> Self {
        Self {
            indents: vec![" ".repeat(indent_width.get()), "\t".to_string()],
            connectors: Vec::new(),
        }
    }

    pub fn indents(&self) -> impl Iterator<Item = &str> {
        self.indents.iter().map(String::as_str)
    }

    pub fn connectors(&self) -> impl Iterator<Item = &str> {
        self.connectors.iter().map(String::as_str)
    }

    pub fn requires_connector(&self) -> bool {
        !self.connectors.is_empty()
    }

    /// Whether `c` can only be part of an indentation prefix, never a name.
    pub fn is_glyph_char(&self, c: char) -> bool {
        c.is_whitespace() || (self.requires_connector() && DRAWING_CHARS.contains(&c))
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::tree()
    }
}
