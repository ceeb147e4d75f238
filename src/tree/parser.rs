use tracing::debug;

use super::{GlyphSet, MalformedInputSnafu, Node, TreeError};

/// Turns the lines of a tree diagram into a forest of [`Node`]s.
///
/// Depth comes from the leading glyph segments of each line. Parents are resolved
/// with a stack of currently open ancestors: a node closes as soon as a line at the
/// same or a shallower depth shows up, and is attached to whatever is open below it.
/// Depth jumps are recorded as-is and left for [`super::validate_tree_structure`].
#[derive(Debug, Clone, Default)]
pub struct TreeParser {
    glyphs: GlyphSet,
}

impl TreeParser {
    pub fn new(glyphs: GlyphSet) -> Self {
        Self { glyphs }
    }

    pub fn parse<S: AsRef<str>>(&self, lines: &[S]) -> Result<Vec<Node>, TreeError> {
        let mut forest = Vec::new();
        let mut stack: Vec<Node> = Vec::new();

        for (index, raw_line) in lines.iter().enumerate() {
            let line_number = index + 1;
            let line = raw_line.as_ref().trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() {
                continue;
            }

            let (depth, name) = self.split_line(line, line_number)?;
            if depth == 0 && is_report_line(name) {
                debug!("Skipping report line {}: '{}'", line_number, name);
                continue;
            }

            debug!("Line {}: depth {}, entry '{}'", line_number, depth, name);
            close_open_nodes(&mut stack, &mut forest, depth);
            stack.push(Node::new(name, depth, line_number));
        }

        close_open_nodes(&mut stack, &mut forest, 0);
        debug!("Parsed {} top-level entries", forest.len());
        Ok(forest)
    }

    /// Splits a line into its depth and the (untrimmed-left) entry name.
    fn split_line<'a>(
        &self,
        line: &'a str,
        line_number: usize,
    ) -> Result<(usize, &'a str), TreeError> {
        let mut rest = line;
        let mut depth = 0;
        let mut connected = false;

        loop {
            if let Some(after) = self.glyphs.connectors().find_map(|c| rest.strip_prefix(c)) {
                depth += 1;
                rest = after;
                connected = true;
                break;
            }
            match self.glyphs.indents().find_map(|i| rest.strip_prefix(i)) {
                Some(after) => {
                    depth += 1;
                    rest = after;
                }
                None => break,
            }
        }

        // Glyphs only: keep it as a nameless entry so validation can reject it.
        if rest.chars().all(|c| self.glyphs.is_glyph_char(c)) {
            return Ok((depth, ""));
        }

        if !connected {
            if rest.starts_with(|c: char| self.glyphs.is_glyph_char(c)) {
                return MalformedInputSnafu {
                    line: line_number,
                    reason: "unrecognized indentation",
                }
                .fail();
            }
            if depth > 0 && self.glyphs.requires_connector() {
                return MalformedInputSnafu {
                    line: line_number,
                    reason: "indented entry has no branch connector",
                }
                .fail();
            }
        }

        Ok((depth, rest.trim_end()))
    }
}

fn close_open_nodes(stack: &mut Vec<Node>, forest: &mut Vec<Node>, depth: usize) {
    while stack.last().is_some_and(|open| open.depth() >= depth) {
        let Some(closed) = stack.pop() else { break };
        match stack.last_mut() {
            Some(parent) => parent.push_child(closed),
            None => forest.push(closed),
        }
    }
}

/// Matches the summary `tree` prints last, e.g. `3 directories, 5 files`.
fn is_report_line(text: &str) -> bool {
    text.split(", ").all(|part| {
        let mut words = part.split(' ');
        match (words.next(), words.next(), words.next()) {
            (Some(count), Some(unit), None) => {
                !count.is_empty()
                    && count.chars().all(|c| c.is_ascii_digit())
                    && matches!(unit, "directory" | "directories" | "file" | "files")
            }
            _ => false,
        }
    })
}
