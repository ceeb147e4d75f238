use derive_more::Display;
use tracing::debug;

use crate::tree::{GlyphSet, Node, PATH_SEPARATOR, TreeError, TreeParser, validate_tree_structure};

/// A single filesystem-creation step.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ShellCommand {
    #[display("mkdir -p {_0}")]
    MakeDirectory(String),
    #[display("touch {_0}")]
    Touch(String),
}

/// Parses, validates and translates tree lines in one go. Any error rejects the
/// whole input; no partial command list is ever returned.
pub fn commands_from_lines<S: AsRef<str>>(
    lines: &[S],
    glyphs: GlyphSet,
) -> Result<Vec<String>, TreeError> {
    let forest = TreeParser::new(glyphs).parse(lines)?;
    validate_tree_structure(&forest)?;

    let commands = generate_commands(&forest);
    debug!(
        "Generated {} commands for {} entries",
        commands.len(),
        forest.iter().map(Node::entry_count).sum::<usize>()
    );
    Ok(commands)
}

/// Walks the forest depth-first, pre-order, so every directory is created before
/// anything inside it. Sibling order follows the source lines.
pub fn generate_commands(forest: &[Node]) -> Vec<String> {
    let mut commands = Vec::new();
    for root in forest {
        collect_commands(root, "", &mut commands);
    }
    commands.iter().map(ToString::to_string).collect()
}

fn collect_commands(node: &Node, parent_path: &str, commands: &mut Vec<ShellCommand>) {
    if node.is_synthetic_root() {
        for child in node.children() {
            collect_commands(child, parent_path, commands);
        }
        return;
    }

    let path = if parent_path.is_empty() {
        node.name().to_string()
    } else {
        format!("{parent_path}{PATH_SEPARATOR}{}", node.name())
    };

    if node.is_directory() {
        commands.push(ShellCommand::MakeDirectory(path.clone()));
        for child in node.children() {
            collect_commands(child, &path, commands);
        }
    } else {
        commands.push(ShellCommand::Touch(path));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn convert(lines: &[&str]) -> Result<Vec<String>, TreeError> {
        commands_from_lines(lines, GlyphSet::default())
    }

    #[test]
    fn generates_commands_in_source_order() {
        let commands = convert(&["project/", "├── src/", "│   └── main.py", "└── README.md"])
            .expect("Failed to convert tree");

        assert_eq!(
            commands,
            vec![
                "mkdir -p project",
                "mkdir -p project/src",
                "touch project/src/main.py",
                "touch project/README.md",
            ]
        );
    }

    #[test]
    fn synthetic_root_adds_no_path_component() {
        let commands = convert(&[
            ".",
            "├── docs",
            "│   └── index.md",
            "└── Cargo.toml",
            "",
            "1 directory, 2 files",
        ])
        .expect("Failed to convert tree");

        assert_eq!(
            commands,
            vec!["mkdir -p docs", "touch docs/index.md", "touch Cargo.toml"]
        );
    }

    #[test]
    fn directory_without_slash_is_inferred_from_children() {
        let commands = convert(&["a", "└── b", "    └── c"]).expect("Failed to convert tree");
        assert_eq!(commands, vec!["mkdir -p a", "mkdir -p a/b", "touch a/b/c"]);
    }

    #[test]
    fn empty_directory_needs_trailing_slash() {
        let commands = convert(&["a/", "├── empty/", "└── file"]).expect("Failed to convert tree");
        assert_eq!(commands, vec!["mkdir -p a", "mkdir -p a/empty", "touch a/file"]);
    }

    #[test]
    fn duplicate_paths_are_emitted_twice() {
        let commands = convert(&["a/", "├── f", "└── f"]).expect("Failed to convert tree");
        assert_eq!(commands, vec!["mkdir -p a", "touch a/f", "touch a/f"]);
    }

    #[test]
    fn names_are_kept_verbatim() {
        let commands = convert(&["my dir/", "└── $file"]).expect("Failed to convert tree");
        assert_eq!(commands, vec!["mkdir -p my dir", "touch my dir/$file"]);
    }

    #[test]
    fn malformed_input_yields_no_commands() {
        let result = convert(&["a/", "    b/", "        c/", "    d/"]);
        assert!(matches!(result, Err(TreeError::MalformedInput { .. })));
    }

    #[rstest]
    #[case(&["a/", "└── ../../escaped"])]
    #[case(&["a/", "└── x/../../.."])]
    #[case(&["/tmp/abs_escape/"])]
    fn names_leaving_the_working_directory_yield_no_commands(#[case] lines: &[&str]) {
        assert!(matches!(
            convert(lines),
            Err(TreeError::MalformedInput { .. })
        ));
    }

    #[rstest]
    #[case(&[])]
    #[case(&["", "\n", "  "])]
    fn empty_input_is_rejected(#[case] lines: &[&str]) {
        assert_eq!(convert(lines), Err(TreeError::EmptyInput));
    }

    #[test]
    fn shell_command_display() {
        assert_eq!(ShellCommand::MakeDirectory("a/b".into()).to_string(), "mkdir -p a/b");
        assert_eq!(ShellCommand::Touch("a/b".into()).to_string(), "touch a/b");
    }

    #[rstest]
    #[case(&["project/", "├── src/", "│   ├── lib.rs", "│   └── bin/", "│       └── main.rs", "└── README.md"])]
    #[case(&[".", "├── a", "│   ├── b", "│   │   └── c", "│   └── d", "├── e", "└── f/"])]
    #[case(&["x/", "y/", "└── z"])]
    fn one_command_per_entry_and_parents_first(#[case] lines: &[&str]) {
        let forest = TreeParser::default().parse(lines).expect("Failed to parse tree");
        let commands = convert(lines).expect("Failed to convert tree");

        let entries: usize = forest.iter().map(Node::entry_count).sum();
        assert_eq!(commands.len(), entries);

        let paths: Vec<(&str, &str)> = commands
            .iter()
            .filter_map(|command| command.split_once(' '))
            .map(|(verb, rest)| (verb, rest.trim_start_matches("-p ")))
            .collect();

        for (index, (verb, path)) in paths.iter().enumerate() {
            if *verb != "mkdir" {
                continue;
            }
            let prefix = format!("{path}/");
            for (other_index, (_, other)) in paths.iter().enumerate() {
                if other.starts_with(&prefix) {
                    assert!(
                        index < other_index,
                        "'{path}' must be created before '{other}'"
                    );
                }
            }
        }
    }
}
