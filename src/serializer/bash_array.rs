use super::CommandSerializer;

const ARRAY_NAME: &str = "commands";

/// Renders a bash array assignment that can be sourced and iterated over:
///
/// ```text
/// commands=(
///   "mkdir -p project"
///   "touch project/README.md"
/// )
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BashArraySerializer;

impl CommandSerializer for BashArraySerializer {
    fn serialize(&self, commands: &[String]) -> String {
        let mut output = format!("{ARRAY_NAME}=(\n");
        for command in commands {
            output.push_str("  \"");
            output.push_str(&escape_double_quoted(command));
            output.push_str("\"\n");
        }
        output.push(')');
        output
    }
}

/// Escapes the characters that keep their meaning inside double quotes.
fn escape_double_quoted(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_quoted_element_per_command() {
        let commands = vec!["mkdir -p project".to_string(), "touch project/a.txt".to_string()];
        let output = BashArraySerializer.serialize(&commands);
        assert_eq!(
            output,
            "commands=(\n  \"mkdir -p project\"\n  \"touch project/a.txt\"\n)"
        );
    }

    #[test]
    fn renders_empty_array() {
        assert_eq!(BashArraySerializer.serialize(&[]), "commands=(\n)");
    }

    #[test]
    fn escapes_shell_special_characters() {
        let commands = vec![r#"touch "a"/$b/`c`\d"#.to_string()];
        let output = BashArraySerializer.serialize(&commands);
        assert_eq!(output, "commands=(\n  \"touch \\\"a\\\"/\\$b/\\`c\\`\\\\d\"\n)");
    }
}
