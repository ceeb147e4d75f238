use super::CommandSerializer;

/// One command per line, ready to pipe into `sh`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinesSerializer;

impl CommandSerializer for LinesSerializer {
    fn serialize(&self, commands: &[String]) -> String {
        commands.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_commands_with_newlines() {
        let commands = vec!["mkdir -p a".to_string(), "touch a/b".to_string()];
        assert_eq!(LinesSerializer.serialize(&commands), "mkdir -p a\ntouch a/b");
    }
}
