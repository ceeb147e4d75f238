use serde_json::Value;

use super::CommandSerializer;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl CommandSerializer for JsonSerializer {
    fn serialize(&self, commands: &[String]) -> String {
        format!("{:#}", Value::from(commands.to_vec()))
    }
}
