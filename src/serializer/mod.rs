//! Output formats for a generated command list.
//!
//! Every format implements [`CommandSerializer`]; callers pick one through
//! [`OutputFormat::serializer`], which hands out a fresh instance each time.

mod bash_array;
mod json;
mod lines;

use clap::ValueEnum;

pub use bash_array::BashArraySerializer;
pub use json::JsonSerializer;
pub use lines::LinesSerializer;

pub trait CommandSerializer {
    /// Formats the commands into the final output text, preserving their order.
    fn serialize(&self, commands: &[String]) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// A shell array literal, one quoted command per element
    #[default]
    BashArray,
    /// One command per line
    Lines,
    /// A JSON array of command strings
    Json,
}

impl OutputFormat {
    pub fn serializer(&self) -> Box<dyn CommandSerializer> {
        match self {
            OutputFormat::BashArray => Box::new(BashArraySerializer),
            OutputFormat::Lines => Box::new(LinesSerializer),
            OutputFormat::Json => Box::new(JsonSerializer),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_str(name, true).ok()
    }
}
