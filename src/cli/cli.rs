use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

use crate::{application::data::LogLevel, serializer::OutputFormat, tree::IndentStyle};

/// Turn a `tree` diagram into the mkdir/touch commands that recreate it.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Cli {
    /// File containing the tree diagram. Standard input is read when omitted
    #[arg(value_name = "TREE_FILE")]
    pub inputs: Vec<PathBuf>,
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// How nesting is drawn in the input
    #[clap(long, value_enum)]
    pub style: Option<IndentStyle>,
    /// Spaces per level for the indented style
    #[clap(long)]
    pub indent_width: Option<NonZeroUsize>,
    #[clap(long, short, value_enum)]
    pub format: Option<OutputFormat>,

    /// Run the commands inside this directory instead of printing them
    #[clap(long, short = 'x', value_name = "DIR")]
    pub execute: Option<PathBuf>,
    /// Shell used with --execute, invoked as `<shell> -c <command>`
    #[clap(long)]
    pub shell: Option<String>,

    /// YAML settings file
    #[clap(long, short)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// At most one tree file may be given.
    pub fn has_too_many_inputs(&self) -> bool {
        self.inputs.len() > 1
    }

    pub fn usage_message() -> String {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
        format!("Usage: {program} [<tree_file>]\nIf no file is provided, input is read from stdin.")
    }
}
