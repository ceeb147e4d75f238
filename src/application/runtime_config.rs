use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::Settings;
use crate::serializer::OutputFormat;
use crate::tree::{DEFAULT_INDENT_WIDTH, GlyphSet};

/// Everything a single conversion needs, resolved from the command line first,
/// then the settings file, then the built-in defaults.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub input: Option<PathBuf>,
    pub glyphs: GlyphSet,
    pub format: OutputFormat,
    pub execute: Option<PathBuf>,
    pub shell: Option<String>,
}

impl RuntimeConfig {
    pub fn resolve(cli: Cli, settings: Settings) -> Self {
        let style = cli.style.or(settings.style).unwrap_or_default();
        let indent_width = cli
            .indent_width
            .or(settings.indent_width)
            .unwrap_or(DEFAULT_INDENT_WIDTH);

        Self {
            input: cli.inputs.into_iter().next(),
            glyphs: GlyphSet::new(style, indent_width),
            format: cli.format.or(settings.format).unwrap_or_default(),
            execute: cli.execute,
            shell: cli.shell.or(settings.shell),
        }
    }
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self::resolve(cli, Settings::default())
    }
}
