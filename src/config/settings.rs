use std::num::NonZeroUsize;
use std::path::Path;

use clap::ValueEnum;
use compio::fs;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::{debug, warn};

use crate::{ext::BestEffortPathExt, serializer::OutputFormat, tree::IndentStyle};

/// Values read from an optional YAML settings file. Anything left unset falls
/// back to the command line or the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub style: Option<IndentStyle>,
    pub indent_width: Option<NonZeroUsize>,
    pub format: Option<OutputFormat>,
    pub shell: Option<String>,
}

impl Settings {
    pub async fn read(path: &Path) -> Result<Self, SettingsError> {
        debug!("Reading settings file: {}", path.best_effort_path_display());
        let bytes = fs::read(path).await.context(ReadSnafu {
            file_path: path.best_effort_path_display(),
        })?;
        debug!("Successfully read settings file: {} bytes", bytes.len());

        let contents = String::from_utf8_lossy(&bytes);
        Settings::try_from(&*contents)
    }

    fn apply_entry(&mut self, key: &str, value: &Yaml) -> Result<(), SettingsError> {
        match key {
            "style" => {
                let style = value
                    .as_str()
                    .and_then(|name| IndentStyle::from_str(name, true).ok());
                self.style = Some(style.context(InvalidValueSnafu { key })?);
            }
            "indent_width" => {
                let width = match value {
                    Yaml::Value(Scalar::Integer(n)) => {
                        usize::try_from(*n).ok().and_then(NonZeroUsize::new)
                    }
                    _ => None,
                };
                self.indent_width = Some(width.context(InvalidValueSnafu { key })?);
            }
            "format" => {
                let format = value.as_str().and_then(OutputFormat::from_name);
                self.format = Some(format.context(InvalidValueSnafu { key })?);
            }
            "shell" => {
                let shell = value.as_str().filter(|s| !s.trim().is_empty());
                self.shell = Some(shell.context(InvalidValueSnafu { key })?.to_string());
            }
            _ => warn!("Ignoring unknown settings key '{}'", key),
        }
        Ok(())
    }

    fn from_mapping(top_level: &LinkedHashMap<Yaml, Yaml>) -> Result<Self, SettingsError> {
        let mut settings = Settings::default();
        for (key, value) in top_level {
            match key {
                Yaml::Value(Scalar::String(key)) => settings.apply_entry(key, value)?,
                _ => warn!("Skipping non-string settings key: {:?}", key),
            }
        }
        Ok(settings)
    }
}

impl TryFrom<&str> for Settings {
    type Error = SettingsError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let document = documents.first().context(MalformedSnafu)?;
        let top_level = document.as_mapping().context(TopLevelNotMapSnafu)?;

        Self::from_mapping(top_level)
    }
}

#[derive(Debug, Snafu)]
pub enum SettingsError {
    #[snafu(display("Failed to read the settings file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Failed to parse the settings file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted settings file"))]
    Malformed,
    #[snafu(display("Top level of the settings file should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Invalid value for settings key '{}'", key))]
    InvalidValue { key: String },
}
