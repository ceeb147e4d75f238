use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::{InputError, RuntimeConfig, read_input};
use crate::cli::Cli;
use crate::commands::commands_from_lines;
use crate::config::{Settings, SettingsError};
use crate::executor::{CommandRunner, ExecutionError};
use crate::tree::TreeError;

pub struct Application;

impl Application {
    pub async fn run(cli: Cli) -> Result<(), ApplicationError> {
        let settings = match &cli.config {
            Some(path) => Settings::read(path).await.context(SettingsSnafu)?,
            None => Settings::default(),
        };
        debug!("Loaded settings: {:?}", settings);

        let config = RuntimeConfig::resolve(cli, settings);
        debug!("Resolved runtime config: {:?}", config);

        let output = Self::convert(&config).await?;
        if let Some(output) = output {
            println!("{output}");
        }
        Ok(())
    }

    /// Runs one conversion. Returns the serialized command list, or `None` when the
    /// commands were executed instead of printed.
    pub async fn convert(config: &RuntimeConfig) -> Result<Option<String>, ApplicationError> {
        let contents = read_input(config.input.as_deref())
            .await
            .context(InputSnafu)?;
        let lines: Vec<&str> = contents.lines().collect();

        let commands =
            commands_from_lines(&lines, config.glyphs.clone()).context(ConversionSnafu)?;
        info!("Converted tree into {} commands", commands.len());

        match &config.execute {
            Some(working_dir) => {
                CommandRunner::new(working_dir)
                    .with_shell(config.shell.clone())
                    .run_all(&commands)
                    .await
                    .context(ExecutionSnafu)?;
                Ok(None)
            }
            None => Ok(Some(config.format.serializer().serialize(&commands))),
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading settings"))]
    SettingsError { source: SettingsError },
    #[snafu(display("Critical failure encountered while reading the tree"))]
    InputError { source: InputError },
    #[snafu(display("The tree diagram was rejected"))]
    ConversionError { source: TreeError },
    #[snafu(display("Critical failure encountered while executing commands"))]
    ExecutionError { source: ExecutionError },
}
