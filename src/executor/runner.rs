use std::path::PathBuf;

use colored::Colorize;
use compio::{fs, process::Command};
use snafu::{ResultExt, Snafu, ensure};
use tracing::{Level, debug, info, warn};

use crate::ext::BestEffortPathExt;
use crate::filesystem::FilesystemNode;

/// Runs generated commands one after another through the system shell.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    working_dir: PathBuf,
    shell: Option<String>,
}

impl CommandRunner {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            shell: None,
        }
    }

    /// Overrides the platform shell (`sh` or `cmd`). The program must accept `-c <command>`.
    pub fn with_shell(mut self, shell: Option<String>) -> Self {
        self.shell = shell;
        self
    }

    /// Executes every command in order inside the working directory, creating it
    /// first if needed. Stops at the first command that fails; the rest are never run.
    pub async fn run_all(&self, commands: &[String]) -> Result<(), ExecutionError> {
        fs::create_dir_all(&self.working_dir)
            .await
            .context(CreateWorkingDirSnafu {
                path: self.working_dir.clone(),
            })?;

        for command in commands {
            self.run(command).await?;
        }

        info!(
            "Executed {} commands in {}",
            commands.len(),
            self.working_dir.best_effort_path_display()
        );
        self.log_resulting_tree();
        Ok(())
    }

    async fn run(&self, command: &str) -> Result<(), ExecutionError> {
        println!("{} {}", "+".dimmed(), command.bold());
        info!("Running '{}'", command);

        let mut cmd = self.create_command(command);
        let handle = cmd.spawn().context(SpawnSnafu { command })?;
        let status = handle.wait().await.context(WaitSnafu { command })?;

        ensure!(
            status.success(),
            UnsuccessfulExecutionSnafu {
                command,
                status: status.code().unwrap_or(-1),
            }
        );
        debug!("Command '{}' completed successfully", command);
        Ok(())
    }

    /// Returns the shell program and the arguments that make it run `command`.
    fn full_command<'a>(&'a self, command: &'a str) -> (&'a str, [&'a str; 2]) {
        if let Some(shell) = &self.shell {
            return (shell.as_str(), ["-c", command]);
        }
        #[cfg(target_family = "windows")]
        {
            ("cmd", ["/C", command])
        }
        #[cfg(not(target_family = "windows"))]
        {
            ("sh", ["-c", command])
        }
    }

    fn create_command(&self, command: &str) -> Command {
        let (program, args) = self.full_command(command);
        let mut cmd = Command::new(program);
        cmd.args(args);
        cmd.current_dir(&self.working_dir);
        cmd
    }

    fn log_resulting_tree(&self) {
        if !tracing::enabled!(Level::INFO) {
            return;
        }
        match FilesystemNode::scan(&self.working_dir) {
            Ok(snapshot) => {
                for line in snapshot.render_lines(".") {
                    info!("{}", line);
                }
            }
            Err(e) => warn!("Could not read back the created tree: {}", e),
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ExecutionError {
    #[snafu(display("Failed to create working directory {}", path.best_effort_path_display()))]
    CreateWorkingDirError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to spawn command '{}'", command))]
    SpawnError {
        command: String,
        source: std::io::Error,
    },
    #[snafu(display("Failed to wait for command '{}'", command))]
    WaitError {
        command: String,
        source: std::io::Error,
    },
    #[snafu(display("Command '{}' failed with exit code {}", command, status))]
    UnsuccessfulExecution { command: String, status: i32 },
}
