//! Model tool abstraction and the out-of-process dbt implementation.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use dryscan_types::Selection;
use thiserror::Error;
use tokio::process::Command;

/// Errors that can occur invoking the model tool.
#[derive(Error, Debug)]
pub enum ToolError {
    /// The tool executable could not be invoked.
    #[error("Failed to invoke {program}: {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The tool exited unsuccessfully.
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        /// Program that failed.
        program: String,
        /// Exit status.
        status: std::process::ExitStatus,
        /// Trimmed stderr output.
        stderr: String,
    },
}

/// Operations the selector resolver needs from the model toolchain.
///
/// Abstracting these two calls keeps the resolver independent of whether
/// the backing implementation shells out or links the toolchain in-process.
#[async_trait]
pub trait ModelTool: Send + Sync {
    /// Lists the model identifiers matching a selection, one per line,
    /// restricted to the "model" resource kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool cannot be invoked or exits unsuccessfully.
    async fn list_models(&self, selection: &Selection) -> Result<String, ToolError>;

    /// Compiles the models matching a selection, producing their compiled
    /// SQL files on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool cannot be invoked or exits unsuccessfully.
    async fn compile_models(&self, selection: &Selection) -> Result<(), ToolError>;
}

/// Out-of-process `dbt` invocation.
#[derive(Debug, Clone)]
pub struct DbtCli {
    program: String,
    project_dir: Option<PathBuf>,
    quiet: bool,
}

impl DbtCli {
    /// Creates a dbt invoker.
    ///
    /// When `quiet` is set, `--quiet` is passed to dbt and its compile
    /// output is captured instead of inherited, so the tool's own log noise
    /// stays out of the report.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self {
            program: "dbt".to_string(),
            project_dir: None,
            quiet,
        }
    }

    /// Overrides the executable to invoke (default `dbt`).
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Overrides the dbt project directory (`--project-dir`).
    #[must_use]
    pub fn with_project_dir(mut self, project_dir: impl Into<PathBuf>) -> Self {
        self.project_dir = Some(project_dir.into());
        self
    }

    /// Builds a dbt command with the common flags applied.
    fn command(&self, subcommand: &str) -> Command {
        let mut command = Command::new(&self.program);
        if self.quiet {
            command.arg("--quiet");
        }
        command.arg(subcommand);
        if let Some(dir) = &self.project_dir {
            command.arg("--project-dir").arg(dir);
        }
        command
    }

    /// Runs a command to completion, capturing output.
    async fn run(&self, mut command: Command) -> Result<std::process::Output, ToolError> {
        command
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| ToolError::Spawn {
                program: self.program.clone(),
                source,
            })
    }
}

#[async_trait]
impl ModelTool for DbtCli {
    async fn list_models(&self, selection: &Selection) -> Result<String, ToolError> {
        let mut command = self.command("ls");
        command
            .arg("--select")
            .arg(selection.as_str())
            .arg("--resource-type")
            .arg("model");

        let output = self.run(command).await?;
        if !output.status.success() {
            return Err(ToolError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn compile_models(&self, selection: &Selection) -> Result<(), ToolError> {
        let mut command = self.command("compile");
        command.arg("--select").arg(selection.as_str());

        if !self.quiet {
            // Let dbt's compile progress show; only the listing is data.
            command.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        let output = self.run(command).await?;
        if !output.status.success() {
            return Err(ToolError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
