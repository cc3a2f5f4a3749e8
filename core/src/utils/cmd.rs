use anyhow::Context;
use console::strip_ansi_codes;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Captured result of one external process run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CmdOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CmdOutput {
    pub fn new(code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// spawn failures are reported as exit code 1 with the error text in stderr
    pub fn spawn_failed(err: impl ToString) -> Self {
        Self::new(1, String::new(), err.to_string())
    }

    pub fn success(&self) -> bool {
        self.code == 0
    }

    fn from_output(output: Output) -> Self {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        Self {
            code: output.status.code().unwrap_or(1),
            stdout: strip_ansi_codes(&stdout).trim_end().to_string(),
            stderr: strip_ansi_codes(&stderr).trim_end().to_string(),
        }
    }
}

/// Seam for every external command the launcher runs.
pub trait Runner: Send + Sync + Clone + 'static {
    /// run to completion, capturing both streams
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> CmdOutput;

    /// start a process without waiting for it
    fn spawn_detached(&self, program: &str, args: &[&str], cwd: Option<&Path>)
        -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> CmdOutput {
        let mut command = new_command(program, args, cwd);
        let output = command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output();

        match output {
            Ok(output) => CmdOutput::from_output(output),
            Err(e) => {
                log::error!("Error starting command {:?}: {}", command, e);
                CmdOutput::spawn_failed(e)
            }
        }
    }

    fn spawn_detached(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> anyhow::Result<()> {
        let mut command = new_command(program, args, cwd);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Error starting command: {:?}", command))?;
        Ok(())
    }
}

fn new_command(program: &str, args: &[&str], cwd: Option<&Path>) -> Command {
    let mut command = Command::new(program);
    command.args(args);
    if let Some(dir) = cwd.filter(|dir| !dir.as_os_str().is_empty()) {
        command.current_dir(dir);
    }

    #[cfg(target_os = "windows")]
    {
        use std::os::windows::process::CommandExt;
        const CREATE_NO_WINDOW: u32 = 0x08000000;
        command.creation_flags(CREATE_NO_WINDOW);
    }

    command
}

/// render a command line the way it is shown in the log
pub fn command_line(program: impl AsRef<str>, args: &[impl AsRef<str>]) -> String {
    std::iter::once(program.as_ref())
        .chain(args.iter().map(|a| a.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
