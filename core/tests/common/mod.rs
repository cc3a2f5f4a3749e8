#![allow(dead_code)]

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use uelaunch::ops::{CheckGate, MessageKind, SyncChoice, SyncReport, UiRequest};
use uelaunch::utils::cmd::command_line;
use uelaunch::utils::{CmdOutput, Runner};

pub mod failed_message {
    pub const GIT_INIT: &str = "git init failed";
    pub const GIT_COMMIT: &str = "git commit failed";
    pub const GIT_CLONE: &str = "git clone failed";
    pub const WRITE_FILE: &str = "write file failed";
}

pub fn exec_cmd(path: &Path, cmd: &str, args: &[&str]) -> Result<String, anyhow::Error> {
    let output = Command::new(cmd)
        .current_dir(path)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;
    let stderr = String::from_utf8(output.stderr)?;

    match output.status.success() {
        false => Err(anyhow::anyhow!(stderr)),
        true => Ok(stdout),
    }
}

/// fresh, empty `target/tmp/<name>` below the package dir
pub fn test_dir(name: &str) -> PathBuf {
    let path = env::current_dir()
        .unwrap()
        .join("target")
        .join("tmp")
        .join(name);
    let _ = std::fs::remove_dir_all(&path);
    std::fs::create_dir_all(&path).unwrap();
    path
}

/// a directory that looks like a repository root
pub fn fake_repo(path: &Path) {
    std::fs::create_dir_all(path.join(".git")).unwrap();
}

pub fn touch(path: &Path) -> String {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, b"").expect(failed_message::WRITE_FILE);
    path.to_string_lossy().into_owned()
}

#[derive(Default)]
struct FakeState {
    replies: HashMap<String, CmdOutput>,
    calls: Vec<String>,
    launches: Vec<String>,
    launch_error: Option<String>,
}

/// Scripted runner: replies are keyed by the full command line,
/// anything unscripted exits with code 1.
#[derive(Clone, Default)]
pub struct FakeRunner {
    state: Arc<Mutex<FakeState>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, command: &str, code: i32, stdout: &str) -> Self {
        self.reply_with(command, CmdOutput::new(code, stdout, ""))
    }

    pub fn reply_with(self, command: &str, output: CmdOutput) -> Self {
        self.state
            .lock()
            .unwrap()
            .replies
            .insert(command.to_string(), output);
        self
    }

    pub fn fail_launch(self, err: &str) -> Self {
        self.state.lock().unwrap().launch_error = Some(err.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn ran(&self, command: &str) -> bool {
        self.calls().iter().any(|call| call == command)
    }

    pub fn ran_program(&self, program: &str) -> bool {
        self.calls().iter().any(|call| call.starts_with(program))
    }

    pub fn launches(&self) -> Vec<String> {
        self.state.lock().unwrap().launches.clone()
    }
}

impl Runner for FakeRunner {
    fn run(&self, program: &str, args: &[&str], _cwd: Option<&Path>) -> CmdOutput {
        let line = command_line(program, args);
        let mut state = self.state.lock().unwrap();
        state.calls.push(line.clone());
        state
            .replies
            .get(&line)
            .cloned()
            .unwrap_or_else(|| CmdOutput::new(1, "", format!("unexpected command: {}", line)))
    }

    fn spawn_detached(
        &self,
        program: &str,
        args: &[&str],
        _cwd: Option<&Path>,
    ) -> anyhow::Result<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(err) = &state.launch_error {
            return Err(anyhow::anyhow!("{}", err));
        }
        state.launches.push(command_line(program, args));
        Ok(())
    }
}

/// Wraps a `FakeRunner` and notes, for every command starting with `prefix`,
/// whether the gate slot of `repo` was free at that moment.
#[derive(Clone)]
pub struct GateWatch {
    pub inner: FakeRunner,
    gate: CheckGate,
    repo: PathBuf,
    prefix: String,
    free: Arc<Mutex<Vec<bool>>>,
}

impl GateWatch {
    pub fn new(inner: FakeRunner, gate: &CheckGate, repo: &Path, prefix: &str) -> Self {
        Self {
            inner,
            gate: gate.clone(),
            repo: repo.to_path_buf(),
            prefix: prefix.to_string(),
            free: Arc::default(),
        }
    }

    pub fn free_while_running(&self) -> Vec<bool> {
        self.free.lock().unwrap().clone()
    }
}

impl Runner for GateWatch {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> CmdOutput {
        if command_line(program, args).starts_with(&self.prefix) {
            let free = self.gate.try_enter(&self.repo).is_some();
            self.free.lock().unwrap().push(free);
        }
        self.inner.run(program, args, cwd)
    }

    fn spawn_detached(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> anyhow::Result<()> {
        self.inner.spawn_detached(program, args, cwd)
    }
}

/// git replies for branch `feature` with an `upstream/main` default branch
pub fn diverged_git(behind: u32, ahead: u32) -> FakeRunner {
    FakeRunner::new()
        .reply("git fetch --all --prune", 0, "")
        .reply("git rev-parse --abbrev-ref HEAD", 0, "feature")
        .reply("git remote", 0, "origin\nupstream")
        .reply(
            "git symbolic-ref -q --short refs/remotes/upstream/HEAD",
            0,
            "upstream/main",
        )
        .reply(
            "git rev-list --left-right --count upstream/main...HEAD",
            0,
            &format!("{}\t0", behind),
        )
        .reply(
            "git log --oneline HEAD..upstream/main -n5",
            0,
            "a1 fix lighting\nb2 bump engine",
        )
        .reply(
            "git rev-list --left-right --count origin/feature...HEAD",
            0,
            &format!("0\t{}", ahead),
        )
        .reply("git log --oneline origin/feature..HEAD -n5", 0, "c3 wip menu")
}

/// Everything a background task asked the UI for.
#[derive(Debug, Default)]
pub struct Transcript {
    pub logs: Vec<String>,
    pub statuses: Vec<String>,
    pub dialogs: Vec<(MessageKind, String, String)>,
    pub confirms: Vec<SyncReport>,
}

impl Transcript {
    pub fn logged(&self, text: &str) -> bool {
        self.logs.iter().any(|line| line.contains(text))
    }

    pub fn dialog(&self, kind: MessageKind) -> Option<&(MessageKind, String, String)> {
        self.dialogs.iter().find(|(k, _, _)| *k == kind)
    }
}

/// Answer every request like a user who always picks `choice`.
/// Resolves once every `UiHandle` is dropped.
pub fn respond(mut recv: UnboundedReceiver<UiRequest>, choice: SyncChoice) -> JoinHandle<Transcript> {
    tokio::spawn(async move {
        let mut transcript = Transcript::default();
        while let Some(request) = recv.recv().await {
            match request {
                UiRequest::Log(line) => transcript.logs.push(line),
                UiRequest::Status(status) => transcript.statuses.push(status),
                UiRequest::Message {
                    kind,
                    title,
                    body,
                    reply,
                } => {
                    transcript.dialogs.push((kind, title, body));
                    let _ = reply.send(());
                }
                UiRequest::ConfirmSync { report, reply } => {
                    transcript.confirms.push(report);
                    let _ = reply.send(choice);
                }
            }
        }
        transcript
    })
}
