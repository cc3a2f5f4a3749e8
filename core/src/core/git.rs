use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

use crate::utils::cmd::{CmdOutput, Runner, SystemRunner};
use crate::utils::error::{LauncherError, LauncherResult};

/// Oldest git that understands every command used here.
pub const GIT_VERSION: &str = ">=1.8.5";

pub const UPSTREAM_REMOTE: &str = "upstream";
pub const ORIGIN_REMOTE: &str = "origin";

lazy_static! {
    static ref VERSION_RE: Regex = Regex::new(r"(?P<version>(\d+\.\d+\.\d+))").unwrap();
}

/// Commits only on the left side (`behind`) and only on the right side (`ahead`)
/// of a `left...right` comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AheadBehind {
    pub behind: u32,
    pub ahead: u32,
}

/// One-shot git commands, each a single process run in the repository.
#[derive(Clone, Default)]
pub struct Git<R: Runner = SystemRunner> {
    runner: R,
}

impl<R: Runner> Git<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    fn exec(&self, repo: impl AsRef<Path>, args: &[&str]) -> CmdOutput {
        self.runner.run("git", args, Some(repo.as_ref()))
    }

    pub fn fetch_all(&self, repo: impl AsRef<Path>) -> CmdOutput {
        self.exec(repo, &["fetch", "--all", "--prune"])
    }

    pub fn current_branch(&self, repo: impl AsRef<Path>) -> Option<String> {
        let output = self.exec(repo, &["rev-parse", "--abbrev-ref", "HEAD"]);
        let branch = output.stdout.trim();
        match output.success() && !branch.is_empty() {
            true => Some(branch.to_string()),
            false => None,
        }
    }

    pub fn has_remote(&self, repo: impl AsRef<Path>, name: &str) -> bool {
        let output = self.exec(repo, &["remote"]);
        output.success() && parse_remotes(&output.stdout).any(|remote| remote == name)
    }

    /// `<remote>/<branch>` the remote's HEAD points at
    pub fn default_remote_branch(&self, repo: impl AsRef<Path>, remote: &str) -> Option<String> {
        let repo = repo.as_ref();
        let head_ref = format!("refs/remotes/{}/HEAD", remote);
        let output = self.exec(repo, &["symbolic-ref", "-q", "--short", &head_ref]);
        let short = output.stdout.trim();
        if output.success() && !short.is_empty() {
            return Some(short.to_string());
        }

        // fall back to asking the remote itself
        let output = self.exec(repo, &["remote", "show", remote]);
        if !output.success() {
            return None;
        }
        parse_head_branch(&output.stdout).map(|branch| format!("{}/{}", remote, branch))
    }

    pub fn ahead_behind(
        &self,
        repo: impl AsRef<Path>,
        left: &str,
        right: &str,
    ) -> Option<AheadBehind> {
        let range = format!("{}...{}", left, right);
        let output = self.exec(repo, &["rev-list", "--left-right", "--count", &range]);
        match output.success() {
            true => parse_ahead_behind(&output.stdout),
            false => None,
        }
    }

    pub fn list_commits(&self, repo: impl AsRef<Path>, range: &str, limit: usize) -> Vec<String> {
        let limit = format!("-n{}", limit);
        let output = self.exec(repo, &["log", "--oneline", range, &limit]);
        match output.success() {
            true => output
                .stdout
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
            false => Vec::new(),
        }
    }

    pub fn pull(&self, repo: impl AsRef<Path>, remote: &str, branch: &str) -> CmdOutput {
        self.exec(repo, &["pull", "--rebase", remote, branch])
    }

    pub fn push(&self, repo: impl AsRef<Path>, remote: &str, branch: &str) -> CmdOutput {
        self.exec(repo, &["push", remote, branch])
    }

    pub fn version(&self) -> LauncherResult<semver::Version> {
        let output = self.runner.run("git", &["--version"], None);
        if !output.success() {
            return Err(LauncherError::GitNotFound(output.stderr));
        }
        parse_version(&output.stdout)
            .ok_or_else(|| LauncherError::GitVersionUnknown(output.stdout.clone()))
    }

    /// make sure git is installed and new enough
    pub fn check_version(&self) -> LauncherResult<semver::Version> {
        let current = self.version()?;
        let required = semver::VersionReq::parse(GIT_VERSION)
            .map_err(|_| LauncherError::GitVersionUnknown(GIT_VERSION.to_string()))?;

        match required.matches(&current) {
            true => Ok(current),
            false => Err(LauncherError::GitVersionMismatch {
                required: GIT_VERSION.to_string(),
                current: current.to_string(),
            }),
        }
    }
}

pub fn parse_remotes(output: &str) -> impl Iterator<Item = &str> {
    output.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// branch name from the `HEAD branch:` line of `git remote show`
pub fn parse_head_branch(output: &str) -> Option<&str> {
    output.lines().find_map(|line| {
        let line = line.trim();
        if !line.to_lowercase().starts_with("head branch:") {
            return None;
        }
        let (_, branch) = line.split_once(':')?;
        let branch = branch.trim();
        match branch.is_empty() || branch == "(unknown)" {
            true => None,
            false => Some(branch),
        }
    })
}

/// two whitespace separated counts, e.g. `"3\t5\n"`
pub fn parse_ahead_behind(output: &str) -> Option<AheadBehind> {
    let mut parts = output.split_whitespace();
    let behind = parts.next()?.parse().ok()?;
    let ahead = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(AheadBehind { behind, ahead })
}

pub fn parse_version(output: &str) -> Option<semver::Version> {
    let caps = VERSION_RE.captures(output)?;
    semver::Version::parse(&caps["version"]).ok()
}
