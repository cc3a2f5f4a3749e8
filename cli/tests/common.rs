use assert_cmd::prelude::*;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// a fresh directory under the cargo target dir
pub fn test_dir(name: &str) -> PathBuf {
    let path = Path::new(env!("CARGO_TARGET_TMPDIR")).join(name);
    let _ = std::fs::remove_dir_all(&path);
    std::fs::create_dir_all(&path).unwrap();
    path
}

pub fn touch(path: &Path) -> String {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, b"").unwrap();
    path.to_string_lossy().into_owned()
}

pub fn execute_cargo_cmd(args: &[&str]) -> Output {
    Command::cargo_bin("uelaunch")
        .unwrap()
        .args(args)
        .output()
        .unwrap()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
