use std::path::{Path, PathBuf};

/// How many directory levels above the project file are searched for `.git`.
pub const MAX_REPO_DEPTH: usize = 10;

/// Walk up from the directory of the project file until a `.git` directory is found.
pub fn find_repo_root(project_file: impl AsRef<Path>) -> Option<PathBuf> {
    let project_file = project_file.as_ref();
    if project_file.as_os_str().is_empty() {
        return None;
    }

    let parent = project_file.parent().unwrap_or_else(|| Path::new(""));
    let mut dir = match parent.is_absolute() {
        true => parent.to_path_buf(),
        false => std::env::current_dir().ok()?.join(parent),
    };

    for _ in 0..MAX_REPO_DEPTH {
        if dir.join(".git").is_dir() {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
