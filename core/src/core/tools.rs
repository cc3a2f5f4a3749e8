use globset::{GlobBuilder, GlobMatcher};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::utils::error::{LauncherError, LauncherResult};

pub const BUILD_TOOL_NAME: &str = "UnrealBuildTool.exe";
pub const EDITOR_NAME: &str = "UnrealEditor.exe";

// most specific first
pub const BUILD_TOOL_PATTERNS: &[&str] = &[
    "Engine/Binaries/DotNET/UnrealBuildTool/UnrealBuildTool.exe",
    "Engine/Binaries/DotNET/UnrealBuildTool.exe",
    "Engine/Binaries/DotNET/**/UnrealBuildTool.exe",
];

pub const EDITOR_PATTERNS: &[&str] = &[
    "Engine/Binaries/Win64/UnrealEditor.exe",
    "Engine/**/Win64/UnrealEditor.exe",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectedTools {
    pub build_tool: Option<PathBuf>,
    pub editor: Option<PathBuf>,
}

impl DetectedTools {
    pub fn is_empty(&self) -> bool {
        self.build_tool.is_none() && self.editor.is_none()
    }
}

/// Search the engine folder for the build tool and the editor.
/// Absence of either tool (or of the folder itself) is a normal outcome.
pub fn locate(engine_dir: impl AsRef<Path>) -> DetectedTools {
    match try_locate(engine_dir) {
        Ok(tools) => tools,
        Err(e) => {
            log::warn!("tool detection skipped: {}", e);
            DetectedTools::default()
        }
    }
}

pub fn try_locate(engine_dir: impl AsRef<Path>) -> LauncherResult<DetectedTools> {
    let engine_dir = engine_dir.as_ref();
    if engine_dir.as_os_str().is_empty() {
        return Err(LauncherError::EngineDirNotSet);
    }
    if !engine_dir.is_dir() {
        return Err(LauncherError::EngineDirNotFound(engine_dir.to_path_buf()));
    }

    let build_tool_globs = compile(BUILD_TOOL_PATTERNS)?;
    let editor_globs = compile(EDITOR_PATTERNS)?;

    // one walk, keep only files carrying one of the two names
    let candidates: Vec<(PathBuf, String)> = WalkDir::new(engine_dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy();
            name.eq_ignore_ascii_case(BUILD_TOOL_NAME) || name.eq_ignore_ascii_case(EDITOR_NAME)
        })
        .filter_map(|entry| {
            let rel_path = entry.path().strip_prefix(engine_dir).ok()?;
            let rel_path = rel_path.to_string_lossy().replace('\\', "/");
            Some((entry.into_path(), rel_path))
        })
        .collect();

    Ok(DetectedTools {
        build_tool: first_match(&build_tool_globs, &candidates),
        editor: first_match(&editor_globs, &candidates),
    })
}

fn compile(patterns: &[&str]) -> LauncherResult<Vec<GlobMatcher>> {
    patterns
        .iter()
        .map(|pattern| {
            GlobBuilder::new(pattern)
                .case_insensitive(true)
                .literal_separator(true)
                .build()
                .map(|glob| glob.compile_matcher())
                .map_err(|source| LauncherError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
        })
        .collect()
}

/// first pattern with hits wins; among its hits the shortest path wins
fn first_match(globs: &[GlobMatcher], candidates: &[(PathBuf, String)]) -> Option<PathBuf> {
    globs.iter().find_map(|glob| {
        candidates
            .iter()
            .filter(|(_, rel_path)| glob.is_match(rel_path))
            .map(|(path, _)| path)
            .min_by(|a, b| {
                let (a_str, b_str) = (a.to_string_lossy(), b.to_string_lossy());
                a_str.len().cmp(&b_str.len()).then_with(|| a_str.cmp(&b_str))
            })
            .cloned()
    })
}
