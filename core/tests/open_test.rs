use std::path::Path;

use uelaunch::core::build_tool::{build_args, generate_args, BuildTool};
use uelaunch::core::git::Git;
use uelaunch::core::settings::Settings;
use uelaunch::ops::{open_project, CheckGate, MessageKind, OpenError, OpenOutcome, SyncChoice, UiHandle};
use uelaunch::utils::cmd::command_line;

use crate::common::{
    diverged_git, fake_repo, respond, test_dir, touch, FakeRunner, GateWatch, Transcript,
};

mod common;

/// engine tools and a project below `root`, all as empty files
fn project_settings(root: &Path) -> Settings {
    Settings {
        engine_dir: root.join("UE_5.3").to_string_lossy().into_owned(),
        project_file: touch(&root.join("Game").join("Game.uproject")),
        build_tool: touch(
            &root
                .join("UE_5.3/Engine/Binaries/DotNET/UnrealBuildTool")
                .join("UnrealBuildTool.exe"),
        ),
        editor: touch(&root.join("UE_5.3/Engine/Binaries/Win64/UnrealEditor.exe")),
        autogen: true,
        autobuild: false,
        auto_check: false,
    }
}

fn generate_line(settings: &Settings) -> String {
    command_line(&settings.build_tool, &generate_args(&settings.project_file))
}

fn build_line(settings: &Settings) -> String {
    command_line(&settings.build_tool, &build_args(&settings.project_file))
}

async fn open(settings: &Settings, runner: &FakeRunner, choice: SyncChoice) -> (OpenOutcome, Transcript) {
    let git = Git::new(runner.clone());
    let tools = BuildTool::new(runner.clone());
    let (ui, recv) = UiHandle::channel();
    let responder = respond(recv, choice);

    let outcome = open_project(settings, &git, &tools, &CheckGate::default(), &ui).await;
    drop(ui);
    (outcome, responder.await.unwrap())
}

/// in sync: generate, then launch with the project as the only argument
#[tokio::test]
async fn in_sync_generates_and_launches() {
    let root = test_dir("in_sync_generates_and_launches");
    fake_repo(&root);
    let settings = project_settings(&root);
    let runner = diverged_git(0, 0).reply(&generate_line(&settings), 0, "Generating project files");

    let (outcome, transcript) = open(&settings, &runner, SyncChoice::Abort).await;

    assert_eq!(outcome, OpenOutcome::Launched);
    assert!(transcript.confirms.is_empty());
    assert!(transcript.logged("=== Generate Project Files ==="));
    assert!(transcript.logged(&generate_line(&settings)));
    assert!(transcript.logged("Generating project files"));
    assert!(!runner.ran(&build_line(&settings)));
    assert_eq!(
        runner.launches(),
        vec![command_line(&settings.editor, &[&settings.project_file])]
    );

    let _ = std::fs::remove_dir_all(&root);
}

/// abort at the sync prompt stops before any tool runs
#[tokio::test]
async fn abort_stops_everything() {
    let root = test_dir("abort_stops_everything");
    fake_repo(&root);
    let settings = project_settings(&root);
    let runner = diverged_git(2, 1);

    let (outcome, transcript) = open(&settings, &runner, SyncChoice::Abort).await;

    assert_eq!(outcome, OpenOutcome::Aborted);
    assert_eq!(transcript.confirms.len(), 1);
    assert_eq!(transcript.confirms[0].behind_upstream, 2);
    assert!(!runner.ran_program(&settings.build_tool));
    assert!(runner.launches().is_empty());
    assert!(transcript.dialogs.is_empty());

    let _ = std::fs::remove_dir_all(&root);
}

/// the prompt comes first, then the pull to the upstream default branch, then generate
#[tokio::test]
async fn pull_then_continue() {
    let root = test_dir("pull_then_continue");
    fake_repo(&root);
    let settings = project_settings(&root);
    let runner = diverged_git(2, 0)
        .reply("git pull --rebase upstream main", 0, "Successfully rebased")
        .reply(&generate_line(&settings), 0, "");

    let (outcome, transcript) = open(&settings, &runner, SyncChoice::Pull).await;

    assert_eq!(outcome, OpenOutcome::Launched);
    assert_eq!(transcript.confirms.len(), 1);
    assert!(transcript.logged("Pull --rebase from upstream main"));
    assert!(transcript.logged("Successfully rebased"));

    let calls = runner.calls();
    let pull = calls
        .iter()
        .position(|c| c == "git pull --rebase upstream main")
        .unwrap();
    let generate = calls.iter().position(|c| *c == generate_line(&settings)).unwrap();
    assert!(pull < generate);
    assert_eq!(runner.launches().len(), 1);

    let _ = std::fs::remove_dir_all(&root);
}

/// the pull holds the repository, a periodic check can not fetch under it
#[tokio::test]
async fn pull_holds_the_gate() {
    let root = test_dir("pull_holds_the_gate");
    fake_repo(&root);
    let settings = Settings {
        autogen: false,
        ..project_settings(&root)
    };
    let gate = CheckGate::default();
    let runner = GateWatch::new(
        diverged_git(2, 0).reply("git pull --rebase upstream main", 0, ""),
        &gate,
        &root,
        "git pull",
    );

    let git = Git::new(runner.clone());
    let tools = BuildTool::new(runner.clone());
    let (ui, recv) = UiHandle::channel();
    let responder = respond(recv, SyncChoice::Pull);
    let outcome = open_project(&settings, &git, &tools, &gate, &ui).await;
    drop(ui);
    responder.await.unwrap();

    assert_eq!(outcome, OpenOutcome::Launched);
    assert_eq!(runner.free_while_running(), vec![false]);
    // released once the pull is done
    assert!(gate.try_enter(&root).is_some());

    let _ = std::fs::remove_dir_all(&root);
}

/// a failed pull is logged but does not stop the launch
#[tokio::test]
async fn failed_pull_still_launches() {
    let root = test_dir("failed_pull_still_launches");
    fake_repo(&root);
    let settings = Settings {
        autogen: false,
        ..project_settings(&root)
    };
    let runner = diverged_git(0, 2);

    let (outcome, transcript) = open(&settings, &runner, SyncChoice::Pull).await;

    // ahead only, so the pull goes to origin
    assert!(runner.ran("git pull --rebase origin feature"));
    assert!(transcript.logged("unexpected command: git pull --rebase origin feature"));
    assert_eq!(outcome, OpenOutcome::Launched);

    let _ = std::fs::remove_dir_all(&root);
}

/// generate and build run in order when both are enabled
#[tokio::test]
async fn autobuild_runs_after_generate() {
    let root = test_dir("autobuild_runs_after_generate");
    fake_repo(&root);
    let settings = Settings {
        autobuild: true,
        ..project_settings(&root)
    };
    let runner = diverged_git(0, 0)
        .reply(&generate_line(&settings), 0, "")
        .reply(&build_line(&settings), 0, "Build succeeded");

    let (outcome, _) = open(&settings, &runner, SyncChoice::Continue).await;

    assert_eq!(outcome, OpenOutcome::Launched);
    let calls = runner.calls();
    let generate = calls.iter().position(|c| *c == generate_line(&settings)).unwrap();
    let build = calls.iter().position(|c| *c == build_line(&settings)).unwrap();
    assert!(generate < build);
    assert!(build_line(&settings).contains("GameEditor Win64 Development"));

    let _ = std::fs::remove_dir_all(&root);
}

/// a failing generate step ends the sequence with an error dialog
#[tokio::test]
async fn generate_failure_stops() {
    let root = test_dir("generate_failure_stops");
    fake_repo(&root);
    let settings = Settings {
        autobuild: true,
        ..project_settings(&root)
    };
    let runner = diverged_git(0, 0);

    let (outcome, transcript) = open(&settings, &runner, SyncChoice::Continue).await;

    assert_eq!(outcome, OpenOutcome::Failed(OpenError::GenerateFailed));
    assert!(!runner.ran(&build_line(&settings)));
    assert!(runner.launches().is_empty());
    let (_, title, body) = transcript.dialog(MessageKind::Error).unwrap();
    assert_eq!(title, "Error");
    assert_eq!(body, "Generate Project Files failed");

    let _ = std::fs::remove_dir_all(&root);
}

/// each missing path names the setting to fix
#[tokio::test]
async fn missing_paths_are_named() {
    let root = test_dir("missing_paths_are_named");
    fake_repo(&root);
    let runner = diverged_git(0, 0);

    let settings = Settings {
        project_file: String::new(),
        ..project_settings(&root)
    };
    let (outcome, transcript) = open(&settings, &runner, SyncChoice::Continue).await;
    assert_eq!(outcome, OpenOutcome::Failed(OpenError::ProjectFileNotSet));
    // the check can not run without a project, the user is warned and the sequence goes on
    assert!(transcript.dialog(MessageKind::Warning).is_some());
    assert_eq!(
        transcript.dialog(MessageKind::Error).unwrap().2,
        "Please set the .uproject file in Settings"
    );

    let settings = Settings {
        build_tool: root.join("missing.exe").to_string_lossy().into_owned(),
        ..project_settings(&root)
    };
    let (outcome, _) = open(&settings, &runner, SyncChoice::Continue).await;
    assert_eq!(outcome, OpenOutcome::Failed(OpenError::BuildToolNotSet));

    let settings = Settings {
        autogen: false,
        editor: String::new(),
        ..project_settings(&root)
    };
    let (outcome, transcript) = open(&settings, &runner, SyncChoice::Continue).await;
    assert_eq!(outcome, OpenOutcome::Failed(OpenError::EditorNotSet));
    assert_eq!(
        transcript.dialog(MessageKind::Error).unwrap().2,
        "Please set UnrealEditor.exe in Settings"
    );

    assert!(runner.launches().is_empty());
    let _ = std::fs::remove_dir_all(&root);
}

/// an editor path to a file that is not there stops before any tool runs
#[tokio::test]
async fn missing_editor_file_stops() {
    let root = test_dir("missing_editor_file_stops");
    fake_repo(&root);
    let settings = Settings {
        autogen: false,
        autobuild: false,
        editor: root
            .join("UE_5.3/Engine/Binaries/Win64/Gone/UnrealEditor.exe")
            .to_string_lossy()
            .into_owned(),
        ..project_settings(&root)
    };
    let runner = diverged_git(0, 0);

    let (outcome, transcript) = open(&settings, &runner, SyncChoice::Continue).await;

    assert_eq!(outcome, OpenOutcome::Failed(OpenError::EditorNotSet));
    assert_eq!(
        transcript.dialog(MessageKind::Error).unwrap().2,
        "Please set UnrealEditor.exe in Settings"
    );
    assert!(!runner.ran_program(&settings.build_tool));
    assert!(runner.launches().is_empty());

    let _ = std::fs::remove_dir_all(&root);
}

/// a spawn error of the editor is reported
#[tokio::test]
async fn launch_failure_is_reported() {
    let root = test_dir("launch_failure_is_reported");
    fake_repo(&root);
    let settings = Settings {
        autogen: false,
        ..project_settings(&root)
    };
    let runner = diverged_git(0, 0).fail_launch("access denied");

    let (outcome, transcript) = open(&settings, &runner, SyncChoice::Continue).await;

    assert_eq!(
        outcome,
        OpenOutcome::Failed(OpenError::LaunchFailed("access denied".to_string()))
    );
    assert!(transcript.logged("Failed to launch editor: access denied"));

    let _ = std::fs::remove_dir_all(&root);
}
