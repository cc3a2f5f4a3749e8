use uelaunch::core::settings::Settings;
use uelaunch::utils::SettingsError;

use crate::common::test_dir;

mod common;

/// every field survives save then load, including non-ASCII paths
#[test]
fn save_then_load_round_trips() {
    let path = test_dir("save_then_load_round_trips");
    let file = path.join("ue_gitaware_launcher_config.json");

    let settings = Settings {
        engine_dir: "D:/Epic Games/UE_5.3".to_string(),
        project_file: "D:/โปรเจกต์/Rewind/Rewind.uproject".to_string(),
        build_tool: "D:/Epic Games/UE_5.3/Engine/Binaries/DotNET/UnrealBuildTool/UnrealBuildTool.exe"
            .to_string(),
        editor: "D:/Epic Games/UE_5.3/Engine/Binaries/Win64/UnrealEditor.exe".to_string(),
        autogen: false,
        autobuild: true,
        auto_check: true,
    };
    settings.save_to(&file).unwrap();

    let txt = std::fs::read_to_string(&file).unwrap();
    assert!(txt.contains("โปรเจกต์"));
    assert!(txt.contains("\n  \"uproject\""));

    assert_eq!(Settings::load_from(&file).unwrap(), settings);

    let _ = std::fs::remove_dir_all(&path);
}

/// a missing file is reported as such and loads as defaults
#[test]
fn missing_file_gives_defaults() {
    let path = test_dir("missing_file_gives_defaults");
    let file = path.join("ue_gitaware_launcher_config.json");

    assert!(matches!(
        Settings::load_from(&file),
        Err(SettingsError::NotFound(_))
    ));
    assert_eq!(Settings::load_or_default(&file), Settings::default());

    let _ = std::fs::remove_dir_all(&path);
}

/// a corrupt file is swallowed by `load_or_default`
#[test]
fn corrupt_file_gives_defaults() {
    let path = test_dir("corrupt_file_gives_defaults");
    let file = path.join("ue_gitaware_launcher_config.json");
    std::fs::write(&file, "{\"uproject\": ").unwrap();

    assert!(matches!(
        Settings::load_from(&file),
        Err(SettingsError::Corrupt { .. })
    ));
    let settings = Settings::load_or_default(&file);
    assert_eq!(settings, Settings::default());
    assert!(settings.autogen);

    let _ = std::fs::remove_dir_all(&path);
}

/// saving overwrites whatever was there
#[test]
fn save_overwrites() {
    let path = test_dir("save_overwrites");
    let file = path.join("ue_gitaware_launcher_config.json");
    std::fs::write(&file, "not json at all").unwrap();

    let settings = Settings {
        editor: "UnrealEditor.exe".to_string(),
        ..Settings::default()
    };
    settings.save_to(&file).unwrap();
    assert_eq!(Settings::load_from(&file).unwrap().editor, "UnrealEditor.exe");

    let _ = std::fs::remove_dir_all(&path);
}
