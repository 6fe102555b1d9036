// tests/settings_store.rs

use std::error::Error;
use std::fs;

use launcher::cli::SettingsCommand;
use launcher::errors::LauncherError;
use launcher::output::MemorySink;
use launcher::run_settings_command;
use launcher::settings::{self, Settings, MAIN_SECTION};
use tempfile::tempdir;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn missing_file_loads_as_empty() -> TestResult {
    let dir = tempdir()?;
    let settings = Settings::load(dir.path().join("Launcher.toml"))?;
    assert!(settings.is_empty());
    Ok(())
}

#[test]
fn seed_round_trips_through_disk() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("nested").join("Launcher.toml");

    Settings::seed().save(&path)?;
    let text = fs::read_to_string(&path)?;
    assert!(text.contains("[main]"));
    assert!(text.contains(r#"key1 = "value1""#));

    let loaded = Settings::load(&path)?;
    assert_eq!(loaded, Settings::seed());
    assert_eq!(loaded.get(MAIN_SECTION, "key3"), Some("value3"));
    Ok(())
}

#[test]
fn update_preserves_unrelated_sections() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("Launcher.toml");
    fs::write(&path, "[main]\nkey1 = \"value1\"\n\n[other]\nkeep = \"me\"\n")?;

    let updated = settings::update(&path, |s| {
        s.set(MAIN_SECTION, "key1", "changed");
        s.set("new", "k", "v");
    })?;
    assert_eq!(updated.get("other", "keep"), Some("me"));

    let reloaded = Settings::load(&path)?;
    assert_eq!(reloaded.get(MAIN_SECTION, "key1"), Some("changed"));
    assert_eq!(reloaded.get("other", "keep"), Some("me"));
    assert_eq!(reloaded.get("new", "k"), Some("v"));
    Ok(())
}

#[test]
fn removing_last_key_drops_the_section() {
    let mut s = Settings::new();
    s.set("only", "k", "v");
    assert_eq!(s.remove("only", "k"), Some("v".to_string()));
    assert!(s.section("only").is_none());
    assert_eq!(s.remove("only", "k"), None);
}

#[test]
fn non_string_values_are_config_errors() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("Launcher.toml");

    fs::write(&path, "[main]\ncount = 3\n")?;
    match Settings::load(&path) {
        Err(LauncherError::Config(msg)) => assert!(msg.contains("[main].count")),
        other => panic!("expected Config error, got {other:?}"),
    }

    fs::write(&path, "loose = \"value\"\n")?;
    match Settings::load(&path) {
        Err(LauncherError::Config(msg)) => assert!(msg.contains("loose")),
        other => panic!("expected Config error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn malformed_toml_is_a_toml_error() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("Launcher.toml");
    fs::write(&path, "[main\nkey1 = ")?;
    assert!(matches!(Settings::load(&path), Err(LauncherError::Toml(_))));
    Ok(())
}

#[test]
fn unreadable_path_is_an_io_error() -> TestResult {
    let dir = tempdir()?;
    // A directory exists but cannot be read as a file.
    match Settings::load(dir.path()) {
        Err(err @ LauncherError::Io(_)) => assert!(err.io_kind().is_some()),
        other => panic!("expected Io error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn settings_subcommands_read_modify_write() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("Launcher.toml");
    let sink = MemorySink::new();

    run_settings_command(&sink, &path, SettingsCommand::Set {
        section: MAIN_SECTION.to_string(),
        key: "key2".to_string(),
        value: "mine".to_string(),
    })?;
    run_settings_command(&sink, &path, SettingsCommand::Init)?;

    // Init fills in the placeholders but keeps what was already there.
    let loaded = Settings::load(&path)?;
    assert_eq!(loaded.get(MAIN_SECTION, "key1"), Some("value1"));
    assert_eq!(loaded.get(MAIN_SECTION, "key2"), Some("mine"));

    run_settings_command(&sink, &path, SettingsCommand::Get {
        section: MAIN_SECTION.to_string(),
        key: "key2".to_string(),
    })?;
    assert_eq!(sink.lines(), vec!["mine".to_string()]);

    run_settings_command(&sink, &path, SettingsCommand::Remove {
        section: MAIN_SECTION.to_string(),
        key: "key3".to_string(),
    })?;
    assert_eq!(Settings::load(&path)?.get(MAIN_SECTION, "key3"), None);

    let missing = run_settings_command(&sink, &path, SettingsCommand::Get {
        section: MAIN_SECTION.to_string(),
        key: "key3".to_string(),
    });
    assert!(missing.is_err());

    run_settings_command(&sink, &path, SettingsCommand::List)?;
    let lines = sink.lines();
    assert!(lines.contains(&"[main]".to_string()));
    assert!(lines.contains(&"key1 = value1".to_string()));
    Ok(())
}
