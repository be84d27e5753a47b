use claude_bell::config::{merge, validate, Config, ConfigStore};
use serde_json::{json, Map};
use std::fs;

fn store_in(dir: &tempfile::TempDir) -> ConfigStore {
    ConfigStore::new(dir.path().join("nested").join("config.json"))
}

#[test]
fn defaults_cover_every_sound_and_event() {
    let config = Config::default();
    assert!(config.enabled);
    assert_eq!(config.volume, 0.5);
    assert_eq!(config.sounds["completion"], "completion.wav");
    assert_eq!(config.sounds["notification"], "notification.wav");
    assert_eq!(config.sounds["error"], "error.wav");
    assert_eq!(config.sounds["toolComplete"], "tool-complete.wav");
    assert_eq!(config.events["Stop"], true);
    assert_eq!(config.events["Notification"], true);
    assert_eq!(config.events["PostToolUse"], false);
    assert_eq!(config.events["PreToolUse"], false);
}

#[test]
fn non_boolean_enabled_falls_back_to_default() {
    for bad in [json!("false"), json!(0), json!(null), json!([true]), json!({})] {
        let config = merge(&json!({ "enabled": bad }));
        assert!(config.enabled, "enabled = {bad}");
    }
    assert!(!merge(&json!({ "enabled": false })).enabled);
}

#[test]
fn out_of_range_or_non_numeric_volume_falls_back() {
    for bad in [json!(5), json!(-0.1), json!(1.01), json!("loud"), json!(null), json!([0.2])] {
        assert_eq!(merge(&json!({ "volume": bad })).volume, 0.5, "volume = {bad}");
    }
}

#[test]
fn numeric_string_volume_is_coerced() {
    assert_eq!(merge(&json!({ "volume": "0.3" })).volume, 0.3);
    assert_eq!(merge(&json!({ "volume": 1 })).volume, 1.0);
    assert_eq!(merge(&json!({ "volume": 0 })).volume, 0.0);
}

#[test]
fn wrong_typed_sound_only_resets_that_key() {
    let config = merge(&json!({
        "sounds": { "completion": 42, "error": "buzz.wav" },
        "events": { "Stop": "yes", "PreToolUse": true }
    }));

    assert_eq!(config.sounds["completion"], "completion.wav");
    assert_eq!(config.sounds["error"], "buzz.wav");
    assert_eq!(config.sounds["notification"], "notification.wav");
    assert_eq!(config.sounds["toolComplete"], "tool-complete.wav");

    assert_eq!(config.events["Stop"], true);
    assert_eq!(config.events["PreToolUse"], true);
    assert_eq!(config.events["PostToolUse"], false);
}

#[test]
fn non_object_maps_fall_back_entirely() {
    let config = merge(&json!({ "sounds": "all.wav", "events": [true, false] }));
    assert_eq!(config.sounds, Config::default().sounds);
    assert_eq!(config.events, Config::default().events);
}

#[test]
fn unknown_keys_are_preserved() {
    let config = merge(&json!({
        "theme": "dark",
        "sounds": { "custom": "custom.wav" }
    }));
    assert_eq!(config.extra["theme"], json!("dark"));
    assert_eq!(config.sounds["custom"], "custom.wav");
    assert_eq!(config.sounds["completion"], "completion.wav");
}

#[test]
fn non_object_input_yields_defaults() {
    assert_eq!(merge(&json!([1, 2, 3])), Config::default());
    assert_eq!(merge(&json!("config")), Config::default());
}

#[test]
fn load_creates_missing_file_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    assert!(!store.path().exists());

    let config = store.load();
    assert_eq!(config, Config::default());
    assert!(store.path().exists());

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(written, Config::default().to_value());
}

#[test]
fn load_recovers_from_malformed_file_without_rewriting() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    let store = ConfigStore::new(&path);
    assert_eq!(store.load(), Config::default());
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");

    let err = store.try_load().unwrap_err();
    assert_eq!(err.code(), "CONFIG_ERROR");
}

#[test]
fn load_discards_out_of_range_volume() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"volume": 5}"#).unwrap();

    let config = ConfigStore::new(&path).load();
    assert_eq!(config.volume, 0.5);
    assert!(config.enabled);
}

#[test]
fn save_of_load_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"enabled": false, "volume": "0.3", "sounds": {"error": 1}, "extra": [1]}"#,
    )
    .unwrap();

    let store = ConfigStore::new(&path);
    let loaded = store.load();
    let saved = store.save(&loaded).unwrap();
    assert_eq!(saved, loaded);
    assert_eq!(store.load(), loaded);
}

#[test]
fn reset_then_load_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"enabled": false, "volume": 0.9}"#).unwrap();

    let store = ConfigStore::new(&path);
    assert_eq!(store.reset().unwrap(), Config::default());
    assert_eq!(store.load(), Config::default());
}

#[test]
fn update_merges_top_level_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let mut updates = Map::new();
    updates.insert("volume".to_string(), json!(0.8));
    updates.insert("sounds".to_string(), json!({ "error": "oops.wav" }));
    let config = store.update(&updates).unwrap();

    assert_eq!(config.volume, 0.8);
    assert_eq!(config.sounds["error"], "oops.wav");
    assert_eq!(config.sounds["completion"], "completion.wav");
    assert!(config.enabled);
    assert_eq!(store.load(), config);
}

#[test]
fn save_reports_write_failures() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "file, not a directory").unwrap();

    let store = ConfigStore::new(blocker.join("config.json"));
    let err = store.save(&Config::default()).unwrap_err();
    assert_eq!(err.code(), "CONFIG_ERROR");
    assert!(err.to_string().starts_with("Failed to save config"));

    // load still hands back something usable
    assert_eq!(store.load(), Config::default());
}

#[test]
fn validate_accumulates_every_violation() {
    let errors = validate(&json!({
        "enabled": "yes",
        "volume": 2,
        "sounds": { "completion": 1, "error": "e.wav" },
        "events": { "Stop": "no" }
    }));
    assert_eq!(
        errors,
        vec![
            "enabled must be a boolean",
            "volume must be a number between 0 and 1",
            "sound.completion must be a string",
            "event.Stop must be a boolean",
        ]
    );
}

#[test]
fn validate_flags_missing_sections() {
    let errors = validate(&json!({}));
    assert_eq!(errors.len(), 4);
    assert!(errors.contains(&"sounds must be an object".to_string()));
    assert!(errors.contains(&"events must be an object".to_string()));
}

#[test]
fn defaults_validate_cleanly() {
    assert!(Config::default().validate().is_empty());
}

#[test]
fn extra_map_entries_pass_through_unchecked() {
    let config = merge(&json!({
        "sounds": { "custom": 5, "completion": false },
        "events": { "SessionStart": "sometimes" }
    }));
    assert_eq!(config.sounds["custom"], json!(5));
    assert_eq!(config.sounds["completion"], "completion.wav");
    assert_eq!(config.events["SessionStart"], "sometimes");
    assert_eq!(config.events["Stop"], true);
    assert_eq!(config.sound_file("custom"), None);
}

#[test]
fn overflowing_volume_only_resets_volume() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"enabled": false, "volume": 1e400}"#).unwrap();

    let config = ConfigStore::new(&path).try_load().unwrap();
    assert!(!config.enabled);
    assert_eq!(config.volume, 0.5);
}

#[test]
fn unreadable_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::create_dir(&path).unwrap();

    let store = ConfigStore::new(&path);
    assert_eq!(store.load(), Config::default());
    assert!(path.is_dir());

    let err = store.try_load().unwrap_err();
    assert_eq!(err.code(), "CONFIG_ERROR");
    assert!(err.to_string().starts_with("read config at"));
}
