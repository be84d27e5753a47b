use crate::error::NotificationError;
use crate::hooks::HookEvent;
use crate::sounds::SoundType;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub enabled: bool,
    pub volume: f64,
    /// Sound type to filename. Default keys always hold strings; extra keys
    /// are kept exactly as the user wrote them.
    pub sounds: Map<String, Value>,
    /// Hook event name to on/off. Default keys always hold booleans.
    pub events: Map<String, Value>,
    /// Unrecognized top-level keys, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Config {
    fn default() -> Self {
        let sounds = SoundType::ALL
            .into_iter()
            .map(|sound| (sound.name().to_string(), Value::from(sound.default_file())))
            .collect();
        let events = HookEvent::ALL
            .into_iter()
            .map(|event| (event.name().to_string(), Value::Bool(event.enabled_by_default())))
            .collect();

        Self {
            enabled: true,
            volume: default_volume(),
            sounds,
            events,
            extra: Map::new(),
        }
    }
}

fn default_volume() -> f64 {
    0.5
}

impl Config {
    pub fn to_value(&self) -> Value {
        let mut map = self.extra.clone();
        map.insert("enabled".to_string(), Value::Bool(self.enabled));
        map.insert("volume".to_string(), Value::from(self.volume));
        map.insert("sounds".to_string(), Value::Object(self.sounds.clone()));
        map.insert("events".to_string(), Value::Object(self.events.clone()));
        Value::Object(map)
    }

    pub fn sound_file(&self, sound: &str) -> Option<&str> {
        self.sounds.get(sound).and_then(Value::as_str)
    }

    pub fn event_enabled(&self, event: HookEvent) -> bool {
        self.events
            .get(event.name())
            .and_then(Value::as_bool)
            .unwrap_or_else(|| event.enabled_by_default())
    }

    pub fn validate(&self) -> Vec<String> {
        validate(&self.to_value())
    }
}

/// Overlays `user` on the defaults, keeping each user value only when it has
/// the right type (and range, for `volume`). Never fails.
pub fn merge(user: &Value) -> Config {
    let defaults = Config::default();
    let mut overlay = user.as_object().cloned().unwrap_or_default();

    let enabled = overlay
        .remove("enabled")
        .and_then(|v| v.as_bool())
        .unwrap_or(defaults.enabled);

    let volume = overlay
        .remove("volume")
        .as_ref()
        .and_then(coerce_number)
        .filter(|v| (0.0..=1.0).contains(v))
        .unwrap_or(defaults.volume);

    let sounds = merge_map(overlay.remove("sounds"), &defaults.sounds, Value::is_string);
    let events = merge_map(overlay.remove("events"), &defaults.events, Value::is_boolean);

    Config {
        enabled,
        volume,
        sounds,
        events,
        extra: overlay,
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse().ok()
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn merge_map(
    user: Option<Value>,
    defaults: &Map<String, Value>,
    fits: fn(&Value) -> bool,
) -> Map<String, Value> {
    let mut merged = match user {
        Some(Value::Object(map)) => map,
        _ => return defaults.clone(),
    };

    // Only default keys are checked; anything else passes through as written.
    for (key, default) in defaults {
        if !merged.get(key).is_some_and(fits) {
            merged.insert(key.clone(), default.clone());
        }
    }

    merged
}

/// Lists every type or range violation in a raw config object.
pub fn validate(config: &Value) -> Vec<String> {
    let mut errors = Vec::new();

    if !config.get("enabled").is_some_and(Value::is_boolean) {
        errors.push("enabled must be a boolean".to_string());
    }

    let volume_ok = config
        .get("volume")
        .and_then(Value::as_f64)
        .is_some_and(|v| (0.0..=1.0).contains(&v));
    if !volume_ok {
        errors.push("volume must be a number between 0 and 1".to_string());
    }

    match config.get("sounds").and_then(Value::as_object) {
        Some(sounds) => {
            for (key, value) in sounds {
                if !value.is_string() {
                    errors.push(format!("sound.{key} must be a string"));
                }
            }
        }
        None => errors.push("sounds must be an object".to_string()),
    }

    match config.get("events").and_then(Value::as_object) {
        Some(events) => {
            for (key, value) in events {
                if !value.is_boolean() {
                    errors.push(format!("event.{key} must be a boolean"));
                }
            }
        }
        None => errors.push("events must be an object".to_string()),
    }

    errors
}

/// Reads and writes the config file. Every operation goes back to disk;
/// nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn default_config(&self) -> Config {
        Config::default()
    }

    /// Loads the merged config, falling back to defaults on any failure.
    /// A missing file is created with the defaults; an unparsable one is
    /// left as is.
    pub fn load(&self) -> Config {
        match self.try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(code = err.code(), "⚠️  Config error: {err}. Using defaults.");
                Config::default()
            }
        }
    }

    pub fn try_load(&self) -> Result<Config, NotificationError> {
        if !self.path.exists() {
            tracing::warn!(path = %self.path.display(), "config not found; writing defaults");
            return self.save(&Config::default());
        }

        let raw = self.read_raw()?;
        Ok(merge(&raw))
    }

    /// The file contents as JSON, before any merging.
    pub fn read_raw(&self) -> Result<Value, NotificationError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| NotificationError::ConfigRead {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| NotificationError::ConfigParse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, config: &Config) -> Result<Config, NotificationError> {
        self.save_value(&config.to_value())
    }

    /// Merges `value` over the defaults and writes the result.
    pub fn save_value(&self, value: &Value) -> Result<Config, NotificationError> {
        let merged = merge(value);
        let write_err = |source: std::io::Error| NotificationError::ConfigWrite {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let body = serde_json::to_string_pretty(&merged).map_err(|e| write_err(e.into()))?;
        fs::write(&self.path, body).map_err(write_err)?;
        Ok(merged)
    }

    /// Shallow-merges `updates` over the current config and saves it.
    pub fn update(&self, updates: &Map<String, Value>) -> Result<Config, NotificationError> {
        let mut current = match self.load().to_value() {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        for (key, value) in updates {
            current.insert(key.clone(), value.clone());
        }
        self.save_value(&Value::Object(current))
    }

    pub fn reset(&self) -> Result<Config, NotificationError> {
        self.save(&Config::default())
    }
}
