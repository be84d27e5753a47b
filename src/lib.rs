pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod hooks;
pub mod paths;
pub mod platform;
pub mod service;
pub mod sounds;

use anyhow::{bail, Context};
use cli::Cli;
use config::ConfigStore;
use dispatcher::{PlaybackResult, SoundDispatcher};
use service::NotificationService;
use std::io::Read;

pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

pub fn run(cli: Cli) -> anyhow::Result<()> {
    setup_tracing(cli.verbose);

    let store = ConfigStore::new(paths::config_path(cli.config.clone())?);
    let sounds_dir = paths::sounds_dir(cli.sounds_dir.clone())?;

    if cli.generate_sounds {
        return generate_sounds(&sounds_dir, cli.force);
    }
    if cli.reset_config {
        let config = store.reset().context("reset config")?;
        println!("Reset config at {}", store.path().display());
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }
    if !cli.set.is_empty() {
        return set_config(&store, &cli.set);
    }
    if cli.show_config {
        let config = store.load();
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }
    if cli.validate_config {
        return validate_config(&store);
    }

    let service = NotificationService::new(store, SoundDispatcher::new(sounds_dir));

    if cli.status {
        print_status(&service);
        return Ok(());
    }

    let result = if let Some(event) = cli.event {
        service.play_for_event(event)
    } else if cli.hook {
        let payload = match read_stdin() {
            Some(payload) => payload,
            None => {
                tracing::warn!("no hook payload on stdin; skipping");
                return Ok(());
            }
        };
        match hooks::parse_event(&payload)? {
            Some(event) => service.play_for_event(event),
            None => {
                tracing::warn!("hook event not recognized; skipping");
                return Ok(());
            }
        }
    } else {
        service.play(&cli.sound_type)
    };

    report(&result);
    Ok(())
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        level_from_env(std::env::var(LOG_LEVEL_ENV).ok().as_deref()).to_string()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Maps `ERROR|WARN|INFO|DEBUG` (any case) to a filter level; anything else is `info`.
pub fn level_from_env(value: Option<&str>) -> &'static str {
    match value.map(|v| v.trim().to_ascii_uppercase()).as_deref() {
        Some("ERROR") => "error",
        Some("WARN") => "warn",
        Some("DEBUG") => "debug",
        _ => "info",
    }
}

fn report(result: &PlaybackResult) {
    if result.success {
        println!("🎵 {}", result.message);
    } else {
        eprintln!("⚠️  {}", result.message);
    }
}

fn print_status(service: &NotificationService) {
    let status = service.status();
    println!("🔔 Notification Service Status");
    println!("============================");
    println!("Enabled: {}", if status.enabled { "✅" } else { "❌" });
    println!("Volume: {}%", (status.volume * 100.0).round());
    println!("Available types: {}", status.available_types.join(", "));
}

fn set_config(store: &ConfigStore, assignments: &[String]) -> anyhow::Result<()> {
    let mut updates = serde_json::Map::new();
    for assignment in assignments {
        let (key, raw) = parse_assignment(assignment)?;
        updates.insert(key, raw);
    }

    let config = store.update(&updates).context("update config")?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Splits `KEY=VALUE`. VALUE is parsed as JSON when possible, else kept as a string.
pub fn parse_assignment(assignment: &str) -> anyhow::Result<(String, serde_json::Value)> {
    let Some((key, raw)) = assignment.split_once('=') else {
        bail!("expected KEY=VALUE, got '{assignment}'");
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("empty key in '{assignment}'");
    }

    let value = serde_json::from_str(raw)
        .unwrap_or_else(|_| serde_json::Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

fn validate_config(store: &ConfigStore) -> anyhow::Result<()> {
    let raw = store.read_raw().context("read config")?;
    let errors = config::validate(&raw);
    if errors.is_empty() {
        println!("Config OK");
        return Ok(());
    }

    for problem in &errors {
        println!("- {problem}");
    }
    Err(error::NotificationError::Validation(format!(
        "config has {} error(s)",
        errors.len()
    ))
    .into())
}

fn generate_sounds(dir: &std::path::Path, force: bool) -> anyhow::Result<()> {
    let written = sounds::generate_defaults(dir, force)?;
    if written.is_empty() {
        println!("All sounds already present in {}", dir.display());
    }
    for path in written {
        println!("Generated {}", path.display());
    }
    Ok(())
}

fn read_stdin() -> Option<String> {
    let mut input = String::new();
    let mut stdin = std::io::stdin();
    if stdin.read_to_string(&mut input).is_ok() {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    } else {
        None
    }
}
