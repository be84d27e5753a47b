use anyhow::Context;
use directories::BaseDirs;
use std::path::PathBuf;

pub const HOME_ENV: &str = "CLAUDE_BELL_HOME";
pub const CONFIG_ENV: &str = "CLAUDE_BELL_CONFIG";
pub const SOUNDS_ENV: &str = "CLAUDE_BELL_SOUNDS";

/// Where config and sounds live unless overridden.
pub fn install_dir() -> anyhow::Result<PathBuf> {
    if let Some(dir) = env_path(HOME_ENV) {
        return Ok(dir);
    }
    let base = BaseDirs::new().context("unable to resolve home directory")?;
    Ok(base.config_dir().join("claude-bell"))
}

pub fn config_path(flag: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag.or_else(|| env_path(CONFIG_ENV)) {
        return Ok(path);
    }
    Ok(install_dir()?.join("config.json"))
}

pub fn sounds_dir(flag: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(dir) = flag.or_else(|| env_path(SOUNDS_ENV)) {
        return Ok(dir);
    }
    Ok(install_dir()?.join("sounds"))
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
