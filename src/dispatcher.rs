use crate::config::Config;
use crate::error::NotificationError;
use crate::platform::{build_play_command, Platform, PlayCommand};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaybackResult {
    pub success: bool,
    pub message: String,
}

impl PlaybackResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    UnknownType,
    FileMissing(PathBuf),
}

/// Executes a platform play command and waits for it to finish.
pub trait CommandRunner {
    fn run(&self, command: &PlayCommand) -> Result<(), NotificationError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &PlayCommand) -> Result<(), NotificationError> {
        match command {
            PlayCommand::Process { program, args } => {
                let status = Command::new(program)
                    .args(args)
                    .status()
                    .map_err(|err| NotificationError::Audio(format!("{program}: {err}")))?;

                if !status.success() {
                    return Err(NotificationError::Audio(format!(
                        "{program} exited with status {status}"
                    )));
                }
                Ok(())
            }
            PlayCommand::Bell => {
                let mut stdout = std::io::stdout();
                stdout
                    .write_all(b"\x07")
                    .and_then(|_| stdout.flush())
                    .map_err(|err| NotificationError::Audio(format!("terminal bell: {err}")))
            }
        }
    }
}

/// Maps sound types to files in `sounds_dir` and plays them with the
/// platform's native player.
#[derive(Debug, Clone)]
pub struct SoundDispatcher<R = SystemRunner> {
    sounds_dir: PathBuf,
    platform: Platform,
    runner: R,
}

impl SoundDispatcher<SystemRunner> {
    pub fn new(sounds_dir: impl Into<PathBuf>) -> Self {
        Self::with_runner(sounds_dir, Platform::current(), SystemRunner)
    }
}

impl<R: CommandRunner> SoundDispatcher<R> {
    pub fn with_runner(sounds_dir: impl Into<PathBuf>, platform: Platform, runner: R) -> Self {
        Self {
            sounds_dir: sounds_dir.into(),
            platform,
            runner,
        }
    }

    pub fn sounds_dir(&self) -> &Path {
        &self.sounds_dir
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn resolve_sound_file(
        &self,
        config: &Config,
        sound_type: &str,
    ) -> Result<PathBuf, ResolveError> {
        let file = config
            .sound_file(sound_type)
            .filter(|file| !file.is_empty())
            .ok_or(ResolveError::UnknownType)?;

        let path = self.sounds_dir.join(file);
        if !path.exists() {
            return Err(ResolveError::FileMissing(path));
        }
        Ok(path)
    }

    pub fn play(&self, config: &Config, sound_type: &str) -> PlaybackResult {
        if !config.enabled {
            return PlaybackResult::failed("Notifications disabled");
        }

        let path = match self.resolve_sound_file(config, sound_type) {
            Ok(path) => path,
            Err(ResolveError::UnknownType) => {
                return PlaybackResult::failed(format!("Sound type '{sound_type}' not found"));
            }
            Err(ResolveError::FileMissing(path)) => {
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                return PlaybackResult::failed(format!("Sound file not found: {name}"));
            }
        };

        let command = build_play_command(self.platform, &path, config.volume);
        tracing::debug!(
            sound = sound_type,
            path = %path.display(),
            command = %command,
            "playing sound"
        );

        match self.runner.run(&command) {
            Ok(()) => PlaybackResult::ok(format!("Played: {sound_type}")),
            Err(err) => PlaybackResult::failed(format!("Playback failed: {err}")),
        }
    }
}
