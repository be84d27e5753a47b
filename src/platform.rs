use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        match std::env::consts::OS {
            "macos" => Platform::MacOs,
            "linux" => Platform::Linux,
            "windows" => Platform::Windows,
            _ => Platform::Other,
        }
    }
}

/// How a sound gets played on a given platform.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayCommand {
    Process {
        program: String,
        args: Vec<String>,
    },
    /// No native player; ring the terminal bell instead.
    Bell,
}

pub fn build_play_command(platform: Platform, path: &Path, volume: f64) -> PlayCommand {
    let volume = if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) };
    let file = path.display().to_string();

    match platform {
        Platform::MacOs => PlayCommand::Process {
            program: "afplay".to_string(),
            args: vec![file, "-v".to_string(), volume.to_string()],
        },
        Platform::Linux => PlayCommand::Process {
            program: "aplay".to_string(),
            args: vec![file, "-q".to_string()],
        },
        Platform::Windows => PlayCommand::Process {
            program: "powershell".to_string(),
            args: vec![
                "-c".to_string(),
                format!(
                    "(New-Object Media.SoundPlayer '{}').PlaySync()",
                    file.replace('\'', "''")
                ),
            ],
        },
        Platform::Other => PlayCommand::Bell,
    }
}

impl fmt::Display for PlayCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayCommand::Process { program, args } => {
                f.write_str(program)?;
                for arg in args {
                    // Flags and numbers stay bare; paths and scripts are quoted.
                    if arg.starts_with('-') || arg.parse::<f64>().is_ok() {
                        write!(f, " {arg}")?;
                    } else {
                        write!(f, " \"{arg}\"")?;
                    }
                }
                Ok(())
            }
            PlayCommand::Bell => f.write_str("echo -e \"\\a\""),
        }
    }
}
