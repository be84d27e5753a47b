use clap::Parser;
use std::path::PathBuf;

use crate::hooks::HookEvent;
use crate::sounds::SoundType;

fn types_help() -> String {
    let mut help = String::from("Types:");
    for sound in SoundType::ALL {
        help.push_str(&format!("\n  {:<12} - {}", sound.name(), sound.description()));
    }
    help
}

#[derive(Parser, Debug)]
#[command(
    name = "play-notification",
    version,
    about = "Play notification sounds for agent hooks",
    after_help = types_help()
)]
pub struct Cli {
    #[arg(value_name = "TYPE", default_value = "notification", help = "Sound type to play")]
    pub sound_type: String,

    #[arg(short, long, help = "Show current status")]
    pub status: bool,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, value_name = "PATH", help = "Config file to use")]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "PATH", help = "Directory holding the sound files")]
    pub sounds_dir: Option<PathBuf>,

    #[arg(long, value_enum, conflicts_with = "hook", help = "Play for a hook event")]
    pub event: Option<HookEvent>,

    #[arg(long, help = "Read a hook payload from stdin and play for its event")]
    pub hook: bool,

    #[arg(long, help = "Print the merged config as JSON")]
    pub show_config: bool,

    #[arg(long, help = "Check the config file for type and range errors")]
    pub validate_config: bool,

    #[arg(long, value_name = "KEY=VALUE", help = "Update a top-level config key (VALUE is JSON)")]
    pub set: Vec<String>,

    #[arg(long, help = "Overwrite the config file with defaults")]
    pub reset_config: bool,

    #[arg(long, help = "Write the built-in sounds into the sounds directory")]
    pub generate_sounds: bool,

    #[arg(long, requires = "generate_sounds", help = "Overwrite existing sound files")]
    pub force: bool,
}
