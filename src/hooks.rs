use crate::sounds::SoundType;
use anyhow::Context;
use clap::ValueEnum;
use serde_json::Value;
use std::fmt;

/// Hook events an agent can fire. Each one is gated by the `events` map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum HookEvent {
    #[value(name = "Stop", alias = "stop")]
    Stop,
    #[value(name = "Notification", alias = "notification")]
    Notification,
    #[value(name = "PostToolUse", alias = "post-tool-use")]
    PostToolUse,
    #[value(name = "PreToolUse", alias = "pre-tool-use")]
    PreToolUse,
}

impl HookEvent {
    pub const ALL: [HookEvent; 4] = [
        HookEvent::Stop,
        HookEvent::Notification,
        HookEvent::PostToolUse,
        HookEvent::PreToolUse,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HookEvent::Stop => "Stop",
            HookEvent::Notification => "Notification",
            HookEvent::PostToolUse => "PostToolUse",
            HookEvent::PreToolUse => "PreToolUse",
        }
    }

    pub fn enabled_by_default(self) -> bool {
        matches!(self, HookEvent::Stop | HookEvent::Notification)
    }

    pub fn sound(self) -> SoundType {
        match self {
            HookEvent::Stop => SoundType::Completion,
            HookEvent::Notification | HookEvent::PreToolUse => SoundType::Notification,
            HookEvent::PostToolUse => SoundType::ToolComplete,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|event| event.name() == name)
    }
}

impl fmt::Display for HookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reads `hook_event_name` from a hook payload. Unknown names yield `None`.
pub fn parse_event(payload: &str) -> anyhow::Result<Option<HookEvent>> {
    let value: Value = serde_json::from_str(payload).context("parse hook payload")?;
    let name = value
        .get("hook_event_name")
        .and_then(|v| v.as_str())
        .unwrap_or("");

    Ok(HookEvent::from_name(name))
}
