use crate::config::ConfigStore;
use crate::dispatcher::{CommandRunner, PlaybackResult, SoundDispatcher, SystemRunner};
use crate::hooks::HookEvent;
use crate::sounds::SoundType;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub enabled: bool,
    pub volume: f64,
    pub available_types: Vec<&'static str>,
}

pub struct NotificationService<R = SystemRunner> {
    store: ConfigStore,
    dispatcher: SoundDispatcher<R>,
}

impl<R: CommandRunner> NotificationService<R> {
    pub fn new(store: ConfigStore, dispatcher: SoundDispatcher<R>) -> Self {
        Self { store, dispatcher }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn dispatcher(&self) -> &SoundDispatcher<R> {
        &self.dispatcher
    }

    pub fn play(&self, sound_type: &str) -> PlaybackResult {
        let Some(sound) = SoundType::parse(sound_type) else {
            let message = format!(
                "Invalid sound type: {sound_type}. Available: {}",
                SoundType::names().join(", ")
            );
            tracing::debug!(requested = sound_type, "rejected sound type");
            return PlaybackResult::failed(message);
        };

        self.play_sound(sound)
    }

    /// Plays the sound mapped to `event`, unless the event is switched off.
    pub fn play_for_event(&self, event: HookEvent) -> PlaybackResult {
        let config = self.store.load();
        if !config.event_enabled(event) {
            tracing::debug!(event = event.name(), "event disabled");
            return PlaybackResult::failed(format!("Event '{event}' disabled"));
        }

        let result = self.dispatcher.play(&config, event.sound().name());
        log_result(&result);
        result
    }

    pub fn status(&self) -> Status {
        let config = self.store.load();
        Status {
            enabled: config.enabled,
            volume: config.volume,
            available_types: SoundType::names(),
        }
    }

    fn play_sound(&self, sound: SoundType) -> PlaybackResult {
        let config = self.store.load();
        let result = self.dispatcher.play(&config, sound.name());
        log_result(&result);
        result
    }
}

fn log_result(result: &PlaybackResult) {
    if result.success {
        tracing::debug!(message = %result.message, "playback succeeded");
    } else {
        tracing::debug!(message = %result.message, "playback skipped or failed");
    }
}
