use anyhow::Context;
use std::f64::consts::PI;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const SAMPLE_RATE: u32 = 44_100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundType {
    Completion,
    Notification,
    Error,
    ToolComplete,
}

impl SoundType {
    pub const ALL: [SoundType; 4] = [
        SoundType::Completion,
        SoundType::Notification,
        SoundType::Error,
        SoundType::ToolComplete,
    ];

    /// Key used in the `sounds` map and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            SoundType::Completion => "completion",
            SoundType::Notification => "notification",
            SoundType::Error => "error",
            SoundType::ToolComplete => "toolComplete",
        }
    }

    pub fn default_file(self) -> &'static str {
        match self {
            SoundType::Completion => "completion.wav",
            SoundType::Notification => "notification.wav",
            SoundType::Error => "error.wav",
            SoundType::ToolComplete => "tool-complete.wav",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SoundType::Completion => "Task completion sound",
            SoundType::Notification => "General notification",
            SoundType::Error => "Error notification",
            SoundType::ToolComplete => "Tool execution complete",
        }
    }

    /// Matches after trimming, ignoring ASCII case.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim();
        Self::ALL
            .into_iter()
            .find(|sound| sound.name().eq_ignore_ascii_case(normalized))
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|sound| sound.name()).collect()
    }
}

impl fmt::Display for SoundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

enum Shape {
    Chord { frequencies: &'static [f64], decay: f64 },
    Tone { frequency: f64, decay: f64 },
    Sweep { from: f64, to: f64, decay: f64 },
}

struct Voice {
    shape: Shape,
    duration: f64,
    amplitude: f64,
}

fn voice_for(sound: SoundType) -> Voice {
    match sound {
        SoundType::Completion => Voice {
            shape: Shape::Chord {
                frequencies: &[523.25, 659.25, 783.99],
                decay: 2.0,
            },
            duration: 0.8,
            amplitude: 0.5,
        },
        SoundType::Notification => Voice {
            shape: Shape::Tone {
                frequency: 800.0,
                decay: 3.0,
            },
            duration: 0.3,
            amplitude: 0.4,
        },
        SoundType::Error => Voice {
            shape: Shape::Sweep {
                from: 800.0,
                to: 200.0,
                decay: 4.0,
            },
            duration: 0.3,
            amplitude: 0.4,
        },
        SoundType::ToolComplete => Voice {
            shape: Shape::Tone {
                frequency: 600.0,
                decay: 3.0,
            },
            duration: 0.2,
            amplitude: 0.3,
        },
    }
}

impl Voice {
    fn samples(&self) -> Vec<i16> {
        let count = (SAMPLE_RATE as f64 * self.duration) as usize;
        // Endpoints inclusive, so the last sample lands exactly on `duration`.
        let step = if count > 1 {
            self.duration / (count - 1) as f64
        } else {
            0.0
        };

        (0..count)
            .map(|i| {
                let t = i as f64 * step;
                let value = match &self.shape {
                    Shape::Chord { frequencies, decay } => {
                        let sum: f64 = frequencies
                            .iter()
                            .map(|freq| (2.0 * PI * freq * t).sin())
                            .sum();
                        (-decay * t).exp() * sum / frequencies.len() as f64
                    }
                    Shape::Tone { frequency, decay } => {
                        (-decay * t).exp() * (2.0 * PI * frequency * t).sin()
                    }
                    Shape::Sweep { from, to, decay } => {
                        let frequency = from + (to - from) * t / self.duration;
                        (-decay * t).exp() * (2.0 * PI * frequency * t).sin()
                    }
                };
                (self.amplitude * 32767.0 * value) as i16
            })
            .collect()
    }
}

pub fn render_wav(sound: SoundType, path: &Path) -> anyhow::Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("create wav at {}", path.display()))?;
    for sample in voice_for(sound).samples() {
        writer.write_sample(sample)?;
    }
    writer.finalize().context("finalize wav")?;
    Ok(())
}

/// Writes the built-in sound set into `dir`, returning the files written.
/// Existing files are left alone unless `force` is set.
pub fn generate_defaults(dir: &Path, force: bool) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("create sounds dir {}", dir.display()))?;

    let mut written = Vec::new();
    for sound in SoundType::ALL {
        let path = dir.join(sound.default_file());
        if path.exists() && !force {
            tracing::debug!(path = %path.display(), "sound exists; skipping");
            continue;
        }
        render_wav(sound, &path)?;
        written.push(path);
    }

    Ok(written)
}
