use anyhow::Context;
use serde::Deserialize;
use std::{env, fs};

use crate::pip::PlatformVersion;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub platform: PlatformConfig,
    pub playback: PlaybackConfig,
    pub ui: UiConfig,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let mut candidates = Vec::new();

        if let Ok(current_dir) = env::current_dir() {
            candidates.push(current_dir.join("config.toml"));
            candidates.push(current_dir.join("config").join("config.toml"));
            candidates.push(current_dir.join("config").join("pip_player.toml"));
        }

        if let Ok(exe) = env::current_exe() {
            if let Some(dir) = exe.parent() {
                candidates.push(dir.join("config.toml"));
                candidates.push(dir.join("config").join("config.toml"));
                candidates.push(dir.join("config").join("pip_player.toml"));
            }
        }

        for path in candidates {
            if path.exists() {
                let data = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;
                let doc: ConfigDocument = toml::from_str(&data)
                    .with_context(|| format!("Failed to parse config: {}", path.display()))?;
                return Ok(doc.into());
            }
        }

        Ok(Config::default())
    }
}

/// Simulated host platform. The version selects the miniaturization
/// strategy band once at startup, as if it were an OS capability probe.
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    pub version: PlatformVersion,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            version: PlatformVersion(34),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlaybackConfig {
    pub duration_ms: u64,
    pub video_width: u32,
    pub video_height: u32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            duration_ms: 10 * 60 * 1_000,
            video_width: 1920,
            video_height: 1080,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiConfig {
    pub pip_window_width: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            pip_window_width: 320.0,
        }
    }
}

impl UiConfig {
    pub fn pip_window_width(&self) -> f32 {
        self.pip_window_width.clamp(160.0, 640.0)
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    platform: PlatformSection,
    #[serde(default)]
    playback: PlaybackSection,
    #[serde(default)]
    ui: UiSection,
}

impl From<ConfigDocument> for Config {
    fn from(value: ConfigDocument) -> Self {
        let defaults = Config::default();

        Config {
            platform: PlatformConfig {
                version: value
                    .platform
                    .version
                    .map(PlatformVersion)
                    .unwrap_or(defaults.platform.version),
            },
            playback: PlaybackConfig {
                duration_ms: value
                    .playback
                    .duration_ms
                    .unwrap_or(defaults.playback.duration_ms),
                video_width: value
                    .playback
                    .video_width
                    .unwrap_or(defaults.playback.video_width),
                video_height: value
                    .playback
                    .video_height
                    .unwrap_or(defaults.playback.video_height),
            },
            ui: UiConfig {
                pip_window_width: value
                    .ui
                    .pip_window_width
                    .unwrap_or(defaults.ui.pip_window_width),
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct PlatformSection {
    version: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct PlaybackSection {
    duration_ms: Option<u64>,
    video_width: Option<u32>,
    video_height: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct UiSection {
    pip_window_width: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_falls_back_to_defaults() {
        let doc: ConfigDocument = toml::from_str("").unwrap();
        let config: Config = doc.into();
        assert_eq!(config.platform.version, PlatformVersion(34));
        assert_eq!(config.playback.duration_ms, 600_000);
    }

    #[test]
    fn partial_document_merges_over_defaults() {
        let doc: ConfigDocument =
            toml::from_str("[platform]\nversion = 28\n\n[ui]\npip_window_width = 400.0\n").unwrap();
        let config: Config = doc.into();
        assert_eq!(config.platform.version, PlatformVersion(28));
        assert_eq!(config.ui.pip_window_width(), 400.0);
        assert_eq!(config.playback.video_width, 1920);
    }

    #[test]
    fn pip_window_width_is_clamped() {
        let ui = UiConfig {
            pip_window_width: 10_000.0,
        };
        assert_eq!(ui.pip_window_width(), 640.0);
    }
}
