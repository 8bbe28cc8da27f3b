// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Settings for KEYWHEEL.
//!
//! Startup key, mode, tempo, and playback options load from a YAML
//! file. Every field has a default, so an empty document yields the
//! stock C-major setup.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::music::{Mode, Note};
use crate::playback::{ProgressionPlayer, Subdivision, DEFAULT_TEMPO};
use crate::state::MusicState;
use crate::KeywheelError;

/// Startup settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Key tonic (e.g., "C", "F#", "Bb")
    #[serde(default = "default_key")]
    pub key: String,
    /// Mode ("major" or "minor")
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Tempo in BPM
    #[serde(default = "default_tempo")]
    pub tempo: u32,
    /// Re-trigger subdivision ("whole", "quarter", "eighth")
    #[serde(default = "default_subdivision")]
    pub subdivision: String,
    /// Loop the progression at the end
    #[serde(default)]
    pub looping: bool,
    /// Lowest visible MIDI key
    #[serde(default = "default_range_start")]
    pub range_start: u8,
    /// Highest visible MIDI key
    #[serde(default = "default_range_end")]
    pub range_end: u8,
}

fn default_key() -> String {
    "C".to_string()
}
fn default_mode() -> String {
    "major".to_string()
}
fn default_tempo() -> u32 {
    DEFAULT_TEMPO
}
fn default_subdivision() -> String {
    "quarter".to_string()
}
fn default_range_start() -> u8 {
    21
}
fn default_range_end() -> u8 {
    108
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            key: default_key(),
            mode: default_mode(),
            tempo: default_tempo(),
            subdivision: default_subdivision(),
            looping: false,
            range_start: default_range_start(),
            range_end: default_range_end(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read settings file: {:?}", path.as_ref()))?;
        let settings = Self::from_yaml(&contents)?;
        info!(path = ?path.as_ref(), "settings loaded");
        Ok(settings)
    }

    /// Parse settings from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML settings")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize settings to YAML")
    }

    /// Save settings to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write settings file: {:?}", path.as_ref()))
    }

    /// Build the initial music state from these settings
    pub fn music_state(&self) -> Result<MusicState, KeywheelError> {
        let key = Note::parse(&self.key).ok_or_else(|| KeywheelError::UnknownNote(self.key.clone()))?;
        let mode =
            Mode::parse(&self.mode).ok_or_else(|| KeywheelError::UnknownMode(self.mode.clone()))?;

        let mut state = MusicState::new();
        state.select_key(key);
        state.set_mode(mode);
        state.set_piano_range(self.range_start, self.range_end);
        Ok(state)
    }

    /// Build the initial playback scheduler from these settings
    pub fn player(&self) -> Result<ProgressionPlayer, KeywheelError> {
        let subdivision = Subdivision::parse(&self.subdivision)?;

        let mut player = ProgressionPlayer::new();
        player.set_tempo(self.tempo);
        player.set_subdivision(subdivision);
        player.set_looping(self.looping);
        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_yields_defaults() {
        let settings = Settings::from_yaml("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_parse_partial_yaml() {
        let yaml = r#"
key: "F#"
mode: minor
tempo: 90
looping: true
"#;
        let settings = Settings::from_yaml(yaml).unwrap();
        assert_eq!(settings.key, "F#");
        assert_eq!(settings.mode, "minor");
        assert_eq!(settings.tempo, 90);
        assert!(settings.looping);
        assert_eq!(settings.subdivision, "quarter");
    }

    #[test]
    fn test_music_state_from_settings() {
        let settings = Settings {
            key: "Bb".to_string(),
            mode: "minor".to_string(),
            range_start: 48,
            range_end: 72,
            ..Settings::default()
        };
        let state = settings.music_state().unwrap();
        assert_eq!(state.selected_key(), Note::As);
        assert_eq!(state.mode(), Mode::Minor);
        assert_eq!(state.piano_range().start_midi, 48);
        assert_eq!(state.piano_range().end_midi, 72);
    }

    #[test]
    fn test_player_from_settings() {
        let settings = Settings {
            tempo: 90,
            subdivision: "eighth".to_string(),
            looping: true,
            ..Settings::default()
        };
        let player = settings.player().unwrap();
        assert_eq!(player.tempo_bpm(), 90);
        assert_eq!(player.subdivision(), Subdivision::Eighth);
        assert!(player.looping());
    }

    #[test]
    fn test_bad_key_rejected() {
        let settings = Settings {
            key: "H".to_string(),
            ..Settings::default()
        };
        let err = settings.music_state().unwrap_err();
        assert_eq!(err, KeywheelError::UnknownNote("H".to_string()));
    }

    #[test]
    fn test_yaml_round_trip() {
        let settings = Settings {
            key: "Eb".to_string(),
            mode: "minor".to_string(),
            tempo: 72,
            subdivision: "whole".to_string(),
            looping: true,
            range_start: 36,
            range_end: 84,
        };
        let yaml = settings.to_yaml().unwrap();
        assert_eq!(Settings::from_yaml(&yaml).unwrap(), settings);
    }
}
