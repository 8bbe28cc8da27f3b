// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Progression playback.
//!
//! This module provides the beat-clock scheduler that turns wall-clock
//! time plus a tempo into a fractional beat position, and triggers the
//! current chord at subdivision boundaries.

pub mod player;

pub use player::ProgressionPlayer;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::KeywheelError;

/// Minimum tempo in BPM
pub const MIN_TEMPO: u32 = 40;

/// Maximum tempo in BPM
pub const MAX_TEMPO: u32 = 240;

/// Default tempo in BPM
pub const DEFAULT_TEMPO: u32 = 120;

/// Rhythmic unit at which chords are re-triggered during playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subdivision {
    Whole,
    Quarter,
    Eighth,
}

impl Subdivision {
    /// Length of one subdivision in beats
    pub fn beats(self) -> f64 {
        match self {
            Subdivision::Whole => 4.0,
            Subdivision::Quarter => 1.0,
            Subdivision::Eighth => 0.5,
        }
    }

    /// Parse subdivision from string
    pub fn parse(s: &str) -> Result<Self, KeywheelError> {
        match s.trim().to_lowercase().as_str() {
            "whole" => Ok(Subdivision::Whole),
            "quarter" => Ok(Subdivision::Quarter),
            "eighth" => Ok(Subdivision::Eighth),
            other => Err(KeywheelError::UnknownSubdivision(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Subdivision::Whole => "whole",
            Subdivision::Quarter => "quarter",
            Subdivision::Eighth => "eighth",
        }
    }
}

impl fmt::Display for Subdivision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Playback state visible to UI consumers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    /// Whether the beat clock is advancing
    pub is_playing: bool,
    /// Continuous position within `[0, total_beats)`
    pub current_beat: f64,
    /// Tempo in BPM, clamped to 40-240
    pub tempo_bpm: u32,
    /// Wrap around at the end of the progression
    pub looping: bool,
    /// Re-trigger unit
    pub subdivision: Subdivision,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            is_playing: false,
            current_beat: 0.0,
            tempo_bpm: DEFAULT_TEMPO,
            looping: false,
            subdivision: Subdivision::Quarter,
        }
    }
}
